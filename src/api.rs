//! Amana backend API module
//!
//! Provides the read-only flowers client and the validated record types.

mod client;
pub mod model;

pub use client::FlowersClient;
pub use model::FlowerRecord;
