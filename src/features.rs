//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod catalog;
pub mod settings;

pub use catalog::{AvailabilityFilter, CatalogState, FetchTicket, ImageSource, LoadPhase};
pub use settings::Settings;
