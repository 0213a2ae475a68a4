//! Pages module
//! Full-window views for the flower catalog

pub mod catalog;

pub use catalog::PageContext;
