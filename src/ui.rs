//! UI module for the flower catalog
//! Amana green page with a white catalog card
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Primitives** (`primitives`): Low-level Widget trait implementations
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling

pub mod components;
pub mod icons;
pub mod pages;
pub mod primitives;
pub mod theme;
pub mod widgets;
