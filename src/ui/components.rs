//! UI Components module - business-specific composite components
//!
//! Components combine widgets and primitives with application logic.
//! They are the only layer that should import from `crate::app`.
//!
//! # Design Principles
//!
//! - **Business logic**: Components handle Message mapping and state access
//! - **Composition**: Build on widgets and primitives
//! - **Application-specific**: Depend on `crate::app::Message` and state types
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Low-level Widget trait implementations
//! - **Widgets** (`crate::ui::widgets`): Composable UI patterns (no business logic)
//! - **Components** (this module): Business-specific UI with Message handling

pub mod banner;
pub mod filter_bar;
pub mod flower_list;
pub mod flower_picture;
pub mod header;
pub mod image_preview;
pub mod pagination;
pub mod search_bar;
pub mod status;
