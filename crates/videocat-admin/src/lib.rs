//! # videocat-admin
//!
//! List screens of the videocat catalog console.
//!
//! Each screen pairs a column set and an extra-filter plugin with a
//! [`ListSource`]. A mounted [`ListScreen`] keeps its filters in the page
//! address through [`videocat_filter`] and fetches whenever they settle.
//!
//! ## Screens
//!
//! - **categories**: `is_active`
//! - **genres**: `categories`, `is_active`
//! - **cast_members**: `type`
//! - **videos**: `genres`, `categories`, `opened`

pub mod error;
pub mod screen;
pub mod screens;
pub mod settings;
pub mod source;

pub use error::{AdminError, AdminResult};
pub use screen::ListScreen;
pub use screens::ScreenSpec;
pub use settings::{ConsoleSettings, FilterOverride};
pub use source::{ListRequest, ListResponse, ListSource, Record};
