//! Address and history handling
//!
//! A [`Location`] is a path, its query and the [`LocationState`] recorded
//! with it. [`History`] backends write locations with push or replace
//! semantics.
//!
//! [`LocationState`]: crate::state::LocationState

pub mod history;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use history::{History, Location, MemoryHistory, NavigationType};

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHistory;
