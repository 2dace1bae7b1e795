//! # videocat-filter
//!
//! Filter/URL state synchronization for the videocat console list views.
//!
//! Each list view keeps its search text, pagination, ordering and
//! entity-specific extra filters in a [`FilterState`] that mirrors the page
//! address:
//!
//! - **schema**: casts raw query values into a fully defaulted state
//! - **codec**: decodes the query string and encodes a sparse one
//! - **reducer**: the closed set of state transitions
//! - **sync**: debounced, write-suppressing history synchronization
//! - **manager**: the operations a table widget calls
//! - **controller**: ties the above together for one mounted view
//! - **tables**: columns, sorting, pagination and the extra-filter contract
//! - **router**: locations and history backends
//!
//! Malformed addresses are never an error; every invalid value falls back
//! to its default.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod clock;
pub mod codec;
pub mod config;
pub mod controller;
pub mod error;
pub mod manager;
pub mod reducer;
pub mod router;
pub mod schema;
pub mod state;
pub mod sync;
pub mod tables;

pub use codec::{QueryParams, UrlCodec};
pub use config::FilterConfig;
pub use controller::FilterController;
pub use error::{FilterError, FilterResult};
pub use manager::{Dispatch, FilterManager, PaginationControl};
pub use reducer::{Action, FilterReducer};
pub use router::{History, Location, MemoryHistory, NavigationType};
pub use schema::{FilterSchema, RawCandidate};
pub use state::{FilterState, LocationState, Search};
pub use sync::{Debounce, HistorySynchronizer, Settled};

#[cfg(target_arch = "wasm32")]
pub use router::BrowserHistory;
