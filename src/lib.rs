//! # videocat
//!
//! Administrative console core for a video catalog.
//!
//! The list screens of the console (categories, genres, cast members and
//! videos) keep their search text, pagination, ordering and table filters
//! in the page address, so a filtered view can be bookmarked, shared and
//! navigated with back/forward.
//!
//! ## Feature Flags
//!
//! - `admin` (default): the console list screens on top of [`filter`]
//!
//! ## Quick Example
//!
//! ```rust
//! use std::sync::Arc;
//! use videocat::prelude::*;
//!
//! let (controller, _) = FilterController::mount(
//!     FilterConfig::default(),
//!     vec![TableColumn::new("name", "Nome")],
//!     Arc::new(NoExtraFilter),
//!     MemoryHistory::new("/categories?search=drama&page=abc"),
//! )
//! .unwrap();
//!
//! assert_eq!(controller.state().search_text(), "drama");
//! assert_eq!(controller.history().location().href(), "/categories?search=drama");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use videocat_filter as filter;

#[cfg(feature = "admin")]
#[cfg_attr(docsrs, doc(cfg(feature = "admin")))]
pub use videocat_admin as admin;

/// Commonly used types
pub mod prelude {
	pub use videocat_filter::tables::{
		ExtraFilter, ExtraSchema, ExtraValue, ExtraValues, FieldRule, NoExtraFilter, RawExtra,
		SortDirection, TableColumn,
	};
	pub use videocat_filter::{
		Action, FilterConfig, FilterController, FilterError, FilterManager, FilterResult,
		FilterState, History, Location, MemoryHistory, NavigationType, PaginationControl,
		QueryParams, Search, Settled,
	};

	#[cfg(target_arch = "wasm32")]
	pub use videocat_filter::BrowserHistory;

	#[cfg(feature = "admin")]
	pub use videocat_admin::{
		AdminError, AdminResult, ConsoleSettings, ListRequest, ListResponse, ListScreen,
		ListSource, Record, ScreenSpec,
	};
}
