//! Error types for the filter engine
//!
//! Casting URL input never fails: malformed values fall back to defaults.
//! The errors below cover the two places that can actually go wrong,
//! an engine configured inconsistently and a history backend refusing a write.

use thiserror::Error;

/// Filter engine error type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
	/// The allowed page-size set is empty
	#[error("rows_per_page_options must not be empty")]
	EmptyPageSizes,

	/// A page size of zero was configured
	#[error("page sizes must be positive, got 0")]
	ZeroPageSize,

	/// The default page size is not part of the allowed set
	#[error("default rows_per_page {default} is not one of {options:?}")]
	DefaultPageSizeNotAllowed {
		/// Configured default page size
		default: u64,
		/// Configured allowed page sizes
		options: Vec<u64>,
	},

	/// Two columns share a name
	#[error("duplicate column name: {0}")]
	DuplicateColumn(String),

	/// Configuration could not be parsed
	#[error("invalid filter configuration: {0}")]
	InvalidConfig(String),

	/// The history backend refused a navigation write
	#[error("navigation failed: {0}")]
	NavigationFailed(String),
}

/// Result type for filter engine operations
pub type FilterResult<T> = Result<T, FilterError>;
