//! Engine configuration
//!
//! Page-size policy and the debounce window for one list screen.
//!
//! ```toml
//! rows_per_page = 10
//! rows_per_page_options = [10, 25, 50]
//! debounce_ms = 300
//! ```

use crate::error::{FilterError, FilterResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of rows shown per page
pub const DEFAULT_ROWS_PER_PAGE: u64 = 10;

/// Default debounce window in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

fn default_rows_per_page() -> u64 {
	DEFAULT_ROWS_PER_PAGE
}

fn default_rows_per_page_options() -> Vec<u64> {
	vec![10, 25, 50]
}

fn default_debounce_ms() -> u64 {
	DEFAULT_DEBOUNCE_MS
}

/// Configuration for a filter engine instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
	/// Page size used when the address carries none (or an invalid one)
	#[serde(default = "default_rows_per_page")]
	pub rows_per_page: u64,
	/// Page sizes the table offers
	#[serde(default = "default_rows_per_page_options")]
	pub rows_per_page_options: Vec<u64>,
	/// Quiet period before a state change is written to history
	#[serde(default = "default_debounce_ms")]
	pub debounce_ms: u64,
}

impl Default for FilterConfig {
	fn default() -> Self {
		Self {
			rows_per_page: DEFAULT_ROWS_PER_PAGE,
			rows_per_page_options: default_rows_per_page_options(),
			debounce_ms: DEFAULT_DEBOUNCE_MS,
		}
	}
}

impl FilterConfig {
	/// Creates a configuration with the given page-size policy and the default debounce
	pub fn new(rows_per_page: u64, rows_per_page_options: impl Into<Vec<u64>>) -> Self {
		Self {
			rows_per_page,
			rows_per_page_options: rows_per_page_options.into(),
			debounce_ms: DEFAULT_DEBOUNCE_MS,
		}
	}

	/// Sets the debounce window
	pub fn with_debounce(mut self, debounce: Duration) -> Self {
		self.debounce_ms = u64::try_from(debounce.as_millis()).unwrap_or(u64::MAX);
		self
	}

	/// Returns the debounce window
	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms)
	}

	/// Returns whether `per_page` is one of the allowed page sizes
	pub fn allows(&self, per_page: u64) -> bool {
		self.rows_per_page_options.contains(&per_page)
	}

	/// Parses and validates a TOML configuration
	pub fn from_toml_str(source: &str) -> FilterResult<Self> {
		let config: Self =
			toml::from_str(source).map_err(|e| FilterError::InvalidConfig(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// Checks the page-size policy for consistency
	pub fn validate(&self) -> FilterResult<()> {
		if self.rows_per_page_options.is_empty() {
			return Err(FilterError::EmptyPageSizes);
		}
		if self.rows_per_page == 0 || self.rows_per_page_options.contains(&0) {
			return Err(FilterError::ZeroPageSize);
		}
		if !self.allows(self.rows_per_page) {
			return Err(FilterError::DefaultPageSizeNotAllowed {
				default: self.rows_per_page,
				options: self.rows_per_page_options.clone(),
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_config_is_valid() {
		let config = FilterConfig::default();

		assert_eq!(config.rows_per_page, 10);
		assert_eq!(config.rows_per_page_options, vec![10, 25, 50]);
		assert_eq!(config.debounce(), Duration::from_millis(300));
		assert!(config.validate().is_ok());
	}

	#[rstest]
	fn test_from_toml_applies_defaults() {
		// Arrange
		let source = "rows_per_page = 25\n";

		// Act
		let config = FilterConfig::from_toml_str(source).unwrap();

		// Assert
		assert_eq!(config.rows_per_page, 25);
		assert_eq!(config.rows_per_page_options, vec![10, 25, 50]);
		assert_eq!(config.debounce_ms, 300);
	}

	#[rstest]
	fn test_from_toml_full() {
		let source = r#"
rows_per_page = 5
rows_per_page_options = [5, 15]
debounce_ms = 150
"#;

		let config = FilterConfig::from_toml_str(source).unwrap();

		assert_eq!(
			config,
			FilterConfig::new(5, vec![5, 15]).with_debounce(Duration::from_millis(150))
		);
	}

	#[rstest]
	fn test_from_toml_rejects_malformed_source() {
		let result = FilterConfig::from_toml_str("rows_per_page = \"ten\"");

		assert!(matches!(result, Err(FilterError::InvalidConfig(_))));
	}

	#[rstest]
	#[case(FilterConfig::new(10, Vec::new()), FilterError::EmptyPageSizes)]
	#[case(FilterConfig::new(0, vec![0, 10]), FilterError::ZeroPageSize)]
	#[case(FilterConfig::new(10, vec![0, 10]), FilterError::ZeroPageSize)]
	#[case(
		FilterConfig::new(15, vec![10, 25]),
		FilterError::DefaultPageSizeNotAllowed { default: 15, options: vec![10, 25] }
	)]
	fn test_validate_rejects_inconsistent_policy(
		#[case] config: FilterConfig,
		#[case] expected: FilterError,
	) {
		assert_eq!(config.validate(), Err(expected));
	}
}
