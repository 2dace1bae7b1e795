//! Console settings
//!
//! ```toml
//! [filter]
//! rows_per_page = 10
//! rows_per_page_options = [10, 25, 50]
//! debounce_ms = 300
//!
//! [screens.videos]
//! rows_per_page = 25
//! ```
//!
//! `[filter]` applies to every list screen; a `[screens.<name>]` table
//! overrides individual keys for one screen.

use crate::error::{AdminError, AdminResult};
use crate::screens;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use videocat_filter::FilterConfig;

/// Per-screen overrides of the shared filter configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOverride {
	pub rows_per_page: Option<u64>,
	pub rows_per_page_options: Option<Vec<u64>>,
	pub debounce_ms: Option<u64>,
}

impl FilterOverride {
	/// Returns `base` with the keys set here replaced
	pub fn apply(&self, base: &FilterConfig) -> FilterConfig {
		FilterConfig {
			rows_per_page: self.rows_per_page.unwrap_or(base.rows_per_page),
			rows_per_page_options: self
				.rows_per_page_options
				.clone()
				.unwrap_or_else(|| base.rows_per_page_options.clone()),
			debounce_ms: self.debounce_ms.unwrap_or(base.debounce_ms),
		}
	}
}

/// Settings of the console list screens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
	/// Configuration shared by every list screen
	#[serde(default)]
	pub filter: FilterConfig,
	/// Overrides keyed by screen name
	#[serde(default)]
	pub screens: BTreeMap<String, FilterOverride>,
}

impl ConsoleSettings {
	/// Parses and validates settings from TOML
	pub fn from_toml_str(source: &str) -> AdminResult<Self> {
		let settings: Self =
			toml::from_str(source).map_err(|e| AdminError::Settings(e.to_string()))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> AdminResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path)
			.map_err(|e| AdminError::Settings(format!("{}: {}", path.display(), e)))?;
		tracing::debug!(path = %path.display(), "loading console settings");
		Self::from_toml_str(&source)
	}

	/// Returns the effective filter configuration of a screen
	pub fn config_for(&self, screen: &str) -> AdminResult<FilterConfig> {
		let config = match self.screens.get(screen) {
			Some(overrides) => overrides.apply(&self.filter),
			None => self.filter.clone(),
		};
		config.validate()?;
		Ok(config)
	}

	/// Checks the shared configuration and every override
	pub fn validate(&self) -> AdminResult<()> {
		self.filter.validate()?;
		for name in self.screens.keys() {
			if !screens::NAMES.contains(&name.as_str()) {
				return Err(AdminError::UnknownScreen(name.clone()));
			}
			self.config_for(name)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::time::Duration;
	use videocat_filter::FilterError;

	#[rstest]
	fn test_empty_source_uses_console_defaults() {
		let settings = ConsoleSettings::from_toml_str("").unwrap();

		assert_eq!(settings.filter, FilterConfig::default());
		assert_eq!(settings.config_for("videos").unwrap(), FilterConfig::default());
	}

	#[rstest]
	fn test_screen_override_inherits_unset_keys() {
		// Arrange
		let source = r#"
[filter]
debounce_ms = 500

[screens.videos]
rows_per_page = 25
"#;

		// Act
		let settings = ConsoleSettings::from_toml_str(source).unwrap();
		let videos = settings.config_for("videos").unwrap();
		let genres = settings.config_for("genres").unwrap();

		// Assert
		assert_eq!(videos.rows_per_page, 25);
		assert_eq!(videos.rows_per_page_options, vec![10, 25, 50]);
		assert_eq!(videos.debounce(), Duration::from_millis(500));
		assert_eq!(genres.rows_per_page, 10);
	}

	#[rstest]
	fn test_invalid_override_is_rejected() {
		let source = r#"
[screens.categories]
rows_per_page_options = [25, 50]
"#;

		let result = ConsoleSettings::from_toml_str(source);

		assert!(matches!(
			result,
			Err(AdminError::Filter(FilterError::DefaultPageSizeNotAllowed { default: 10, .. }))
		));
	}

	#[rstest]
	fn test_unknown_screen_is_rejected() {
		let result = ConsoleSettings::from_toml_str("[screens.users]\nrows_per_page = 10\n");

		assert!(matches!(result, Err(AdminError::UnknownScreen(name)) if name == "users"));
	}

	#[rstest]
	fn test_malformed_source() {
		let result = ConsoleSettings::from_toml_str("[filter]\nrows_per_page = \"many\"\n");

		assert!(matches!(result, Err(AdminError::Settings(_))));
	}

	#[rstest]
	fn test_missing_file() {
		let result = ConsoleSettings::from_file("/nonexistent/videocat.toml");

		assert!(matches!(result, Err(AdminError::Settings(msg)) if msg.contains("videocat.toml")));
	}
}
