//! Error types for the console list screens

use thiserror::Error;
use videocat_filter::FilterError;

/// Console error type
#[derive(Debug, Error)]
pub enum AdminError {
	/// The filter engine rejected its configuration or a history write
	#[error(transparent)]
	Filter(#[from] FilterError),

	/// The list source failed to answer a request
	#[error("List source error: {0}")]
	Source(String),

	/// Console settings could not be read or are inconsistent
	#[error("Settings error: {0}")]
	Settings(String),

	/// No list screen is registered under this name
	#[error("Screen '{0}' is not registered")]
	UnknownScreen(String),
}

/// Result type for console operations
pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_filter_error_is_transparent() {
		let err: AdminError = FilterError::DuplicateColumn("name".to_string()).into();

		assert_eq!(err.to_string(), "duplicate column name: name");
		assert!(matches!(err, AdminError::Filter(_)));
	}

	#[rstest]
	#[case(AdminError::Source("timeout".to_string()), "List source error: timeout")]
	#[case(AdminError::UnknownScreen("users".to_string()), "Screen 'users' is not registered")]
	fn test_display(#[case] err: AdminError, #[case] expected: &str) {
		assert_eq!(err.to_string(), expected);
	}
}
