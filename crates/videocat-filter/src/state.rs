//! Filter state
//!
//! [`FilterState`] is the canonical in-memory state of one list view.
//! [`LocationState`] is the part of it that is recorded with each history
//! entry and compared before a navigation write.

use crate::tables::{ExtraValues, Order, Pagination, SortDirection};
use serde::{Deserialize, Serialize};

/// Search text, tagged with where it came from
///
/// A reset clears the search programmatically; the tag lets the search box
/// tell that apart from the user deleting their own input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Search {
	/// Text the user typed
	UserEdit(String),
	/// Text set by a filter reset
	ProgrammaticReset(String),
}

impl Default for Search {
	fn default() -> Self {
		Self::UserEdit(String::new())
	}
}

impl Search {
	/// Returns the plain search text
	pub fn text(&self) -> &str {
		match self {
			Self::UserEdit(text) | Self::ProgrammaticReset(text) => text,
		}
	}

	/// Returns whether this value was set by a reset
	pub fn is_programmatic_reset(&self) -> bool {
		matches!(self, Self::ProgrammaticReset(_))
	}
}

impl From<&str> for Search {
	fn from(text: &str) -> Self {
		Self::UserEdit(text.to_string())
	}
}

impl From<String> for Search {
	fn from(text: String) -> Self {
		Self::UserEdit(text)
	}
}

/// Canonical filter state of a list view
///
/// `extra_filter` is `Some` exactly when the screen contributes extra
/// filter fields, and then holds the plugin's cast of every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
	pub search: Search,
	pub pagination: Pagination,
	pub order: Order,
	pub extra_filter: Option<ExtraValues>,
}

impl FilterState {
	/// Returns the plain search text
	pub fn search_text(&self) -> &str {
		self.search.text()
	}

	/// Returns the canonical location state for this filter state
	pub fn location_state(&self) -> LocationState {
		LocationState::from(self)
	}
}

/// Filter state as recorded in a history entry
///
/// The search is unwrapped to plain text and the record total is left out,
/// so a total-count update never counts as an address change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationState {
	pub search: String,
	pub page: u64,
	pub per_page: u64,
	pub sort: Option<String>,
	pub dir: Option<SortDirection>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub extra_filter: Option<ExtraValues>,
}

impl From<&FilterState> for LocationState {
	fn from(state: &FilterState) -> Self {
		Self {
			search: state.search_text().to_string(),
			page: state.pagination.page,
			per_page: state.pagination.per_page,
			sort: state.order.sort.clone(),
			dir: state.order.dir,
			extra_filter: state.extra_filter.clone(),
		}
	}
}

impl LocationState {
	/// Serializes the state for a browser history entry
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}

	/// Reads a state stored in a browser history entry
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}
}
