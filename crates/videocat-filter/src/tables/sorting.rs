//! Sorting functionality for tables

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
	/// Ascending order
	#[serde(rename = "asc")]
	Ascending,
	/// Descending order
	#[serde(rename = "desc")]
	Descending,
}

impl SortDirection {
	/// Parses a `dir` query value, ignoring case
	///
	/// Anything other than `asc` or `desc` yields `None`.
	pub fn parse(s: &str) -> Option<Self> {
		if s.eq_ignore_ascii_case("asc") {
			Some(Self::Ascending)
		} else if s.eq_ignore_ascii_case("desc") {
			Some(Self::Descending)
		} else {
			None
		}
	}

	/// Normalizes a direction reported by the table widget
	///
	/// The widget reports values such as `"descending"` or `"desc"`; anything
	/// mentioning `desc` sorts descending, everything else ascending.
	pub fn from_widget(direction: &str) -> Self {
		if direction.to_ascii_lowercase().contains("desc") {
			Self::Descending
		} else {
			Self::Ascending
		}
	}

	/// Returns the query-string form (`asc` / `desc`)
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Current ordering of a list view
///
/// `sort` names a sortable column or is `None`; `dir` is only set
/// alongside a `sort`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Order {
	/// Column to sort by
	pub sort: Option<String>,
	/// Sort direction
	pub dir: Option<SortDirection>,
}

impl Order {
	/// Creates an ordering on `sort` in direction `dir`
	pub fn new(sort: impl Into<String>, dir: SortDirection) -> Self {
		Self {
			sort: Some(sort.into()),
			dir: Some(dir),
		}
	}

	/// Builds an ordering, dropping `dir` when nothing is sorted
	pub fn from_parts(sort: Option<String>, dir: Option<SortDirection>) -> Self {
		let dir = sort.as_ref().and(dir);
		Self { sort, dir }
	}

	/// Returns whether no column is sorted
	pub fn is_unsorted(&self) -> bool {
		self.sort.is_none()
	}
}
