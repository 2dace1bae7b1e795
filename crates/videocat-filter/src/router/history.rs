//! History abstraction
//!
//! Mirrors the browser History API closely enough that the synchronizer can
//! run against [`MemoryHistory`] natively and in tests.

use crate::codec::QueryParams;
use crate::error::{FilterError, FilterResult};
use crate::state::LocationState;
use std::fmt;

/// How a location is written to history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationType {
	/// Add a new history entry
	Push,
	/// Overwrite the current history entry
	Replace,
}

impl fmt::Display for NavigationType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Push => f.write_str("push"),
			Self::Replace => f.write_str("replace"),
		}
	}
}

/// A navigable address plus the state recorded with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
	pub path: String,
	pub query: QueryParams,
	pub state: Option<LocationState>,
}

impl Location {
	/// Creates a location without recorded state
	pub fn new(path: impl Into<String>, query: QueryParams) -> Self {
		Self {
			path: path.into(),
			query,
			state: None,
		}
	}

	/// Parses `path?query`; a missing path is `/`
	pub fn parse(href: &str) -> Self {
		let (path, query) = match href.split_once('?') {
			Some((path, query)) => (path, query),
			None => (href, ""),
		};
		let path = if path.is_empty() { "/" } else { path };
		Self::new(path, QueryParams::parse(query))
	}

	/// Attaches recorded state
	pub fn with_state(mut self, state: LocationState) -> Self {
		self.state = Some(state);
		self
	}

	/// Returns the query string including the leading `?`, or an empty string
	pub fn search(&self) -> String {
		if self.query.is_empty() {
			String::new()
		} else {
			format!("?{}", self.query)
		}
	}

	/// Returns `path` followed by the query string, if any
	pub fn href(&self) -> String {
		format!("{}{}", self.path, self.search())
	}
}

/// Session history backend
pub trait History {
	/// Returns the current location
	fn location(&self) -> Location;

	/// Adds `location` as a new entry
	fn push(&mut self, location: Location) -> FilterResult<()>;

	/// Overwrites the current entry with `location`
	fn replace(&mut self, location: Location) -> FilterResult<()>;

	/// Writes `location` with the given navigation type
	fn navigate(&mut self, location: Location, navigation: NavigationType) -> FilterResult<()> {
		match navigation {
			NavigationType::Push => self.push(location),
			NavigationType::Replace => self.replace(location),
		}
	}
}

impl<H: History + ?Sized> History for Box<H> {
	fn location(&self) -> Location {
		(**self).location()
	}

	fn push(&mut self, location: Location) -> FilterResult<()> {
		(**self).push(location)
	}

	fn replace(&mut self, location: Location) -> FilterResult<()> {
		(**self).replace(location)
	}
}

/// In-memory history with back/forward traversal
#[derive(Debug, Clone)]
pub struct MemoryHistory {
	entries: Vec<Location>,
	index: usize,
}

impl MemoryHistory {
	/// Creates a history whose only entry is `href`
	pub fn new(href: &str) -> Self {
		Self::from_location(Location::parse(href))
	}

	/// Creates a history whose only entry is `location`
	pub fn from_location(location: Location) -> Self {
		Self {
			entries: vec![location],
			index: 0,
		}
	}

	/// Returns all entries, oldest first
	pub fn entries(&self) -> &[Location] {
		&self.entries
	}

	/// Returns the index of the current entry
	pub fn index(&self) -> usize {
		self.index
	}

	/// Moves to the previous entry; returns `false` at the start
	pub fn back(&mut self) -> bool {
		if self.index == 0 {
			return false;
		}
		self.index -= 1;
		true
	}

	/// Moves to the next entry; returns `false` at the end
	pub fn forward(&mut self) -> bool {
		if self.index + 1 >= self.entries.len() {
			return false;
		}
		self.index += 1;
		true
	}

	fn current(&self) -> FilterResult<&Location> {
		self.entries
			.get(self.index)
			.ok_or_else(|| FilterError::NavigationFailed("history has no current entry".to_string()))
	}
}

impl History for MemoryHistory {
	fn location(&self) -> Location {
		self.current()
			.cloned()
			.unwrap_or_else(|_| Location::parse("/"))
	}

	fn push(&mut self, location: Location) -> FilterResult<()> {
		self.current()?;
		self.entries.truncate(self.index + 1);
		self.entries.push(location);
		self.index = self.entries.len() - 1;
		Ok(())
	}

	fn replace(&mut self, location: Location) -> FilterResult<()> {
		self.current()?;
		self.entries[self.index] = location;
		Ok(())
	}
}
