//! Query string codec
//!
//! Decoding reads the address into a [`RawCandidate`] for the schema to cast.
//! Encoding writes a [`FilterState`] back as a sparse parameter set that
//! carries only non-default information, so an unfiltered list is a bare path.

use crate::schema::{FilterSchema, RawCandidate};
use crate::state::FilterState;
use crate::tables::ExtraFilter;
use std::fmt;
use std::sync::Arc;

/// Ordered query parameters
///
/// Keeps insertion order and repeated keys, like `URLSearchParams`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
	/// Creates an empty parameter set
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a query string, with or without the leading `?`
	///
	/// Undecodable input yields an empty set.
	pub fn parse(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);
		match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
			Ok(pairs) => Self(pairs),
			Err(e) => {
				tracing::debug!(query, error = %e, "ignoring undecodable query string");
				Self::default()
			}
		}
	}

	/// Returns the first value for `key`
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Sets `key` to `value`, replacing earlier values
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let value = value.into();
		match self.0.iter().position(|(k, _)| *k == key) {
			Some(index) => {
				self.0[index].1 = value;
				let mut seen = false;
				self.0.retain(|(k, _)| {
					if *k != key {
						return true;
					}
					let keep = !seen;
					seen = true;
					keep
				});
			}
			None => self.0.push((key, value)),
		}
	}

	/// Sets every parameter of `other` in order
	pub fn extend(&mut self, other: QueryParams) {
		for (key, value) in other.0 {
			self.set(key, value);
		}
	}

	/// Returns whether there are no parameters
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the number of parameters
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Iterates over the parameters in order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Encodes the parameters without a leading `?`
	pub fn to_query_string(&self) -> String {
		serde_urlencoded::to_string(&self.0).unwrap_or_default()
	}
}

impl fmt::Display for QueryParams {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_query_string())
	}
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = Self::new();
		for (key, value) in iter {
			params.set(key, value);
		}
		params
	}
}

/// Translates between the address query and [`FilterState`]
#[derive(Clone)]
pub struct UrlCodec {
	schema: Arc<FilterSchema>,
	plugin: Arc<dyn ExtraFilter>,
}

impl fmt::Debug for UrlCodec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("UrlCodec")
			.field("schema", &self.schema)
			.finish_non_exhaustive()
	}
}

impl UrlCodec {
	/// Creates a codec for a schema and its extra-filter plugin
	pub fn new(schema: Arc<FilterSchema>, plugin: Arc<dyn ExtraFilter>) -> Self {
		Self { schema, plugin }
	}

	/// Returns the schema used to cast decoded values
	pub fn schema(&self) -> &Arc<FilterSchema> {
		&self.schema
	}

	/// Returns the extra-filter plugin
	pub fn plugin(&self) -> &Arc<dyn ExtraFilter> {
		&self.plugin
	}

	/// Reads the raw candidate values from a query
	///
	/// Absent keys stay `None`; they are not read as empty strings.
	pub fn decode(&self, params: &QueryParams) -> RawCandidate {
		let owned = |key: &str| params.get(key).map(str::to_string);
		RawCandidate {
			search: owned("search"),
			page: owned("page"),
			per_page: owned("per_page"),
			sort: owned("sort"),
			dir: owned("dir"),
			extra_filter: self
				.schema
				.has_extra_filter()
				.then(|| self.plugin.state_from_url(params)),
		}
	}

	/// Decodes and casts a query string into a state
	pub fn read(&self, query: &str) -> FilterState {
		self.schema.cast(&self.decode(&QueryParams::parse(query)))
	}

	/// Writes the non-default parts of a state as query parameters
	pub fn encode(&self, state: &FilterState) -> QueryParams {
		let mut params = QueryParams::new();

		let search = state.search_text();
		if !search.is_empty() {
			params.set("search", search);
		}
		if state.pagination.page != 1 {
			params.set("page", state.pagination.page.to_string());
		}
		if state.pagination.per_page != self.schema.config().rows_per_page {
			params.set("per_page", state.pagination.per_page.to_string());
		}
		if let Some(sort) = &state.order.sort {
			params.set("sort", sort.as_str());
			if let Some(dir) = state.order.dir {
				params.set("dir", dir.as_str());
			}
		}
		if let Some(extra) = &state.extra_filter {
			params.extend(self.plugin.format_search_params(extra));
		}

		params
	}
}
