//! Schema validation and casting
//!
//! Casting turns raw address values into a fully populated [`FilterState`].
//! It never fails: each invalid value is replaced by its default.

use crate::config::FilterConfig;
use crate::error::{FilterError, FilterResult};
use crate::state::{FilterState, Search};
use crate::tables::{
	ExtraSchema, ExtraValues, Order, Pagination, RawExtra, SortDirection, TableColumn,
	is_sortable_column,
};
use std::collections::HashSet;

/// Raw values read from the address, before casting
///
/// `None` means the key was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCandidate {
	pub search: Option<String>,
	pub page: Option<String>,
	pub per_page: Option<String>,
	pub sort: Option<String>,
	pub dir: Option<String>,
	pub extra_filter: Option<RawExtra>,
}

/// Cast rules of one list view
#[derive(Debug, Clone)]
pub struct FilterSchema {
	config: FilterConfig,
	columns: Vec<TableColumn>,
	extra: ExtraSchema,
}

impl FilterSchema {
	/// Creates a schema for a column set and extra-filter schema
	///
	/// # Errors
	///
	/// Returns an error when the page-size policy is inconsistent or two
	/// columns share a name.
	pub fn new(
		config: FilterConfig,
		columns: Vec<TableColumn>,
		extra: ExtraSchema,
	) -> FilterResult<Self> {
		config.validate()?;
		let mut names = HashSet::new();
		for column in &columns {
			if !names.insert(column.name()) {
				return Err(FilterError::DuplicateColumn(column.name().to_string()));
			}
		}
		Ok(Self {
			config,
			columns,
			extra,
		})
	}

	/// Returns the page-size and debounce configuration
	pub fn config(&self) -> &FilterConfig {
		&self.config
	}

	/// Returns the column set
	pub fn columns(&self) -> &[TableColumn] {
		&self.columns
	}

	/// Returns the extra-filter schema
	pub fn extra(&self) -> &ExtraSchema {
		&self.extra
	}

	/// Returns whether the view has extra filter fields
	pub fn has_extra_filter(&self) -> bool {
		!self.extra.is_empty()
	}

	/// Returns the state an empty address casts to
	pub fn default_state(&self) -> FilterState {
		self.cast(&RawCandidate::default())
	}

	/// Casts raw values into a state, defaulting every invalid field
	pub fn cast(&self, raw: &RawCandidate) -> FilterState {
		let search = match raw.search.as_deref() {
			Some(text) if !text.trim().is_empty() => Search::UserEdit(text.to_string()),
			_ => Search::default(),
		};

		let page = match raw.page.as_deref() {
			None => 1,
			Some(value) => match value.trim().parse::<u64>() {
				Ok(page) if page >= 1 => page,
				_ => {
					tracing::debug!(value, "page is not a positive integer, using 1");
					1
				}
			},
		};

		let per_page = match raw.per_page.as_deref() {
			None => self.config.rows_per_page,
			Some(value) => match value.trim().parse::<u64>() {
				Ok(per_page) => self.sanitize_per_page(per_page),
				Err(_) => {
					tracing::debug!(value, "per_page is not an integer, using default");
					self.config.rows_per_page
				}
			},
		};

		let sort = self.sanitize_sort(raw.sort.clone());

		let dir = raw.dir.as_deref().and_then(|value| {
			let dir = SortDirection::parse(value);
			if dir.is_none() {
				tracing::debug!(value, "dir is neither asc nor desc, dropping it");
			}
			dir
		});

		let extra_filter = self.has_extra_filter().then(|| {
			let empty = RawExtra::new();
			self.extra.cast(raw.extra_filter.as_ref().unwrap_or(&empty))
		});

		FilterState {
			search,
			pagination: Pagination {
				page,
				total: 0,
				per_page,
			},
			order: Order::from_parts(sort, dir),
			extra_filter,
		}
	}

	/// Keeps `per_page` if it is an allowed page size, else the default
	pub fn sanitize_per_page(&self, per_page: u64) -> u64 {
		if self.config.allows(per_page) {
			per_page
		} else {
			tracing::debug!(
				per_page,
				default = self.config.rows_per_page,
				"page size not allowed, using default"
			);
			self.config.rows_per_page
		}
	}

	/// Keeps `sort` only if it names a sortable column
	pub fn sanitize_sort(&self, sort: Option<String>) -> Option<String> {
		let sort = sort?;
		if is_sortable_column(&self.columns, &sort) {
			Some(sort)
		} else {
			tracing::debug!(sort = %sort, "not a sortable column, dropping sort");
			None
		}
	}

	/// Merges an extra-filter patch and re-casts the result
	///
	/// Views without extra fields stay without them.
	pub fn merge_extra(
		&self,
		current: Option<&ExtraValues>,
		patch: &ExtraValues,
	) -> Option<ExtraValues> {
		if !self.has_extra_filter() {
			return None;
		}
		let empty = ExtraValues::new();
		Some(self.extra.merge(current.unwrap_or(&empty), patch))
	}
}
