//! Pagination functionality for tables

/// Pagination state of a list view
///
/// `page` is 1-indexed. `total` is the record count reported by the last
/// list response; it is derived data and never written to the address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pagination {
	/// Current page number (1-indexed)
	pub page: u64,
	/// Total number of records
	pub total: u64,
	/// Number of records per page
	pub per_page: u64,
}

impl Pagination {
	/// Creates pagination on the first page
	///
	/// # Arguments
	///
	/// * `per_page` - Number of records per page
	pub fn new(per_page: u64) -> Self {
		Self {
			page: 1,
			total: 0,
			per_page,
		}
	}

	/// Returns the zero-based page index the table widget displays
	pub fn widget_page(&self) -> u64 {
		self.page.saturating_sub(1)
	}
}
