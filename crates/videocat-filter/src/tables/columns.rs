//! Column definitions
//!
//! A column describes one table field: its identifier, header label and
//! whether it takes part in sorting and filtering. Rendering hooks belong to
//! the presentation layer and are not modeled here.

use super::sorting::SortDirection;

/// A table column definition
///
/// # Example
///
/// ```rust
/// use videocat_filter::tables::TableColumn;
///
/// let actions = TableColumn::new("id", "Ações").sortable(false).width("10%");
/// assert!(!actions.is_sortable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
	name: String,
	label: String,
	sortable: bool,
	filterable: bool,
	width: Option<String>,
	sort_direction: Option<SortDirection>,
}

impl TableColumn {
	/// Creates a sortable, filterable column
	pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			sortable: true,
			filterable: true,
			width: None,
			sort_direction: None,
		}
	}

	/// Sets whether this column is sortable
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether this column is filterable
	pub fn filterable(mut self, filterable: bool) -> Self {
		self.filterable = filterable;
		self
	}

	/// Sets the display width (e.g. `"15%"`)
	pub fn width(mut self, width: impl Into<String>) -> Self {
		self.width = Some(width.into());
		self
	}

	/// Marks the column with the direction it is currently sorted in
	pub fn with_sort_direction(mut self, direction: Option<SortDirection>) -> Self {
		self.sort_direction = direction;
		self
	}

	/// Returns the column identifier
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the header label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns whether this column can be sorted
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Returns whether this column can be filtered
	pub fn is_filterable(&self) -> bool {
		self.filterable
	}

	/// Returns the display width, if any
	pub fn display_width(&self) -> Option<&str> {
		self.width.as_deref()
	}

	/// Returns the sort marker shown in the header
	pub fn sort_direction(&self) -> Option<SortDirection> {
		self.sort_direction
	}
}

/// Returns whether `name` is a sortable column of `columns`
pub fn is_sortable_column(columns: &[TableColumn], name: &str) -> bool {
	columns
		.iter()
		.any(|column| column.name() == name && column.is_sortable())
}
