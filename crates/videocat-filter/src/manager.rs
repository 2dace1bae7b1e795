//! Filter manager
//!
//! The surface a table widget talks to. A [`FilterManager`] borrows the
//! current store and the widget's pagination control for the duration of
//! one interaction, so it always sees the latest state.

use crate::reducer::Action;
use crate::schema::FilterSchema;
use crate::state::{FilterState, Search};
use crate::tables::{ExtraValues, Order, SortDirection, TableColumn};
use std::sync::Arc;

/// A store that holds filter state and accepts actions
pub trait Dispatch {
	/// Returns the current state
	fn state(&self) -> &FilterState;

	/// Applies an action
	fn dispatch(&mut self, action: Action);
}

/// Commands for the table widget's own pagination display
///
/// Pages are zero-based, as the widget counts them.
pub trait PaginationControl {
	/// Shows the given page
	fn change_page(&mut self, page: u64);

	/// Shows the given number of rows per page
	fn change_rows_per_page(&mut self, rows_per_page: u64);

	/// Shows `page` with `rows_per_page` rows
	fn reset_to(&mut self, page: u64, rows_per_page: u64) {
		self.change_rows_per_page(rows_per_page);
		self.change_page(page);
	}
}

/// Returns `columns` with the sort marker set on the sorted column only
pub fn apply_order(columns: &[TableColumn], order: &Order) -> Vec<TableColumn> {
	columns
		.iter()
		.map(|column| {
			let direction = match &order.sort {
				Some(sort) if sort == column.name() => order.dir,
				_ => None,
			};
			column.clone().with_sort_direction(direction)
		})
		.collect()
}

/// Table-facing filter operations over a store
pub struct FilterManager<'a, D: Dispatch + ?Sized> {
	store: &'a mut D,
	control: &'a mut dyn PaginationControl,
	schema: Arc<FilterSchema>,
}

impl<'a, D: Dispatch + ?Sized> FilterManager<'a, D> {
	/// Creates a manager over `store`, resetting the widget through `control`
	pub fn new(
		store: &'a mut D,
		control: &'a mut dyn PaginationControl,
		schema: Arc<FilterSchema>,
	) -> Self {
		Self {
			store,
			control,
			schema,
		}
	}

	/// Returns the current state
	pub fn state(&self) -> &FilterState {
		self.store.state()
	}

	pub fn change_search(&mut self, search: impl Into<Search>) {
		self.store.dispatch(Action::SetSearch {
			search: search.into(),
		});
	}

	/// Moves to a page given in widget (zero-based) numbering
	pub fn change_page(&mut self, page: u64) {
		self.store.dispatch(Action::SetPage {
			page: page.saturating_add(1),
		});
	}

	pub fn change_rows_per_page(&mut self, per_page: u64) {
		self.store.dispatch(Action::SetPerPage { per_page });
	}

	/// Sorts by `column`; `direction` is the widget's direction label
	///
	/// The widget is sent back to its first page.
	pub fn change_column_sort(&mut self, column: &str, direction: &str) {
		self.store.dispatch(Action::SetOrder {
			sort: Some(column.to_string()),
			dir: Some(SortDirection::from_widget(direction)),
		});
		self.reset_table_pagination();
	}

	/// Merges `patch` into the extra filter values
	pub fn change_extra_filter(&mut self, patch: ExtraValues) {
		self.store.dispatch(Action::UpdateExtraFilter { patch });
	}

	/// Restores every filter to its default and the widget to its first page
	pub fn reset_filter(&mut self) {
		self.store.dispatch(Action::Reset);
		self.reset_table_pagination();
	}

	/// Returns the column set with the current sort marked
	pub fn apply_order_in_columns(&self) -> Vec<TableColumn> {
		apply_order(self.schema.columns(), &self.store.state().order)
	}

	fn reset_table_pagination(&mut self) {
		self.control.reset_to(0, self.schema.config().rows_per_page);
	}
}
