//! Filter state reducer
//!
//! Every state change of a list view goes through [`FilterReducer::reduce`].
//! Changes that produce a new result set (search, page size, ordering, extra
//! filters) move back to the first page; changing the page alone touches
//! nothing else.

use crate::schema::FilterSchema;
use crate::state::{FilterState, Search};
use crate::tables::{ExtraValues, Order, SortDirection};
use std::sync::Arc;

/// Filter state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	SetSearch { search: Search },
	SetPage { page: u64 },
	SetPerPage { per_page: u64 },
	SetOrder {
		sort: Option<String>,
		dir: Option<SortDirection>,
	},
	UpdateExtraFilter { patch: ExtraValues },
	Reset,
	/// Record count reported by the last list response
	SetTotal { total: u64 },
	/// Replace the state with one read back from the address
	Restore { state: Box<FilterState> },
}

/// Pure reducer over [`Action`]
#[derive(Debug, Clone)]
pub struct FilterReducer {
	schema: Arc<FilterSchema>,
}

impl FilterReducer {
	/// Creates a reducer validating against `schema`
	pub fn new(schema: Arc<FilterSchema>) -> Self {
		Self { schema }
	}

	/// Returns the state produced by applying `action` to `state`
	pub fn reduce(&self, state: &FilterState, action: Action) -> FilterState {
		match action {
			Action::SetSearch { search } => {
				let mut next = state.clone();
				next.search = search;
				next.pagination.page = 1;
				next
			}
			Action::SetPage { page } => {
				let mut next = state.clone();
				next.pagination.page = page.max(1);
				next
			}
			Action::SetPerPage { per_page } => {
				let mut next = state.clone();
				next.pagination.per_page = self.schema.sanitize_per_page(per_page);
				next.pagination.page = 1;
				next
			}
			Action::SetOrder { sort, dir } => {
				let mut next = state.clone();
				next.order = Order::from_parts(self.schema.sanitize_sort(sort), dir);
				next.pagination.page = 1;
				next
			}
			Action::UpdateExtraFilter { patch } => {
				let mut next = state.clone();
				next.extra_filter = self.schema.merge_extra(state.extra_filter.as_ref(), &patch);
				next.pagination.page = 1;
				next
			}
			Action::Reset => {
				let mut next = self.schema.default_state();
				next.search = Search::ProgrammaticReset(String::new());
				next
			}
			Action::SetTotal { total } => {
				let mut next = state.clone();
				next.pagination.total = total;
				next
			}
			Action::Restore { state } => *state,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::FilterConfig;
	use crate::tables::{ExtraSchema, ExtraValue, FieldRule, TableColumn};
	use rstest::*;

	fn columns() -> Vec<TableColumn> {
		vec![
			TableColumn::new("name", "Nome"),
			TableColumn::new("created_at", "Criado em"),
			TableColumn::new("id", "Ações").sortable(false),
		]
	}

	#[fixture]
	fn reducer() -> FilterReducer {
		let extra = ExtraSchema::new()
			.field(FieldRule::list("categories"))
			.field(FieldRule::choice("is_active", ["Sim", "Não"]));
		let schema = FilterSchema::new(FilterConfig::default(), columns(), extra).unwrap();
		FilterReducer::new(Arc::new(schema))
	}

	#[fixture]
	fn on_page_five(reducer: FilterReducer) -> (FilterReducer, FilterState) {
		let mut state = reducer.schema.default_state();
		state.search = Search::from("old");
		state.pagination.page = 5;
		state.pagination.per_page = 25;
		state.pagination.total = 200;
		state.order = Order::new("name", SortDirection::Ascending);
		(reducer, state)
	}

	fn patch(key: &str, value: ExtraValue) -> ExtraValues {
		let mut patch = ExtraValues::new();
		patch.insert(key.to_string(), value);
		patch
	}

	#[rstest]
	#[case(Action::SetSearch { search: Search::from("new") })]
	#[case(Action::SetPerPage { per_page: 50 })]
	#[case(Action::SetOrder { sort: Some("created_at".to_string()), dir: Some(SortDirection::Descending) })]
	#[case(Action::UpdateExtraFilter { patch: patch("is_active", ExtraValue::text("Sim")) })]
	fn test_result_set_changes_reset_page(
		on_page_five: (FilterReducer, FilterState),
		#[case] action: Action,
	) {
		// Arrange
		let (reducer, state) = on_page_five;

		// Act
		let next = reducer.reduce(&state, action);

		// Assert
		assert_eq!(next.pagination.page, 1);
		assert_eq!(next.pagination.total, 200);
	}

	#[rstest]
	fn test_set_page_leaves_other_fields(on_page_five: (FilterReducer, FilterState)) {
		let (reducer, state) = on_page_five;

		let next = reducer.reduce(&state, Action::SetPage { page: 2 });

		assert_eq!(next.pagination.page, 2);
		assert_eq!(next.search, state.search);
		assert_eq!(next.order, state.order);
		assert_eq!(next.pagination.per_page, state.pagination.per_page);
		assert_eq!(next.extra_filter, state.extra_filter);
	}

	#[rstest]
	fn test_set_page_clamps_to_first_page(on_page_five: (FilterReducer, FilterState)) {
		let (reducer, state) = on_page_five;

		let next = reducer.reduce(&state, Action::SetPage { page: 0 });

		assert_eq!(next.pagination.page, 1);
	}

	#[rstest]
	fn test_set_per_page_rejects_unknown_size(on_page_five: (FilterReducer, FilterState)) {
		let (reducer, state) = on_page_five;

		let next = reducer.reduce(&state, Action::SetPerPage { per_page: 999 });

		assert_eq!(next.pagination.per_page, 10);
	}

	#[rstest]
	fn test_set_order_drops_unsortable_column(on_page_five: (FilterReducer, FilterState)) {
		let (reducer, state) = on_page_five;

		let next = reducer.reduce(
			&state,
			Action::SetOrder {
				sort: Some("id".to_string()),
				dir: Some(SortDirection::Descending),
			},
		);

		assert_eq!(next.order, Order::default());
	}

	#[rstest]
	fn test_update_extra_filter_merges(on_page_five: (FilterReducer, FilterState)) {
		// Arrange
		let (reducer, state) = on_page_five;
		let first = reducer.reduce(
			&state,
			Action::UpdateExtraFilter {
				patch: patch("categories", ExtraValue::list(["1", "2"])),
			},
		);

		// Act
		let next = reducer.reduce(
			&first,
			Action::UpdateExtraFilter {
				patch: patch("is_active", ExtraValue::text("Não")),
			},
		);

		// Assert
		let extra = next.extra_filter.unwrap();
		assert_eq!(extra["categories"], ExtraValue::list(["1", "2"]));
		assert_eq!(extra["is_active"], ExtraValue::text("Não"));
	}

	#[rstest]
	fn test_reset_tags_search(on_page_five: (FilterReducer, FilterState)) {
		// Arrange
		let (reducer, mut state) = on_page_five;
		state.pagination.page = 3;
		state.search = Search::from("x");

		// Act
		let next = reducer.reduce(&state, Action::Reset);

		// Assert
		assert_eq!(next.pagination.page, 1);
		assert_eq!(next.pagination.per_page, 10);
		assert_eq!(next.search, Search::ProgrammaticReset(String::new()));
		assert!(next.order.is_unsorted());
		assert!(next.extra_filter.unwrap().values().all(ExtraValue::is_null));
	}

	#[rstest]
	fn test_set_total_only_touches_total(on_page_five: (FilterReducer, FilterState)) {
		let (reducer, state) = on_page_five;

		let next = reducer.reduce(&state, Action::SetTotal { total: 7 });

		assert_eq!(next.pagination.total, 7);
		assert_eq!(next.location_state(), state.location_state());
	}

	#[rstest]
	fn test_restore_replaces_state(on_page_five: (FilterReducer, FilterState)) {
		let (reducer, state) = on_page_five;
		let restored = reducer.schema.default_state();

		let next = reducer.reduce(
			&state,
			Action::Restore {
				state: Box::new(restored.clone()),
			},
		);

		assert_eq!(next, restored);
	}
}
