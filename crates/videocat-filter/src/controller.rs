//! Filter controller
//!
//! Owns the filter state of one mounted list view and ties the codec,
//! reducer and history synchronizer together.
//!
//! ```rust
//! use std::sync::Arc;
//! use videocat_filter::{FilterConfig, FilterController, History, MemoryHistory, NavigationType};
//! use videocat_filter::tables::{NoExtraFilter, TableColumn};
//!
//! let history = MemoryHistory::new("/categories?per_page=25&sort=name&dir=DESC");
//! let columns = vec![TableColumn::new("name", "Nome")];
//! let (controller, settled) =
//!     FilterController::mount(FilterConfig::default(), columns, Arc::new(NoExtraFilter), history)
//!         .unwrap();
//!
//! assert_eq!(settled.navigation, Some(NavigationType::Replace));
//! assert_eq!(
//!     controller.history().location().href(),
//!     "/categories?per_page=25&sort=name&dir=desc"
//! );
//! ```

use crate::codec::UrlCodec;
use crate::config::FilterConfig;
use crate::error::FilterResult;
use crate::manager::{Dispatch, FilterManager, PaginationControl, apply_order};
use crate::reducer::{Action, FilterReducer};
use crate::router::History;
use crate::schema::FilterSchema;
use crate::state::FilterState;
use crate::sync::{HistorySynchronizer, Settled};
use crate::tables::{ExtraFilter, TableColumn};
use std::sync::Arc;
use crate::clock::{self, Instant};

/// Filter state, reducer and history synchronization for one list view
#[derive(Debug)]
pub struct FilterController<H> {
	codec: UrlCodec,
	reducer: FilterReducer,
	state: FilterState,
	sync: HistorySynchronizer<H>,
}

impl<H: History> FilterController<H> {
	/// Mounts a list view on the location currently shown by `history`
	///
	/// The address is decoded and cast into the initial state, which is
	/// written back at once with a replace so the address is canonical.
	///
	/// # Errors
	///
	/// Returns an error when the configuration or column set is invalid, or
	/// the history backend refuses the write.
	pub fn mount(
		config: FilterConfig,
		columns: Vec<TableColumn>,
		plugin: Arc<dyn ExtraFilter>,
		history: H,
	) -> FilterResult<(Self, Settled)> {
		let debounce = config.debounce();
		let schema = Arc::new(FilterSchema::new(
			config,
			columns,
			plugin.create_validation_schema(),
		)?);
		let codec = UrlCodec::new(Arc::clone(&schema), plugin);
		let location = history.location();
		let state = schema.cast(&codec.decode(&location.query));
		tracing::debug!(path = %location.path, "mounting list filter");

		let mut sync = HistorySynchronizer::new(history, codec.clone(), debounce);
		let settled = sync.sync_now(state.clone())?;

		Ok((
			Self {
				codec,
				reducer: FilterReducer::new(schema),
				state,
				sync,
			},
			settled,
		))
	}

	/// Returns the current state
	pub fn state(&self) -> &FilterState {
		&self.state
	}

	/// Returns the cast rules of this view
	pub fn schema(&self) -> &Arc<FilterSchema> {
		self.codec.schema()
	}

	/// Returns the codec of this view
	pub fn codec(&self) -> &UrlCodec {
		&self.codec
	}

	/// Returns the history backend
	pub fn history(&self) -> &H {
		self.sync.history()
	}

	/// Returns the history backend mutably
	pub fn history_mut(&mut self) -> &mut H {
		self.sync.history_mut()
	}

	/// Returns the column set with the current sort marked
	pub fn columns(&self) -> Vec<TableColumn> {
		apply_order(self.schema().columns(), &self.state.order)
	}

	/// Applies `action`, scheduling a history write if the address changes
	pub fn dispatch_at(&mut self, action: Action, now: Instant) {
		let next = self.reducer.reduce(&self.state, action);
		let relocated = next.location_state() != self.state.location_state();
		self.state = next;
		if relocated {
			self.sync.schedule(self.state.clone(), now);
		}
	}

	/// Returns when the pending state settles
	pub fn deadline(&self) -> Option<Instant> {
		self.sync.deadline()
	}

	/// Returns whether a state change is waiting to settle
	pub fn is_pending(&self) -> bool {
		self.sync.is_pending()
	}

	/// Settles the pending state if its quiet period has elapsed by `now`
	pub fn poll(&mut self, now: Instant) -> FilterResult<Option<Settled>> {
		self.sync.poll(now)
	}

	/// Settles the pending state immediately
	pub fn flush(&mut self) -> FilterResult<Option<Settled>> {
		self.sync.flush()
	}

	/// Waits until the pending state settles
	///
	/// Returns `Ok(None)` at once when nothing is pending.
	#[cfg(not(target_arch = "wasm32"))]
	pub async fn next_settled(&mut self) -> FilterResult<Option<Settled>> {
		let Some(deadline) = self.deadline() else {
			return Ok(None);
		};
		tokio::time::sleep_until(deadline).await;
		self.poll(clock::now())
	}

	/// Re-reads the address after back/forward traversal
	///
	/// Any pending write is dropped and the state is replaced by the one
	/// the address holds. Returns it as settled when it differs from the
	/// last settled state; history is not written.
	pub fn on_location_change(&mut self) -> Option<Settled> {
		if self.sync.cancel().is_some() {
			tracing::trace!("pending write dropped by location change");
		}
		let location = self.sync.history().location();
		let restored = self
			.schema()
			.cast(&self.codec.decode(&location.query));
		let next = restored.location_state();
		if next != self.state.location_state() {
			self.state = self.reducer.reduce(
				&self.state,
				Action::Restore {
					state: Box::new(restored),
				},
			);
		}
		if self.sync.last_settled() == Some(&next) {
			return None;
		}

		tracing::debug!(href = %location.href(), "filter state restored from address");
		self.sync.adopt(&self.state);
		Some(Settled {
			state: self.state.clone(),
			navigation: None,
			changed: true,
		})
	}

	/// Returns a manager over this controller for one widget interaction
	pub fn manager<'a>(
		&'a mut self,
		control: &'a mut dyn PaginationControl,
	) -> FilterManager<'a, Self> {
		let schema = Arc::clone(self.schema());
		FilterManager::new(self, control, schema)
	}
}

impl<H: History> Dispatch for FilterController<H> {
	fn state(&self) -> &FilterState {
		&self.state
	}

	fn dispatch(&mut self, action: Action) {
		self.dispatch_at(action, clock::now());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::router::{MemoryHistory, NavigationType};
	use crate::state::Search;
	use crate::tables::{NoExtraFilter, SortDirection};
	use rstest::*;
	use std::time::Duration;

	fn columns() -> Vec<TableColumn> {
		vec![
			TableColumn::new("name", "Nome"),
			TableColumn::new("created_at", "Criado em"),
			TableColumn::new("id", "Ações").sortable(false),
		]
	}

	fn mount(href: &str) -> (FilterController<MemoryHistory>, Settled) {
		FilterController::mount(
			FilterConfig::default(),
			columns(),
			Arc::new(NoExtraFilter),
			MemoryHistory::new(href),
		)
		.unwrap()
	}

	#[rstest]
	fn test_mount_canonicalizes_address() {
		// Act
		let (controller, settled) = mount("/categories?page=abc&per_page=999&sort=id&search=+");

		// Assert
		assert_eq!(settled.navigation, Some(NavigationType::Replace));
		assert!(settled.changed);
		assert_eq!(controller.history().entries().len(), 1);
		assert_eq!(controller.history().location().href(), "/categories");
	}

	#[rstest]
	fn test_mount_rejects_duplicate_columns() {
		let mut columns = columns();
		columns.push(TableColumn::new("name", "Nome"));

		let result = FilterController::mount(
			FilterConfig::default(),
			columns,
			Arc::new(NoExtraFilter),
			MemoryHistory::new("/categories"),
		);

		assert!(result.is_err());
	}

	#[rstest]
	fn test_total_update_schedules_nothing() {
		let (mut controller, _) = mount("/categories");

		controller.dispatch(Action::SetTotal { total: 31 });

		assert!(!controller.is_pending());
		assert_eq!(controller.state().pagination.total, 31);
	}

	#[rstest]
	fn test_flush_writes_pending_state() {
		// Arrange
		let (mut controller, _) = mount("/categories");
		let now = Instant::now();
		controller.dispatch_at(
			Action::SetSearch {
				search: Search::from("doc"),
			},
			now,
		);

		// Act
		let settled = controller.flush().unwrap().unwrap();

		// Assert
		assert_eq!(settled.navigation, Some(NavigationType::Push));
		assert_eq!(controller.history().entries().len(), 2);
		assert!(!controller.is_pending());
	}

	#[rstest]
	fn test_columns_carry_sort_marker() {
		let (controller, _) = mount("/categories?sort=created_at&dir=desc");

		let marked: Vec<_> = controller
			.columns()
			.into_iter()
			.filter_map(|c| c.sort_direction().map(|d| (c.name().to_string(), d)))
			.collect();

		assert_eq!(
			marked,
			vec![("created_at".to_string(), SortDirection::Descending)]
		);
	}

	#[rstest]
	fn test_back_restores_previous_state_without_writing() {
		// Arrange
		let (mut controller, _) = mount("/categories");
		let start = Instant::now();
		controller.dispatch_at(Action::SetPage { page: 2 }, start);
		controller
			.poll(start + Duration::from_millis(300))
			.unwrap()
			.unwrap();

		// Act
		controller.history_mut().back();
		let restored = controller.on_location_change().unwrap();

		// Assert
		assert_eq!(restored.state.pagination.page, 1);
		assert_eq!(restored.navigation, None);
		assert_eq!(controller.state().pagination.page, 1);
		assert_eq!(controller.history().entries().len(), 2);
		assert!(controller.on_location_change().is_none());
	}

	#[rstest]
	fn test_location_change_drops_pending_write() {
		let (mut controller, _) = mount("/categories?page=2");
		controller.dispatch(Action::SetPage { page: 3 });

		let restored = controller.on_location_change();

		assert!(restored.is_none());
		assert!(!controller.is_pending());
		assert_eq!(controller.state().pagination.page, 2);
	}

	#[rstest]
	fn test_forward_onto_pending_state_settles_it() {
		// Arrange
		let (mut controller, _) = mount("/categories");
		controller.dispatch(Action::SetPage { page: 2 });
		controller.flush().unwrap();
		controller.history_mut().back();
		controller.on_location_change().unwrap();
		controller.dispatch(Action::SetPage { page: 2 });

		// Act
		controller.history_mut().forward();
		let settled = controller.on_location_change();

		// Assert
		let settled = settled.unwrap();
		assert!(settled.changed);
		assert_eq!(settled.navigation, None);
		assert_eq!(settled.state.pagination.page, 2);
		assert!(!controller.is_pending());
		assert_eq!(controller.history().entries().len(), 2);
	}
}
