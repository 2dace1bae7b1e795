//! List screen
//!
//! Wires a [`FilterController`] to a [`ListSource`]: every settled filter
//! state that differs from the previous one is fetched, and the reported
//! total flows back into the filter state.

use crate::error::AdminResult;
use crate::screens::ScreenSpec;
use crate::source::{ListRequest, ListSource, Record};
use std::sync::Arc;
use videocat_filter::clock::Instant;
use videocat_filter::manager::{Dispatch, FilterManager, PaginationControl};
use videocat_filter::tables::{ExtraFilter, TableColumn};
use videocat_filter::{Action, FilterConfig, FilterController, FilterState, History, Settled};

/// One mounted list screen
pub struct ListScreen<S: ListSource, H> {
	name: &'static str,
	plugin: Arc<dyn ExtraFilter>,
	controller: FilterController<H>,
	source: S,
	rows: Vec<S::Row>,
}

impl<S: ListSource, H: History> ListScreen<S, H> {
	/// Mounts `screen` on the location shown by `history` and loads the first page
	///
	/// # Errors
	///
	/// Returns an error when the screen cannot be mounted or the first
	/// fetch fails. A failed fetch leaves the filter state untouched.
	pub async fn mount(
		screen: ScreenSpec,
		config: FilterConfig,
		source: S,
		history: H,
	) -> AdminResult<Self> {
		let plugin = Arc::clone(screen.plugin());
		let (controller, settled) = FilterController::mount(
			config,
			screen.columns().to_vec(),
			Arc::clone(&plugin),
			history,
		)?;
		let mut screen = Self {
			name: screen.name(),
			plugin,
			controller,
			source,
			rows: Vec::new(),
		};
		screen.handle(settled).await?;
		Ok(screen)
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the current filter state
	pub fn state(&self) -> &FilterState {
		self.controller.state()
	}

	/// Returns the rows of the last successful fetch
	pub fn rows(&self) -> &[S::Row] {
		&self.rows
	}

	/// Returns the total reported by the last successful fetch
	pub fn total(&self) -> u64 {
		self.controller.state().pagination.total
	}

	/// Returns the column set with the current sort marked
	pub fn columns(&self) -> Vec<TableColumn> {
		self.controller.columns()
	}

	pub fn controller(&self) -> &FilterController<H> {
		&self.controller
	}

	pub fn controller_mut(&mut self) -> &mut FilterController<H> {
		&mut self.controller
	}

	pub fn source(&self) -> &S {
		&self.source
	}

	/// Returns a filter manager for one widget interaction
	pub fn manager<'a>(
		&'a mut self,
		control: &'a mut dyn PaginationControl,
	) -> FilterManager<'a, FilterController<H>> {
		self.controller.manager(control)
	}

	/// Settles the pending filter state if due at `now` and fetches it
	pub async fn poll(&mut self, now: Instant) -> AdminResult<Option<Settled>> {
		match self.controller.poll(now)? {
			Some(settled) => self.handle(settled).await.map(Some),
			None => Ok(None),
		}
	}

	/// Waits for the pending filter state to settle and fetches it
	#[cfg(not(target_arch = "wasm32"))]
	pub async fn next_settled(&mut self) -> AdminResult<Option<Settled>> {
		match self.controller.next_settled().await? {
			Some(settled) => self.handle(settled).await.map(Some),
			None => Ok(None),
		}
	}

	/// Reloads the filters after back/forward traversal
	pub async fn on_location_change(&mut self) -> AdminResult<Option<Settled>> {
		match self.controller.on_location_change() {
			Some(settled) => self.handle(settled).await.map(Some),
			None => Ok(None),
		}
	}

	/// Fetches the current filter state again
	pub async fn refresh(&mut self) -> AdminResult<()> {
		let state = self.controller.state().clone();
		self.fetch(&state).await
	}

	/// Deletes the rows at `indices` of the current page
	///
	/// When a whole page beyond the first was deleted the screen steps back
	/// one page, which is fetched once it settles. Otherwise the current
	/// page is fetched again right away.
	pub async fn delete_rows(
		&mut self,
		indices: &[usize],
		control: &mut dyn PaginationControl,
	) -> AdminResult<()> {
		let ids: Vec<String> = indices
			.iter()
			.filter_map(|&index| self.rows.get(index))
			.map(|row| row.id().to_string())
			.collect();
		if ids.is_empty() {
			return Ok(());
		}
		self.source.delete_many(&ids).await?;
		tracing::debug!(screen = self.name, count = ids.len(), "rows deleted");

		let pagination = self.controller.state().pagination.clone();
		let deleted = u64::try_from(ids.len()).unwrap_or(u64::MAX);
		if deleted == pagination.per_page && pagination.page > 1 {
			self.controller
				.manager(control)
				.change_page(pagination.widget_page() - 1);
			Ok(())
		} else {
			self.refresh().await
		}
	}

	async fn handle(&mut self, settled: Settled) -> AdminResult<Settled> {
		if settled.changed {
			self.fetch(&settled.state).await?;
		}
		Ok(settled)
	}

	async fn fetch(&mut self, state: &FilterState) -> AdminResult<()> {
		let request = ListRequest::from_state(state, self.plugin.as_ref());
		match self.source.list(&request).await {
			Ok(response) => {
				tracing::debug!(
					screen = self.name,
					rows = response.rows.len(),
					total = response.total,
					"list fetched"
				);
				self.rows = response.rows;
				self.controller.dispatch(Action::SetTotal {
					total: response.total,
				});
				Ok(())
			}
			Err(e) => {
				tracing::warn!(screen = self.name, error = %e, "failed to load list");
				Err(e)
			}
		}
	}
}
