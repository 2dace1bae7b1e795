//! Debounced history synchronization
//!
//! State changes are not written to history one by one. Each change restarts
//! a quiet period; once the state has settled it is encoded and, unless the
//! recorded location already holds the same state, written to history. The
//! first write after mount replaces the current entry, later ones push.

use crate::codec::UrlCodec;
use crate::error::FilterResult;
use crate::router::{History, Location, NavigationType};
use crate::state::{FilterState, LocationState};
use std::time::Duration;
use crate::clock::Instant;

#[derive(Debug, Clone)]
struct Pending<T> {
	value: T,
	deadline: Instant,
}

/// Trailing-edge debounce holding at most one pending value
#[derive(Debug, Clone)]
pub struct Debounce<T> {
	window: Duration,
	pending: Option<Pending<T>>,
}

impl<T> Debounce<T> {
	/// Creates a debounce with the given quiet period
	pub fn new(window: Duration) -> Self {
		Self {
			window,
			pending: None,
		}
	}

	/// Returns the quiet period
	pub fn window(&self) -> Duration {
		self.window
	}

	/// Replaces any pending value and restarts the quiet period at `now`
	///
	/// Returns whether a pending value was superseded.
	pub fn schedule(&mut self, value: T, now: Instant) -> bool {
		let superseded = self.pending.is_some();
		self.pending = Some(Pending {
			value,
			deadline: now + self.window,
		});
		superseded
	}

	/// Returns when the pending value settles
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}

	/// Returns whether a value is waiting to settle
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Takes the pending value if its quiet period has elapsed by `now`
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		match &self.pending {
			Some(pending) if pending.deadline <= now => self.pending.take().map(|p| p.value),
			_ => None,
		}
	}

	/// Drops the pending value
	pub fn cancel(&mut self) -> Option<T> {
		self.pending.take().map(|pending| pending.value)
	}
}

/// Outcome of one settled state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
	/// The settled state
	pub state: FilterState,
	/// The history write performed, `None` when it was suppressed
	pub navigation: Option<NavigationType>,
	/// Whether the canonical state differs from the previous settle
	pub changed: bool,
}

/// Writes settled filter state to a [`History`] backend
#[derive(Debug)]
pub struct HistorySynchronizer<H> {
	history: H,
	codec: UrlCodec,
	path: String,
	debounce: Debounce<FilterState>,
	synced_once: bool,
	last_settled: Option<LocationState>,
}

impl<H: History> HistorySynchronizer<H> {
	/// Creates a synchronizer for the page currently shown by `history`
	pub fn new(history: H, codec: UrlCodec, window: Duration) -> Self {
		let path = history.location().path;
		Self {
			history,
			codec,
			path,
			debounce: Debounce::new(window),
			synced_once: false,
			last_settled: None,
		}
	}

	/// Returns the history backend
	pub fn history(&self) -> &H {
		&self.history
	}

	/// Returns the history backend mutably (e.g. to traverse it)
	pub fn history_mut(&mut self) -> &mut H {
		&mut self.history
	}

	/// Returns the path every write goes to
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Starts or restarts the quiet period for `state`
	pub fn schedule(&mut self, state: FilterState, now: Instant) {
		if self.debounce.schedule(state, now) {
			tracing::trace!("debounce restarted");
		}
	}

	/// Returns when the pending state settles
	pub fn deadline(&self) -> Option<Instant> {
		self.debounce.deadline()
	}

	/// Returns whether a state is waiting to settle
	pub fn is_pending(&self) -> bool {
		self.debounce.is_pending()
	}

	/// Drops the pending state without writing it
	pub fn cancel(&mut self) -> Option<FilterState> {
		self.debounce.cancel()
	}

	/// Settles the pending state if its quiet period has elapsed by `now`
	pub fn poll(&mut self, now: Instant) -> FilterResult<Option<Settled>> {
		match self.debounce.poll(now) {
			Some(state) => self.sync_now(state).map(Some),
			None => Ok(None),
		}
	}

	/// Settles the pending state immediately
	pub fn flush(&mut self) -> FilterResult<Option<Settled>> {
		match self.debounce.cancel() {
			Some(state) => self.sync_now(state).map(Some),
			None => Ok(None),
		}
	}

	/// Returns the canonical state of the last settle
	pub fn last_settled(&self) -> Option<&LocationState> {
		self.last_settled.as_ref()
	}

	/// Records `state` as settled without writing history
	///
	/// Used when the address changed underneath the view (back/forward).
	pub fn adopt(&mut self, state: &FilterState) {
		self.synced_once = true;
		self.last_settled = Some(state.location_state());
	}

	/// Encodes `state` and writes it unless the recorded location matches
	pub fn sync_now(&mut self, state: FilterState) -> FilterResult<Settled> {
		let next = state.location_state();
		let changed = self.last_settled.as_ref() != Some(&next);
		let recorded = self.history.location().state;

		if recorded.as_ref() == Some(&next) {
			tracing::trace!(path = %self.path, "location unchanged, write suppressed");
			self.synced_once = true;
			self.last_settled = Some(next);
			return Ok(Settled {
				state,
				navigation: None,
				changed,
			});
		}

		let navigation = if self.synced_once {
			NavigationType::Push
		} else {
			NavigationType::Replace
		};
		let location = Location::new(self.path.clone(), self.codec.encode(&state))
			.with_state(next.clone());
		let href = location.href();

		self.history.navigate(location, navigation)?;
		tracing::debug!(%navigation, %href, "filter state written to history");

		self.synced_once = true;
		self.last_settled = Some(next);
		Ok(Settled {
			state,
			navigation: Some(navigation),
			changed,
		})
	}
}
