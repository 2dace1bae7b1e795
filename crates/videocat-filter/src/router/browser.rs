//! Browser history backend (WASM only)

use super::history::{History, Location};
use crate::codec::QueryParams;
use crate::error::{FilterError, FilterResult};
use crate::state::LocationState;
use wasm_bindgen::JsValue;

/// [`History`] backed by `window.history` and `window.location`
///
/// Location state is stored as a JSON string in the history entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl BrowserHistory {
	/// Creates a browser history handle
	pub fn new() -> Self {
		Self
	}

	fn window() -> FilterResult<web_sys::Window> {
		web_sys::window()
			.ok_or_else(|| FilterError::NavigationFailed("no window available".to_string()))
	}

	fn history() -> FilterResult<web_sys::History> {
		Self::window()?
			.history()
			.map_err(|e| FilterError::NavigationFailed(format!("{:?}", e)))
	}

	fn state_value(location: &Location) -> JsValue {
		location
			.state
			.as_ref()
			.and_then(|state| state.to_json().ok())
			.map(|json| JsValue::from_str(&json))
			.unwrap_or(JsValue::NULL)
	}
}

impl History for BrowserHistory {
	fn location(&self) -> Location {
		let Ok(window) = Self::window() else {
			return Location::parse("/");
		};
		let browser_location = window.location();
		let path = browser_location
			.pathname()
			.unwrap_or_else(|_| "/".to_string());
		let search = browser_location.search().unwrap_or_default();
		let state = window
			.history()
			.ok()
			.and_then(|history| history.state().ok())
			.and_then(|value| value.as_string())
			.and_then(|json| LocationState::from_json(&json).ok());

		Location {
			path,
			query: QueryParams::parse(&search),
			state,
		}
	}

	fn push(&mut self, location: Location) -> FilterResult<()> {
		Self::history()?
			.push_state_with_url(&Self::state_value(&location), "", Some(&location.href()))
			.map_err(|e| FilterError::NavigationFailed(format!("{:?}", e)))
	}

	fn replace(&mut self, location: Location) -> FilterResult<()> {
		Self::history()?
			.replace_state_with_url(&Self::state_value(&location), "", Some(&location.href()))
			.map_err(|e| FilterError::NavigationFailed(format!("{:?}", e)))
	}
}
