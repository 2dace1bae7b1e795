//! Console list screens
//!
//! Each screen module declares its row type, its column set and the
//! extra-filter plugin that maps its table filters to the address.

pub mod cast_member;
pub mod category;
pub mod genre;
pub mod video;

use crate::error::{AdminError, AdminResult};
use std::fmt;
use std::sync::Arc;
use videocat_filter::tables::{ExtraFilter, ExtraValue, ExtraValues, TableColumn};

/// Names of the registered screens
pub const NAMES: [&str; 4] = [
	category::NAME,
	genre::NAME,
	cast_member::NAME,
	video::NAME,
];

/// Label of the affirmative choice in yes/no filters
pub const YES: &str = "Sim";

/// Label of the negative choice in yes/no filters
pub const NO: &str = "Não";

/// Encodes a yes/no filter as the boolean the catalog API expects
pub(crate) fn yes_no_param(values: &ExtraValues, key: &str) -> Option<(String, String)> {
	values
		.get(key)
		.and_then(ExtraValue::as_text)
		.map(|label| (key.to_string(), (label == YES).to_string()))
}

/// Static description of a list screen
#[derive(Clone)]
pub struct ScreenSpec {
	name: &'static str,
	path: &'static str,
	columns: Vec<TableColumn>,
	plugin: Arc<dyn ExtraFilter>,
}

impl fmt::Debug for ScreenSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ScreenSpec")
			.field("name", &self.name)
			.field("path", &self.path)
			.field("columns", &self.columns)
			.finish_non_exhaustive()
	}
}

impl ScreenSpec {
	pub fn new(
		name: &'static str,
		path: &'static str,
		columns: Vec<TableColumn>,
		plugin: Arc<dyn ExtraFilter>,
	) -> Self {
		Self {
			name,
			path,
			columns,
			plugin,
		}
	}

	/// Returns the screen name used in settings
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the route of the list page
	pub fn path(&self) -> &'static str {
		self.path
	}

	pub fn columns(&self) -> &[TableColumn] {
		&self.columns
	}

	pub fn plugin(&self) -> &Arc<dyn ExtraFilter> {
		&self.plugin
	}

	/// Looks a screen up by name
	pub fn by_name(name: &str) -> AdminResult<Self> {
		all()
			.into_iter()
			.find(|screen| screen.name == name)
			.ok_or_else(|| AdminError::UnknownScreen(name.to_string()))
	}
}

/// Returns every registered screen
pub fn all() -> Vec<ScreenSpec> {
	vec![
		category::screen(),
		genre::screen(),
		cast_member::screen(),
		video::screen(),
	]
}
