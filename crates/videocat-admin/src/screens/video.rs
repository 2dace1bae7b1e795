//! Videos list screen

use super::genre::NamedRef;
use super::{NO, ScreenSpec, YES, yes_no_param};
use crate::source::Record;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use videocat_filter::QueryParams;
use videocat_filter::tables::{
	ExtraFilter, ExtraSchema, ExtraValues, FieldRule, RawExtra, TableColumn,
};

pub const NAME: &str = "videos";
pub const PATH: &str = "/videos";

/// A catalog video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
	pub id: String,
	pub title: String,
	#[serde(default)]
	pub genres: Vec<NamedRef>,
	#[serde(default)]
	pub categories: Vec<NamedRef>,
	pub opened: bool,
	pub created_at: String,
}

impl Record for Video {
	fn id(&self) -> &str {
		&self.id
	}
}

pub fn columns() -> Vec<TableColumn> {
	vec![
		TableColumn::new("title", "Título").filterable(false),
		TableColumn::new("genres", "Gêneros"),
		TableColumn::new("categories", "Categorias"),
		TableColumn::new("opened", "Ativo?").width("15%"),
		TableColumn::new("created_at", "Criado em")
			.filterable(false)
			.width("15%"),
		TableColumn::new("id", "Ações")
			.sortable(false)
			.filterable(false)
			.width("10%"),
	]
}

/// Genre, category and release filters of the videos list
#[derive(Debug, Clone, Copy, Default)]
pub struct VideoFilter;

impl VideoFilter {
	fn lists() -> ExtraSchema {
		ExtraSchema::new()
			.field(FieldRule::list("genres"))
			.field(FieldRule::list("categories"))
	}
}

impl ExtraFilter for VideoFilter {
	fn create_validation_schema(&self) -> ExtraSchema {
		Self::lists().field(FieldRule::choice("opened", [YES, NO]))
	}

	fn state_from_url(&self, params: &QueryParams) -> RawExtra {
		self.create_validation_schema().read(params)
	}

	fn format_search_params(&self, values: &ExtraValues) -> QueryParams {
		self.create_validation_schema().format(values)
	}

	fn fetch_params(&self, values: &ExtraValues) -> QueryParams {
		let mut params = Self::lists().format(values);
		params.extend(yes_no_param(values, "opened").into_iter().collect());
		params
	}
}

pub fn screen() -> ScreenSpec {
	ScreenSpec::new(NAME, PATH, columns(), Arc::new(VideoFilter))
}
