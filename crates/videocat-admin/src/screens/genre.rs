//! Genres list screen

use super::{NO, ScreenSpec, YES, yes_no_param};
use crate::source::Record;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use videocat_filter::QueryParams;
use videocat_filter::tables::{
	ExtraFilter, ExtraSchema, ExtraValues, FieldRule, RawExtra, TableColumn,
};

pub const NAME: &str = "genres";
pub const PATH: &str = "/genres";

/// Reference to a related catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
	pub id: String,
	pub name: String,
}

/// A catalog genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub categories: Vec<NamedRef>,
	pub is_active: bool,
	pub created_at: String,
}

impl Genre {
	/// Returns the category names as shown in the table
	pub fn category_names(&self) -> String {
		self.categories
			.iter()
			.map(|category| category.name.as_str())
			.collect::<Vec<_>>()
			.join(", ")
	}
}

impl Record for Genre {
	fn id(&self) -> &str {
		&self.id
	}
}

pub fn columns() -> Vec<TableColumn> {
	vec![
		TableColumn::new("name", "Nome").filterable(false),
		TableColumn::new("categories", "Categorias"),
		TableColumn::new("is_active", "Ativo?").width("4%"),
		TableColumn::new("created_at", "Criado em")
			.filterable(false)
			.width("10%"),
		TableColumn::new("id", "Ações")
			.sortable(false)
			.filterable(false)
			.width("13%"),
	]
}

/// Category and active-flag filters of the genres list
#[derive(Debug, Clone, Copy, Default)]
pub struct GenreFilter;

impl ExtraFilter for GenreFilter {
	fn create_validation_schema(&self) -> ExtraSchema {
		ExtraSchema::new()
			.field(FieldRule::list("categories"))
			.field(FieldRule::choice("is_active", [YES, NO]))
	}

	fn state_from_url(&self, params: &QueryParams) -> RawExtra {
		self.create_validation_schema().read(params)
	}

	fn format_search_params(&self, values: &ExtraValues) -> QueryParams {
		self.create_validation_schema().format(values)
	}

	fn fetch_params(&self, values: &ExtraValues) -> QueryParams {
		let schema = ExtraSchema::new().field(FieldRule::list("categories"));
		let mut params = schema.format(values);
		params.extend(yes_no_param(values, "is_active").into_iter().collect());
		params
	}
}

pub fn screen() -> ScreenSpec {
	ScreenSpec::new(NAME, PATH, columns(), Arc::new(GenreFilter))
}
