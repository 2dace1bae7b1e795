//! Categories list screen

use super::{NO, ScreenSpec, YES, yes_no_param};
use crate::source::Record;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use videocat_filter::QueryParams;
use videocat_filter::tables::{
	ExtraFilter, ExtraSchema, ExtraValues, FieldRule, RawExtra, TableColumn,
};

pub const NAME: &str = "categories";
pub const PATH: &str = "/categories";

/// A catalog category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
	pub is_active: bool,
	pub created_at: String,
}

impl Record for Category {
	fn id(&self) -> &str {
		&self.id
	}
}

pub fn columns() -> Vec<TableColumn> {
	vec![
		TableColumn::new("name", "Nome").filterable(false),
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

/// Active-flag filter of the categories list
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryFilter;

impl ExtraFilter for CategoryFilter {
	fn create_validation_schema(&self) -> ExtraSchema {
		ExtraSchema::new().field(FieldRule::choice("is_active", [YES, NO]))
	}

	fn state_from_url(&self, params: &QueryParams) -> RawExtra {
		self.create_validation_schema().read(params)
	}

	fn format_search_params(&self, values: &ExtraValues) -> QueryParams {
		self.create_validation_schema().format(values)
	}

	fn fetch_params(&self, values: &ExtraValues) -> QueryParams {
		yes_no_param(values, "is_active").into_iter().collect()
	}
}

pub fn screen() -> ScreenSpec {
	ScreenSpec::new(NAME, PATH, columns(), Arc::new(CategoryFilter))
}
