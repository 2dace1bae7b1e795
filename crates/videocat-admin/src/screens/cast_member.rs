//! Cast members list screen

use super::ScreenSpec;
use crate::source::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use videocat_filter::QueryParams;
use videocat_filter::tables::{
	ExtraFilter, ExtraSchema, ExtraValue, ExtraValues, FieldRule, RawExtra, TableColumn,
};

pub const NAME: &str = "cast_members";
pub const PATH: &str = "/cast-members";

/// Role of a cast member
///
/// The address carries the label, the catalog API the numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CastMemberType {
	Director,
	Actor,
}

impl CastMemberType {
	pub const ALL: [Self; 2] = [Self::Director, Self::Actor];

	/// Returns the numeric id used by the catalog API
	pub fn id(self) -> u8 {
		match self {
			Self::Director => 1,
			Self::Actor => 2,
		}
	}

	/// Returns the label shown in the table and the address
	pub fn label(self) -> &'static str {
		match self {
			Self::Director => "Diretor",
			Self::Actor => "Ator",
		}
	}

	pub fn from_label(label: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.label() == label)
	}
}

impl TryFrom<u8> for CastMemberType {
	type Error = String;

	fn try_from(id: u8) -> Result<Self, Self::Error> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.id() == id)
			.ok_or_else(|| format!("unknown cast member type {}", id))
	}
}

impl From<CastMemberType> for u8 {
	fn from(kind: CastMemberType) -> Self {
		kind.id()
	}
}

impl fmt::Display for CastMemberType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// A catalog cast member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
	pub id: String,
	pub name: String,
	#[serde(rename = "type")]
	pub kind: CastMemberType,
	pub created_at: String,
}

impl Record for CastMember {
	fn id(&self) -> &str {
		&self.id
	}
}

pub fn columns() -> Vec<TableColumn> {
	vec![
		TableColumn::new("name", "Nome").filterable(false),
		TableColumn::new("type", "Tipo").width("15%"),
		TableColumn::new("created_at", "Criado em")
			.filterable(false)
			.width("10%"),
		TableColumn::new("id", "Ações")
			.sortable(false)
			.filterable(false)
			.width("13%"),
	]
}

/// Role filter of the cast members list
#[derive(Debug, Clone, Copy, Default)]
pub struct CastMemberFilter;

impl ExtraFilter for CastMemberFilter {
	fn create_validation_schema(&self) -> ExtraSchema {
		ExtraSchema::new().field(FieldRule::choice(
			"type",
			CastMemberType::ALL.map(CastMemberType::label),
		))
	}

	fn state_from_url(&self, params: &QueryParams) -> RawExtra {
		self.create_validation_schema().read(params)
	}

	fn format_search_params(&self, values: &ExtraValues) -> QueryParams {
		self.create_validation_schema().format(values)
	}

	fn fetch_params(&self, values: &ExtraValues) -> QueryParams {
		values
			.get("type")
			.and_then(ExtraValue::as_text)
			.and_then(CastMemberType::from_label)
			.map(|kind| ("type", kind.id().to_string()))
			.into_iter()
			.collect()
	}
}

pub fn screen() -> ScreenSpec {
	ScreenSpec::new(NAME, PATH, columns(), Arc::new(CastMemberFilter))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("?type=Diretor", "type=Diretor", "type=1")]
	#[case("?type=Ator", "type=Ator", "type=2")]
	#[case("?type=1", "", "")]
	#[case("", "", "")]
	fn test_type_filter(#[case] query: &str, #[case] url: &str, #[case] fetched: &str) {
		// Arrange
		let filter = CastMemberFilter;

		// Act
		let values = filter
			.create_validation_schema()
			.cast(&filter.state_from_url(&QueryParams::parse(query)));

		// Assert
		assert_eq!(filter.format_search_params(&values).to_query_string(), url);
		assert_eq!(filter.fetch_params(&values).to_query_string(), fetched);
	}

	#[rstest]
	fn test_row_type_uses_numeric_id() {
		let json = r#"{"id":"m1","name":"Ana","type":1,"created_at":"2020-01-14"}"#;

		let member: CastMember = serde_json::from_str(json).unwrap();

		assert_eq!(member.kind, CastMemberType::Director);
		assert_eq!(member.kind.to_string(), "Diretor");
		assert!(serde_json::to_string(&member).unwrap().contains(r#""type":1"#));
	}

	#[rstest]
	fn test_unknown_type_id_is_rejected() {
		let json = r#"{"id":"m1","name":"Ana","type":9,"created_at":"2020-01-14"}"#;

		assert!(serde_json::from_str::<CastMember>(json).is_err());
	}
}
