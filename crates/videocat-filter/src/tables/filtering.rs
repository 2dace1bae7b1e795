//! Extra filter plugins
//!
//! Each list screen may layer its own filter fields (a category's active
//! flag, a video's genres, ...) on top of search, pagination and ordering.
//! The engine knows nothing about those fields: a screen implements
//! [`ExtraFilter`] and the engine calls it to extract, cast and encode them.
//!
//! Field values are kept as [`ExtraValues`], an ordered map from field name
//! to [`ExtraValue`]. The engine only merges and forwards this map.

use crate::codec::QueryParams;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw, uncast extra-filter input keyed by field name
///
/// Only keys present in the address appear here.
pub type RawExtra = BTreeMap<String, String>;

/// Cast extra-filter values keyed by field name
pub type ExtraValues = BTreeMap<String, ExtraValue>;

/// A single cast extra-filter value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraValue {
	/// The filter is not set
	#[default]
	Null,
	/// A single value
	Text(String),
	/// A list of values
	List(Vec<String>),
}

impl ExtraValue {
	/// Creates a text value
	pub fn text(value: impl Into<String>) -> Self {
		Self::Text(value.into())
	}

	/// Creates a list value
	pub fn list<I, S>(values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::List(values.into_iter().map(Into::into).collect())
	}

	/// Returns whether the filter is unset
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Returns the single value, if this is a text value
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(value) => Some(value),
			_ => None,
		}
	}

	/// Returns the values, if this is a list value
	pub fn as_list(&self) -> Option<&[String]> {
		match self {
			Self::List(values) => Some(values),
			_ => None,
		}
	}

	fn first(&self) -> Option<&str> {
		match self {
			Self::Null => None,
			Self::Text(value) => Some(value),
			Self::List(values) => values.first().map(String::as_str),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RuleKind {
	List,
	Choice(Vec<String>),
	Text,
}

/// Cast rule for one extra-filter field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
	name: String,
	kind: RuleKind,
}

impl FieldRule {
	/// Comma-separated list; empty input is unset
	pub fn list(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			kind: RuleKind::List,
		}
	}

	/// One of a fixed set of values; anything else is unset
	pub fn choice<I, S>(name: impl Into<String>, options: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			name: name.into(),
			kind: RuleKind::Choice(options.into_iter().map(Into::into).collect()),
		}
	}

	/// Free text; blank input is unset
	pub fn text(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			kind: RuleKind::Text,
		}
	}

	/// Returns the query key this rule reads
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Casts a raw query value
	pub fn cast(&self, raw: Option<&str>) -> ExtraValue {
		let Some(raw) = raw else {
			return ExtraValue::Null;
		};
		match &self.kind {
			RuleKind::List => list_value(raw.split(',')),
			RuleKind::Choice(options) => {
				if options.iter().any(|option| option == raw) {
					ExtraValue::Text(raw.to_string())
				} else {
					ExtraValue::Null
				}
			}
			RuleKind::Text => {
				if raw.trim().is_empty() {
					ExtraValue::Null
				} else {
					ExtraValue::Text(raw.to_string())
				}
			}
		}
	}

	/// Re-validates an already typed value (e.g. a patch from the table widget)
	///
	/// Scalar rules given a list keep its first element.
	pub fn coerce(&self, value: &ExtraValue) -> ExtraValue {
		match (&self.kind, value) {
			(_, ExtraValue::Null) => ExtraValue::Null,
			(RuleKind::List, ExtraValue::List(values)) => {
				list_value(values.iter().map(String::as_str))
			}
			(RuleKind::List, ExtraValue::Text(raw)) => self.cast(Some(raw)),
			(_, value) => self.cast(value.first()),
		}
	}

	/// Encodes a value for the query string; unset values produce nothing
	pub fn encode(&self, value: &ExtraValue) -> Option<String> {
		match value {
			ExtraValue::Null => None,
			ExtraValue::Text(value) => Some(value.clone()),
			ExtraValue::List(values) if values.is_empty() => None,
			ExtraValue::List(values) => Some(values.join(",")),
		}
	}
}

fn list_value<'a>(items: impl Iterator<Item = &'a str>) -> ExtraValue {
	let items: Vec<String> = items
		.filter(|item| !item.trim().is_empty())
		.map(str::to_string)
		.collect();
	if items.is_empty() {
		ExtraValue::Null
	} else {
		ExtraValue::List(items)
	}
}

/// Validation schema for a screen's extra filter fields
///
/// # Example
///
/// ```rust
/// use videocat_filter::tables::{ExtraSchema, ExtraValue, FieldRule, RawExtra};
///
/// let schema = ExtraSchema::new()
///     .field(FieldRule::list("genres"))
///     .field(FieldRule::choice("opened", ["Sim", "Não"]));
///
/// let mut raw = RawExtra::new();
/// raw.insert("genres".to_string(), "drama,comedy".to_string());
/// raw.insert("opened".to_string(), "maybe".to_string());
///
/// let values = schema.cast(&raw);
/// assert_eq!(values["genres"], ExtraValue::list(["drama", "comedy"]));
/// assert_eq!(values["opened"], ExtraValue::Null);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraSchema {
	rules: Vec<FieldRule>,
}

impl ExtraSchema {
	/// Creates an empty schema
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a field rule
	pub fn field(mut self, rule: FieldRule) -> Self {
		self.rules.push(rule);
		self
	}

	/// Returns the field rules in declaration order
	pub fn rules(&self) -> &[FieldRule] {
		&self.rules
	}

	/// Returns whether the schema declares no fields
	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Collects the raw values of the declared fields from a query
	pub fn read(&self, params: &QueryParams) -> RawExtra {
		self.rules
			.iter()
			.filter_map(|rule| {
				params
					.get(rule.name())
					.map(|value| (rule.name().to_string(), value.to_string()))
			})
			.collect()
	}

	/// Casts raw values; every declared field is present in the result
	pub fn cast(&self, raw: &RawExtra) -> ExtraValues {
		self.rules
			.iter()
			.map(|rule| {
				let value = rule.cast(raw.get(rule.name()).map(String::as_str));
				(rule.name().to_string(), value)
			})
			.collect()
	}

	/// Shallow-merges `patch` into `current` and re-validates the result
	///
	/// Keys the schema does not declare are dropped.
	pub fn merge(&self, current: &ExtraValues, patch: &ExtraValues) -> ExtraValues {
		self.rules
			.iter()
			.map(|rule| {
				let value = patch
					.get(rule.name())
					.or_else(|| current.get(rule.name()))
					.map(|value| rule.coerce(value))
					.unwrap_or_default();
				(rule.name().to_string(), value)
			})
			.collect()
	}

	/// Encodes the set fields in declaration order
	pub fn format(&self, values: &ExtraValues) -> QueryParams {
		let mut params = QueryParams::new();
		for rule in &self.rules {
			if let Some(encoded) = values.get(rule.name()).and_then(|value| rule.encode(value)) {
				params.set(rule.name(), encoded);
			}
		}
		params
	}
}

/// Contract a list screen implements to contribute extra filter fields
///
/// All three address-facing methods are mandatory; screens without extra
/// filters use [`NoExtraFilter`].
pub trait ExtraFilter: Send + Sync {
	/// Returns the cast rules for this screen's fields
	fn create_validation_schema(&self) -> ExtraSchema;

	/// Extracts this screen's raw values from the address query
	fn state_from_url(&self, params: &QueryParams) -> RawExtra;

	/// Encodes this screen's values for the address, omitting unset fields
	fn format_search_params(&self, values: &ExtraValues) -> QueryParams;

	/// Encodes this screen's values for a list request
	///
	/// Defaults to the address encoding.
	fn fetch_params(&self, values: &ExtraValues) -> QueryParams {
		self.format_search_params(values)
	}
}

/// Plugin for screens without extra filters
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExtraFilter;

impl ExtraFilter for NoExtraFilter {
	fn create_validation_schema(&self) -> ExtraSchema {
		ExtraSchema::new()
	}

	fn state_from_url(&self, _params: &QueryParams) -> RawExtra {
		RawExtra::new()
	}

	fn format_search_params(&self, _values: &ExtraValues) -> QueryParams {
		QueryParams::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	#[fixture]
	fn schema() -> ExtraSchema {
		ExtraSchema::new()
			.field(FieldRule::list("categories"))
			.field(FieldRule::choice("is_active", ["Sim", "Não"]))
			.field(FieldRule::text("code"))
	}

	fn raw(pairs: &[(&str, &str)]) -> RawExtra {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[rstest]
	#[case(None, ExtraValue::Null)]
	#[case(Some(""), ExtraValue::Null)]
	#[case(Some(",,"), ExtraValue::Null)]
	#[case(Some("a"), ExtraValue::list(["a"]))]
	#[case(Some("a,,b"), ExtraValue::list(["a", "b"]))]
	fn test_list_rule_cast(#[case] input: Option<&str>, #[case] expected: ExtraValue) {
		assert_eq!(FieldRule::list("genres").cast(input), expected);
	}

	#[rstest]
	#[case(Some("Sim"), ExtraValue::text("Sim"))]
	#[case(Some("sim"), ExtraValue::Null)]
	#[case(Some(""), ExtraValue::Null)]
	#[case(None, ExtraValue::Null)]
	fn test_choice_rule_cast(#[case] input: Option<&str>, #[case] expected: ExtraValue) {
		assert_eq!(FieldRule::choice("opened", ["Sim", "Não"]).cast(input), expected);
	}

	#[rstest]
	fn test_text_rule_rejects_blank() {
		let rule = FieldRule::text("code");

		assert_eq!(rule.cast(Some("   ")), ExtraValue::Null);
		assert_eq!(rule.cast(Some(" x ")), ExtraValue::text(" x "));
	}

	#[rstest]
	fn test_coerce_scalar_from_list_keeps_first() {
		let rule = FieldRule::choice("opened", ["Sim", "Não"]);

		assert_eq!(rule.coerce(&ExtraValue::list(["Não", "Sim"])), ExtraValue::text("Não"));
		assert_eq!(rule.coerce(&ExtraValue::list(Vec::<String>::new())), ExtraValue::Null);
		assert_eq!(rule.coerce(&ExtraValue::text("Talvez")), ExtraValue::Null);
	}

	#[rstest]
	fn test_coerce_list_from_text_splits() {
		let rule = FieldRule::list("genres");

		assert_eq!(rule.coerce(&ExtraValue::text("a,b")), ExtraValue::list(["a", "b"]));
		assert_eq!(rule.coerce(&ExtraValue::list(["", "c"])), ExtraValue::list(["c"]));
	}

	#[rstest]
	fn test_schema_cast_populates_every_field(schema: ExtraSchema) {
		// Arrange
		let input = raw(&[("categories", "1,2"), ("unknown", "x")]);

		// Act
		let values = schema.cast(&input);

		// Assert
		assert_eq!(values.len(), 3);
		assert_eq!(values["categories"], ExtraValue::list(["1", "2"]));
		assert_eq!(values["is_active"], ExtraValue::Null);
		assert_eq!(values["code"], ExtraValue::Null);
		assert!(!values.contains_key("unknown"));
	}

	#[rstest]
	fn test_schema_read_only_declared_keys(schema: ExtraSchema) {
		let params = QueryParams::parse("?is_active=Sim&search=x&categories=");

		let extracted = schema.read(&params);

		assert_eq!(extracted, raw(&[("categories", ""), ("is_active", "Sim")]));
	}

	#[rstest]
	fn test_schema_merge_overrides_and_validates(schema: ExtraSchema) {
		// Arrange
		let current = schema.cast(&raw(&[("categories", "1"), ("is_active", "Sim")]));
		let mut patch = ExtraValues::new();
		patch.insert("is_active".to_string(), ExtraValue::text("Talvez"));
		patch.insert("code".to_string(), ExtraValue::text("A1"));
		patch.insert("bogus".to_string(), ExtraValue::text("x"));

		// Act
		let merged = schema.merge(&current, &patch);

		// Assert
		assert_eq!(merged["categories"], ExtraValue::list(["1"]));
		assert_eq!(merged["is_active"], ExtraValue::Null);
		assert_eq!(merged["code"], ExtraValue::text("A1"));
		assert!(!merged.contains_key("bogus"));
	}

	#[rstest]
	fn test_schema_format_is_sparse(schema: ExtraSchema) {
		let values = schema.cast(&raw(&[("categories", "1,2"), ("code", "A1")]));

		let params = schema.format(&values);

		assert_eq!(params.to_query_string(), "categories=1%2C2&code=A1");
	}

	#[rstest]
	fn test_no_extra_filter_is_inert() {
		let plugin = NoExtraFilter;

		assert!(plugin.create_validation_schema().is_empty());
		assert!(plugin.state_from_url(&QueryParams::parse("a=1")).is_empty());
		assert!(plugin.format_search_params(&ExtraValues::new()).is_empty());
		assert!(plugin.fetch_params(&ExtraValues::new()).is_empty());
	}

	#[rstest]
	fn test_extra_value_serde_is_untagged() {
		let mut values = ExtraValues::new();
		values.insert("a".to_string(), ExtraValue::Null);
		values.insert("b".to_string(), ExtraValue::text("x"));
		values.insert("c".to_string(), ExtraValue::list(["1", "2"]));

		let json = serde_json::to_string(&values).unwrap();
		assert_eq!(json, r#"{"a":null,"b":"x","c":["1","2"]}"#);

		let back: ExtraValues = serde_json::from_str(&json).unwrap();
		assert_eq!(back, values);
	}
}
