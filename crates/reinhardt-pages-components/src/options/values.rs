//! Typed option values: bounds, date ranges, field values and messages.

use crate::error::{InvalidOption, Result};
use chrono::NaiveDate;
use serde_json::Value;

/// Date format accepted by date options.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive bounds for a numeric option that is clamped instead of rejected.
///
/// Clamping is opt-in per field; every clamped field names its bounds as a
/// constant next to the component that uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
	pub min: i64,
	pub max: i64,
}

impl Bounds {
	pub const fn new(min: i64, max: i64) -> Self {
		Self { min, max }
	}

	/// Clamps `value` into `[min, max]`, logging when it had to move.
	pub fn clamp(self, field: &str, value: i64) -> i64 {
		let applied = value.clamp(self.min, self.max.max(self.min));
		if applied != value {
			tracing::debug!(field, requested = value, applied, "clamped option into bounds");
		}
		applied
	}

	pub fn contains(self, value: i64) -> bool {
		(self.min..=self.max).contains(&value)
	}
}

pub(crate) fn parse_date(key: &str, raw: &str) -> Result<NaiveDate> {
	NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
		.map_err(|_| {
			InvalidOption::invalid_format(key, raw, format!("invalid {} date format", key))
		})
}

/// An optional minimum and maximum date.
///
/// # Examples
///
/// ```
/// use reinhardt_pages_components::DateRange;
///
/// let range = DateRange::parse(Some("2024-01-01"), Some("2024-12-31")).unwrap();
/// assert!(range.min().is_some());
///
/// let err = DateRange::parse(Some("2024-01-01"), Some("2023-01-01")).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "min date 2024-01-01 cannot be greater than max date 2023-01-01"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
	min: Option<NaiveDate>,
	max: Option<NaiveDate>,
}

impl DateRange {
	/// Builds a range, rejecting `min > max`.
	pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Result<Self> {
		if let (Some(lo), Some(hi)) = (min, max)
			&& lo > hi
		{
			return Err(InvalidOption::invalid_range(
				"min",
				format!(
					"min date {} cannot be greater than max date {}",
					lo.format(DATE_FORMAT),
					hi.format(DATE_FORMAT)
				),
			));
		}
		Ok(Self { min, max })
	}

	/// Parses both bounds, each failing separately on a bad format.
	pub fn parse(min: Option<&str>, max: Option<&str>) -> Result<Self> {
		let min = min.map(|raw| parse_date("min", raw)).transpose()?;
		let max = max.map(|raw| parse_date("max", raw)).transpose()?;
		Self::new(min, max)
	}

	pub fn min(&self) -> Option<NaiveDate> {
		self.min
	}

	pub fn max(&self) -> Option<NaiveDate> {
		self.max
	}

	/// Returns `true` if `date` lies within the range.
	pub fn contains(&self, date: NaiveDate) -> bool {
		self.min.is_none_or(|min| date >= min) && self.max.is_none_or(|max| date <= max)
	}
}

/// Normalizes a message option: blank becomes `None`, lists are joined with `", "`.
///
/// ```
/// use reinhardt_pages_components::normalize_messages;
/// use serde_json::json;
///
/// assert_eq!(normalize_messages("error", &json!(["a", "b"])).unwrap().as_deref(), Some("a, b"));
/// assert_eq!(normalize_messages("error", &json!([])).unwrap(), None);
/// assert_eq!(normalize_messages("error", &json!("")).unwrap(), None);
/// ```
pub fn normalize_messages(key: &str, value: &Value) -> Result<Option<String>> {
	let joined = match value {
		Value::Null => return Ok(None),
		Value::String(s) => s.trim().to_string(),
		Value::Array(items) => {
			let mut parts = Vec::with_capacity(items.len());
			for item in items {
				match item {
					Value::String(s) if !s.trim().is_empty() => parts.push(s.trim().to_string()),
					Value::String(_) | Value::Null => {}
					Value::Number(n) => parts.push(n.to_string()),
					_ => {
						return Err(InvalidOption::wrong_type(key, "a string or a list of strings"));
					}
				}
			}
			parts.join(", ")
		}
		_ => return Err(InvalidOption::wrong_type(key, "a string or a list of strings")),
	};
	Ok(Some(joined).filter(|s| !s.is_empty()))
}

/// A form field value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValue {
	#[default]
	None,
	Single(String),
	Multiple(Vec<String>),
}

impl FieldValue {
	pub(crate) fn from_json(key: &str, value: &Value) -> Result<Self> {
		match value {
			Value::Null => Ok(Self::None),
			Value::Array(items) => items
				.iter()
				.map(|item| scalar(key, item))
				.collect::<Result<Vec<_>>>()
				.map(Self::Multiple),
			other => scalar(key, other).map(Self::Single),
		}
	}

	/// The single value, or the first of several.
	pub fn as_single(&self) -> Option<&str> {
		match self {
			Self::None => None,
			Self::Single(v) => Some(v),
			Self::Multiple(vs) => vs.first().map(String::as_str),
		}
	}

	/// All values.
	pub fn values(&self) -> Vec<&str> {
		match self {
			Self::None => Vec::new(),
			Self::Single(v) => vec![v.as_str()],
			Self::Multiple(vs) => vs.iter().map(String::as_str).collect(),
		}
	}

	/// Returns `true` if `candidate` is one of the values.
	pub fn contains(&self, candidate: &str) -> bool {
		match self {
			Self::None => false,
			Self::Single(v) => v == candidate,
			Self::Multiple(vs) => vs.iter().any(|v| v == candidate),
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Self::None)
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		Self::Single(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		Self::Single(value)
	}
}

impl From<Vec<String>> for FieldValue {
	fn from(values: Vec<String>) -> Self {
		Self::Multiple(values)
	}
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::None, Into::into)
	}
}

fn scalar(key: &str, value: &Value) -> Result<String> {
	match value {
		Value::String(s) => Ok(s.clone()),
		Value::Number(n) => Ok(n.to_string()),
		Value::Bool(b) => Ok(b.to_string()),
		_ => Err(InvalidOption::wrong_type(key, "a string, number or list of them")),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(Some("2024-01-01"), Some("2023-01-01"), "min date 2024-01-01 cannot be greater than max date 2023-01-01")]
	#[case(Some("01/01/2024"), Some("2023-01-01"), "invalid min date format")]
	#[case(Some("2024-01-01"), Some("tomorrow"), "invalid max date format")]
	#[case(Some("2024-02-30"), None, "invalid min date format")]
	fn test_date_range_errors(
		#[case] min: Option<&str>,
		#[case] max: Option<&str>,
		#[case] message: &str,
	) {
		let err = DateRange::parse(min, max).unwrap_err();
		assert_eq!(err.to_string(), message);
	}

	#[rstest]
	fn test_date_range_bad_min_reported_before_order() {
		// Both bounds are checked for format before they are compared
		let err = DateRange::parse(Some("nope"), Some("also nope")).unwrap_err();
		assert_eq!(err.key(), "min");
	}

	#[rstest]
	#[case(None, None)]
	#[case(Some("2024-01-01"), None)]
	#[case(None, Some("2024-01-01"))]
	#[case(Some("2024-01-01"), Some("2024-01-01"))]
	fn test_date_range_accepts(#[case] min: Option<&str>, #[case] max: Option<&str>) {
		assert!(DateRange::parse(min, max).is_ok());
	}

	#[rstest]
	fn test_date_range_contains() {
		let range = DateRange::parse(Some("2024-01-01"), Some("2024-01-31")).unwrap();
		let date = |s: &str| NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap();

		assert!(range.contains(date("2024-01-15")));
		assert!(range.contains(date("2024-01-31")));
		assert!(!range.contains(date("2024-02-01")));
	}

	#[rstest]
	#[case(json!(["a", "b"]), Some("a, b"))]
	#[case(json!(["a", "", "  ", "b"]), Some("a, b"))]
	#[case(json!("  is required "), Some("is required"))]
	#[case(json!([]), None)]
	#[case(json!(""), None)]
	#[case(json!(null), None)]
	fn test_normalize_messages(#[case] value: Value, #[case] expected: Option<&str>) {
		assert_eq!(
			normalize_messages("error", &value).unwrap().as_deref(),
			expected
		);
	}

	#[rstest]
	fn test_normalize_messages_rejects_objects() {
		assert!(normalize_messages("error", &json!({"a": 1})).is_err());
	}

	#[rstest]
	fn test_bounds_clamp() {
		let bounds = Bounds::new(5, 3600);
		assert_eq!(bounds.clamp("interval", 1), 5);
		assert_eq!(bounds.clamp("interval", 30), 30);
		assert_eq!(bounds.clamp("interval", 99_999), 3600);
		assert!(bounds.contains(5));
		assert!(!bounds.contains(4));
	}

	#[rstest]
	fn test_field_value_from_json() {
		assert_eq!(
			FieldValue::from_json("value", &json!(["a", 2])).unwrap(),
			FieldValue::Multiple(vec!["a".into(), "2".into()])
		);
		assert_eq!(
			FieldValue::from_json("value", &json!(7)).unwrap(),
			FieldValue::Single("7".into())
		);
		assert!(FieldValue::from_json("value", &json!({"a": 1})).is_err());
	}

	#[rstest]
	fn test_field_value_accessors() {
		let value = FieldValue::Multiple(vec!["a".into(), "b".into()]);
		assert!(value.contains("b"));
		assert_eq!(value.as_single(), Some("a"));
		assert_eq!(value.values(), vec!["a", "b"]);
		assert!(FieldValue::None.values().is_empty());
	}
}
