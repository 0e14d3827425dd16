//! Choices for radio groups, checkbox groups and selects.

use crate::error::{InvalidOption, Result};
use serde_json::Value;

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
	pub value: String,
	pub label: String,
	pub disabled: bool,
}

impl Choice {
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
			disabled: false,
		}
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Parses one choice.
	///
	/// Accepted shapes: `"pro"`, `["pro", "Pro plan"]` and
	/// `{"value": "pro", "label": "Pro plan", "disabled": false}`.
	pub fn from_json(key: &str, value: &Value) -> Result<Self> {
		match value {
			Value::String(_) | Value::Number(_) => {
				let text = scalar(key, value)?;
				Ok(Self::new(text.clone(), text))
			}
			Value::Array(pair) if pair.len() == 2 => {
				Ok(Self::new(scalar(key, &pair[0])?, scalar(key, &pair[1])?))
			}
			Value::Object(map) => {
				let value = map
					.get("value")
					.ok_or_else(|| InvalidOption::missing(&format!("{}.value", key)))
					.and_then(|v| scalar(key, v))?;
				let label = match map.get("label") {
					Some(label) => scalar(key, label)?,
					None => value.clone(),
				};
				let disabled = matches!(map.get("disabled"), Some(Value::Bool(true)));
				Ok(Self::new(value, label).disabled(disabled))
			}
			_ => Err(InvalidOption::wrong_type(
				key,
				"a list of values, [value, label] pairs or objects",
			)),
		}
	}

	/// Parses a list of choices.
	pub fn list(key: &str, values: &[Value]) -> Result<Vec<Self>> {
		values.iter().map(|v| Self::from_json(key, v)).collect()
	}
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for Choice {
	fn from((value, label): (V, L)) -> Self {
		Self::new(value, label)
	}
}

fn scalar(key: &str, value: &Value) -> Result<String> {
	match value {
		Value::String(s) => Ok(s.clone()),
		Value::Number(n) => Ok(n.to_string()),
		_ => Err(InvalidOption::wrong_type(
			key,
			"a list of values, [value, label] pairs or objects",
		)),
	}
}
