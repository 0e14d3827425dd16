//! Link entries for dropdowns and breadcrumbs.

use crate::error::{InvalidOption, Result};
use serde_json::Value;

const EXPECTED: &str = "a list of labels, [label, href] pairs or objects";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
	pub label: String,
	pub href: Option<String>,
	pub disabled: bool,
}

impl NavItem {
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: None,
			disabled: false,
		}
	}

	pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			href: Some(href.into()),
			..Self::new(label)
		}
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Parses `"Home"`, `["Home", "/"]` or `{"label": "Home", "href": "/"}`.
	pub fn from_json(key: &str, value: &Value) -> Result<Self> {
		match value {
			Value::String(label) => Ok(Self::new(label.clone())),
			Value::Array(pair) => match pair.as_slice() {
				[Value::String(label), Value::String(href)] => {
					Ok(Self::link(label.clone(), href.clone()))
				}
				_ => Err(InvalidOption::wrong_type(key, EXPECTED)),
			},
			Value::Object(map) => {
				let label = match map.get("label") {
					Some(Value::String(label)) => label.clone(),
					Some(_) => return Err(InvalidOption::wrong_type(key, EXPECTED)),
					None => return Err(InvalidOption::missing(&format!("{}.label", key))),
				};
				let href = match map.get("href") {
					Some(Value::String(href)) => Some(href.clone()),
					None | Some(Value::Null) => None,
					Some(_) => return Err(InvalidOption::wrong_type(key, EXPECTED)),
				};
				let disabled = matches!(map.get("disabled"), Some(Value::Bool(true)));
				Ok(Self {
					label,
					href,
					disabled,
				})
			}
			_ => Err(InvalidOption::wrong_type(key, EXPECTED)),
		}
	}

	pub fn list(key: &str, values: &[Value]) -> Result<Vec<Self>> {
		values.iter().map(|v| Self::from_json(key, v)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!("Home"), NavItem::new("Home"))]
	#[case(json!(["Home", "/"]), NavItem::link("Home", "/"))]
	#[case(json!({"label": "Docs", "href": "/docs"}), NavItem::link("Docs", "/docs"))]
	#[case(json!({"label": "Soon", "disabled": true}), NavItem::new("Soon").disabled(true))]
	fn test_nav_item_shapes(#[case] input: Value, #[case] expected: NavItem) {
		assert_eq!(NavItem::from_json("items", &input).unwrap(), expected);
	}

	#[rstest]
	#[case(json!(1))]
	#[case(json!(["Home"]))]
	#[case(json!({"href": "/"}))]
	fn test_nav_item_rejects(#[case] input: Value) {
		assert!(NavItem::from_json("items", &input).is_err());
	}
}
