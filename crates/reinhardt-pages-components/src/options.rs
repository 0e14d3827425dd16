//! Option normalization.
//!
//! Components are configured from a raw JSON object. [`RawOptions`] wraps
//! that object and hands out typed, validated values key by key; anything
//! outside a closed set, an unparseable date or an inconsistent range is an
//! [`InvalidOption`] before rendering starts.
//!
//! Enum-valued options accept strings with an optional leading `:` (so
//! `"large"`, `" Large "` and `":large"` are the same value) and reject
//! anything else with an error that lists every allowed value.

mod component_options;
mod values;

pub use component_options::{ComponentOptions, ComponentOptionsBuilder, ComponentSpec};
pub use values::{Bounds, DATE_FORMAT, DateRange, FieldValue, normalize_messages};

use crate::error::{InvalidOption, Result};
use chrono::NaiveDate;
use reinhardt_html::Attributes;
use serde_json::{Map, Value};

/// Reduces an enum option to its canonical spelling.
///
/// Trims whitespace, strips one leading `:` and lowercases ASCII letters.
///
/// ```
/// use reinhardt_pages_components::options::canonicalize;
///
/// assert_eq!(canonicalize(" :Large "), "large");
/// assert_eq!(canonicalize("x-large"), "x-large");
/// ```
pub fn canonicalize(raw: &str) -> String {
	let trimmed = raw.trim();
	trimmed
		.strip_prefix(':')
		.unwrap_or(trimmed)
		.to_ascii_lowercase()
}

/// A closed set of option values.
///
/// Implemented through `option_enum!`; `ALLOWED` lists the canonical
/// spellings in declaration order and is what error messages show.
pub trait OptionEnum: Sized + Copy + PartialEq + 'static {
	/// Default option key.
	const KEY: &'static str;
	/// Canonical spellings, in declaration order.
	const ALLOWED: &'static [&'static str];

	fn as_str(&self) -> &'static str;

	/// Looks up an already canonical value.
	fn from_canonical(value: &str) -> Option<Self>;

	/// Parses a raw value under [`OptionEnum::KEY`].
	fn parse(raw: &str) -> Result<Self> {
		Self::parse_option(Self::KEY, raw)
	}

	/// Parses a raw value for `key`.
	fn parse_option(key: &str, raw: &str) -> Result<Self> {
		Self::from_canonical(&canonicalize(raw))
			.ok_or_else(|| InvalidOption::unknown_value(key, raw.trim(), Self::ALLOWED))
	}

	/// Parses a raw value and checks it against a component-specific subset.
	fn parse_in(key: &str, raw: &str, allowed: &[Self]) -> Result<Self> {
		let subset: Vec<&str> = allowed.iter().map(Self::as_str).collect();
		match Self::parse_option(key, raw) {
			Ok(value) if allowed.contains(&value) => Ok(value),
			_ => Err(InvalidOption::unknown_value(key, raw.trim(), &subset)),
		}
	}
}

/// Declares a closed option enum with its canonical spellings.
///
/// Generates the enum plus [`OptionEnum`], `Display`, `FromStr` and serde
/// impls that go through the same canonicalization.
macro_rules! option_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident : $key:literal {
			$(
				$(#[$vmeta:meta])*
				$variant:ident => $value:literal
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		$vis enum $name {
			$(
				$(#[$vmeta])*
				$variant,
			)+
		}

		impl $crate::options::OptionEnum for $name {
			const KEY: &'static str = $key;
			const ALLOWED: &'static [&'static str] = &[$($value),+];

			fn as_str(&self) -> &'static str {
				match self {
					$(Self::$variant => $value,)+
				}
			}

			fn from_canonical(value: &str) -> Option<Self> {
				match value {
					$($value => Some(Self::$variant),)+
					_ => None,
				}
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str($crate::options::OptionEnum::as_str(self))
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = $crate::error::InvalidOption;

			fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
				<Self as $crate::options::OptionEnum>::parse(s)
			}
		}

		impl ::serde::Serialize for $name {
			fn serialize<S: ::serde::Serializer>(
				&self,
				serializer: S,
			) -> ::std::result::Result<S::Ok, S::Error> {
				serializer.serialize_str($crate::options::OptionEnum::as_str(self))
			}
		}

		impl<'de> ::serde::Deserialize<'de> for $name {
			fn deserialize<D: ::serde::Deserializer<'de>>(
				deserializer: D,
			) -> ::std::result::Result<Self, D::Error> {
				let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
				<Self as $crate::options::OptionEnum>::parse(&raw)
					.map_err(<D::Error as ::serde::de::Error>::custom)
			}
		}
	};
}

pub(crate) use option_enum;

/// A component's raw configuration, consumed key by key.
///
/// Every accessor removes the key it reads. `null` is treated as absent.
/// Keys a component never asks for are ignored.
///
/// ```
/// use reinhardt_pages_components::options::RawOptions;
/// use reinhardt_pages_components::Size;
/// use serde_json::json;
///
/// let mut raw =
///     RawOptions::new("text_field", json!({"size": ":large", "required": true})).unwrap();
///
/// assert_eq!(raw.choice::<Size>().unwrap(), Some(Size::Large));
/// assert!(raw.flag("required").unwrap());
/// assert!(!raw.flag("disabled").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct RawOptions {
	component: &'static str,
	map: Map<String, Value>,
}

impl RawOptions {
	/// Wraps a JSON object. Anything but an object (or `null`) is rejected.
	pub fn new(component: &'static str, value: Value) -> Result<Self> {
		match value {
			Value::Object(map) => Ok(Self { component, map }),
			Value::Null => Ok(Self::from_map(component, Map::new())),
			_ => Err(InvalidOption::wrong_type(component, "an object")),
		}
	}

	pub fn from_map(component: &'static str, map: Map<String, Value>) -> Self {
		Self { component, map }
	}

	/// The component these options configure.
	pub fn component(&self) -> &'static str {
		self.component
	}

	pub fn contains(&self, key: &str) -> bool {
		self.map.get(key).is_some_and(|v| !v.is_null())
	}

	/// Removes a key without interpreting it.
	///
	/// Used to force options off for components that cannot honor them.
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.map.remove(key).filter(|v| !v.is_null())
	}

	/// Reads a string. Numbers are accepted and converted.
	pub fn string(&mut self, key: &str) -> Result<Option<String>> {
		match self.remove(key) {
			None => Ok(None),
			Some(Value::String(s)) => Ok(Some(s)),
			Some(Value::Number(n)) => Ok(Some(n.to_string())),
			Some(_) => Err(InvalidOption::wrong_type(key, "a string")),
		}
	}

	/// Reads a string, treating blank strings as absent.
	pub fn text(&mut self, key: &str) -> Result<Option<String>> {
		Ok(self.string(key)?.filter(|s| !s.trim().is_empty()))
	}

	/// Reads a boolean. `"true"` and `"false"` strings are accepted.
	pub fn bool(&mut self, key: &str) -> Result<Option<bool>> {
		match self.remove(key) {
			None => Ok(None),
			Some(Value::Bool(b)) => Ok(Some(b)),
			Some(Value::String(s)) => match canonicalize(&s).as_str() {
				"true" => Ok(Some(true)),
				"false" => Ok(Some(false)),
				_ => Err(InvalidOption::wrong_type(key, "a boolean")),
			},
			Some(_) => Err(InvalidOption::wrong_type(key, "a boolean")),
		}
	}

	/// Reads a boolean flag that defaults to `false`.
	pub fn flag(&mut self, key: &str) -> Result<bool> {
		Ok(self.bool(key)?.unwrap_or(false))
	}

	/// Reads an integer. Numeric strings are accepted.
	pub fn integer(&mut self, key: &str) -> Result<Option<i64>> {
		match self.remove(key) {
			None => Ok(None),
			Some(Value::Number(n)) => n
				.as_i64()
				.map(Some)
				.ok_or_else(|| InvalidOption::wrong_type(key, "an integer")),
			Some(Value::String(s)) => s
				.trim()
				.parse::<i64>()
				.map(Some)
				.map_err(|_| {
					InvalidOption::invalid_format(key, &s, format!("invalid {} format", key))
				}),
			Some(_) => Err(InvalidOption::wrong_type(key, "an integer")),
		}
	}

	/// Reads an integer and clamps it into `bounds`.
	pub fn clamped(&mut self, key: &str, bounds: Bounds) -> Result<Option<i64>> {
		Ok(self.integer(key)?.map(|value| bounds.clamp(key, value)))
	}

	/// Reads an enum option under its default key.
	pub fn choice<E: OptionEnum>(&mut self) -> Result<Option<E>> {
		self.choice_for(E::KEY)
	}

	/// Reads an enum option under `key`.
	pub fn choice_for<E: OptionEnum>(&mut self, key: &str) -> Result<Option<E>> {
		self.enum_string(key)?
			.map(|raw| E::parse_option(key, &raw))
			.transpose()
	}

	/// Reads an enum option that must be one of `allowed`.
	pub fn choice_in<E: OptionEnum>(&mut self, allowed: &[E]) -> Result<Option<E>> {
		self.enum_string(E::KEY)?
			.map(|raw| E::parse_in(E::KEY, &raw, allowed))
			.transpose()
	}

	fn enum_string(&mut self, key: &str) -> Result<Option<String>> {
		match self.remove(key) {
			None => Ok(None),
			Some(Value::String(s)) => Ok(Some(s)),
			Some(_) => Err(InvalidOption::wrong_type(key, "a string")),
		}
	}

	/// Reads a `%Y-%m-%d` date.
	pub fn date(&mut self, key: &str) -> Result<Option<NaiveDate>> {
		self.string(key)?
			.map(|raw| values::parse_date(key, &raw))
			.transpose()
	}

	/// Reads a message option (`error`, `hint`) as a single string.
	pub fn messages(&mut self, key: &str) -> Result<Option<String>> {
		match self.remove(key) {
			None => Ok(None),
			Some(value) => normalize_messages(key, &value),
		}
	}

	/// Reads a field value.
	pub fn value(&mut self, key: &str) -> Result<FieldValue> {
		match self.remove(key) {
			None => Ok(FieldValue::None),
			Some(value) => FieldValue::from_json(key, &value),
		}
	}

	/// Reads a nested attribute map. Absent maps are empty.
	pub fn attributes(&mut self, key: &str) -> Result<Attributes> {
		match self.remove(key) {
			None => Ok(Attributes::new()),
			Some(Value::Object(map)) => Ok(Attributes::from(&map)),
			Some(_) => Err(InvalidOption::wrong_type(key, "an object")),
		}
	}

	/// Reads an array. Absent arrays are empty.
	pub fn list(&mut self, key: &str) -> Result<Vec<Value>> {
		match self.remove(key) {
			None => Ok(Vec::new()),
			Some(Value::Array(items)) => Ok(items),
			Some(_) => Err(InvalidOption::wrong_type(key, "an array")),
		}
	}
}
