//! Nested HTML attribute maps.
//!
//! Components accept passthrough attributes as a nested map such as
//! `{data: {controller: "x"}, aria: {label: "Close"}}`. Before rendering,
//! the map is flattened into hyphen-joined names (`data-controller`) and
//! every leaf value is escaped during serialization.
//!
//! Boolean values follow HTML boolean-attribute rules: `true` renders the
//! bare attribute name (`required`), `false` and `Null` omit the attribute
//! entirely. `attr="false"` is never produced.

use crate::escape::{SafeHtml, escape};
use std::collections::BTreeMap;

/// Top-level keys that are never emitted by the flattener.
///
/// `class` is owned by the class composer and is rendered separately.
pub const RESERVED_KEYS: &[&str] = &["class"];

/// A single attribute value before flattening.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
	/// A text value, escaped on serialization.
	Text(String),
	/// A boolean: `true` renders the bare name, `false` omits the attribute.
	Bool(bool),
	/// Whitespace-separated tokens (`aria-describedby`, `rel`, ...).
	List(Vec<String>),
	/// A nested map, flattened by joining keys with `-`.
	Map(Attributes),
	/// No value; the attribute is omitted.
	Null,
}

impl AttributeValue {
	/// Returns `true` if this value would not produce any output.
	pub fn is_absent(&self) -> bool {
		match self {
			Self::Bool(value) => !value,
			Self::Null => true,
			Self::List(tokens) => tokens.iter().all(|t| t.trim().is_empty()),
			Self::Map(map) => map.is_empty(),
			Self::Text(_) => false,
		}
	}

	/// Returns the text form of a scalar value.
	pub fn as_text(&self) -> Option<String> {
		match self {
			Self::Text(text) => Some(text.clone()),
			Self::List(tokens) => Some(join_tokens(tokens)),
			_ => None,
		}
	}
}

fn join_tokens(tokens: &[String]) -> String {
	tokens
		.iter()
		.flat_map(|t| t.split_whitespace())
		.collect::<Vec<_>>()
		.join(" ")
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&String> for AttributeValue {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<Attributes> for AttributeValue {
	fn from(value: Attributes) -> Self {
		Self::Map(value)
	}
}

impl From<Vec<String>> for AttributeValue {
	fn from(value: Vec<String>) -> Self {
		Self::List(value)
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for AttributeValue {
				fn from(value: $ty) -> Self {
					Self::Text(value.to_string())
				}
			}
		)*
	};
}

impl_from_number!(i32, i64, u32, u64, usize);

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl From<&serde_json::Value> for AttributeValue {
	fn from(value: &serde_json::Value) -> Self {
		use serde_json::Value;

		match value {
			Value::Null => Self::Null,
			Value::Bool(b) => Self::Bool(*b),
			Value::Number(n) => Self::Text(n.to_string()),
			Value::String(s) => Self::Text(s.clone()),
			Value::Array(items) => Self::List(
				items
					.iter()
					.filter_map(|item| match item {
						Value::String(s) => Some(s.clone()),
						Value::Number(n) => Some(n.to_string()),
						Value::Bool(b) => Some(b.to_string()),
						_ => None,
					})
					.collect(),
			),
			Value::Object(map) => Self::Map(Attributes::from(map)),
		}
	}
}

/// An insertion-ordered attribute map.
///
/// Inserting an existing key replaces its value in place, so the first
/// insertion decides the rendering position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
	entries: Vec<(String, AttributeValue)>,
}

impl Attributes {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html::Attributes;
	///
	/// let attrs = Attributes::new().with("id", "main").with("hidden", true);
	/// assert_eq!(attrs.len(), 2);
	/// ```
	pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Inserts or replaces a value.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
		let key = key.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some((_, existing)) => *existing = value,
			None => self.entries.push((key, value)),
		}
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&AttributeValue> {
		self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	/// Removes and returns the value stored under `key`.
	pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
		let index = self.entries.iter().position(|(k, _)| k == key)?;
		Some(self.entries.remove(index).1)
	}

	/// Returns `true` if `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Number of top-level entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if there are no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over the top-level entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Merges `other` into `self`.
	///
	/// Nested maps are merged recursively; for any other value the entry
	/// from `other` wins.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html::{AttributeValue, Attributes};
	///
	/// let mut attrs = Attributes::new()
	///     .with("data", Attributes::new().with("controller", "text-field"));
	/// attrs.deep_merge(Attributes::new().with("data", Attributes::new().with("action", "go")));
	///
	/// let flat = attrs.flatten();
	/// assert_eq!(flat.value("data-controller"), Some("text-field"));
	/// assert_eq!(flat.value("data-action"), Some("go"));
	/// ```
	pub fn deep_merge(&mut self, other: Attributes) {
		for (key, value) in other.entries {
			if let AttributeValue::Map(incoming) = value {
				if let Some(AttributeValue::Map(existing)) = self.get_mut(&key) {
					existing.deep_merge(incoming);
				} else {
					self.insert(key, AttributeValue::Map(incoming));
				}
			} else {
				self.insert(key, value);
			}
		}
	}

	/// Consuming variant of [`Attributes::deep_merge`].
	pub fn merged(mut self, other: Attributes) -> Self {
		self.deep_merge(other);
		self
	}

	/// Returns a mutable reference to the value stored under `key`.
	pub fn get_mut(&mut self, key: &str) -> Option<&mut AttributeValue> {
		self.entries
			.iter_mut()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v)
	}

	/// Returns the reserved `class` value as a token string, if any.
	pub fn class(&self) -> Option<String> {
		self.get("class").and_then(AttributeValue::as_text)
	}

	/// Flattens the map; see [`flatten`].
	pub fn flatten(&self) -> FlatAttributes {
		flatten(self)
	}
}

impl From<&serde_json::Map<String, serde_json::Value>> for Attributes {
	fn from(map: &serde_json::Map<String, serde_json::Value>) -> Self {
		let mut attrs = Attributes::new();
		for (key, value) in map {
			attrs.insert(key.clone(), AttributeValue::from(value));
		}
		attrs
	}
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for Attributes {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Attributes::new();
		for (key, value) in iter {
			attrs.insert(key, value);
		}
		attrs
	}
}

/// A flattened attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatValue {
	/// Boolean attribute rendered as a bare name.
	Present,
	/// Raw (unescaped) value; escaped when serialized.
	Value(String),
}

/// Attributes after flattening: flat names, scalar values, nothing reserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatAttributes {
	entries: Vec<(String, FlatValue)>,
}

impl FlatAttributes {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	fn insert(&mut self, key: String, value: FlatValue) {
		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some((_, existing)) => *existing = value,
			None => self.entries.push((key, value)),
		}
	}

	/// Returns the flattened value for `key`.
	pub fn get(&self, key: &str) -> Option<&FlatValue> {
		self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	/// Returns the raw value for `key` if it carries one.
	pub fn value(&self, key: &str) -> Option<&str> {
		match self.get(key)? {
			FlatValue::Value(v) => Some(v),
			FlatValue::Present => None,
		}
	}

	/// Returns `true` if `key` will be rendered.
	pub fn contains(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Iterates over entries in rendering order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &FlatValue)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if nothing will be rendered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Structured form for renderers that build markup themselves.
	///
	/// Values are escaped. Boolean attributes map to an empty string, which is
	/// the HTML-equivalent of the bare attribute name.
	pub fn to_map(&self) -> BTreeMap<String, String> {
		self.entries
			.iter()
			.map(|(k, v)| {
				let value = match v {
					FlatValue::Present => String::new(),
					FlatValue::Value(v) => escape(v).into_owned(),
				};
				(k.clone(), value)
			})
			.collect()
	}

	/// Serializes to an attribute string; see [`serialize`].
	pub fn serialize(&self) -> SafeHtml {
		serialize(self)
	}
}

/// Returns `true` if `name` can be emitted as an attribute name.
///
/// Attribute names are never escaped, so anything that could terminate the
/// name or the tag is rejected instead.
pub fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace()
				|| c.is_control()
				|| matches!(c, '"' | '\'' | '<' | '>' | '/' | '=' | '`')
		})
}

/// Flattens a nested attribute map.
///
/// - top-level keys in [`RESERVED_KEYS`] are skipped,
/// - nested maps are joined with `-` at any depth,
/// - `true` becomes [`FlatValue::Present`], `false`/`Null` are dropped,
/// - lists are joined with single spaces,
/// - names rejected by [`is_valid_attribute_name`] are dropped with a warning.
///
/// # Examples
///
/// ```
/// use reinhardt_html::{Attributes, flatten};
///
/// let attrs = Attributes::new()
///     .with("class", "ignored")
///     .with("data", Attributes::new().with("controller", "x"))
///     .with("disabled", false);
/// let flat = flatten(&attrs);
///
/// assert_eq!(flat.len(), 1);
/// assert_eq!(flat.value("data-controller"), Some("x"));
/// ```
pub fn flatten(attrs: &Attributes) -> FlatAttributes {
	let mut flat = FlatAttributes::new();
	for (key, value) in attrs.iter() {
		if RESERVED_KEYS.contains(&key) {
			continue;
		}
		flatten_into(key.to_string(), value, &mut flat);
	}
	flat
}

fn flatten_into(name: String, value: &AttributeValue, flat: &mut FlatAttributes) {
	if let AttributeValue::Map(children) = value {
		for (child, child_value) in children.iter() {
			flatten_into(format!("{}-{}", name, child), child_value, flat);
		}
		return;
	}
	if value.is_absent() {
		return;
	}
	if !is_valid_attribute_name(&name) {
		tracing::warn!(attribute = %name, "dropping attribute with an invalid name");
		return;
	}
	let flat_value = match value {
		AttributeValue::Bool(_) => FlatValue::Present,
		AttributeValue::Text(text) => FlatValue::Value(text.clone()),
		AttributeValue::List(tokens) => FlatValue::Value(join_tokens(tokens)),
		AttributeValue::Map(_) | AttributeValue::Null => return,
	};
	flat.insert(name, flat_value);
}

/// Serializes flattened attributes into `key="value"` pairs joined by a space.
///
/// Every value is escaped here; keys were validated during flattening.
/// Boolean attributes render as the bare name.
///
/// # Examples
///
/// ```
/// use reinhardt_html::{Attributes, serialize};
///
/// let attrs = Attributes::new()
///     .with("title", "\"quoted\" <b>")
///     .with("required", true);
///
/// assert_eq!(
///     serialize(&attrs.flatten()).as_str(),
///     r#"title="&quot;quoted&quot; &lt;b&gt;" required"#
/// );
/// ```
pub fn serialize(flat: &FlatAttributes) -> SafeHtml {
	let mut out = String::new();
	for (key, value) in flat.iter() {
		if !out.is_empty() {
			out.push(' ');
		}
		out.push_str(key);
		if let FlatValue::Value(v) = value {
			out.push_str("=\"");
			out.push_str(&escape(v));
			out.push('"');
		}
	}
	SafeHtml::from_rendered(out)
}
