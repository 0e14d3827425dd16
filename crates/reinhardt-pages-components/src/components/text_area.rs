//! Multi-line text input.

use crate::component::{Component, FromOptions, RenderContext};
use crate::error::Result;
use crate::field::FieldBase;
use crate::options::{Bounds, ComponentOptions, ComponentSpec, RawOptions};
use crate::settings::UiSettings;
use reinhardt_html::Page;

/// Rows are clamped into this range instead of rejected.
pub const ROW_BOUNDS: Bounds = Bounds::new(1, 50);

const DEFAULT_ROWS: i64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct TextArea {
	options: ComponentOptions,
	rows: i64,
}

impl TextArea {
	pub fn new(options: ComponentOptions) -> Self {
		Self {
			options,
			rows: DEFAULT_ROWS,
		}
	}

	/// Sets the visible rows, clamped into [`ROW_BOUNDS`].
	pub fn rows(mut self, rows: i64) -> Self {
		self.rows = ROW_BOUNDS.clamp("rows", rows);
		self
	}

	pub fn row_count(&self) -> i64 {
		self.rows
	}
}

impl FromOptions for TextArea {
	const SPEC: ComponentSpec = ComponentSpec::field("text_area", "components.text_area");

	fn from_raw(raw: &mut RawOptions, settings: &UiSettings) -> Result<Self> {
		let options = ComponentOptions::normalize(raw, &Self::SPEC, settings)?;
		let rows = raw.clamped("rows", ROW_BOUNDS)?.unwrap_or(DEFAULT_ROWS);
		Ok(Self::new(options).rows(rows))
	}
}

impl Component for TextArea {
	fn name(&self) -> &'static str {
		Self::SPEC.name
	}

	fn i18n_scope(&self) -> &'static str {
		Self::SPEC.i18n_scope
	}

	fn to_page(&self, _ctx: &RenderContext<'_>) -> Page {
		let field = FieldBase::new(&self.options);

		let mut attrs = field.input_attributes();
		// The value is the element's content, not an attribute
		let content = attrs
			.remove("value")
			.and_then(|v| v.as_text())
			.unwrap_or_default();
		attrs.insert("rows", self.rows);
		if let Some(placeholder) = &self.options.placeholder {
			attrs.insert("placeholder", placeholder.as_str());
		}

		let textarea = Page::element("textarea")
			.classes(&field.input_classes("form-control", Some("form-control")))
			.attrs(attrs)
			.child(content);

		field
			.wrap("text-area")
			.child(field.label())
			.child(textarea)
			.child(field.hint_or_error())
			.into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_i18n::NullTranslator;
	use rstest::rstest;
	use serde_json::json;

	fn build(value: serde_json::Value) -> TextArea {
		TextArea::from_json_with(value, &UiSettings::default()).unwrap()
	}

	#[rstest]
	#[case(json!({"name": "bio"}), 3)]
	#[case(json!({"name": "bio", "rows": 10}), 10)]
	#[case(json!({"name": "bio", "rows": 0}), 1)]
	#[case(json!({"name": "bio", "rows": "500"}), 50)]
	fn test_rows_are_clamped(#[case] value: serde_json::Value, #[case] expected: i64) {
		assert_eq!(build(value).row_count(), expected);
	}

	#[rstest]
	fn test_value_is_escaped_content() {
		let area = build(json!({"name": "bio", "value": "</textarea><script>x</script>"}));

		let html = area
			.render_with(&RenderContext::new(&NullTranslator, &UiSettings::default()))
			.into_string();

		assert!(html.contains("&lt;/textarea&gt;&lt;script&gt;x&lt;/script&gt;</textarea>"));
		assert!(!html.contains("value="));
		assert!(html.contains(r#"rows="3""#));
	}

	#[rstest]
	fn test_passthrough_placeholder_survives() {
		let area = build(json!({"name": "bio", "html_attributes": {"placeholder": "About you"}}));

		let html = area
			.render_with(&RenderContext::new(&NullTranslator, &UiSettings::default()))
			.into_string();

		assert!(html.contains(r#"placeholder="About you""#));
	}
}
