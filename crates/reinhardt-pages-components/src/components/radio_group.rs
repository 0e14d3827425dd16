//! Group of radio buttons sharing one name.

use super::Choice;
use crate::component::{Component, FromOptions, Layout, RenderContext};
use crate::error::Result;
use crate::field::FieldBase;
use crate::options::{ComponentOptions, ComponentSpec, RawOptions};
use crate::settings::UiSettings;
use reinhardt_html::{Attributes, Facet, Page, derive_id_with};

/// Radio buttons for a single choice among a few.
///
/// Each button's id is derived from the group id and the choice value, so
/// `plan` with value `pro-plan-$19` becomes `plan_pro-plan-_19`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioGroup {
	options: ComponentOptions,
	choices: Vec<Choice>,
	layout: Layout,
}

impl RadioGroup {
	pub fn new(
		options: ComponentOptions,
		choices: impl IntoIterator<Item = impl Into<Choice>>,
	) -> Self {
		Self {
			options,
			choices: choices.into_iter().map(Into::into).collect(),
			layout: Layout::Vertical,
		}
	}

	pub fn layout(mut self, layout: Layout) -> Self {
		self.layout = layout;
		self
	}

	pub fn choices(&self) -> &[Choice] {
		&self.choices
	}

	/// Id of the button for `value`.
	pub fn choice_id(&self, value: &str) -> String {
		derive_id_with(self.options.id(), value)
	}
}

pub(crate) fn item_class(layout: Layout) -> &'static str {
	match layout {
		Layout::Vertical => "form-check",
		Layout::Horizontal | Layout::Inline => "form-check form-check-inline",
	}
}

impl FromOptions for RadioGroup {
	const SPEC: ComponentSpec = ComponentSpec::field("radio_group", "components.radio_group")
		.sizes(&[])
		.without_placeholder();

	fn from_raw(raw: &mut RawOptions, settings: &UiSettings) -> Result<Self> {
		let options = ComponentOptions::normalize(raw, &Self::SPEC, settings)?;
		let choices = Choice::list("choices", &raw.list("choices")?)?;
		Ok(Self::new(options, choices).layout(raw.choice()?.unwrap_or(Layout::Vertical)))
	}
}

impl Component for RadioGroup {
	fn name(&self) -> &'static str {
		Self::SPEC.name
	}

	fn i18n_scope(&self) -> &'static str {
		Self::SPEC.i18n_scope
	}

	fn to_page(&self, _ctx: &RenderContext<'_>) -> Page {
		let field = FieldBase::new(&self.options);
		let options = &self.options;

		let mut leading = Attributes::new().with("role", "radiogroup");
		if options.label.is_some() {
			leading.insert("aria-labelledby", field.label_id());
		}
		if options.required {
			leading.insert("aria-required", "true");
		}

		let input_classes = field.input_classes("form-check-input", None);
		let items = self.choices.iter().map(|choice| {
			let id = self.choice_id(&choice.value);
			let input = Page::element("input")
				.classes(&input_classes)
				.attr("type", "radio")
				.attr("id", id.as_str())
				.attr("name", options.name.as_str())
				.attr("value", choice.value.as_str())
				.bool_attr("checked", options.value.contains(&choice.value))
				.bool_attr("required", options.required)
				.bool_attr("disabled", options.disabled || choice.disabled);
			Page::element("div")
				.add_class(Facet::Base, item_class(self.layout))
				.child(input)
				.child(
					Page::element("label")
						.add_class(Facet::Base, "form-check-label")
						.attr("for", id)
						.child(choice.label.clone()),
				)
		});

		field
			.wrap("radio-group")
			.add_class(Facet::Size, &format!("radio-group-{}", self.layout))
			.attrs(field.group_attributes(leading))
			.child(field.group_label())
			.children(items.collect::<Vec<_>>())
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

	fn render(value: serde_json::Value) -> String {
		let settings = UiSettings::default();
		RadioGroup::from_json_with(value, &settings)
			.unwrap()
			.render_with(&RenderContext::new(&NullTranslator, &settings))
			.into_string()
	}

	#[rstest]
	fn test_choice_ids_are_sanitized() {
		// Act
		let html = render(json!({
			"name": "plan",
			"value": "pro-plan-$19",
			"choices": [["basic", "Basic"], ["pro-plan-$19", "Pro"]],
		}));

		// Assert
		assert!(html.contains(
			r#"<input class="form-check-input" type="radio" id="plan_pro-plan-_19" name="plan" value="pro-plan-$19" checked />"#
		));
		assert!(html.contains(r#"<label class="form-check-label" for="plan_pro-plan-_19">Pro</label>"#));
		assert!(html.contains(r#"id="plan_basic""#));
	}

	#[rstest]
	fn test_group_wiring_with_error() {
		let html = render(json!({
			"name": "plan",
			"label": "Plan",
			"hint": "Pick one",
			"error": "is required",
			"choices": ["a", "b"],
		}));

		assert!(html.starts_with(
			r#"<div class="radio-group radio-group-vertical" data-field-state="error" role="radiogroup" aria-labelledby="plan_label" aria-invalid="true" aria-describedby="plan_error">"#
		));
		assert!(html.contains("is-invalid"));
		assert!(!html.contains("Pick one"));
	}

	#[rstest]
	#[case("inline", "form-check form-check-inline")]
	#[case("vertical", "\"form-check\"")]
	fn test_layout(#[case] layout: &str, #[case] expected: &str) {
		let html = render(json!({"name": "plan", "layout": layout, "choices": ["a"]}));
		assert!(html.contains(expected));
	}

	#[rstest]
	fn test_disabled_choice() {
		let html = render(json!({
			"name": "plan",
			"choices": [{"value": "legacy", "label": "Legacy", "disabled": true}],
		}));
		assert!(html.contains(r#"value="legacy" disabled"#));
	}

	#[rstest]
	fn test_rejects_unknown_layout() {
		let err = RadioGroup::from_json_with(
			json!({"name": "plan", "layout": "grid"}),
			&UiSettings::default(),
		)
		.unwrap_err();
		assert_eq!(err.key(), "layout");
	}
}
