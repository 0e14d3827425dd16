//! Drop-down select.

use super::Choice;
use super::checkbox_group::list_name;
use crate::component::{Component, FromOptions, RenderContext, merge_defaults};
use crate::error::Result;
use crate::field::FieldBase;
use crate::options::{ComponentOptions, ComponentSpec, RawOptions};
use crate::settings::UiSettings;
use reinhardt_html::{Attributes, Facet, Page};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
	options: ComponentOptions,
	choices: Vec<Choice>,
	prompt: Option<String>,
	multiple: bool,
	clearable: bool,
}

impl Select {
	pub fn new(
		options: ComponentOptions,
		choices: impl IntoIterator<Item = impl Into<Choice>>,
	) -> Self {
		Self {
			options,
			choices: choices.into_iter().map(Into::into).collect(),
			prompt: None,
			multiple: false,
			clearable: false,
		}
	}

	/// Adds a leading empty option with `prompt` as its label.
	pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
		self.prompt = Some(prompt.into());
		self
	}

	pub fn multiple(mut self, multiple: bool) -> Self {
		self.multiple = multiple;
		self
	}

	pub fn clearable(mut self, clearable: bool) -> Self {
		self.clearable = clearable;
		self
	}

	pub fn choices(&self) -> &[Choice] {
		&self.choices
	}

	pub fn shows_clear_button(&self) -> bool {
		self.clearable && !self.options.is_locked()
	}
}

impl FromOptions for Select {
	const SPEC: ComponentSpec =
		ComponentSpec::field("select", "components.select").without_placeholder();

	fn from_raw(raw: &mut RawOptions, settings: &UiSettings) -> Result<Self> {
		let options = ComponentOptions::normalize(raw, &Self::SPEC, settings)?;
		let choices = Choice::list("choices", &raw.list("choices")?)?;
		let mut select = Self::new(options, choices)
			.multiple(raw.flag("multiple")?)
			.clearable(raw.flag("clearable")?);
		select.prompt = raw.text("prompt")?;
		Ok(select)
	}
}

impl Component for Select {
	fn name(&self) -> &'static str {
		Self::SPEC.name
	}

	fn i18n_scope(&self) -> &'static str {
		Self::SPEC.i18n_scope
	}

	fn to_page(&self, ctx: &RenderContext<'_>) -> Page {
		let field = FieldBase::new(&self.options);
		let options = &self.options;

		let mut attrs = field.input_attributes();
		attrs.remove("value");
		attrs.remove("readonly");
		if self.multiple {
			attrs.insert("name", list_name(&options.name));
			attrs.insert("multiple", true);
		}
		if self.shows_clear_button() {
			merge_defaults(
				&mut attrs,
				"data",
				Attributes::new().with("controller", "select"),
			);
		}

		let prompt = self.prompt.as_ref().map(|prompt| {
			Page::element("option")
				.attr("value", "")
				.bool_attr("selected", options.value.is_none())
				.child(prompt.clone())
		});
		let choices: Vec<_> = self
			.choices
			.iter()
			.map(|choice| {
				Page::element("option")
					.attr("value", choice.value.as_str())
					.bool_attr("selected", options.value.contains(&choice.value))
					.bool_attr("disabled", choice.disabled)
					.child(choice.label.clone())
			})
			.collect();

		let select = Page::element("select")
			.classes(&field.input_classes("form-select", Some("form-select")))
			.attrs(attrs)
			.child(prompt)
			.children(choices);

		let clear = self.shows_clear_button().then(|| {
			Page::element("button")
				.add_class(Facet::Base, "btn btn-outline-secondary")
				.attr("type", "button")
				.attr("aria-label", self.t(ctx, "clear", "Clear selection", &[]))
				.attr("data-action", "select#clear")
				.child("\u{00d7}")
		});

		field
			.wrap("select-field")
			.child(field.label())
			.child(select)
			.child(clear)
			.child(field.hint_or_error())
			.into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::Size;
	use reinhardt_i18n::NullTranslator;
	use rstest::rstest;
	use serde_json::json;

	fn render(value: serde_json::Value) -> String {
		let settings = UiSettings::default();
		Select::from_json_with(value, &settings)
			.unwrap()
			.render_with(&RenderContext::new(&NullTranslator, &settings))
			.into_string()
	}

	#[rstest]
	fn test_single_select_with_prompt() {
		// Act
		let html = render(json!({
			"name": "country",
			"value": "jp",
			"prompt": "Choose...",
			"size": "small",
			"choices": [["fr", "France"], ["jp", "Japan"]],
		}));

		// Assert
		assert!(html.contains(
			r#"<select class="form-select form-select-sm" id="country" name="country">"#
		));
		assert!(html.contains(r#"<option value="">Choose...</option>"#));
		assert!(html.contains(r#"<option value="jp" selected>Japan</option>"#));
		assert!(html.contains(r#"<option value="fr">France</option>"#));
	}

	#[rstest]
	fn test_multiple_uses_list_name() {
		let html = render(json!({
			"name": "langs",
			"multiple": true,
			"value": ["rust", "go"],
			"choices": ["rust", "go", "zig"],
		}));

		assert!(html.contains(r#"name="langs[]" multiple"#));
		assert!(html.contains(r#"<option value="go" selected>go</option>"#));
		assert!(html.contains(r#"<option value="zig">zig</option>"#));
	}

	#[rstest]
	#[case(json!({"name": "c", "clearable": true}), true)]
	#[case(json!({"name": "c", "clearable": true, "disabled": true}), false)]
	#[case(json!({"name": "c", "clearable": true, "readonly": true}), false)]
	fn test_clearable_suppressed_when_locked(
		#[case] value: serde_json::Value,
		#[case] shown: bool,
	) {
		assert_eq!(render(value).contains("select#clear"), shown);
	}

	#[rstest]
	fn test_prompt_selected_without_value() {
		let html = render(json!({"name": "c", "prompt": "Pick", "choices": ["a"]}));
		assert!(html.contains(r#"<option value="" selected>Pick</option>"#));
	}

	#[rstest]
	fn test_xlarge_is_not_a_select_size() {
		let err =
			Select::from_json_with(json!({"name": "c", "size": "xlarge"}), &UiSettings::default())
				.unwrap_err();
		assert_eq!(err.key(), "size");
		assert!(Select::SPEC.allowed_sizes.contains(&Size::Large));
	}
}
