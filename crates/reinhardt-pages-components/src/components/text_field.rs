//! Single-line text input.

use crate::component::{Component, FromOptions, InputType, RenderContext, merge_defaults};
use crate::error::Result;
use crate::field::FieldBase;
use crate::options::{ComponentOptions, ComponentSpec, OptionEnum, RawOptions};
use crate::settings::UiSettings;
use reinhardt_html::{Attributes, Facet, Page};

/// A labelled `<input>` with hint/error text and an optional clear button.
///
/// # Examples
///
/// ```
/// use reinhardt_pages_components::{FromOptions, TextField};
/// use serde_json::json;
///
/// let field = TextField::from_json(json!({
///     "name": "user[email]",
///     "type": "email",
///     "error": ["is required"],
/// }))
/// .unwrap();
///
/// let html = reinhardt_pages_components::Component::render(&field);
/// assert!(html.as_str().contains(r#"aria-describedby="user_email_error""#));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
	options: ComponentOptions,
	input_type: InputType,
	clearable: bool,
}

impl TextField {
	pub fn new(options: ComponentOptions) -> Self {
		Self {
			options,
			input_type: InputType::Text,
			clearable: false,
		}
	}

	pub fn input_type(mut self, input_type: InputType) -> Self {
		self.input_type = input_type;
		self
	}

	pub fn clearable(mut self, clearable: bool) -> Self {
		self.clearable = clearable;
		self
	}

	pub fn options(&self) -> &ComponentOptions {
		&self.options
	}

	/// The clear button is only offered on editable fields.
	pub fn shows_clear_button(&self) -> bool {
		self.clearable && !self.options.is_locked()
	}
}

impl FromOptions for TextField {
	const SPEC: ComponentSpec = ComponentSpec::field("text_field", "components.text_field");

	fn from_raw(raw: &mut RawOptions, settings: &UiSettings) -> Result<Self> {
		let options = ComponentOptions::normalize(raw, &Self::SPEC, settings)?;
		Ok(Self::new(options)
			.input_type(raw.choice()?.unwrap_or(InputType::Text))
			.clearable(raw.flag("clearable")?))
	}
}

impl Component for TextField {
	fn name(&self) -> &'static str {
		Self::SPEC.name
	}

	fn i18n_scope(&self) -> &'static str {
		Self::SPEC.i18n_scope
	}

	fn to_page(&self, ctx: &RenderContext<'_>) -> Page {
		let field = FieldBase::new(&self.options);

		let mut attrs =
			field.input_attributes_with(Attributes::new().with("type", self.input_type.as_str()));
		if self.input_type == InputType::Password {
			attrs.remove("value");
		}
		if let Some(placeholder) = &self.options.placeholder {
			attrs.insert("placeholder", placeholder.as_str());
		}
		merge_defaults(
			&mut attrs,
			"data",
			Attributes::new()
				.with("controller", "text-field")
				.with("text-field-target", "input"),
		);

		let input = Page::element("input")
			.classes(&field.input_classes("form-control", Some("form-control")))
			.attrs(attrs);

		let control = if self.shows_clear_button() {
			let label = self.t(ctx, "clear", "Clear", &[]);
			Page::element("div")
				.add_class(Facet::Base, "input-group")
				.child(input)
				.child(
					Page::element("button")
						.add_class(Facet::Base, "btn btn-outline-secondary")
						.attr("type", "button")
						.attr("aria-label", label)
						.attr("data-action", "text-field#clear")
						.child("\u{00d7}"),
				)
				.into()
		} else {
			Page::from(input)
		};

		field
			.wrap("text-field")
			.child(field.label())
			.child(control)
			.child(field.hint_or_error())
			.into()
	}
}
