//! Single checkbox with an unchecked companion value.

use crate::component::{Component, FromOptions, RenderContext};
use crate::error::Result;
use crate::field::FieldBase;
use crate::options::{ComponentOptions, ComponentSpec, RawOptions};
use crate::settings::UiSettings;
use reinhardt_html::{Attributes, Facet, Page};

pub const DEFAULT_CHECKED_VALUE: &str = "1";
pub const DEFAULT_UNCHECKED_VALUE: &str = "0";

/// A checkbox, optionally styled as a switch.
///
/// Browsers submit nothing for an unchecked box, so by default a hidden
/// input carrying the unchecked value is rendered first under the same name.
///
/// ```
/// use reinhardt_pages_components::{Checkbox, Component, FromOptions};
/// use serde_json::json;
///
/// let checkbox = Checkbox::from_json(json!({"name": "terms", "checked": true})).unwrap();
/// let html = checkbox.render();
///
/// let hidden = html.as_str().find(r#"value="0""#).unwrap();
/// let visible = html.as_str().find(r#"type="checkbox""#).unwrap();
/// assert!(hidden < visible);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Checkbox {
	options: ComponentOptions,
	checked: bool,
	unchecked_value: String,
	include_hidden: Option<bool>,
	switch: bool,
}

impl Checkbox {
	pub fn new(options: ComponentOptions) -> Self {
		Self {
			options,
			checked: false,
			unchecked_value: DEFAULT_UNCHECKED_VALUE.to_string(),
			include_hidden: None,
			switch: false,
		}
	}

	pub fn checked(mut self, checked: bool) -> Self {
		self.checked = checked;
		self
	}

	pub fn unchecked_value(mut self, value: impl Into<String>) -> Self {
		self.unchecked_value = value.into();
		self
	}

	/// Overrides [`UiSettings::checkbox_include_hidden`] for this checkbox.
	pub fn include_hidden(mut self, include: bool) -> Self {
		self.include_hidden = Some(include);
		self
	}

	pub fn switch(mut self, switch: bool) -> Self {
		self.switch = switch;
		self
	}

	/// The value submitted when checked.
	pub fn checked_value(&self) -> &str {
		self.options
			.value
			.as_single()
			.unwrap_or(DEFAULT_CHECKED_VALUE)
	}

	fn hidden_input(&self, settings: &UiSettings) -> Page {
		if !self.include_hidden.unwrap_or(settings.checkbox_include_hidden) {
			return Page::empty();
		}
		Page::element("input")
			.attr("type", "hidden")
			.attr("name", self.options.name.as_str())
			.attr("value", self.unchecked_value.as_str())
			.attr("autocomplete", "off")
			.bool_attr("disabled", self.options.disabled)
			.into()
	}
}

impl FromOptions for Checkbox {
	const SPEC: ComponentSpec = ComponentSpec::field("checkbox", "components.checkbox")
		.sizes(&[])
		.without_placeholder();

	fn from_raw(raw: &mut RawOptions, settings: &UiSettings) -> Result<Self> {
		let options = ComponentOptions::normalize(raw, &Self::SPEC, settings)?;
		let mut checkbox = Self::new(options)
			.checked(raw.flag("checked")?)
			.switch(raw.flag("switch")?);
		if let Some(value) = raw.string("unchecked_value")? {
			checkbox = checkbox.unchecked_value(value);
		}
		checkbox.include_hidden = raw.bool("include_hidden")?;
		Ok(checkbox)
	}
}

impl Component for Checkbox {
	fn name(&self) -> &'static str {
		Self::SPEC.name
	}

	fn i18n_scope(&self) -> &'static str {
		Self::SPEC.i18n_scope
	}

	fn to_page(&self, ctx: &RenderContext<'_>) -> Page {
		let field = FieldBase::new(&self.options);

		let mut leading = Attributes::new().with("type", "checkbox");
		if self.switch {
			leading.insert("role", "switch");
		}
		leading.insert("value", self.checked_value());
		let mut attrs = field.input_attributes_with(leading);
		attrs.insert("value", self.checked_value());
		attrs.insert("checked", self.checked);

		let input = Page::element("input")
			.classes(&field.input_classes("form-check-input", None))
			.attrs(attrs);

		let mut wrapper = field.wrap("form-check");
		if self.switch {
			wrapper = wrapper.add_class(Facet::Base, "form-switch");
		}
		wrapper
			.child(self.hidden_input(ctx.settings()))
			.child(input)
			.child(field.label_with_class("form-check-label"))
			.child(field.hint_or_error())
			.into()
	}
}
