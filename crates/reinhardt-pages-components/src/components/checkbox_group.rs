//! Multi-valued group of checkboxes.

use super::Choice;
use super::radio_group::item_class;
use crate::component::{Component, FromOptions, Layout, RenderContext};
use crate::error::Result;
use crate::field::FieldBase;
use crate::options::{ComponentOptions, ComponentSpec, RawOptions};
use crate::settings::UiSettings;
use reinhardt_html::{Attributes, Facet, Page, derive_id_with};

/// Appends `[]` to a field name unless it is already a list name.
pub(crate) fn list_name(name: &str) -> String {
	if name.ends_with("[]") {
		name.to_string()
	} else {
		format!("{}[]", name)
	}
}

/// Checkboxes submitting every selected value under `name[]`.
///
/// A hidden empty value is submitted first so that clearing every box is
/// distinguishable from the field being absent.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxGroup {
	options: ComponentOptions,
	choices: Vec<Choice>,
	layout: Layout,
	include_hidden: bool,
}

impl CheckboxGroup {
	pub fn new(
		options: ComponentOptions,
		choices: impl IntoIterator<Item = impl Into<Choice>>,
	) -> Self {
		Self {
			options,
			choices: choices.into_iter().map(Into::into).collect(),
			layout: Layout::Vertical,
			include_hidden: true,
		}
	}

	pub fn layout(mut self, layout: Layout) -> Self {
		self.layout = layout;
		self
	}

	pub fn include_hidden(mut self, include: bool) -> Self {
		self.include_hidden = include;
		self
	}

	pub fn choices(&self) -> &[Choice] {
		&self.choices
	}
}

impl FromOptions for CheckboxGroup {
	const SPEC: ComponentSpec = ComponentSpec::field("checkbox_group", "components.checkbox_group")
		.sizes(&[])
		.without_placeholder();

	fn from_raw(raw: &mut RawOptions, settings: &UiSettings) -> Result<Self> {
		let options = ComponentOptions::normalize(raw, &Self::SPEC, settings)?;
		let choices = Choice::list("choices", &raw.list("choices")?)?;
		Ok(Self::new(options, choices)
			.layout(raw.choice()?.unwrap_or(Layout::Vertical))
			.include_hidden(raw.bool("include_hidden")?.unwrap_or(true)))
	}
}

impl Component for CheckboxGroup {
	fn name(&self) -> &'static str {
		Self::SPEC.name
	}

	fn i18n_scope(&self) -> &'static str {
		Self::SPEC.i18n_scope
	}

	fn to_page(&self, _ctx: &RenderContext<'_>) -> Page {
		let field = FieldBase::new(&self.options);
		let options = &self.options;
		let name = list_name(&options.name);

		let mut leading = Attributes::new().with("role", "group");
		if options.label.is_some() {
			leading.insert("aria-labelledby", field.label_id());
		}

		let hidden = self.include_hidden.then(|| {
			Page::element("input")
				.attr("type", "hidden")
				.attr("name", name.as_str())
				.attr("value", "")
				.attr("autocomplete", "off")
				.bool_attr("disabled", options.disabled)
		});

		let input_classes = field.input_classes("form-check-input", None);
		let items: Vec<_> = self
			.choices
			.iter()
			.map(|choice| {
				let id = derive_id_with(options.id(), &choice.value);
				Page::element("div")
					.add_class(Facet::Base, item_class(self.layout))
					.child(
						Page::element("input")
							.classes(&input_classes)
							.attr("type", "checkbox")
							.attr("id", id.as_str())
							.attr("name", name.as_str())
							.attr("value", choice.value.as_str())
							.bool_attr("checked", options.value.contains(&choice.value))
							.bool_attr("disabled", options.disabled || choice.disabled),
					)
					.child(
						Page::element("label")
							.add_class(Facet::Base, "form-check-label")
							.attr("for", id)
							.child(choice.label.clone()),
					)
			})
			.collect();

		field
			.wrap("checkbox-group")
			.add_class(Facet::Size, &format!("checkbox-group-{}", self.layout))
			.attrs(field.group_attributes(leading))
			.child(field.group_label())
			.child(hidden)
			.children(items)
			.child(field.hint_or_error())
			.into()
	}
}
