//! Buttons.

use crate::component::{
	ButtonType, Component, FromOptions, RenderContext, Size, Variant, with_user_options,
};
use crate::error::Result;
use crate::options::{ComponentOptions, ComponentSpec, OptionEnum, RawOptions};
use crate::settings::UiSettings;
use reinhardt_html::{Facet, Page};

/// A `<button>` with a color variant and size.
///
/// While `loading`, the button is disabled, marked `aria-busy` and shows a
/// spinner with a translated status text instead of its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
	options: ComponentOptions,
	variant: Variant,
	button_type: ButtonType,
	outline: bool,
	loading: bool,
}

impl Button {
	pub fn new(options: ComponentOptions) -> Self {
		Self {
			options,
			variant: Variant::Primary,
			button_type: ButtonType::Button,
			outline: false,
			loading: false,
		}
	}

	pub fn variant(mut self, variant: Variant) -> Self {
		self.variant = variant;
		self
	}

	pub fn button_type(mut self, button_type: ButtonType) -> Self {
		self.button_type = button_type;
		self
	}

	pub fn outline(mut self, outline: bool) -> Self {
		self.outline = outline;
		self
	}

	pub fn loading(mut self, loading: bool) -> Self {
		self.loading = loading;
		self
	}

	fn variant_class(&self) -> String {
		if self.outline {
			format!("btn-outline-{}", self.variant)
		} else {
			format!("btn-{}", self.variant)
		}
	}
}

impl FromOptions for Button {
	const SPEC: ComponentSpec = ComponentSpec::display("button", "components.button")
		.sizes(&[Size::Small, Size::Medium, Size::Large, Size::Xlarge])
		.default_size(Size::Medium);

	fn from_raw(raw: &mut RawOptions, settings: &UiSettings) -> Result<Self> {
		let options = ComponentOptions::normalize(raw, &Self::SPEC, settings)?;
		Ok(Self::new(options)
			.variant(raw.choice()?.unwrap_or(Variant::Primary))
			.button_type(raw.choice()?.unwrap_or(ButtonType::Button))
			.outline(raw.flag("outline")?)
			.loading(raw.flag("loading")?))
	}
}

impl Component for Button {
	fn name(&self) -> &'static str {
		Self::SPEC.name
	}

	fn i18n_scope(&self) -> &'static str {
		Self::SPEC.i18n_scope
	}

	fn to_page(&self, ctx: &RenderContext<'_>) -> Page {
		let options = &self.options;
		let mut button = Page::element("button")
			.add_class(Facet::Base, "btn")
			.add_class(Facet::State, &self.variant_class())
			.attr("type", self.button_type.as_str())
			.attr("id", options.element_id())
			.attr("name", Some(options.name.as_str()).filter(|n| !n.is_empty()))
			.attr("value", options.value.as_single())
			.bool_attr("disabled", options.disabled || self.loading);
		if let Some(class) = options.size.and_then(|size| size.class_for("btn")) {
			button = button.add_class(Facet::Size, &class);
		}
		if self.loading {
			button = button.attr("aria-busy", "true");
		}
		let mut button = with_user_options(button, options).attr("type", self.button_type.as_str());

		if self.loading {
			button.add_child(
				Page::element("span")
					.add_class(Facet::Base, "spinner-border spinner-border-sm")
					.attr("aria-hidden", "true"),
			);
			button.add_child(
				Page::element("span")
					.attr("role", "status")
					.child(self.t(ctx, "loading", "Loading...", &[])),
			);
		} else {
			button.add_child(options.label.clone());
		}
		button.into()
	}
}
