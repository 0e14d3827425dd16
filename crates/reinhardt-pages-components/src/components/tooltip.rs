//! Tooltips.

use crate::component::{Component, FromOptions, Placement, RenderContext, with_user_options};
use crate::error::{InvalidOption, Result};
use crate::options::{ComponentOptions, ComponentSpec, RawOptions};
use crate::settings::UiSettings;
use reinhardt_html::{Attributes, Facet, Page, UniqueId};

/// A trigger with a tooltip that describes it.
///
/// Several tooltips may share a page, so each render generates a fresh id
/// (`tooltip-1a2b3c4d`) unless the caller passed `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
	options: ComponentOptions,
	text: String,
	placement: Placement,
}

impl Tooltip {
	pub fn new(options: ComponentOptions, text: impl Into<String>) -> Self {
		Self {
			options,
			text: text.into(),
			placement: Placement::Top,
		}
	}

	pub fn placement(mut self, placement: Placement) -> Self {
		self.placement = placement;
		self
	}

	fn tooltip_id(&self, settings: &UiSettings) -> String {
		match self.options.element_id() {
			Some(id) => id.to_string(),
			None => {
				UniqueId::generate(&settings.unique_id_prefix_for(Self::SPEC.name)).into_string()
			}
		}
	}
}

impl FromOptions for Tooltip {
	const SPEC: ComponentSpec = ComponentSpec::display("tooltip", "components.tooltip");

	fn from_raw(raw: &mut RawOptions, settings: &UiSettings) -> Result<Self> {
		let options = ComponentOptions::normalize(raw, &Self::SPEC, settings)?;
		let text = raw.text("text")?.ok_or_else(|| InvalidOption::missing("text"))?;
		Ok(Self::new(options, text).placement(raw.choice()?.unwrap_or(Placement::Top)))
	}
}

impl Component for Tooltip {
	fn name(&self) -> &'static str {
		Self::SPEC.name
	}

	fn i18n_scope(&self) -> &'static str {
		Self::SPEC.i18n_scope
	}

	fn to_page(&self, ctx: &RenderContext<'_>) -> Page {
		let id = self.tooltip_id(ctx.settings());

		let wrapper = Page::element("span")
			.add_class(Facet::Base, "tooltip-wrapper")
			.attr(
				"data",
				Attributes::new()
					.with("controller", "tooltip")
					.with("tooltip-placement-value", self.placement.to_string()),
			);
		let trigger = Page::element("span")
			.add_class(Facet::Base, "tooltip-trigger")
			.attr("tabindex", "0")
			.attr("aria-describedby", id.as_str())
			.child(self.options.label.clone());
		let tip = Page::element("span")
			.add_class(Facet::Base, "tooltip")
			.add_class(Facet::State, &format!("bs-tooltip-{}", self.placement))
			.attr("id", id)
			.attr("role", "tooltip")
			.child(self.text.clone());

		with_user_options(wrapper, &self.options)
			.child(trigger)
			.child(tip)
			.into()
	}
}
