//! Dropdown menus.

use super::NavItem;
use crate::component::{
	Component, FromOptions, Placement, RenderContext, Variant, with_user_options,
};
use crate::error::Result;
use crate::options::{ComponentOptions, ComponentSpec, RawOptions};
use crate::settings::UiSettings;
use reinhardt_html::{Attributes, Facet, Page, UniqueId};

/// A toggle button controlling a menu of links.
///
/// The menu id is generated per render; the toggle points at it through
/// `aria-controls` and the menu is labelled by the toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
	options: ComponentOptions,
	items: Vec<NavItem>,
	placement: Placement,
	variant: Variant,
}

impl Dropdown {
	pub fn new(options: ComponentOptions, items: impl IntoIterator<Item = NavItem>) -> Self {
		Self {
			options,
			items: items.into_iter().collect(),
			placement: Placement::Bottom,
			variant: Variant::Secondary,
		}
	}

	pub fn placement(mut self, placement: Placement) -> Self {
		self.placement = placement;
		self
	}

	pub fn variant(mut self, variant: Variant) -> Self {
		self.variant = variant;
		self
	}

	pub fn items(&self) -> &[NavItem] {
		&self.items
	}

	fn direction_class(&self) -> &'static str {
		match self.placement {
			Placement::Bottom => "dropdown",
			Placement::Top => "dropup",
			Placement::Start => "dropstart",
			Placement::End => "dropend",
		}
	}

	fn menu_item(item: &NavItem) -> Page {
		let mut link = Page::element("a")
			.add_class(Facet::Base, "dropdown-item")
			.attr("role", "menuitem")
			.attr("href", item.href.as_deref());
		if item.disabled {
			link = link
				.add_class(Facet::State, "disabled")
				.attr("aria-disabled", "true")
				.attr("tabindex", "-1");
		}
		Page::element("li")
			.attr("role", "none")
			.child(link.child(item.label.clone()))
			.into()
	}
}

impl FromOptions for Dropdown {
	const SPEC: ComponentSpec = ComponentSpec::display("dropdown", "components.dropdown");

	fn from_raw(raw: &mut RawOptions, settings: &UiSettings) -> Result<Self> {
		let options = ComponentOptions::normalize(raw, &Self::SPEC, settings)?;
		let items = NavItem::list("items", &raw.list("items")?)?;
		Ok(Self::new(options, items)
			.placement(raw.choice()?.unwrap_or(Placement::Bottom))
			.variant(raw.choice()?.unwrap_or(Variant::Secondary)))
	}
}

impl Component for Dropdown {
	fn name(&self) -> &'static str {
		Self::SPEC.name
	}

	fn i18n_scope(&self) -> &'static str {
		Self::SPEC.i18n_scope
	}

	fn to_page(&self, ctx: &RenderContext<'_>) -> Page {
		let options = &self.options;
		let id = match options.element_id() {
			Some(id) => id.to_string(),
			None => {
				let prefix = ctx.settings().unique_id_prefix_for(Self::SPEC.name);
				UniqueId::generate(&prefix).into_string()
			}
		};
		let toggle_id = format!("{}-toggle", id);
		let label = match &options.label {
			Some(label) => label.clone(),
			None => self.t(ctx, "toggle", "Menu", &[]),
		};

		let toggle = Page::element("button")
			.add_class(Facet::Base, "btn dropdown-toggle")
			.add_class(Facet::State, &format!("btn-{}", self.variant))
			.attr("type", "button")
			.attr("id", toggle_id.as_str())
			.attr("aria-haspopup", "true")
			.attr("aria-expanded", "false")
			.attr("aria-controls", id.as_str())
			.attr("data-action", "dropdown#toggle")
			.bool_attr("disabled", options.disabled)
			.child(label);
		let menu = Page::element("ul")
			.add_class(Facet::Base, "dropdown-menu")
			.attr("id", id)
			.attr("role", "menu")
			.attr("aria-labelledby", toggle_id)
			.attr("data-dropdown-target", "menu")
			.children(self.items.iter().map(Self::menu_item).collect::<Vec<_>>());

		let wrapper = Page::element("div")
			.add_class(Facet::Base, self.direction_class())
			.attr("data", Attributes::new().with("controller", "dropdown"));
		with_user_options(wrapper, options)
			.child(toggle)
			.child(menu)
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
		Dropdown::from_json_with(value, &settings)
			.unwrap()
			.render_with(&RenderContext::new(&NullTranslator, &settings))
			.into_string()
	}

	#[rstest]
	fn test_toggle_controls_menu() {
		// Act
		let html = render(json!({
			"id": "account",
			"label": "Account",
			"items": [["Profile", "/profile"], {"label": "Billing", "disabled": true}],
		}));

		// Assert
		assert!(html.starts_with(r#"<div class="dropdown" data-controller="dropdown">"#));
		assert!(html.contains(
			r#"<button class="btn dropdown-toggle btn-secondary" type="button" id="account-toggle" aria-haspopup="true" aria-expanded="false" aria-controls="account" data-action="dropdown#toggle">Account</button>"#
		));
		assert!(html.contains(
			r#"<ul class="dropdown-menu" id="account" role="menu" aria-labelledby="account-toggle" data-dropdown-target="menu">"#
		));
		assert!(html.contains(
			r#"<li role="none"><a class="dropdown-item" role="menuitem" href="/profile">Profile</a></li>"#
		));
		assert!(html.contains(
			r#"<a class="dropdown-item disabled" role="menuitem" aria-disabled="true" tabindex="-1">Billing</a>"#
		));
	}

	#[rstest]
	fn test_generated_ids_are_distinct() {
		let value = json!({"label": "Menu", "items": ["a"]});
		let first = render(value.clone());
		let second = render(value);

		assert!(first.contains(r#"aria-controls="dropdown-"#));
		assert_ne!(first, second);
	}

	#[rstest]
	#[case("top", "dropup")]
	#[case("end", "dropend")]
	fn test_placement_class(#[case] placement: &str, #[case] class: &str) {
		let html = render(json!({"items": [], "placement": placement}));
		assert!(html.starts_with(&format!(r#"<div class="{}""#, class)));
	}

	#[rstest]
	fn test_default_toggle_label() {
		assert!(render(json!({"items": []})).contains(">Menu</button>"));
	}
}
