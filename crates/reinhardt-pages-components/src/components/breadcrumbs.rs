//! Breadcrumb navigation.

use super::NavItem;
use crate::component::{Component, FromOptions, RenderContext, with_user_options};
use crate::error::Result;
use crate::options::{ComponentOptions, ComponentSpec, RawOptions};
use crate::settings::UiSettings;
use reinhardt_html::{Facet, Page};

/// A trail of links; the last item is the current page and is not linked.
#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumbs {
	options: ComponentOptions,
	items: Vec<NavItem>,
}

impl Breadcrumbs {
	pub fn new(options: ComponentOptions, items: impl IntoIterator<Item = NavItem>) -> Self {
		Self {
			options,
			items: items.into_iter().collect(),
		}
	}

	pub fn items(&self) -> &[NavItem] {
		&self.items
	}
}

impl FromOptions for Breadcrumbs {
	const SPEC: ComponentSpec = ComponentSpec::display("breadcrumbs", "components.breadcrumbs");

	fn from_raw(raw: &mut RawOptions, settings: &UiSettings) -> Result<Self> {
		let options = ComponentOptions::normalize(raw, &Self::SPEC, settings)?;
		let items = NavItem::list("items", &raw.list("items")?)?;
		Ok(Self::new(options, items))
	}
}

impl Component for Breadcrumbs {
	fn name(&self) -> &'static str {
		Self::SPEC.name
	}

	fn i18n_scope(&self) -> &'static str {
		Self::SPEC.i18n_scope
	}

	fn to_page(&self, ctx: &RenderContext<'_>) -> Page {
		let last = self.items.len().saturating_sub(1);
		let crumbs: Vec<_> = self
			.items
			.iter()
			.enumerate()
			.map(|(index, item)| {
				let crumb = Page::element("li").add_class(Facet::Base, "breadcrumb-item");
				match &item.href {
					Some(href) if index != last => crumb.child(
						Page::element("a")
							.attr("href", href.as_str())
							.child(item.label.clone()),
					),
					_ if index == last => crumb
						.add_class(Facet::State, "active")
						.attr("aria-current", "page")
						.child(item.label.clone()),
					_ => crumb.child(item.label.clone()),
				}
			})
			.collect();

		let label = match &self.options.label {
			Some(label) => label.clone(),
			None => self.t(ctx, "label", "Breadcrumb", &[]),
		};
		let nav = Page::element("nav")
			.attr("id", self.options.element_id())
			.attr("aria-label", label);
		with_user_options(nav, &self.options)
			.child(
				Page::element("ol")
					.add_class(Facet::Base, "breadcrumb")
					.children(crumbs),
			)
			.into()
	}
}
