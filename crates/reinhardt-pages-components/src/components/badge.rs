//! Badges.

use crate::component::{Component, FromOptions, RenderContext, Variant, with_user_options};
use crate::error::Result;
use crate::options::{ComponentOptions, ComponentSpec, OptionEnum, RawOptions};
use crate::settings::UiSettings;
use reinhardt_html::{Facet, Page};

/// A short colored label. The color is read from the `color` key.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
	options: ComponentOptions,
	color: Variant,
	pill: bool,
}

impl Badge {
	pub fn new(options: ComponentOptions) -> Self {
		Self {
			options,
			color: Variant::Secondary,
			pill: false,
		}
	}

	pub fn color(mut self, color: Variant) -> Self {
		self.color = color;
		self
	}

	pub fn pill(mut self, pill: bool) -> Self {
		self.pill = pill;
		self
	}

	fn text(&self) -> Option<&str> {
		self.options
			.label
			.as_deref()
			.or_else(|| self.options.value.as_single())
	}
}

impl FromOptions for Badge {
	const SPEC: ComponentSpec = ComponentSpec::display("badge", "components.badge");

	fn from_raw(raw: &mut RawOptions, settings: &UiSettings) -> Result<Self> {
		let options = ComponentOptions::normalize(raw, &Self::SPEC, settings)?;
		Ok(Self::new(options)
			.color(raw.choice_for("color")?.unwrap_or(Variant::Secondary))
			.pill(raw.flag("pill")?))
	}
}

impl Component for Badge {
	fn name(&self) -> &'static str {
		Self::SPEC.name
	}

	fn i18n_scope(&self) -> &'static str {
		Self::SPEC.i18n_scope
	}

	fn to_page(&self, _ctx: &RenderContext<'_>) -> Page {
		let mut badge = Page::element("span")
			.add_class(Facet::Base, "badge")
			.add_class(Facet::State, &format!("text-bg-{}", self.color.as_str()))
			.attr("id", self.options.element_id());
		if self.pill {
			badge = badge.add_class(Facet::Base, "rounded-pill");
		}
		with_user_options(badge, &self.options)
			.child(self.text().map(str::to_string))
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
		Badge::from_json_with(value, &settings)
			.unwrap()
			.render_with(&RenderContext::new(&NullTranslator, &settings))
			.into_string()
	}

	#[rstest]
	#[case(json!({"label": "New"}), r#"<span class="badge text-bg-secondary">New</span>"#)]
	#[case(json!({"label": "3", "color": "danger", "pill": true}), r#"<span class="badge rounded-pill text-bg-danger">3</span>"#)]
	#[case(json!({"value": 42, "color": ":info"}), r#"<span class="badge text-bg-info">42</span>"#)]
	fn test_badge_markup(#[case] value: serde_json::Value, #[case] expected: &str) {
		assert_eq!(render(value), expected);
	}

	#[rstest]
	fn test_rejects_unknown_color() {
		let err =
			Badge::from_json_with(json!({"color": "pink"}), &UiSettings::default()).unwrap_err();
		assert_eq!(err.key(), "color");
		assert!(err.to_string().contains("'pink'"));
	}

	#[rstest]
	fn test_badge_rejects_size() {
		assert!(Badge::from_json_with(json!({"size": "small"}), &UiSettings::default()).is_err());
	}
}
