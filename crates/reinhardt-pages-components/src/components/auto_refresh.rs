//! Periodically refreshed region.

use crate::component::{Component, FromOptions, RenderContext, merge_defaults};
use crate::error::Result;
use crate::options::{ComponentOptions, ComponentSpec, RawOptions};
use crate::settings::UiSettings;
use reinhardt_html::{Attributes, Facet, Page};

/// A live region reloaded by the `refresh` controller every `interval` seconds.
///
/// The interval is the one option that is repaired instead of rejected: it is
/// clamped into [`UiSettings::refresh`] during normalization, and defaults to
/// `refresh.default_seconds`. Intervals set through [`AutoRefresh::interval`]
/// are clamped against the render-time settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoRefresh {
	options: ComponentOptions,
	interval: Option<i64>,
	url: Option<String>,
}

impl AutoRefresh {
	pub fn new(options: ComponentOptions) -> Self {
		Self {
			options,
			interval: None,
			url: None,
		}
	}

	/// Requested interval in seconds.
	pub fn interval(mut self, seconds: i64) -> Self {
		self.interval = Some(seconds);
		self
	}

	pub fn url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}

	/// The interval actually used under `settings`.
	pub fn effective_interval(&self, settings: &UiSettings) -> i64 {
		let refresh = &settings.refresh;
		match self.interval {
			Some(seconds) => refresh.bounds().clamp("interval", seconds),
			None => refresh.default_seconds,
		}
	}
}

impl FromOptions for AutoRefresh {
	const SPEC: ComponentSpec = ComponentSpec::display("auto_refresh", "components.auto_refresh");

	fn from_raw(raw: &mut RawOptions, settings: &UiSettings) -> Result<Self> {
		let options = ComponentOptions::normalize(raw, &Self::SPEC, settings)?;
		let mut refresh = Self::new(options);
		refresh.interval = raw.clamped("interval", settings.refresh.bounds())?;
		refresh.url = raw.text("url")?;
		Ok(refresh)
	}
}

impl Component for AutoRefresh {
	fn name(&self) -> &'static str {
		Self::SPEC.name
	}

	fn i18n_scope(&self) -> &'static str {
		Self::SPEC.i18n_scope
	}

	fn to_page(&self, ctx: &RenderContext<'_>) -> Page {
		let options = &self.options;
		let interval = self.effective_interval(ctx.settings());

		let mut attrs = options.html_attributes.clone();
		merge_defaults(
			&mut attrs,
			"data",
			Attributes::new()
				.with("controller", "refresh")
				.with("refresh-url-value", self.url.as_deref()),
		);
		let mut region = Page::element("div")
			.add_class(Facet::Base, "auto-refresh")
			.attr("id", options.element_id())
			.attrs(attrs)
			.attr("data-refresh-interval-value", interval)
			.attr("aria-live", "polite");
		if let Some(class) = &options.class {
			region = region.add_class(Facet::Override, class);
		}
		region.child(options.label.clone()).into()
	}
}
