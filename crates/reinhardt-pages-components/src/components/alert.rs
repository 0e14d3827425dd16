//! Contextual alert messages.

use crate::component::{Component, FromOptions, RenderContext, Variant, merge_defaults};
use crate::error::Result;
use crate::options::{ComponentOptions, ComponentSpec, RawOptions};
use crate::settings::UiSettings;
use reinhardt_html::{Attributes, Facet, Page};

/// An alert box with `role="alert"`.
///
/// `label` renders as a heading above `message`. Dismissible alerts get a
/// close button whose accessible label is translated.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
	options: ComponentOptions,
	variant: Variant,
	message: Option<String>,
	dismissible: bool,
}

impl Alert {
	pub fn new(options: ComponentOptions, message: impl Into<String>) -> Self {
		Self {
			options,
			variant: Variant::Info,
			message: Some(message.into()).filter(|m| !m.trim().is_empty()),
			dismissible: false,
		}
	}

	pub fn variant(mut self, variant: Variant) -> Self {
		self.variant = variant;
		self
	}

	pub fn dismissible(mut self, dismissible: bool) -> Self {
		self.dismissible = dismissible;
		self
	}
}

impl FromOptions for Alert {
	const SPEC: ComponentSpec = ComponentSpec::display("alert", "components.alert");

	fn from_raw(raw: &mut RawOptions, settings: &UiSettings) -> Result<Self> {
		let options = ComponentOptions::normalize(raw, &Self::SPEC, settings)?;
		let message = raw.messages("message")?.unwrap_or_default();
		Ok(Self::new(options, message)
			.variant(raw.choice()?.unwrap_or(Variant::Info))
			.dismissible(raw.flag("dismissible")?))
	}
}

impl Component for Alert {
	fn name(&self) -> &'static str {
		Self::SPEC.name
	}

	fn i18n_scope(&self) -> &'static str {
		Self::SPEC.i18n_scope
	}

	fn to_page(&self, ctx: &RenderContext<'_>) -> Page {
		let options = &self.options;
		let mut attrs = options.html_attributes.clone();
		if self.dismissible {
			merge_defaults(&mut attrs, "data", Attributes::new().with("controller", "alert"));
		}
		let mut alert = Page::element("div")
			.add_class(Facet::Base, "alert")
			.add_class(Facet::State, &format!("alert-{}", self.variant))
			.attr("id", options.element_id())
			.attr("role", "alert")
			.attrs(attrs);
		if self.dismissible {
			alert = alert.add_class(Facet::Base, "alert-dismissible fade show");
		}
		if let Some(class) = &options.class {
			alert = alert.add_class(Facet::Override, class);
		}

		let heading = options.label.as_ref().map(|label| {
			Page::element("h4")
				.add_class(Facet::Base, "alert-heading")
				.child(label.clone())
		});
		let close = self.dismissible.then(|| {
			Page::element("button")
				.add_class(Facet::Base, "btn-close")
				.attr("type", "button")
				.attr("aria-label", self.t(ctx, "close", "Close", &[]))
				.attr("data-action", "alert#dismiss")
		});

		alert
			.child(heading)
			.child(self.message.clone())
			.child(close)
			.into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_i18n::{MessageCatalog, NullTranslator, TranslationContext};
	use rstest::rstest;
	use serde_json::json;

	fn render(value: serde_json::Value) -> String {
		let settings = UiSettings::default();
		Alert::from_json_with(value, &settings)
			.unwrap()
			.render_with(&RenderContext::new(&NullTranslator, &settings))
			.into_string()
	}

	#[rstest]
	fn test_plain_alert() {
		assert_eq!(
			render(json!({"message": "Saved", "variant": "success"})),
			r#"<div class="alert alert-success" role="alert">Saved</div>"#
		);
	}

	#[rstest]
	fn test_dismissible_alert() {
		// Act
		let html = render(json!({
			"label": "Heads up",
			"message": ["one", "two"],
			"dismissible": true,
		}));

		// Assert
		assert_eq!(
			html,
			concat!(
				r#"<div class="alert alert-dismissible fade show alert-info" role="alert" data-controller="alert">"#,
				r#"<h4 class="alert-heading">Heads up</h4>one, two"#,
				r#"<button class="btn-close" type="button" aria-label="Close" data-action="alert#dismiss"></button>"#,
				"</div>"
			)
		);
	}

	#[rstest]
	fn test_user_controller_wins() {
		let html = render(json!({
			"message": "x",
			"dismissible": true,
			"html_attributes": {"data": {"controller": "flash", "timeout": 5}},
		}));
		assert!(html.contains(r#"data-controller="flash" data-timeout="5""#));
	}

	#[rstest]
	fn test_close_label_is_translated() {
		let settings = UiSettings::default();
		let translator = TranslationContext::new("fr", "en")
			.with_catalog(MessageCatalog::new("fr").with("components.alert.close", "Fermer"))
			.unwrap();
		let alert =
			Alert::from_json_with(json!({"message": "x", "dismissible": true}), &settings).unwrap();

		let html = alert
			.render_with(&RenderContext::new(&translator, &settings))
			.into_string();

		assert!(html.contains(r#"aria-label="Fermer""#));
	}

	#[rstest]
	fn test_message_is_escaped() {
		let html = render(json!({"message": "<script>alert('x')</script>"}));
		assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
		assert!(!html.contains("<script>"));
	}
}
