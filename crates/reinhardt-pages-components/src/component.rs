//! Core component trait and common types

use crate::error::Result;
use crate::options::{ComponentOptions, ComponentSpec, RawOptions, option_enum};
use crate::settings::UiSettings;
use reinhardt_html::{AttributeValue, Attributes, Facet, Page, PageElement, SafeHtml};
use reinhardt_i18n::{Translator, translate};
use serde_json::Value;

/// Everything a component needs at render time besides its own options.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
	translator: &'a dyn Translator,
	settings: &'a UiSettings,
}

impl<'a> RenderContext<'a> {
	pub fn new(translator: &'a dyn Translator, settings: &'a UiSettings) -> Self {
		Self {
			translator,
			settings,
		}
	}

	/// The process-wide translator and settings.
	pub fn global() -> RenderContext<'static> {
		RenderContext::new(reinhardt_i18n::global(), UiSettings::global())
	}

	pub fn translator(&self) -> &'a dyn Translator {
		self.translator
	}

	pub fn settings(&self) -> &'a UiSettings {
		self.settings
	}

	/// Translates `scope.key`, falling back to `default`.
	pub fn t(&self, scope: &str, key: &str, default: &str, args: &[(&str, &str)]) -> String {
		translate(self.translator, key, scope, default, args)
	}
}

impl std::fmt::Debug for RenderContext<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RenderContext")
			.field("locale", &self.translator.locale())
			.field("settings", &self.settings)
			.finish()
	}
}

/// Component trait - base interface for all UI components
///
/// A component is an immutable, validated configuration that renders to a
/// single HTML fragment.
pub trait Component: Send + Sync {
	/// Returns the component's name (for debugging)
	fn name(&self) -> &'static str;

	/// Translation scope for the component's built-in labels.
	fn i18n_scope(&self) -> &'static str;

	/// Builds the render tree.
	fn to_page(&self, ctx: &RenderContext<'_>) -> Page;

	/// Renders with an explicit context.
	fn render_with(&self, ctx: &RenderContext<'_>) -> SafeHtml {
		self.to_page(ctx).render()
	}

	/// Renders with the process-wide translator and settings.
	fn render(&self) -> SafeHtml {
		self.render_with(&RenderContext::global())
	}

	/// Translates one of this component's labels.
	fn t(
		&self,
		ctx: &RenderContext<'_>,
		key: &str,
		default: &str,
		args: &[(&str, &str)],
	) -> String {
		ctx.t(self.i18n_scope(), key, default, args)
	}
}

/// Construction from a raw configuration object.
pub trait FromOptions: Sized {
	const SPEC: ComponentSpec;

	/// Builds the component from already wrapped options.
	fn from_raw(raw: &mut RawOptions, settings: &UiSettings) -> Result<Self>;

	/// Builds the component using the process-wide settings.
	fn from_json(value: Value) -> Result<Self> {
		Self::from_json_with(value, UiSettings::global())
	}

	fn from_json_with(value: Value, settings: &UiSettings) -> Result<Self> {
		let mut raw = RawOptions::new(Self::SPEC.name, value)?;
		Self::from_raw(&mut raw, settings)
	}
}

/// Sets `defaults` under `key`, letting the user's entries under the same
/// key win.
///
/// Used for behavior hooks (`data-controller` and friends) that a caller may
/// point at their own controller.
pub(crate) fn merge_defaults(attrs: &mut Attributes, key: &str, defaults: Attributes) {
	match attrs.remove(key) {
		Some(AttributeValue::Map(user)) => attrs.insert(key, defaults.merged(user)),
		Some(other) => attrs.insert(key, other),
		None => attrs.insert(key, defaults),
	}
}

/// Applies the caller's passthrough attributes and classes to `element`.
pub(crate) fn with_user_options(element: PageElement, options: &ComponentOptions) -> PageElement {
	let element = element.attrs(options.html_attributes.clone());
	match &options.class {
		Some(class) => element.add_class(Facet::Override, class),
		None => element,
	}
}

option_enum! {
	/// Size variant for components
	pub enum Size: "size" {
		Small => "small",
		/// Medium (default, no size class)
		Medium => "medium",
		Large => "large",
		Xlarge => "xlarge",
	}
}

impl Size {
	/// Class suffix used by size classes (`btn-sm`, `form-control-lg`).
	pub fn class_suffix(self) -> Option<&'static str> {
		match self {
			Self::Small => Some("sm"),
			Self::Medium => None,
			Self::Large => Some("lg"),
			Self::Xlarge => Some("xl"),
		}
	}

	/// `{prefix}-{suffix}`, or nothing for medium.
	pub fn class_for(self, prefix: &str) -> Option<String> {
		self.class_suffix()
			.map(|suffix| format!("{}-{}", prefix, suffix))
	}
}

impl Default for Size {
	fn default() -> Self {
		Self::Medium
	}
}

option_enum! {
	/// Color variant for components
	pub enum Variant: "variant" {
		Primary => "primary",
		Secondary => "secondary",
		Success => "success",
		Danger => "danger",
		Warning => "warning",
		Info => "info",
		Light => "light",
		Dark => "dark",
	}
}

option_enum! {
	/// Where an overlay opens relative to its trigger.
	pub enum Placement: "placement" {
		Top => "top",
		Bottom => "bottom",
		Start => "start",
		End => "end",
	}
}

option_enum! {
	/// Arrangement of grouped inputs.
	pub enum Layout: "layout" {
		Vertical => "vertical",
		Horizontal => "horizontal",
		Inline => "inline",
	}
}

option_enum! {
	pub enum ButtonType: "type" {
		Button => "button",
		Submit => "submit",
		Reset => "reset",
	}
}

option_enum! {
	/// `type` of a single-line text input.
	pub enum InputType: "type" {
		Text => "text",
		Email => "email",
		Password => "password",
		Number => "number",
		Tel => "tel",
		Url => "url",
		Search => "search",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::options::OptionEnum;
	use rstest::rstest;
	use std::str::FromStr;

	#[rstest]
	fn test_variant_as_str() {
		assert_eq!(Variant::Primary.as_str(), "primary");
		assert_eq!(Variant::Dark.to_string(), "dark");
		assert_eq!(Variant::ALLOWED.len(), 8);
	}

	#[rstest]
	#[case(Size::Small, Some("btn-sm"))]
	#[case(Size::Medium, None)]
	#[case(Size::Large, Some("btn-lg"))]
	#[case(Size::Xlarge, Some("btn-xl"))]
	fn test_size_class(#[case] size: Size, #[case] expected: Option<&str>) {
		assert_eq!(size.class_for("btn").as_deref(), expected);
	}

	#[rstest]
	#[case("top", Placement::Top)]
	#[case(":END", Placement::End)]
	fn test_placement_from_str(#[case] input: &str, #[case] expected: Placement) {
		assert_eq!(Placement::from_str(input).unwrap(), expected);
	}

	#[rstest]
	fn test_layout_rejects_unknown() {
		let err = "grid".parse::<Layout>().unwrap_err();
		assert_eq!(
			err.to_string(),
			"invalid value 'grid' for option 'layout', expected one of: vertical, horizontal, inline"
		);
	}

	#[rstest]
	fn test_enum_serde_uses_canonical_spelling() {
		let size: Size = serde_json::from_str("\":Large\"").unwrap();
		assert_eq!(size, Size::Large);
		assert_eq!(serde_json::to_string(&InputType::Email).unwrap(), "\"email\"");
		assert!(serde_json::from_str::<Size>("\"huge\"").is_err());
	}
}
