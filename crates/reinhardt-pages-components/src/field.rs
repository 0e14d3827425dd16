//! Shared markup for form fields.
//!
//! Every form component renders the same scaffolding around its control:
//! a label, the control's id/name/ARIA wiring, and either a hint or an
//! error message. [`FieldBase`] computes those pieces from normalized
//! [`ComponentOptions`] so that the accessibility invariants hold for every
//! field:
//!
//! - an error marks the control `aria-invalid="true"`, links
//!   `aria-describedby` to the error element and hides the hint;
//! - otherwise a hint, when present, is linked instead;
//! - user attributes can add to the control but never replace `id`, `name`,
//!   `type` or the ARIA links computed here.

use crate::component::Size;
use crate::options::ComponentOptions;
use reinhardt_html::{AttributeValue, Attributes, ClassList, Facet, Page, PageElement, first_active};

/// Attribute names computed by [`FieldBase`] that user attributes cannot replace.
const PROTECTED: &[&str] = &["id", "name", "type", "aria-invalid", "aria-describedby"];

/// Boolean attributes that always mirror the normalized options, including
/// when the option is false.
const FLAGS: &[&str] = &["required", "disabled", "readonly"];

/// Visual and semantic state of a field.
///
/// Exactly one state applies; precedence is error, disabled, readonly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldState {
	Normal,
	Readonly,
	Disabled,
	Error,
}

impl FieldState {
	pub fn resolve(options: &ComponentOptions) -> Self {
		first_active(
			&[
				(options.has_error(), Self::Error),
				(options.disabled, Self::Disabled),
				(options.readonly, Self::Readonly),
			],
			Self::Normal,
		)
	}

	/// Class for the state facet.
	pub fn class(self) -> Option<&'static str> {
		match self {
			Self::Normal => None,
			Self::Readonly => Some("is-readonly"),
			Self::Disabled => Some("is-disabled"),
			Self::Error => Some("is-invalid"),
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Normal => "normal",
			Self::Readonly => "readonly",
			Self::Disabled => "disabled",
			Self::Error => "error",
		}
	}
}

/// Field scaffolding computed from normalized options.
#[derive(Debug, Clone)]
pub struct FieldBase<'a> {
	options: &'a ComponentOptions,
	state: FieldState,
}

impl<'a> FieldBase<'a> {
	pub fn new(options: &'a ComponentOptions) -> Self {
		Self {
			options,
			state: FieldState::resolve(options),
		}
	}

	pub fn options(&self) -> &'a ComponentOptions {
		self.options
	}

	pub fn id(&self) -> &'a str {
		self.options.id()
	}

	pub fn name(&self) -> &'a str {
		&self.options.name
	}

	pub fn state(&self) -> FieldState {
		self.state
	}

	pub fn error_id(&self) -> String {
		format!("{}_error", self.id())
	}

	pub fn hint_id(&self) -> String {
		format!("{}_hint", self.id())
	}

	/// The element the control is described by: the error, else the hint.
	pub fn described_by(&self) -> Option<String> {
		if self.options.has_error() {
			Some(self.error_id())
		} else if self.options.hint.is_some() {
			Some(self.hint_id())
		} else {
			None
		}
	}

	/// Attributes of the control, including the single value when present.
	pub fn input_attributes(&self) -> Attributes {
		self.input_attributes_with(Attributes::new())
	}

	/// Attributes of the control, with `leading` rendered first.
	///
	/// `leading` carries component-specific attributes such as `type`.
	pub fn input_attributes_with(&self, leading: Attributes) -> Attributes {
		let options = self.options;
		let mut computed = leading;
		if !self.id().is_empty() {
			computed.insert("id", self.id());
		}
		computed.insert("name", options.name.as_str());
		if let Some(value) = options.value.as_single() {
			computed.insert("value", value);
		}
		computed.insert("required", options.required);
		computed.insert("disabled", options.disabled);
		computed.insert("readonly", options.readonly);
		if options.has_error() {
			computed.insert("aria-invalid", "true");
		}
		computed.insert("aria-describedby", self.described_by());
		self.merge_user_attributes(computed)
	}

	/// Attributes of a group container (`role="radiogroup"` and friends).
	///
	/// Grouped inputs carry the ARIA links on the container instead of on
	/// each input.
	pub fn group_attributes(&self, leading: Attributes) -> Attributes {
		let mut computed = leading;
		if self.options.has_error() {
			computed.insert("aria-invalid", "true");
		}
		computed.insert("aria-describedby", self.described_by());
		self.merge_user_attributes(computed)
	}

	fn merge_user_attributes(&self, computed: Attributes) -> Attributes {
		let mut attrs = computed.clone();
		attrs.deep_merge(self.user_attributes(&computed));
		for key in PROTECTED {
			if let Some(value) = computed.get(key).filter(|v| !v.is_absent()) {
				attrs.insert(*key, value.clone());
			}
		}
		for key in FLAGS {
			if let Some(value) = computed.get(key) {
				attrs.insert(*key, value.clone());
			}
		}
		attrs
	}

	/// User attributes with nested spellings of computed keys removed.
	///
	/// `{aria: {describedby: ..}}` would otherwise flatten onto a computed
	/// `aria-describedby` and replace it.
	fn user_attributes(&self, computed: &Attributes) -> Attributes {
		let mut user = self.options.html_attributes.clone();
		for key in PROTECTED {
			if computed.get(key).is_none_or(AttributeValue::is_absent) {
				continue;
			}
			if let Some((parent, child)) = key.split_once('-')
				&& let Some(AttributeValue::Map(nested)) = user.get_mut(parent)
			{
				nested.remove(child);
			}
		}
		user
	}

	/// Classes of the control: `base`, the size class, the state class, then
	/// the user's classes.
	///
	/// `size_prefix` names the size class family (`form-control` gives
	/// `form-control-sm`); `None` means the control is unsized.
	pub fn input_classes(&self, base: &str, size_prefix: Option<&str>) -> ClassList {
		let mut classes = ClassList::new().base(base);
		if let Some(class) = size_prefix.and_then(|prefix| self.size_class(prefix)) {
			classes.add(Facet::Size, &class);
		}
		if let Some(class) = self.state.class() {
			classes.add(Facet::State, class);
		}
		if let Some(class) = &self.options.class {
			classes.add(Facet::Override, class);
		}
		classes
	}

	fn size_class(&self, prefix: &str) -> Option<String> {
		self.options.size.and_then(|size: Size| size.class_for(prefix))
	}

	/// `<label>` for the control, with a required marker.
	pub fn label(&self) -> Page {
		self.label_with_class("form-label")
	}

	pub fn label_with_class(&self, class: &str) -> Page {
		let Some(text) = &self.options.label else {
			return Page::empty();
		};
		let mut label = Page::element("label")
			.add_class(Facet::Base, class)
			.attr("for", self.id())
			.child(text.clone());
		if self.options.required {
			label.add_child(required_marker());
		}
		label.into()
	}

	pub fn label_id(&self) -> String {
		format!("{}_label", self.id())
	}

	/// Caption for a group of inputs, referenced through `aria-labelledby`.
	pub fn group_label(&self) -> Page {
		let Some(text) = &self.options.label else {
			return Page::empty();
		};
		let mut caption = Page::element("div")
			.add_class(Facet::Base, "form-label")
			.attr("id", self.label_id())
			.child(text.clone());
		if self.options.required {
			caption.add_child(required_marker());
		}
		caption.into()
	}

	/// The error message, or the hint when there is no error.
	pub fn hint_or_error(&self) -> Page {
		if let Some(error) = &self.options.error {
			return Page::element("div")
				.add_class(Facet::Base, "invalid-feedback")
				.attr("id", self.error_id())
				.attr("role", "alert")
				.child(error.clone())
				.into();
		}
		match &self.options.hint {
			Some(hint) => Page::element("div")
				.add_class(Facet::Base, "form-text")
				.attr("id", self.hint_id())
				.child(hint.clone())
				.into(),
			None => Page::empty(),
		}
	}

	/// Wrapper element carrying the field state.
	pub fn wrap(&self, class: &str) -> PageElement {
		Page::element("div")
			.add_class(Facet::Base, class)
			.attr("data-field-state", self.state.as_str())
	}
}

fn required_marker() -> PageElement {
	Page::element("span")
		.add_class(Facet::Base, "required")
		.attr("aria-hidden", "true")
		.child("*")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::options::ComponentSpec;
	use crate::settings::UiSettings;
	use rstest::rstest;

	const SPEC: ComponentSpec = ComponentSpec::field("text_field", "components.text_field");

	fn options(builder: crate::options::ComponentOptionsBuilder) -> ComponentOptions {
		builder.build_with(&SPEC, &UiSettings::default()).unwrap()
	}

	#[rstest]
	#[case(true, true, true, FieldState::Error)]
	#[case(false, true, true, FieldState::Disabled)]
	#[case(false, false, true, FieldState::Readonly)]
	#[case(false, false, false, FieldState::Normal)]
	fn test_state_precedence(
		#[case] error: bool,
		#[case] disabled: bool,
		#[case] readonly: bool,
		#[case] expected: FieldState,
	) {
		let mut builder = ComponentOptions::builder("q").disabled(disabled).readonly(readonly);
		if error {
			builder = builder.error("bad");
		}
		assert_eq!(FieldState::resolve(&options(builder)), expected);
	}

	#[rstest]
	fn test_error_wins_over_hint() {
		// Arrange
		let options = options(
			ComponentOptions::builder("user[email]")
				.hint("We never share it")
				.error("is invalid"),
		);
		let field = FieldBase::new(&options);

		// Act
		let flat = field.input_attributes().flatten();
		let message = field.hint_or_error().render();

		// Assert
		assert_eq!(flat.value("aria-invalid"), Some("true"));
		assert_eq!(flat.value("aria-describedby"), Some("user_email_error"));
		assert!(message.as_str().contains("is invalid"));
		assert!(!message.as_str().contains("never share"));
	}

	#[rstest]
	fn test_hint_is_linked_without_error() {
		let options = options(ComponentOptions::builder("q").hint("Search terms"));
		let field = FieldBase::new(&options);

		let flat = field.input_attributes().flatten();

		assert!(!flat.contains("aria-invalid"));
		assert_eq!(flat.value("aria-describedby"), Some("q_hint"));
		assert_eq!(
			field.hint_or_error().render().as_str(),
			r#"<div class="form-text" id="q_hint">Search terms</div>"#
		);
	}

	#[rstest]
	fn test_user_attributes_cannot_replace_computed_links() {
		let options = options(
			ComponentOptions::builder("q")
				.error("bad")
				.attribute("id", "hijack")
				.attribute(
					"aria",
					Attributes::new()
						.with("describedby", "other")
						.with("label", "Query"),
				)
				.attribute("data", Attributes::new().with("controller", "x")),
		);
		let field = FieldBase::new(&options);

		let flat = field.input_attributes().flatten();

		assert_eq!(flat.value("id"), Some("q"));
		assert_eq!(flat.value("aria-describedby"), Some("q_error"));
		assert_eq!(flat.value("aria-label"), Some("Query"));
		assert_eq!(flat.value("data-controller"), Some("x"));
	}

	#[rstest]
	fn test_user_describedby_kept_when_nothing_computed() {
		let options = options(
			ComponentOptions::builder("q")
				.attribute("aria", Attributes::new().with("describedby", "tip")),
		);
		let flat = FieldBase::new(&options).input_attributes().flatten();
		assert_eq!(flat.value("aria-describedby"), Some("tip"));
	}

	#[rstest]
	#[case(true, false)]
	#[case(false, true)]
	fn test_flags_follow_options_not_user_attributes(#[case] option: bool, #[case] user: bool) {
		// Arrange
		let options = options(
			ComponentOptions::builder("email")
				.required(option)
				.disabled(option)
				.readonly(option)
				.attribute("required", user)
				.attribute("disabled", user)
				.attribute("readonly", user),
		);

		// Act
		let flat = FieldBase::new(&options).input_attributes().flatten();

		// Assert
		for flag in ["required", "disabled", "readonly"] {
			assert_eq!(flat.contains(flag), option, "{flag}");
		}
	}

	#[rstest]
	#[case(true)]
	#[case(false)]
	fn test_required_presence(#[case] required: bool) {
		let options = options(ComponentOptions::builder("q").required(required));
		let rendered = Page::from(
			Page::element("input").attrs(FieldBase::new(&options).input_attributes()),
		)
		.render()
		.into_string();

		assert_eq!(rendered.contains(" required"), required);
		assert!(!rendered.contains("\"false\""));
	}

	#[rstest]
	fn test_input_classes_order() {
		let options = options(
			ComponentOptions::builder("q")
				.size(Size::Small)
				.error("bad")
				.class("mt-2"),
		);
		let classes = FieldBase::new(&options).input_classes("form-control", Some("form-control"));
		assert_eq!(
			classes.to_class_string(),
			"form-control form-control-sm is-invalid mt-2"
		);
	}

	#[rstest]
	fn test_label_marks_required() {
		let options = options(ComponentOptions::builder("q").label("Query").required(true));
		assert_eq!(
			FieldBase::new(&options).label().render().as_str(),
			r#"<label class="form-label" for="q">Query<span class="required" aria-hidden="true">*</span></label>"#
		);
	}
}
