//! The normalized options record shared by every component.

use super::{FieldValue, RawOptions, normalize_messages};
use crate::component::Size;
use crate::error::{InvalidOption, Result};
use crate::options::OptionEnum;
use crate::settings::UiSettings;
use reinhardt_html::{AttributeValue, Attributes, derive_id};

/// Static description of a component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSpec {
	pub name: &'static str,
	/// Translation scope, e.g. `components.alert`.
	pub i18n_scope: &'static str,
	/// Sizes the component accepts.
	pub allowed_sizes: &'static [Size],
	/// The component's own default, ahead of [`UiSettings::default_size`].
	pub default_size: Option<Size>,
	/// Components that cannot show a placeholder drop it during normalization.
	pub supports_placeholder: bool,
	pub requires_name: bool,
}

impl ComponentSpec {
	/// A form field: named, sized small to large, placeholder allowed.
	pub const fn field(name: &'static str, i18n_scope: &'static str) -> Self {
		Self {
			name,
			i18n_scope,
			allowed_sizes: &[Size::Small, Size::Medium, Size::Large],
			default_size: None,
			supports_placeholder: true,
			requires_name: true,
		}
	}

	/// A display component: unnamed, unsized, no placeholder.
	pub const fn display(name: &'static str, i18n_scope: &'static str) -> Self {
		Self {
			name,
			i18n_scope,
			allowed_sizes: &[],
			default_size: None,
			supports_placeholder: false,
			requires_name: false,
		}
	}

	pub const fn sizes(mut self, allowed_sizes: &'static [Size]) -> Self {
		self.allowed_sizes = allowed_sizes;
		self
	}

	pub const fn default_size(mut self, size: Size) -> Self {
		self.default_size = Some(size);
		self
	}

	pub const fn without_placeholder(mut self) -> Self {
		self.supports_placeholder = false;
		self
	}

	/// Resolves the size: explicit, then the component default, then settings.
	///
	/// The settings default only applies when the component accepts it.
	fn resolve_size(&self, explicit: Option<Size>, settings: &UiSettings) -> Option<Size> {
		explicit.or(self.default_size).or_else(|| {
			self.allowed_sizes
				.contains(&settings.default_size)
				.then_some(settings.default_size)
		})
	}

	fn check_size(&self, size: Size) -> Result<Size> {
		if self.allowed_sizes.contains(&size) {
			Ok(size)
		} else {
			let allowed: Vec<&str> = self.allowed_sizes.iter().map(Size::as_str).collect();
			Err(InvalidOption::unknown_value(Size::KEY, size.as_str(), &allowed))
		}
	}
}

/// Validated options common to all components.
///
/// Constructed once per render, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentOptions {
	pub name: String,
	id: Option<String>,
	pub value: FieldValue,
	pub size: Option<Size>,
	pub required: bool,
	pub disabled: bool,
	pub readonly: bool,
	pub label: Option<String>,
	pub hint: Option<String>,
	/// Normalized error text; `Some` means the field is invalid.
	pub error: Option<String>,
	pub placeholder: Option<String>,
	/// Passthrough attributes, without `class`.
	pub html_attributes: Attributes,
	/// User classes, appended after every computed class.
	pub class: Option<String>,
}

impl ComponentOptions {
	/// Normalizes the common keys of `raw`.
	///
	/// Consumed keys: `name`, `id`, `value`, `size`, `required`, `disabled`,
	/// `readonly`, `label`, `hint`, `error`, `placeholder`,
	/// `html_attributes` and `class`. Component-specific keys stay in `raw`.
	pub fn normalize(
		raw: &mut RawOptions,
		spec: &ComponentSpec,
		settings: &UiSettings,
	) -> Result<Self> {
		let size = raw.choice_in(spec.allowed_sizes)?;

		if !spec.supports_placeholder && raw.remove("placeholder").is_some() {
			tracing::debug!(component = spec.name, "dropping unsupported placeholder option");
		}

		let builder = ComponentOptionsBuilder {
			name: raw.string("name")?.unwrap_or_default(),
			id: raw.text("id")?,
			value: raw.value("value")?,
			size,
			required: raw.flag("required")?,
			disabled: raw.flag("disabled")?,
			readonly: raw.flag("readonly")?,
			label: raw.text("label")?,
			hint: raw.messages("hint")?,
			error: raw.messages("error")?,
			placeholder: raw.string("placeholder")?,
			html_attributes: raw.attributes("html_attributes")?,
			class: raw.text("class")?,
		};
		builder.build_with(spec, settings)
	}

	/// Starts a typed builder.
	///
	/// ```
	/// use reinhardt_pages_components::{ComponentOptions, ComponentSpec, Size, UiSettings};
	///
	/// const SPEC: ComponentSpec = ComponentSpec::field("text_field", "components.text_field");
	///
	/// let options = ComponentOptions::builder("user[email]")
	///     .size(Size::Large)
	///     .errors(["is required", "is too short"])
	///     .build_with(&SPEC, &UiSettings::default())
	///     .unwrap();
	///
	/// assert_eq!(options.id(), "user_email");
	/// assert_eq!(options.error.as_deref(), Some("is required, is too short"));
	/// ```
	pub fn builder(name: impl Into<String>) -> ComponentOptionsBuilder {
		ComponentOptionsBuilder {
			name: name.into(),
			..ComponentOptionsBuilder::default()
		}
	}

	/// The element id: explicit, or derived from `name`.
	pub fn id(&self) -> &str {
		self.id.as_deref().unwrap_or_default()
	}

	/// The id as an optional attribute value, for components where it is optional.
	pub fn element_id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Returns `true` if the field carries an error.
	pub fn has_error(&self) -> bool {
		self.error.is_some()
	}

	/// Returns `true` if interactive affordances must be suppressed.
	pub fn is_locked(&self) -> bool {
		self.disabled || self.readonly
	}
}

/// Typed construction of [`ComponentOptions`].
#[derive(Debug, Clone, Default)]
pub struct ComponentOptionsBuilder {
	name: String,
	id: Option<String>,
	value: FieldValue,
	size: Option<Size>,
	required: bool,
	disabled: bool,
	readonly: bool,
	label: Option<String>,
	hint: Option<String>,
	error: Option<String>,
	placeholder: Option<String>,
	html_attributes: Attributes,
	class: Option<String>,
}

impl ComponentOptionsBuilder {
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
		self.value = value.into();
		self
	}

	pub fn size(mut self, size: Size) -> Self {
		self.size = Some(size);
		self
	}

	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	pub fn readonly(mut self, readonly: bool) -> Self {
		self.readonly = readonly;
		self
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn hint(mut self, hint: impl Into<String>) -> Self {
		self.hint = Some(hint.into());
		self
	}

	pub fn error(mut self, error: impl Into<String>) -> Self {
		self.error = Some(error.into());
		self
	}

	/// Sets several error messages; they are joined with `", "`.
	pub fn errors<I, S>(mut self, errors: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let errors: Vec<serde_json::Value> = errors
			.into_iter()
			.map(|e| serde_json::Value::String(e.into()))
			.collect();
		self.error = normalize_messages("error", &serde_json::Value::Array(errors))
			.ok()
			.flatten();
		self
	}

	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Merges passthrough attributes. A `class` entry moves to [`Self::class`].
	pub fn attributes(mut self, attributes: Attributes) -> Self {
		self.html_attributes.deep_merge(attributes);
		self
	}

	pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.html_attributes.insert(name, value);
		self
	}

	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Validates against `spec` using the process-wide settings.
	pub fn build(self, spec: &ComponentSpec) -> Result<ComponentOptions> {
		self.build_with(spec, UiSettings::global())
	}

	/// Validates against `spec` and fills defaults from `settings`.
	pub fn build_with(
		mut self,
		spec: &ComponentSpec,
		settings: &UiSettings,
	) -> Result<ComponentOptions> {
		let name = self.name.trim().to_string();
		if spec.requires_name && name.is_empty() {
			return Err(InvalidOption::missing("name"));
		}

		let size = match self.size {
			Some(size) => Some(spec.check_size(size)?),
			None => spec.resolve_size(None, settings),
		};

		let id = self
			.id
			.filter(|id| !id.trim().is_empty())
			.or_else(|| (!name.is_empty()).then(|| derive_id(&name)));

		let mut class = self.html_attributes.class();
		self.html_attributes.remove("class");
		if let Some(extra) = self.class.filter(|c| !c.trim().is_empty()) {
			class = Some(match class {
				Some(existing) => format!("{} {}", existing, extra),
				None => extra,
			});
		}

		let placeholder = if spec.supports_placeholder {
			self.placeholder
		} else {
			None
		};

		Ok(ComponentOptions {
			name,
			id,
			value: self.value,
			size,
			required: self.required,
			disabled: self.disabled,
			readonly: self.readonly,
			label: self.label.filter(|l| !l.trim().is_empty()),
			hint: self.hint.filter(|h| !h.trim().is_empty()),
			error: self.error.filter(|e| !e.trim().is_empty()),
			placeholder,
			html_attributes: self.html_attributes,
			class,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	const FIELD: ComponentSpec = ComponentSpec::field("text_field", "components.text_field");
	const CHECKBOX: ComponentSpec =
		ComponentSpec::field("checkbox", "components.checkbox").without_placeholder();
	const BUTTON: ComponentSpec = ComponentSpec::display("button", "components.button")
		.sizes(&[Size::Small, Size::Medium, Size::Large, Size::Xlarge])
		.default_size(Size::Medium);

	fn normalize(spec: &ComponentSpec, value: serde_json::Value) -> Result<ComponentOptions> {
		let mut raw = RawOptions::new(spec.name, value)?;
		ComponentOptions::normalize(&mut raw, spec, &UiSettings::default())
	}

	#[rstest]
	fn test_normalize_common_keys() {
		// Act
		let options = normalize(
			&FIELD,
			json!({
				"name": "user[email]",
				"value": "a@example.com",
				"size": "small",
				"required": true,
				"label": "Email",
				"hint": "We never share it",
				"error": ["is invalid", "is taken"],
				"html_attributes": {"class": "from-attrs", "data": {"controller": "x"}},
				"class": "mt-2",
			}),
		)
		.unwrap();

		// Assert
		assert_eq!(options.name, "user[email]");
		assert_eq!(options.id(), "user_email");
		assert_eq!(options.value, FieldValue::Single("a@example.com".into()));
		assert_eq!(options.size, Some(Size::Small));
		assert!(options.required);
		assert!(!options.disabled);
		assert_eq!(options.error.as_deref(), Some("is invalid, is taken"));
		assert_eq!(options.class.as_deref(), Some("from-attrs mt-2"));
		assert!(!options.html_attributes.contains_key("class"));
		assert_eq!(
			options.html_attributes.flatten().value("data-controller"),
			Some("x")
		);
	}

	#[rstest]
	fn test_explicit_id_wins() {
		let options = normalize(&FIELD, json!({"name": "user[email]", "id": "custom"})).unwrap();
		assert_eq!(options.id(), "custom");
	}

	#[rstest]
	fn test_name_is_required_for_fields() {
		let err = normalize(&FIELD, json!({"label": "x"})).unwrap_err();
		assert_eq!(err, InvalidOption::Missing { key: "name".into() });
	}

	#[rstest]
	fn test_size_outside_component_subset_is_rejected() {
		let err = normalize(&FIELD, json!({"name": "q", "size": "xlarge"})).unwrap_err();
		assert_eq!(
			err.to_string(),
			"invalid value 'xlarge' for option 'size', expected one of: small, medium, large"
		);
	}

	#[rstest]
	fn test_size_on_unsized_component_is_rejected() {
		const TOOLTIP: ComponentSpec = ComponentSpec::display("tooltip", "components.tooltip");
		assert!(normalize(&TOOLTIP, json!({"size": "small"})).is_err());
	}

	#[rstest]
	#[case(None, Size::Medium, Some(Size::Medium))]
	#[case(None, Size::Large, Some(Size::Large))]
	#[case(None, Size::Xlarge, None)]
	#[case(Some(Size::Small), Size::Large, Some(Size::Small))]
	fn test_size_defaulting_order(
		#[case] explicit: Option<Size>,
		#[case] global: Size,
		#[case] expected: Option<Size>,
	) {
		let settings = UiSettings {
			default_size: global,
			..UiSettings::default()
		};
		let mut builder = ComponentOptions::builder("q");
		if let Some(size) = explicit {
			builder = builder.size(size);
		}

		let options = builder.build_with(&FIELD, &settings).unwrap();

		assert_eq!(options.size, expected);
	}

	#[rstest]
	fn test_component_default_beats_settings() {
		let settings = UiSettings {
			default_size: Size::Large,
			..UiSettings::default()
		};
		let options = ComponentOptions::builder("")
			.build_with(&BUTTON, &settings)
			.unwrap();
		assert_eq!(options.size, Some(Size::Medium));
	}

	#[rstest]
	fn test_placeholder_stripped_when_unsupported() {
		let options = normalize(&CHECKBOX, json!({"name": "terms", "placeholder": "x"})).unwrap();
		assert_eq!(options.placeholder, None);

		let typed = ComponentOptions::builder("terms")
			.placeholder("x")
			.build_with(&CHECKBOX, &UiSettings::default())
			.unwrap();
		assert_eq!(typed.placeholder, None);
	}

	#[rstest]
	#[case(json!([]))]
	#[case(json!(""))]
	#[case(json!(null))]
	fn test_empty_error_is_none(#[case] error: serde_json::Value) {
		let options = normalize(&FIELD, json!({"name": "q", "error": error})).unwrap();
		assert!(!options.has_error());
	}

	#[rstest]
	fn test_locked_flags() {
		let options = normalize(&FIELD, json!({"name": "q", "readonly": true})).unwrap();
		assert!(options.is_locked());
	}

	#[rstest]
	fn test_builder_errors_skip_blank_messages() {
		let options = ComponentOptions::builder("q")
			.errors(["", "bad"])
			.build_with(&FIELD, &UiSettings::default())
			.unwrap();
		assert_eq!(options.error.as_deref(), Some("bad"));

		let none = ComponentOptions::builder("q")
			.errors(Vec::<String>::new())
			.build_with(&FIELD, &UiSettings::default())
			.unwrap();
		assert_eq!(none.error, None);
	}
}
