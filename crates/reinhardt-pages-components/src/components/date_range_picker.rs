//! Start/end date inputs constrained to a range.

use crate::component::{Component, FromOptions, RenderContext, merge_defaults};
use crate::error::Result;
use crate::field::FieldBase;
use crate::options::{ComponentOptions, ComponentSpec, DATE_FORMAT, DateRange, RawOptions};
use crate::settings::UiSettings;
use reinhardt_html::{Attributes, ClassList, Facet, Page, PageElement, derive_id_with};

/// Two `type="date"` inputs named `{name}[start]` and `{name}[end]`.
///
/// `value` may hold `[start, end]`. `min` and `max` bound both inputs and
/// are validated on construction:
///
/// ```
/// use reinhardt_pages_components::{DateRangePicker, FromOptions};
/// use serde_json::json;
///
/// let err = DateRangePicker::from_json(json!({
///     "name": "stay",
///     "min": "2024-01-01",
///     "max": "2023-01-01",
/// }))
/// .unwrap_err();
/// assert!(err.to_string().starts_with("min date 2024-01-01 cannot be greater than max date"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DateRangePicker {
	options: ComponentOptions,
	range: DateRange,
}

impl DateRangePicker {
	pub fn new(options: ComponentOptions, range: DateRange) -> Self {
		Self { options, range }
	}

	pub fn range(&self) -> &DateRange {
		&self.range
	}

	fn bound_attributes(&self) -> Attributes {
		let format = |date: chrono::NaiveDate| date.format(DATE_FORMAT).to_string();
		Attributes::new()
			.with("min", self.range.min().map(format))
			.with("max", self.range.max().map(format))
	}

	fn endpoint(
		&self,
		field: &FieldBase<'_>,
		classes: &ClassList,
		part: &str,
		label: String,
		value: Option<&str>,
	) -> [PageElement; 2] {
		let options = &self.options;
		let id = derive_id_with(options.id(), part);
		let input = Page::element("input")
			.classes(classes)
			.attr("type", "date")
			.attr("id", id.as_str())
			.attr("name", format!("{}[{}]", field.name(), part))
			.attr("value", value)
			.attrs(self.bound_attributes())
			.bool_attr("required", options.required)
			.bool_attr("disabled", options.disabled)
			.bool_attr("readonly", options.readonly)
			.attr(
				"data",
				Attributes::new().with("date-range-picker-target", part),
			);
		let label = Page::element("label")
			.add_class(Facet::Base, "form-label")
			.attr("for", id)
			.child(label);
		[label, input]
	}
}

impl FromOptions for DateRangePicker {
	const SPEC: ComponentSpec =
		ComponentSpec::field("date_range_picker", "components.date_range_picker");

	fn from_raw(raw: &mut RawOptions, settings: &UiSettings) -> Result<Self> {
		let options = ComponentOptions::normalize(raw, &Self::SPEC, settings)?;
		let min = raw.string("min")?;
		let max = raw.string("max")?;
		let range = DateRange::parse(min.as_deref(), max.as_deref())?;
		Ok(Self::new(options, range))
	}
}

impl Component for DateRangePicker {
	fn name(&self) -> &'static str {
		Self::SPEC.name
	}

	fn i18n_scope(&self) -> &'static str {
		Self::SPEC.i18n_scope
	}

	fn to_page(&self, ctx: &RenderContext<'_>) -> Page {
		let field = FieldBase::new(&self.options);
		let values = self.options.value.values();
		let classes = field.input_classes("form-control", Some("form-control"));

		let mut leading = Attributes::new().with("role", "group");
		if self.options.label.is_some() {
			leading.insert("aria-labelledby", field.label_id());
		}
		let mut attrs = field.group_attributes(leading);
		merge_defaults(
			&mut attrs,
			"data",
			Attributes::new().with("controller", "date-range-picker"),
		);

		let start = self.endpoint(
			&field,
			&classes,
			"start",
			self.t(ctx, "start", "Start date", &[]),
			values.first().copied(),
		);
		let end = self.endpoint(
			&field,
			&classes,
			"end",
			self.t(ctx, "end", "End date", &[]),
			values.get(1).copied(),
		);

		field
			.wrap("date-range-picker")
			.attrs(attrs)
			.child(field.group_label())
			.child(
				Page::element("div")
					.add_class(Facet::Base, "date-range-picker-inputs")
					.children(start)
					.children(end),
			)
			.child(field.hint_or_error())
			.into()
	}
}
