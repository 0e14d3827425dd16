//! The component catalog.
//!
//! Form fields share [`crate::field::FieldBase`] for their label, ARIA
//! wiring and hint/error text. Display components apply the caller's
//! classes and passthrough attributes to their outermost element.

mod choice;
mod nav_item;

pub mod alert;
pub mod auto_refresh;
pub mod badge;
pub mod breadcrumbs;
pub mod button;
pub mod checkbox;
pub mod checkbox_group;
pub mod date_range_picker;
pub mod dropdown;
pub mod radio_group;
pub mod select;
pub mod text_area;
pub mod text_field;
pub mod tooltip;

pub use alert::Alert;
pub use auto_refresh::AutoRefresh;
pub use badge::Badge;
pub use breadcrumbs::Breadcrumbs;
pub use button::Button;
pub use checkbox::Checkbox;
pub use checkbox_group::CheckboxGroup;
pub use choice::Choice;
pub use date_range_picker::DateRangePicker;
pub use dropdown::Dropdown;
pub use nav_item::NavItem;
pub use radio_group::RadioGroup;
pub use select::Select;
pub use text_area::TextArea;
pub use text_field::TextField;
pub use tooltip::Tooltip;
