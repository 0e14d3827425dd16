//! UI component module.
//!
//! Form fields, navigation and display widgets configured from JSON options.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "components")]
//! # {
//! use reinhardt_ui::components::{Component, FromOptions, RadioGroup};
//! use serde_json::json;
//!
//! let html = RadioGroup::from_json(json!({
//!     "name": "plan",
//!     "value": "pro-plan-$19",
//!     "choices": ["free", "pro-plan-$19"],
//! }))
//! .unwrap()
//! .render();
//!
//! assert!(html.as_str().contains(r#"id="plan_pro-plan-_19""#));
//! # }
//! ```

#[cfg(feature = "components")]
pub use reinhardt_pages_components::*;
