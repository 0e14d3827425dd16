//! # Reinhardt i18n
//!
//! Translation lookup for server-rendered components.
//!
//! Component labels are looked up under a per-component scope
//! (`components.alert.close`) and always carry a default, so rendering never
//! fails because a catalog is missing or incomplete.
//!
//! ## Example
//!
//! ```
//! use reinhardt_i18n::{MessageCatalog, TranslationContext, translate};
//!
//! let mut fr = MessageCatalog::new("fr");
//! fr.add("components.alert.close", "Fermer");
//!
//! let mut ctx = TranslationContext::new("fr", "en");
//! ctx.add_catalog("fr", fr).unwrap();
//!
//! assert_eq!(translate(&ctx, "close", "components.alert", "Close", &[]), "Fermer");
//! assert_eq!(translate(&ctx, "open", "components.alert", "Open", &[]), "Open");
//! ```

pub mod catalog;
pub mod error;
pub mod translate;
pub mod translator;

pub use catalog::{MessageCatalog, PluralRule};
pub use error::{I18nError, Result};
pub use translate::{interpolate, scoped_key, translate, translate_plural};
pub use translator::{
	NullTranslator, TranslationContext, Translator, global, install, is_installed,
	normalize_locale,
};
