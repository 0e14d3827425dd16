//! Translation module.
//!
//! Message catalogs, locale fallback and the process-wide translator used by
//! component labels.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "i18n")]
//! # {
//! use reinhardt_ui::i18n::{MessageCatalog, TranslationContext, translate};
//!
//! let ctx = TranslationContext::new("fr", "en")
//!     .with_catalog(MessageCatalog::new("fr").with("components.alert.close", "Fermer"))
//!     .unwrap();
//!
//! assert_eq!(translate(&ctx, "close", "components.alert", "Close", &[]), "Fermer");
//! assert_eq!(translate(&ctx, "dismiss", "components.alert", "Dismiss", &[]), "Dismiss");
//! # }
//! ```

#[cfg(feature = "i18n")]
pub use reinhardt_i18n::*;
