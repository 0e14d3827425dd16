//! Message catalog for storing translations

use std::collections::HashMap;

/// Plural rule families, selected from the language part of a locale.
///
/// Each rule maps a count to an index into the catalog's plural forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
	/// One form for every count (ja, zh, ko, ...).
	Single,
	/// `1` is singular, everything else plural (en, de, nl, ...).
	OneOther,
	/// `0` and `1` are singular (fr, pt-BR).
	ZeroOneOther,
	/// Three forms driven by the last two digits (ru, uk, sr, ...).
	EastSlavic,
	/// Like [`PluralRule::EastSlavic`] but only exactly `1` is singular.
	Polish,
	/// `1`, `2..=4`, everything else (cs, sk).
	Czech,
	/// Six forms: zero, one, two, few, many, other.
	Arabic,
}

impl PluralRule {
	/// Selects the rule for `locale` (`ru`, `ru-RU` and `ru_RU` all match).
	pub fn for_locale(locale: &str) -> Self {
		let lang = locale.split(['-', '_']).next().unwrap_or(locale);
		match lang {
			"ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "tr" | "fa" | "ka" => Self::Single,
			"fr" => Self::ZeroOneOther,
			"pt" if matches!(locale.get(2..), Some("-BR" | "_BR" | "-br" | "_br")) => {
				Self::ZeroOneOther
			}
			"ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::EastSlavic,
			"pl" => Self::Polish,
			"cs" | "sk" => Self::Czech,
			"ar" => Self::Arabic,
			_ => Self::OneOther,
		}
	}

	/// Returns the plural form index for `count`.
	pub fn index(self, count: usize) -> usize {
		let n10 = count % 10;
		let n100 = count % 100;
		let few = (2..=4).contains(&n10) && !(10..20).contains(&n100);
		match self {
			Self::Single => 0,
			Self::OneOther => usize::from(count != 1),
			Self::ZeroOneOther => usize::from(count > 1),
			Self::EastSlavic if n10 == 1 && n100 != 11 => 0,
			Self::EastSlavic if few => 1,
			Self::EastSlavic => 2,
			Self::Polish if count == 1 => 0,
			Self::Polish if few => 1,
			Self::Polish => 2,
			Self::Czech => match count {
				1 => 0,
				2..=4 => 1,
				_ => 2,
			},
			Self::Arabic => match (count, n100) {
				(0, _) => 0,
				(1, _) => 1,
				(2, _) => 2,
				(_, 3..=10) => 3,
				(_, 11..) => 4,
				_ => 5,
			},
		}
	}
}

/// A message catalog containing translations for a specific locale
///
/// Keys are full dotted keys such as `components.alert.close`.
///
/// # Example
/// ```
/// use reinhardt_i18n::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("fr");
/// catalog.add("components.alert.close", "Fermer");
/// catalog.add_plural("components.select.selected", vec!["%(count)d choix", "%(count)d choix"]);
///
/// assert_eq!(catalog.get("components.alert.close"), Some("Fermer"));
/// assert_eq!(catalog.get_plural("components.select.selected", 0), Some("%(count)d choix"));
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	locale: String,
	rule: PluralRule,
	messages: HashMap<String, String>,
	plurals: HashMap<String, Vec<String>>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			rule: PluralRule::for_locale(locale),
			messages: HashMap::new(),
			plurals: HashMap::new(),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	pub fn plural_rule(&self) -> PluralRule {
		self.rule
	}

	/// Add a simple translation
	pub fn add(&mut self, key: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(key.into(), translation.into());
	}

	/// Add a plural translation, forms ordered by the locale's plural rule
	pub fn add_plural<S: Into<String>>(&mut self, key: impl Into<String>, forms: Vec<S>) {
		self.plurals
			.insert(key.into(), forms.into_iter().map(Into::into).collect());
	}

	/// Builder-style [`MessageCatalog::add`].
	pub fn with(mut self, key: impl Into<String>, translation: impl Into<String>) -> Self {
		self.add(key, translation);
		self
	}

	/// Get a translation
	pub fn get(&self, key: &str) -> Option<&str> {
		self.messages.get(key).map(String::as_str)
	}

	/// Get a plural translation
	///
	/// Returns `None` when the key is unknown or the catalog lacks the form
	/// the plural rule selects.
	pub fn get_plural(&self, key: &str, count: usize) -> Option<&str> {
		let forms = self.plurals.get(key)?;
		forms.get(self.rule.index(count)).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.messages.len() + self.plurals.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty() && self.plurals.is_empty()
	}
}
