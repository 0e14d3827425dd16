//! Scoped translation with mandatory defaults.

use crate::translator::Translator;

/// Joins a scope and a key into the full catalog key.
///
/// ```
/// use reinhardt_i18n::scoped_key;
///
/// assert_eq!(scoped_key("components.alert", "close"), "components.alert.close");
/// assert_eq!(scoped_key("", "close"), "close");
/// ```
pub fn scoped_key(scope: &str, key: &str) -> String {
	let scope = scope.trim_end_matches('.');
	if scope.is_empty() {
		key.to_string()
	} else {
		format!("{}.{}", scope, key)
	}
}

/// Translates `scope.key`, falling back to `default`.
///
/// Any lookup error (missing catalog, missing key, missing plural form) is
/// logged at debug level and replaced by `default`. `%(name)s` placeholders
/// are then filled from `args` in whichever string was selected.
pub fn translate(
	translator: &dyn Translator,
	key: &str,
	scope: &str,
	default: &str,
	args: &[(&str, &str)],
) -> String {
	let full_key = scoped_key(scope, key);
	let template = match translator.lookup(&full_key) {
		Ok(text) => text,
		Err(err) => {
			tracing::debug!(
				key = %full_key,
				locale = translator.locale(),
				error = %err,
				"translation missing, using default"
			);
			default.to_string()
		}
	};
	interpolate(&template, args)
}

/// Plural variant of [`translate`].
///
/// `count` is available to the template as `%(count)d` / `%(count)s`.
/// `defaults` is `(one, other)` and follows English rules when no
/// translation is found.
pub fn translate_plural(
	translator: &dyn Translator,
	key: &str,
	scope: &str,
	count: usize,
	defaults: (&str, &str),
	args: &[(&str, &str)],
) -> String {
	let full_key = scoped_key(scope, key);
	let template = translator
		.lookup_plural(&full_key, count)
		.unwrap_or_else(|err| {
			tracing::debug!(
				key = %full_key,
				locale = translator.locale(),
				error = %err,
				"plural translation missing, using default"
			);
			let (one, other) = defaults;
			(if count == 1 { one } else { other }).to_string()
		});

	let count = count.to_string();
	let mut all_args = Vec::with_capacity(args.len() + 1);
	all_args.push(("count", count.as_str()));
	all_args.extend_from_slice(args);
	interpolate(&template, &all_args)
}

/// Replaces `%(name)s` and `%(name)d` placeholders.
///
/// Unknown placeholders and malformed sequences are left untouched. Later
/// entries in `args` do not override earlier ones.
///
/// ```
/// use reinhardt_i18n::interpolate;
///
/// assert_eq!(interpolate("Add %(name)s", &[("name", "Ringo")]), "Add Ringo");
/// assert_eq!(interpolate("%(count)d items", &[("count", "3")]), "3 items");
/// assert_eq!(interpolate("%(other)s", &[]), "%(other)s");
/// ```
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
	if args.is_empty() || !template.contains("%(") {
		return template.to_string();
	}

	let mut output = String::with_capacity(template.len());
	let mut rest = template;
	while let Some(start) = rest.find("%(") {
		output.push_str(&rest[..start]);
		let after = &rest[start + 2..];
		let replaced = after.find(')').and_then(|close| {
			let name = &after[..close];
			let conversion = after[close + 1..].chars().next()?;
			if !matches!(conversion, 's' | 'd') {
				return None;
			}
			let value = args.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)?;
			Some((value, close + 2))
		});
		match replaced {
			Some((value, consumed)) => {
				output.push_str(value);
				rest = &after[consumed..];
			}
			None => {
				output.push_str("%(");
				rest = after;
			}
		}
	}
	output.push_str(rest);
	output
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::MessageCatalog;
	use crate::translator::{NullTranslator, TranslationContext};
	use rstest::rstest;

	fn french() -> TranslationContext {
		let mut fr = MessageCatalog::new("fr");
		fr.add("components.alert.close", "Fermer");
		fr.add("components.date_range.start", "Début de %(label)s");
		fr.add_plural(
			"components.select.selected",
			vec!["%(count)d sélectionné", "%(count)d sélectionnés"],
		);
		TranslationContext::new("fr", "en").with_catalog(fr).unwrap()
	}

	#[rstest]
	fn test_translate_found() {
		let ctx = french();
		assert_eq!(translate(&ctx, "close", "components.alert", "Close", &[]), "Fermer");
	}

	#[rstest]
	fn test_translate_missing_uses_default() {
		let ctx = french();
		assert_eq!(
			translate(&ctx, "dismiss", "components.alert", "Dismiss", &[]),
			"Dismiss"
		);
	}

	#[rstest]
	fn test_translate_null_translator_uses_default_with_args() {
		// Arrange
		let translator = NullTranslator;

		// Act
		let text = translate(
			&translator,
			"start",
			"components.date_range",
			"Start of %(label)s",
			&[("label", "stay")],
		);

		// Assert
		assert_eq!(text, "Start of stay");
	}

	#[rstest]
	fn test_translate_interpolates_found_string() {
		let ctx = french();
		let text = translate(
			&ctx,
			"start",
			"components.date_range",
			"Start of %(label)s",
			&[("label", "séjour")],
		);
		assert_eq!(text, "Début de séjour");
	}

	#[rstest]
	#[case(0, "0 sélectionné")]
	#[case(1, "1 sélectionné")]
	#[case(4, "4 sélectionnés")]
	fn test_translate_plural(#[case] count: usize, #[case] expected: &str) {
		let ctx = french();
		let text = translate_plural(
			&ctx,
			"selected",
			"components.select",
			count,
			("%(count)d selected", "%(count)d selected"),
			&[],
		);
		assert_eq!(text, expected);
	}

	#[rstest]
	#[case(1, "1 item")]
	#[case(0, "0 items")]
	fn test_translate_plural_defaults(#[case] count: usize, #[case] expected: &str) {
		let text = translate_plural(
			&NullTranslator,
			"items",
			"components.list",
			count,
			("%(count)d item", "%(count)d items"),
			&[],
		);
		assert_eq!(text, expected);
	}

	#[rstest]
	#[case("no placeholders", "no placeholders")]
	#[case("%(name)s and %(name)s", "x and x")]
	#[case("%(name)", "%(name)")]
	#[case("%(name)x", "%(name)x")]
	#[case("100%(", "100%(")]
	#[case("%(missing)s %(name)s", "%(missing)s x")]
	fn test_interpolate_edge_cases(#[case] template: &str, #[case] expected: &str) {
		assert_eq!(interpolate(template, &[("name", "x")]), expected);
	}
}
