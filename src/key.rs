//! Composite key construction and locale suffix matching.

/// Separator between the logical key and the locale in a column name.
pub const LOCALE_SEPARATOR: &str = "_";

/// Length of a `_xx` locale suffix.
pub const LOCALE_SUFFIX_LEN: usize = 3;

/// Builds the column name for a logical key in a locale, e.g. `name` + `en` → `name_en`.
#[must_use]
pub fn compose_key(key: &str, locale: &str) -> String {
    format!("{key}{LOCALE_SEPARATOR}{locale}")
}

/// Splits a raw column name into `(logical_key, locale)` by cutting off the trailing
/// three characters and taking the last two as the locale.
///
/// Returns `None` when the key is too short to carry a suffix.
#[must_use]
pub fn split_locale_suffix(raw_key: &str) -> Option<(&str, &str)> {
    let mut boundaries = raw_key.char_indices().rev().map(|(i, _)| i);
    let locale_start = boundaries.nth(LOCALE_SUFFIX_LEN - 2)?;
    let base_end = boundaries.next()?;

    Some((raw_key.get(..base_end)?, raw_key.get(locale_start..)?))
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("name", "en", "name_en")]
    #[case("field_with_mutator", "ru", "field_with_mutator_ru")]
    #[case("title", "", "title_")]
    #[case("name", "pt-BR", "name_pt-BR")]
    fn test_compose_key(#[case] key: &str, #[case] locale: &str, #[case] expected: &str) {
        assert_that!(compose_key(key, locale), eq(expected));
    }

    #[rstest]
    #[case("name_en", "name", "en")]
    #[case("field_with_mutator_uk", "field_with_mutator", "uk")]
    #[case("a_ru", "a", "ru")]
    #[case("_en", "", "en")]
    #[case("имя_ru", "имя", "ru")]
    fn split_locale_suffix_positive_cases(
        #[case] raw_key: &str,
        #[case] base: &str,
        #[case] locale: &str,
    ) {
        assert_eq!(split_locale_suffix(raw_key), Some((base, locale)));
    }

    #[rstest]
    #[case("")]
    #[case("e")]
    #[case("en")]
    fn split_locale_suffix_too_short(#[case] raw_key: &str) {
        assert_eq!(split_locale_suffix(raw_key), None);
    }

    #[rstest]
    fn split_locale_suffix_ignores_separator_character() {
        // Only the length of the suffix is checked, not its first character.
        assert_eq!(split_locale_suffix("nameXen"), Some(("name", "en")));
    }
}
