//! Internationalization Helpers
//!
//! Translation catalogs live in `locales/*.yml` and are compiled in by
//! `rust-i18n`. Marketing copy in [`crate::content`] is not translated; chrome
//! (navigation, buttons, labels, notifications) is.

use std::fmt;

use rust_i18n::t;
use serde::{Deserialize, Serialize};

/// Locales with a translation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ur")]
    Urdu,
}

impl Locale {
    pub fn all() -> &'static [Locale] {
        &[Locale::English, Locale::Urdu]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Urdu => "ur",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        Locale::all().iter().copied().find(|l| l.code() == code)
    }

    /// Name of the locale in its own language
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Urdu => "اردو",
        }
    }

    /// Value for the `dir` attribute
    pub fn direction(&self) -> &'static str {
        match self {
            Locale::English => "ltr",
            Locale::Urdu => "rtl",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Translate `key` for `locale`, falling back to English.
pub fn tr(locale: Locale, key: &str) -> String {
    t!(key, locale = locale.code()).to_string()
}

/// Translate `key` and substitute `%{name}` placeholders.
///
/// # Example
/// ```ignore
/// // With translation `projects.count: "%{count} projects"`
/// tr_format(Locale::English, "projects.count", &[("count", "5")])
/// // Returns "5 projects"
/// ```
pub fn tr_format(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    let mut result = tr(locale, key);
    for (name, value) in args {
        result = result.replace(&format!("%{{{name}}}"), value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for locale in Locale::all() {
            assert_eq!(Locale::from_code(locale.code()), Some(*locale));
        }
        assert_eq!(Locale::from_code(" UR "), Some(Locale::Urdu));
        assert_eq!(Locale::from_code("de"), None);
    }

    #[test]
    fn urdu_is_rtl() {
        assert_eq!(Locale::Urdu.direction(), "rtl");
        assert_eq!(Locale::English.direction(), "ltr");
    }

    #[test]
    fn translates_per_locale() {
        assert_eq!(tr(Locale::English, "nav.home"), "Home");
        assert_eq!(tr(Locale::Urdu, "nav.home"), "ہوم");
    }

    #[test]
    fn formats_placeholders() {
        assert_eq!(
            tr_format(Locale::English, "projects.count", &[("count", "5")]),
            "5 projects"
        );
    }
}
