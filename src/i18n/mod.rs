//! Translation store.
//!
//! Static string tables for the three site languages. Lookups are pure: a key
//! missing from the active language renders as the key itself, for every
//! language, with no fallback to another table.
//!
//! # Example
//!
//! ```rust
//! use museum_site::i18n::{Language, Translator};
//!
//! let t = Translator::new(Language::Fr);
//! assert_eq!(t.t("nav.home"), "Accueil");
//! assert_eq!(t.t("no.such.key"), "no.such.key");
//! ```

mod ar;
mod en;
mod fr;

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

type Table = HashMap<&'static str, &'static str>;

static EN_TABLE: LazyLock<Table> = LazyLock::new(|| en::ENTRIES.iter().copied().collect());
static FR_TABLE: LazyLock<Table> = LazyLock::new(|| fr::ENTRIES.iter().copied().collect());
static AR_TABLE: LazyLock<Table> = LazyLock::new(|| ar::ENTRIES.iter().copied().collect());

/// Supported site languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default).
    #[default]
    En,
    /// French.
    Fr,
    /// Arabic (right-to-left).
    Ar,
}

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Ar];

    /// ISO 639-1 code used in URLs, cookies and the `lang` attribute.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Ar => "ar",
        }
    }

    /// Parse a language code. Only exact supported codes are accepted.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// Pick a language from an `Accept-Language` header by prefix of the first
    /// tag, falling back to English.
    #[must_use]
    pub fn detect(accept_language: &str) -> Self {
        let first = accept_language
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if first.starts_with("ar") {
            Self::Ar
        } else if first.starts_with("fr") {
            Self::Fr
        } else {
            Self::En
        }
    }

    /// Text direction for the `dir` attribute.
    #[must_use]
    pub fn dir(self) -> &'static str {
        match self {
            Self::Ar => "rtl",
            Self::En | Self::Fr => "ltr",
        }
    }

    /// Native display name for the language menu.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::Ar => "العربية",
        }
    }

    /// English name, used when instructing the guide which language to answer in.
    #[must_use]
    pub fn english_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "French",
            Self::Ar => "Arabic",
        }
    }

    fn table(self) -> &'static Table {
        match self {
            Self::En => &EN_TABLE,
            Self::Fr => &FR_TABLE,
            Self::Ar => &AR_TABLE,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Look up `key` in the table for `language`, returning the key when absent.
#[must_use]
pub fn lookup<'a>(language: Language, key: &'a str) -> &'a str {
    language.table().get(key).copied().unwrap_or(key)
}

/// Lookup bound to a single language for the duration of one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    /// Create a translator for `language`.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// The bound language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Translate `key`, or return it unchanged when the table has no entry.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        lookup(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_each_language() {
        assert_eq!(lookup(Language::En, "nav.contact"), "Contact");
        assert_eq!(lookup(Language::Fr, "contact.form.subject"), "Sujet");
        assert_eq!(lookup(Language::Ar, "nav.home"), "الرئيسية");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        for lang in Language::ALL {
            assert_eq!(lookup(lang, "does.not.exist"), "does.not.exist");
            assert_eq!(Translator::new(lang).t(""), "");
        }
    }

    #[test]
    fn test_tables_cover_same_keys() {
        let en: Vec<_> = en::ENTRIES.iter().map(|(k, _)| *k).collect();
        for (name, entries) in [("fr", fr::ENTRIES), ("ar", ar::ENTRIES)] {
            for key in &en {
                assert!(
                    entries.iter().any(|(k, _)| k == key),
                    "{name} table is missing {key}"
                );
            }
            assert_eq!(entries.len(), en.len(), "{name} table has extra keys");
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        for entries in [en::ENTRIES, fr::ENTRIES, ar::ENTRIES] {
            let table: Table = entries.iter().copied().collect();
            assert_eq!(table.len(), entries.len());
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("FR"), Some(Language::Fr));
        assert_eq!(Language::from_code(" ar "), Some(Language::Ar));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code("english"), None);
    }

    #[test]
    fn test_detect_accept_language() {
        assert_eq!(Language::detect("ar-DZ,ar;q=0.9"), Language::Ar);
        assert_eq!(Language::detect("fr-FR, en;q=0.8"), Language::Fr);
        assert_eq!(Language::detect("de-DE,fr;q=0.5"), Language::En);
        assert_eq!(Language::detect(""), Language::En);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::Fr.dir(), "ltr");
    }

    #[test]
    fn test_translator_is_bound_to_one_language() {
        let fr = Translator::new(Language::Fr);
        let en = Translator::new(Language::En);
        assert_eq!(fr.t("nav.home"), "Accueil");
        assert_eq!(en.t("nav.home"), "Home");
        assert_eq!(fr.language(), Language::Fr);
    }
}
