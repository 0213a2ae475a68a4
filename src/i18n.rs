//! Internationalization (i18n) support for Amana
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Parse a language code, falling back to English
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "zh" | "zh-cn" | "zh_cn" | "chinese" => Language::Chinese,
            _ => Language::English,
        }
    }

    /// The language the toggle switches to
    pub fn next(&self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|lang| lang == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Chinese]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    CatalogTitle,

    // Loading / errors
    Loading,
    LoadFailed,
    Retry,

    // Search & filters
    SearchPlaceholder,
    FilterAll,
    FilterAvailable,
    FilterUnavailable,
    ResultCount,

    // Empty state
    EmptyCollection,
    EmptyFiltered,
    ClearFilters,

    // Availability switch tooltip
    FlowersAvailable,
    FlowersUnavailable,

    // Pagination
    PreviousPage,
    NextPage,

    // Preview overlay
    Close,

    // Header toggles
    ToggleDarkMode,
    ToggleLightMode,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::lifecycle::FETCH_FAILED_MESSAGE;

    const ALL_KEYS: [Key; 19] = [
        Key::CatalogTitle,
        Key::Loading,
        Key::LoadFailed,
        Key::Retry,
        Key::SearchPlaceholder,
        Key::FilterAll,
        Key::FilterAvailable,
        Key::FilterUnavailable,
        Key::ResultCount,
        Key::EmptyCollection,
        Key::EmptyFiltered,
        Key::ClearFilters,
        Key::FlowersAvailable,
        Key::FlowersUnavailable,
        Key::PreviousPage,
        Key::NextPage,
        Key::Close,
        Key::ToggleDarkMode,
        Key::ToggleLightMode,
    ];

    #[test]
    fn every_key_is_translated() {
        for lang in Language::all() {
            for key in ALL_KEYS {
                assert_ne!(t(*lang, key), "???", "{:?} missing in {}", key, lang.code());
            }
        }
    }

    #[test]
    fn english_failure_message_matches_fetch_boundary() {
        assert_eq!(t(Language::English, Key::LoadFailed), FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn language_codes() {
        assert_eq!(Language::from_code("ZH"), Language::Chinese);
        assert_eq!(Language::from_code("fr"), Language::English);
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), *lang);
            assert_eq!(lang.next().next(), *lang);
        }
    }

    #[test]
    fn toggle_cycles_through_languages() {
        assert_eq!(Language::English.next(), Language::Chinese);
        assert_eq!(Language::Chinese.next(), Language::English);
    }
}
