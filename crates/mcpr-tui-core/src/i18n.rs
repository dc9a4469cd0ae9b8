//! Localized display strings.
//!
//! Strings are looked up by dotted key (`mcpApps.howToUseDialog.cliUsageTitle`)
//! in nested JSON tables embedded at compile time. Lookup order is the
//! active locale, then English, then the key itself.

use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Key→string lookup used by every rendering path.
pub trait Translate {
    /// Resolve `key` to a display string. Never fails.
    fn t(&self, key: &str) -> String;
}

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ja,
    Zh,
}

impl Locale {
    /// Parse a locale tag. Region suffixes (`ja-JP`, `zh_CN`) are accepted.
    pub fn parse(tag: &str) -> Option<Self> {
        let lang = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::En),
            "ja" => Some(Locale::Ja),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }

    /// Get the locale code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
            Locale::Zh => "zh",
        }
    }

    /// List available locales.
    pub fn available() -> &'static [Locale] {
        &[Locale::En, Locale::Ja, Locale::Zh]
    }

    fn source(&self) -> &'static str {
        match self {
            Locale::En => include_str!("../locales/en.json"),
            Locale::Ja => include_str!("../locales/ja.json"),
            Locale::Zh => include_str!("../locales/zh.json"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

static TABLES: Lazy<HashMap<Locale, Value>> = Lazy::new(|| {
    Locale::available()
        .iter()
        .map(|locale| {
            let table = serde_json::from_str(locale.source()).unwrap_or_else(|e| {
                tracing::warn!("Invalid string table for {}: {}", locale, e);
                Value::Null
            });
            (*locale, table)
        })
        .collect()
});

/// Walk a dotted key through nested objects.
fn lookup<'a>(table: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(table, |node, part| node.get(part))
        .and_then(Value::as_str)
}

/// String catalog backed by the embedded tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    /// Create a catalog for the given locale.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Get the active locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a key in the active locale only, without fallback.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        TABLES.get(&self.locale).and_then(|table| lookup(table, key))
    }
}

impl Translate for Catalog {
    fn t(&self, key: &str) -> String {
        if let Some(s) = self.get(key) {
            return s.to_string();
        }
        if let Some(s) = Catalog::new(Locale::En).get(key) {
            tracing::debug!("Missing {} string for {}, using en", self.locale, key);
            return s.to_string();
        }
        tracing::debug!("Missing string for {}", key);
        key.to_string()
    }
}

/// Fixed key→string map, handy for callers that bring their own strings.
#[derive(Debug, Clone, Default)]
pub struct StaticStrings {
    strings: HashMap<String, String>,
}

impl StaticStrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(key.into(), value.into());
        self
    }
}

impl Translate for StaticStrings {
    fn t(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("ja-JP"), Some(Locale::Ja));
        assert_eq!(Locale::parse("zh_CN"), Some(Locale::Zh));
        assert_eq!(Locale::parse("EN"), Some(Locale::En));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_every_table_parses() {
        for locale in Locale::available() {
            let table = TABLES.get(locale).unwrap();
            assert!(table.is_object(), "{} table is not an object", locale);
        }
    }

    #[test]
    fn test_english_lookup() {
        let catalog = Catalog::new(Locale::En);
        assert_eq!(catalog.t("common.close"), "Close");
        assert_eq!(
            catalog.t("mcpApps.howToUseDialog.cliUsageTitle"),
            "CLI Usage"
        );
    }

    #[test]
    fn test_japanese_lookup() {
        let catalog = Catalog::new(Locale::Ja);
        assert_eq!(catalog.t("common.close"), "閉じる");
        assert_eq!(catalog.t("mcpApps.howToUse"), "使い方");
    }

    #[test]
    fn test_missing_key_falls_back_to_english() {
        let catalog = Catalog::new(Locale::Zh);
        assert!(catalog.get("tui.hintQuit").is_none());
        assert_eq!(catalog.t("tui.hintQuit"), "quit");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        let catalog = Catalog::new(Locale::Ja);
        assert_eq!(catalog.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_non_leaf_key_is_missing() {
        let catalog = Catalog::new(Locale::En);
        assert_eq!(catalog.t("mcpApps.howToUseDialog"), "mcpApps.howToUseDialog");
    }

    #[test]
    fn test_static_strings() {
        let strings = StaticStrings::new().with("common.close", "Done");
        assert_eq!(strings.t("common.close"), "Done");
        assert_eq!(strings.t("other"), "other");
    }

    #[test]
    fn test_tables_share_component_keys() {
        let keys = [
            "common.close",
            "mcpApps.howToUse",
            "mcpApps.howToUseDialog.cliUsageTitle",
            "mcpApps.howToUseDialog.cliUsageDescriptionWithToken",
            "mcpApps.howToUseDialog.cliUsageDescriptionNoToken",
            "mcpApps.howToUseDialog.exportTokenComment",
            "mcpApps.howToUseDialog.configUsageTitle",
            "mcpApps.howToUseDialog.configUsageDescription",
        ];
        for locale in Locale::available() {
            let catalog = Catalog::new(*locale);
            for key in keys {
                assert!(catalog.get(key).is_some(), "{} missing {}", locale, key);
            }
        }
    }
}
