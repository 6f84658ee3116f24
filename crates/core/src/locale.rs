//! Locale resolution and per-locale text.
//!
//! The supported locale set is closed: German, French, English, with
//! German as the site default. [`Locale::resolve`] is total — any raw
//! signal (cookie value, header fragment, or nothing at all) maps to a
//! member of the set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported content locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// German — the site default.
    #[default]
    De,
    Fr,
    En,
}

impl Locale {
    /// All supported locales, in default-first order.
    pub const ALL: [Locale; 3] = [Locale::De, Locale::Fr, Locale::En];

    /// Lowercase locale code.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    /// Resolve a raw locale signal to a supported locale.
    ///
    /// Matching is case-insensitive on the primary subtag, so "de-CH"
    /// resolves to German. Unrecognized or absent input falls back to the
    /// default locale.
    pub fn resolve(raw: Option<&str>) -> Locale {
        let Some(raw) = raw else {
            return Locale::default();
        };
        let lowered = raw.trim().to_ascii_lowercase();
        let primary = lowered.split('-').next().unwrap_or_default();
        match primary {
            "fr" => Locale::Fr,
            "en" => Locale::En,
            _ => Locale::De,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text carried in every supported locale.
///
/// Authored content always stores all three translations; a missing
/// translation arrives as an empty string and falls back to German on
/// lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Localized {
    pub de: String,
    pub fr: String,
    pub en: String,
}

impl Localized {
    pub fn new(de: impl Into<String>, fr: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            de: de.into(),
            fr: fr.into(),
            en: en.into(),
        }
    }

    /// Text for the given locale, falling back to German when the
    /// requested translation is empty.
    pub fn get(&self, locale: Locale) -> &str {
        let value = match locale {
            Locale::De => &self.de,
            Locale::Fr => &self.fr,
            Locale::En => &self.en,
        };
        if value.is_empty() { &self.de } else { value }
    }
}
