use serde::{Deserialize, Serialize};

/// ISO 639-1 language codes accepted by the synthesis endpoint as a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "de")]
    German,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "uk")]
    Ukrainian,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "zh")]
    Chinese,
}

impl LanguageCode {
    /// All supported languages, in presentation order
    pub const ALL: [LanguageCode; 16] = [
        LanguageCode::German,
        LanguageCode::English,
        LanguageCode::Spanish,
        LanguageCode::French,
        LanguageCode::Hindi,
        LanguageCode::Indonesian,
        LanguageCode::Italian,
        LanguageCode::Japanese,
        LanguageCode::Korean,
        LanguageCode::Dutch,
        LanguageCode::Polish,
        LanguageCode::Portuguese,
        LanguageCode::Russian,
        LanguageCode::Ukrainian,
        LanguageCode::Vietnamese,
        LanguageCode::Chinese,
    ];

    /// Get the ISO 639-1 code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::German => "de",
            LanguageCode::English => "en",
            LanguageCode::Spanish => "es",
            LanguageCode::French => "fr",
            LanguageCode::Hindi => "hi",
            LanguageCode::Indonesian => "id",
            LanguageCode::Italian => "it",
            LanguageCode::Japanese => "ja",
            LanguageCode::Korean => "ko",
            LanguageCode::Dutch => "nl",
            LanguageCode::Polish => "pl",
            LanguageCode::Portuguese => "pt",
            LanguageCode::Russian => "ru",
            LanguageCode::Ukrainian => "uk",
            LanguageCode::Vietnamese => "vi",
            LanguageCode::Chinese => "zh",
        }
    }

    /// Match a POSIX locale string (`fr_FR.UTF-8`, `en-US`, `de`) against the
    /// supported set by its primary subtag
    pub fn from_locale(locale: &str) -> Option<Self> {
        let primary = locale
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        primary.parse().ok()
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_every_language_code() {
        for language in LanguageCode::ALL {
            assert_eq!(language.as_str().parse::<LanguageCode>(), Ok(language));
        }
    }

    #[test]
    fn test_from_locale_strips_region_and_encoding() {
        assert_eq!(
            LanguageCode::from_locale("fr_FR.UTF-8"),
            Some(LanguageCode::French)
        );
        assert_eq!(
            LanguageCode::from_locale("en-US"),
            Some(LanguageCode::English)
        );
        assert_eq!(LanguageCode::from_locale("de"), Some(LanguageCode::German));
    }

    #[test]
    fn test_from_locale_rejects_unsupported() {
        assert_eq!(LanguageCode::from_locale("sv_SE"), None);
        assert_eq!(LanguageCode::from_locale("C"), None);
        assert_eq!(LanguageCode::from_locale(""), None);
    }
}
