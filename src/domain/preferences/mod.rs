use crate::domain::speech::{LanguageCode, Voice};
use crate::infrastructure::repositories::PreferencesRepository;

pub const VOICE_KEY: &str = "selectedVoice";
pub const LANGUAGE_KEY: &str = "selectedLanguage";

/// The user's current voice/language choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub voice: Voice,
    pub language: Option<LanguageCode>,
}

/// Seed the selection from stored preferences.
///
/// Invalid or missing stored values are silently corrected: the voice falls
/// back to the first supported voice, the language to the system locale when
/// that locale is in the supported set.
pub fn load_selection(
    repo: &dyn PreferencesRepository,
    system_locale: Option<&str>,
) -> Selection {
    let voice = repo
        .get(VOICE_KEY)
        .and_then(|v| v.parse::<Voice>().ok())
        .unwrap_or(Voice::ALL[0]);

    let language = repo
        .get(LANGUAGE_KEY)
        .and_then(|l| l.parse::<LanguageCode>().ok())
        .or_else(|| system_locale.and_then(LanguageCode::from_locale));

    Selection { voice, language }
}

/// Persist the selection under the fixed preference keys.
///
/// Write failures are logged and swallowed: losing a preference must never
/// fail the generation it piggybacks on.
pub fn persist_selection(
    repo: &dyn PreferencesRepository,
    voice: Voice,
    language: Option<LanguageCode>,
) {
    if let Err(e) = repo.set(VOICE_KEY, voice.as_str()) {
        tracing::warn!(error = %e, "Failed to persist voice preference");
    }
    if let Some(language) = language {
        if let Err(e) = repo.set(LANGUAGE_KEY, language.as_str()) {
            tracing::warn!(error = %e, "Failed to persist language preference");
        }
    }
}
