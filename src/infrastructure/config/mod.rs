use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub synthesis_url: String,
    pub model: String,
    pub request_timeout_secs: u64,
    pub artifact_dir: PathBuf,
    pub preferences_path: PathBuf,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            api_key: env::var("OPENAI_API_KEY")?,
            synthesis_url: env::var("SYNTHESIS_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/audio/speech".to_string()),
            model: env::var("TTS_MODEL").unwrap_or_else(|_| "gpt-4o-mini-tts".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()?,
            artifact_dir: env::var("ARTIFACT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| env::temp_dir()),
            preferences_path: env::var("PREFERENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_preferences_path()),
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }
}

fn default_preferences_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("voicepad")
        .join("preferences.json")
}

/// The system locale, as set in the environment (`LC_ALL` wins over
/// `LC_MESSAGES` wins over `LANG`, the POSIX precedence)
pub fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .find_map(|var| env::var(var).ok().filter(|v| !v.is_empty()))
}
