use super::preferences_repository::PreferencesRepository;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// JSON-file-backed preference store for the desktop client.
///
/// The whole map is rewritten on every set; preference writes are rare and
/// tiny, so a single flat file keeps the store inspectable and portable.
pub struct FilePreferencesRepository {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FilePreferencesRepository {
    /// Open the store at `path`, loading any existing values.
    /// A missing or unreadable file starts the store empty.
    pub fn new(path: PathBuf) -> Self {
        let values = std::fs::read(&path)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default();

        Self {
            path,
            values: Mutex::new(values),
        }
    }

    fn flush(&self, values: &BTreeMap<String, String>) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create preferences directory: {}", e))?;
        }
        let json = serde_json::to_string_pretty(values)
            .map_err(|e| format!("Failed to serialize preferences: {}", e))?;
        std::fs::write(&self.path, json)
            .map_err(|e| format!("Failed to write preferences file: {}", e))
    }
}

impl PreferencesRepository for FilePreferencesRepository {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        self.flush(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let repo = FilePreferencesRepository::new(path.clone());
        repo.set("selectedVoice", "nova").unwrap();
        repo.set("selectedLanguage", "fr").unwrap();
        assert_eq!(repo.get("selectedVoice").as_deref(), Some("nova"));

        let reopened = FilePreferencesRepository::new(path);
        assert_eq!(reopened.get("selectedVoice").as_deref(), Some("nova"));
        assert_eq!(reopened.get("selectedLanguage").as_deref(), Some("fr"));
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FilePreferencesRepository::new(dir.path().join("absent.json"));
        assert_eq!(repo.get("selectedVoice"), None);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let repo = FilePreferencesRepository::new(path);
        assert_eq!(repo.get("selectedVoice"), None);
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("prefs.json");

        let repo = FilePreferencesRepository::new(path.clone());
        repo.set("selectedVoice", "echo").unwrap();
        assert!(path.exists());
    }
}
