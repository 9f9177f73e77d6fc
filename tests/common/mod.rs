#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use voicepad::domain::playback::ExportError;
use voicepad::domain::speech::AudioArtifact;
use voicepad::infrastructure::audio::PlaybackEngine;
use voicepad::infrastructure::export::ExportTarget;
use voicepad::infrastructure::repositories::PreferencesRepository;

/// In-memory preference store that counts writes
#[derive(Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryPreferences {
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl PreferencesRepository for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Playback engine double reporting scripted clip durations
pub struct MockPlaybackEngine {
    durations: Mutex<Vec<Duration>>,
    fallback: Duration,
    fail: bool,
    plays: Mutex<Vec<PathBuf>>,
    stops: AtomicUsize,
}

impl MockPlaybackEngine {
    pub fn new(duration: Duration) -> Self {
        Self {
            durations: Mutex::new(Vec::new()),
            fallback: duration,
            fail: false,
            plays: Mutex::new(Vec::new()),
            stops: AtomicUsize::new(0),
        }
    }

    /// Report the given durations for successive plays, then `last` forever
    pub fn with_durations(mut durations: Vec<Duration>, last: Duration) -> Self {
        durations.reverse(); // popped back-to-front
        Self {
            durations: Mutex::new(durations),
            fallback: last,
            fail: false,
            plays: Mutex::new(Vec::new()),
            stops: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            durations: Mutex::new(Vec::new()),
            fallback: Duration::ZERO,
            fail: true,
            plays: Mutex::new(Vec::new()),
            stops: AtomicUsize::new(0),
        }
    }

    pub fn play_count(&self) -> usize {
        self.plays.lock().unwrap().len()
    }

    pub fn played_paths(&self) -> Vec<PathBuf> {
        self.plays.lock().unwrap().clone()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

impl PlaybackEngine for MockPlaybackEngine {
    fn play(&self, path: &Path) -> Result<Duration, String> {
        if self.fail {
            return Err("decoder rejected the stream".to_string());
        }
        self.plays.lock().unwrap().push(path.to_path_buf());
        Ok(self
            .durations
            .lock()
            .unwrap()
            .pop()
            .unwrap_or(self.fallback))
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

/// Export target that always reports a destination failure
pub struct FailingExportTarget;

impl ExportTarget for FailingExportTarget {
    fn save(&self, _bytes: &[u8], _suggested_name: &str) -> Result<PathBuf, ExportError> {
        Err(ExportError::Destination("disk full".to_string()))
    }
}

/// Export target that reports the user dismissed the dialog
pub struct CancellingExportTarget;

impl ExportTarget for CancellingExportTarget {
    fn save(&self, _bytes: &[u8], _suggested_name: &str) -> Result<PathBuf, ExportError> {
        Err(ExportError::Cancelled)
    }
}

/// Write a clip file and wrap it as an artifact
pub fn clip_artifact(dir: &Path, name: &str, bytes: &[u8]) -> AudioArtifact {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    AudioArtifact::new(path)
}
