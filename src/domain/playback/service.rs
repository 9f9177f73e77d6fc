use super::error::{ExportError, PlaybackError};
use crate::domain::speech::AudioArtifact;
use crate::infrastructure::audio::PlaybackEngine;
use crate::infrastructure::export::ExportTarget;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
}

struct SessionInner {
    artifact: Option<AudioArtifact>,
    state: PlaybackState,
    // Bumped on every transition; the auto-stop task re-checks it under the
    // lock, so a cancelled timer can never apply a stale transition.
    epoch: u64,
    auto_stop: Option<JoinHandle<()>>,
}

/// Owns the lifecycle of the current generated audio clip: the single
/// artifact slot, the play/stop state machine, and export/disposal ordering.
pub struct PlaybackService {
    engine: Arc<dyn PlaybackEngine>,
    inner: Arc<Mutex<SessionInner>>,
}

impl PlaybackService {
    pub fn new(engine: Arc<dyn PlaybackEngine>) -> Self {
        Self {
            engine,
            inner: Arc::new(Mutex::new(SessionInner {
                artifact: None,
                state: PlaybackState::Idle,
                epoch: 0,
                auto_stop: None,
            })),
        }
    }

    /// Replace the held artifact, releasing the previous one's storage.
    ///
    /// Adopting while playing stops playback first; the previous artifact's
    /// temp file is deleted unconditionally, exported or not.
    pub fn adopt(&self, artifact: AudioArtifact) {
        let mut inner = self.lock();
        self.halt(&mut inner);
        if let Some(previous) = inner.artifact.replace(artifact) {
            tracing::debug!(
                path = %previous.path().display(),
                "Replacing generated audio clip"
            );
            // dropping `previous` removes its backing file
        }
    }

    /// Start playback of the held artifact.
    ///
    /// No-op without an artifact; restarts from the beginning when already
    /// playing. Schedules a cancelable transition back to `Idle` timed to the
    /// clip duration reported by the engine.
    pub fn play(&self) -> Result<(), PlaybackError> {
        let mut inner = self.lock();
        let Some(artifact) = inner.artifact.as_ref() else {
            return Ok(());
        };
        let path = artifact.path().to_path_buf();

        self.halt(&mut inner);
        let duration = self
            .engine
            .play(&path)
            .map_err(PlaybackError::Engine)?;

        inner.state = PlaybackState::Playing;
        let epoch = inner.epoch;
        tracing::debug!(duration_ms = duration.as_millis() as u64, "Playback started");

        let session = Arc::clone(&self.inner);
        inner.auto_stop = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut inner = session.lock().unwrap_or_else(|e| e.into_inner());
            if inner.epoch == epoch && inner.state == PlaybackState::Playing {
                inner.state = PlaybackState::Idle;
                inner.auto_stop = None;
                tracing::debug!("Playback finished");
            }
        }));

        Ok(())
    }

    /// Halt playback immediately; no-op when idle
    pub fn stop(&self) {
        let mut inner = self.lock();
        self.halt(&mut inner);
    }

    /// Hand the held artifact's bytes to an export target.
    ///
    /// On success the backing temp file is deleted and the saved location
    /// returned. On failure or cancellation the file is retained so the user
    /// can retry.
    pub fn export(&self, target: &dyn ExportTarget) -> Result<PathBuf, ExportError> {
        let mut inner = self.lock();
        self.halt(&mut inner);

        let artifact = inner.artifact.as_ref().ok_or(ExportError::NothingToExport)?;
        let bytes = std::fs::read(artifact.path())
            .map_err(|e| ExportError::Destination(e.to_string()))?;

        let saved = target.save(&bytes, &artifact.file_name())?;
        tracing::info!(destination = %saved.display(), "Audio exported");

        // export succeeded, reclaim the temp file
        inner.artifact.take();
        Ok(saved)
    }

    pub fn state(&self) -> PlaybackState {
        self.lock().state
    }

    pub fn has_artifact(&self) -> bool {
        self.lock().artifact.is_some()
    }

    pub fn artifact_path(&self) -> Option<PathBuf> {
        self.lock()
            .artifact
            .as_ref()
            .map(|a| a.path().to_path_buf())
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Stop the engine and invalidate any scheduled auto-stop
    fn halt(&self, inner: &mut SessionInner) {
        if inner.state == PlaybackState::Playing {
            self.engine.stop();
            inner.state = PlaybackState::Idle;
        }
        inner.epoch += 1;
        if let Some(handle) = inner.auto_stop.take() {
            handle.abort();
        }
    }
}
