#[cfg(feature = "playback")]
mod rodio_engine;
#[cfg(feature = "playback")]
pub use rodio_engine::RodioPlaybackEngine;

use std::path::Path;
use std::time::Duration;

/// Capability interface over the audio output device.
/// Abstracts loading, decoding, and playing one clip at a time.
pub trait PlaybackEngine: Send + Sync {
    /// Load the clip at `path` and start playing it
    ///
    /// Returns the measured clip duration, which drives the session's
    /// automatic transition back to idle.
    ///
    /// # Errors
    /// Returns a message describing the load or decode failure
    fn play(&self, path: &Path) -> Result<Duration, String>;

    /// Halt playback immediately; no-op when nothing is playing
    fn stop(&self);
}

/// Stand-in engine for builds without the `playback` feature.
/// Play attempts return a helpful error so the rest of the application
/// (generation, export) keeps working without an audio device.
pub struct DisabledPlaybackEngine;

impl PlaybackEngine for DisabledPlaybackEngine {
    fn play(&self, _path: &Path) -> Result<Duration, String> {
        Err("audio output is not built in; rebuild with --features playback".to_string())
    }

    fn stop(&self) {}
}
