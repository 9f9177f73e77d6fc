use super::PlaybackEngine;
use rodio::Source;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Mutex;
use std::time::Duration;

// Fallback for containers whose header reports no length
const ESTIMATE_BITRATE_BPS: u64 = 128_000;

enum Command {
    Play(PathBuf, mpsc::Sender<Result<Duration, String>>),
    Stop,
}

/// rodio-backed playback engine.
///
/// rodio's output stream is not `Send`, so all device access lives on a
/// dedicated worker thread and the engine itself is just a command channel.
pub struct RodioPlaybackEngine {
    tx: Mutex<mpsc::Sender<Command>>,
}

impl RodioPlaybackEngine {
    pub fn new() -> Result<Self, String> {
        let (tx, rx) = mpsc::channel();
        std::thread::Builder::new()
            .name("audio-output".to_string())
            .spawn(move || worker(rx))
            .map_err(|e| format!("Failed to start audio thread: {}", e))?;

        Ok(Self { tx: Mutex::new(tx) })
    }

    fn send(&self, command: Command) -> Result<(), String> {
        self.tx
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .send(command)
            .map_err(|_| "Audio thread is no longer running".to_string())
    }
}

impl PlaybackEngine for RodioPlaybackEngine {
    fn play(&self, path: &Path) -> Result<Duration, String> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.send(Command::Play(path.to_path_buf(), reply_tx))?;
        reply_rx
            .recv()
            .map_err(|_| "Audio thread is no longer running".to_string())?
    }

    fn stop(&self) {
        if let Err(e) = self.send(Command::Stop) {
            tracing::warn!(error = %e, "Failed to stop audio output");
        }
    }
}

fn worker(rx: mpsc::Receiver<Command>) {
    let (_stream, handle) = match rodio::OutputStream::try_default() {
        Ok(pair) => pair,
        Err(e) => {
            let message = format!("No audio output device: {}", e);
            tracing::warn!("{}", message);
            for command in rx {
                if let Command::Play(_, reply) = command {
                    let _ = reply.send(Err(message.clone()));
                }
            }
            return;
        }
    };

    let mut current: Option<rodio::Sink> = None;
    for command in rx {
        match command {
            Command::Play(path, reply) => {
                let _ = reply.send(start_clip(&handle, &mut current, &path));
            }
            Command::Stop => {
                if let Some(sink) = current.take() {
                    sink.stop();
                }
            }
        }
    }
}

fn start_clip(
    handle: &rodio::OutputStreamHandle,
    current: &mut Option<rodio::Sink>,
    path: &Path,
) -> Result<Duration, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open audio file: {}", e))?;
    let byte_len = file.metadata().map(|m| m.len()).unwrap_or(0);

    let decoder = rodio::Decoder::new(BufReader::new(file))
        .map_err(|e| format!("Failed to decode audio: {}", e))?;
    let duration = decoder
        .total_duration()
        .unwrap_or_else(|| estimate_duration(byte_len));

    if let Some(previous) = current.take() {
        previous.stop();
    }
    let sink =
        rodio::Sink::try_new(handle).map_err(|e| format!("Failed to open audio sink: {}", e))?;
    sink.append(decoder);
    *current = Some(sink);

    Ok(duration)
}

fn estimate_duration(byte_len: u64) -> Duration {
    Duration::from_secs_f64(byte_len as f64 * 8.0 / ESTIMATE_BITRATE_BPS as f64)
}
