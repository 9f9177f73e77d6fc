use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicepad::domain::playback::{PlaybackService, PlaybackState};
use voicepad::domain::preferences::{self, Selection};
use voicepad::domain::speech::{LanguageCode, SpeechService, SpeechServiceApi, Voice};
use voicepad::infrastructure::audio::PlaybackEngine;
use voicepad::infrastructure::config::{system_locale, Config, LogFormat};
use voicepad::infrastructure::export::DirectoryExportTarget;
use voicepad::infrastructure::repositories::{
    FilePreferencesRepository, OpenAiSynthesisRepository, PreferencesRepository,
};
use voicepad::infrastructure::storage::ArtifactStorage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        synthesis_url = %config.synthesis_url,
        model = %config.model,
        "Starting voicepad"
    );

    // === DEPENDENCY INJECTION SETUP ===
    let preferences_repo: Arc<dyn PreferencesRepository> = Arc::new(
        FilePreferencesRepository::new(config.preferences_path.clone()),
    );
    let synthesis_repo = Arc::new(OpenAiSynthesisRepository::new(
        config.synthesis_url.clone(),
        config.model.clone(),
        config.api_key.clone(),
        std::time::Duration::from_secs(config.request_timeout_secs),
    )?);
    let storage = ArtifactStorage::new(config.artifact_dir.clone());

    let speech_service = SpeechService::new(synthesis_repo, preferences_repo.clone(), storage);
    let playback_service = PlaybackService::new(playback_engine());

    // Seed the selection from stored preferences and the system locale
    let locale = system_locale();
    let selection = preferences::load_selection(preferences_repo.as_ref(), locale.as_deref());
    tracing::info!(
        voice = %selection.voice,
        language = ?selection.language.map(|l| l.as_str()),
        "Selection seeded"
    );

    run_console(&speech_service, &playback_service, selection).await
}

#[cfg(feature = "playback")]
fn playback_engine() -> Arc<dyn PlaybackEngine> {
    use voicepad::infrastructure::audio::{DisabledPlaybackEngine, RodioPlaybackEngine};
    match RodioPlaybackEngine::new() {
        Ok(engine) => Arc::new(engine),
        Err(e) => {
            tracing::warn!(error = %e, "Audio output unavailable, playback disabled");
            Arc::new(DisabledPlaybackEngine)
        }
    }
}

#[cfg(not(feature = "playback"))]
fn playback_engine() -> Arc<dyn PlaybackEngine> {
    use voicepad::infrastructure::audio::DisabledPlaybackEngine;
    Arc::new(DisabledPlaybackEngine)
}

/// Minimal line-oriented driver around the two services. Anything that is not
/// a `:command` is treated as text to synthesize with the current selection.
async fn run_console(
    speech: &SpeechService,
    playback: &PlaybackService,
    mut selection: Selection,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("voicepad — type text to synthesize, :help for commands");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt(&selection, playback.state());
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        let (command, arg) = line
            .split_once(' ')
            .map_or((line.as_str(), ""), |(c, a)| (c, a.trim()));
        match (command, arg) {
            (":quit", _) | (":q", _) => break,
            (":help", _) => print_help(),
            (":voices", _) => {
                println!("{}", Voice::ALL.map(|v| v.as_str()).join(" "));
            }
            (":languages", _) => {
                println!("{}", LanguageCode::ALL.map(|l| l.as_str()).join(" "));
            }
            (":voice", name) => match name.parse::<Voice>() {
                Ok(voice) => selection.voice = voice,
                Err(_) => println!("unknown voice: {} (see :voices)", name),
            },
            (":language", "none") => selection.language = None,
            (":language", code) => match code.parse::<LanguageCode>() {
                Ok(language) => selection.language = Some(language),
                Err(_) => println!("unknown language: {} (see :languages)", code),
            },
            (":play", _) => {
                if let Err(e) = playback.play() {
                    println!("{}", e);
                }
            }
            (":stop", _) => playback.stop(),
            (":export", dir) if !dir.is_empty() => {
                match playback.export(&DirectoryExportTarget::new(dir)) {
                    Ok(saved) => println!("exported to {}", saved.display()),
                    Err(e) => println!("{}", e),
                }
            }
            (":export", _) => println!("usage: :export <directory>"),
            ("", _) => {}
            _ => {
                // The sequential loop keeps generation single-flight: the next
                // command is not read until this call resolves.
                match speech
                    .generate(&line, selection.voice, selection.language)
                    .await
                {
                    Ok(Some(artifact)) => {
                        playback.adopt(artifact);
                        println!("audio ready — :play to listen, :export <dir> to save");
                    }
                    Ok(None) => {}
                    Err(e) => println!("{}", e),
                }
            }
        }
        prompt(&selection, playback.state());
    }

    Ok(())
}

fn prompt(selection: &Selection, state: PlaybackState) {
    let language = selection.language.map(|l| l.as_str()).unwrap_or("auto");
    let marker = if state == PlaybackState::Playing { "playing" } else { "ready" };
    print!("[{} {} {}] ", selection.voice, language, marker);
    let _ = std::io::stdout().flush();
}

fn print_help() {
    println!("  <text>             synthesize <text> with the current selection");
    println!("  :voice <name>      pick a voice (:voices lists them)");
    println!("  :language <code>   pick a language hint, or `:language none`");
    println!("  :play / :stop      preview the generated clip");
    println!("  :export <dir>      save the clip into <dir>");
    println!("  :quit              exit");
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicepad=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicepad=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
