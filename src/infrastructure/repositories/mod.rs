pub mod file_preferences_repository;
pub mod openai_synthesis_repository;
pub mod preferences_repository;
pub mod synthesis_repository;

pub use file_preferences_repository::FilePreferencesRepository;
pub use openai_synthesis_repository::OpenAiSynthesisRepository;
pub use preferences_repository::PreferencesRepository;
pub use synthesis_repository::SynthesisRepository;
