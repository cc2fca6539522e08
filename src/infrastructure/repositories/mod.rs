pub mod google_tts_repository;
pub mod polly_tts_repository;
pub mod text_batches;
pub mod tts_repository;

pub use google_tts_repository::GoogleTtsRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use tts_repository::TtsRepository;
