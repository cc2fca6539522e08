pub mod audio;
pub mod error;
pub mod language;
pub mod service;

pub use audio::{AudioBuffer, AUDIO_FILE_NAME, AUDIO_MIME_TYPE};
pub use error::{LanguageError, SynthesisError};
pub use language::{LanguageCatalog, LanguageCode, LanguageEntry};
pub use service::{TtsService, TtsServiceApi};
