use crate::domain::tts::LanguageCode;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (Google Translate TTS, AWS Polly)
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Splitting text into batches if needed
/// - Merging audio chunks into a single MP3 stream
/// - Provider-specific voice and region selection
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Short provider name for logs and readiness reports
    fn provider_name(&self) -> &'static str;

    /// Synthesize text to speech for a given language
    ///
    /// Returns the complete audio (MP3 format), never a partial stream
    ///
    /// # Arguments
    /// * `text` - Cleaned text with at least one speakable character
    /// * `language` - The target language for synthesis
    ///
    /// # Errors
    /// Returns error if synthesis fails or provider is unavailable
    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String>;
}
