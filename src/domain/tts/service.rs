use super::audio::AudioBuffer;
use super::error::SynthesisError;
use super::language::LanguageCode;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use regex::Regex;
use std::sync::{Arc, OnceLock};

/// Turns narratable text into a complete MP3 buffer through a TTS provider
pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self { tts_repo }
    }

    pub fn provider(&self) -> &'static str {
        self.tts_repo.provider_name()
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize `text` in `language`.
    ///
    /// Fails with `EmptyText` when the text has nothing to speak, and with
    /// `Unavailable` when the provider fails. The provider is called once; there
    /// is no retry.
    async fn synthesize(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<AudioBuffer, SynthesisError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<AudioBuffer, SynthesisError> {
        let cleaned_text = clean_text(text);

        tracing::info!(
            original_length = text.len(),
            cleaned_length = cleaned_text.len(),
            language = %language,
            "TTS synthesis request"
        );

        if !is_narratable(&cleaned_text) {
            tracing::warn!(
                text_length = text.len(),
                "Text has nothing to narrate"
            );
            return Err(SynthesisError::EmptyText);
        }

        let audio_data = self
            .tts_repo
            .synthesize(&cleaned_text, language)
            .await
            .map_err(SynthesisError::Unavailable)?;

        if audio_data.is_empty() {
            tracing::error!(
                provider = self.tts_repo.provider_name(),
                "TTS provider returned no audio"
            );
            return Err(SynthesisError::Unavailable(
                "the speech provider returned no audio".to_string(),
            ));
        }

        let audio = AudioBuffer::new(audio_data);
        if !audio.looks_like_mp3() {
            tracing::warn!(
                provider = self.tts_repo.provider_name(),
                audio_size_bytes = audio.len(),
                "TTS provider output does not start with an MP3 header"
            );
        }

        Ok(audio)
    }
}

/// Something a voice can actually read: at least one letter or digit
fn is_narratable(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}

fn hyphenated_line_break() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\w)-\r?\n(\w)").expect("valid hyphenation pattern"))
}

fn whitespace_run() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Rejoin words hyphenated across line ends and collapse whitespace runs.
/// Extracted page text is full of hard line breaks that would otherwise be read
/// as pauses.
fn clean_text(text: &str) -> String {
    let joined = hyphenated_line_break().replace_all(text, "${1}${2}");
    let normalized = whitespace_run().replace_all(&joined, " ");

    normalized.trim().to_string()
}
