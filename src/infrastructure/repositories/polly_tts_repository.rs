use super::text_batches::split_into_batches;
use super::tts_repository::TtsRepository;
use crate::domain::tts::LanguageCode;
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly has a limit of 3000 characters per request
const MAX_BATCH_SIZE: usize = 3000;

/// AWS Polly implementation of TTS repository
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }

    /// Select the neural Polly voice for a language
    fn get_voice_for_language(language: LanguageCode) -> &'static str {
        match language {
            LanguageCode::English => "Joanna",
            LanguageCode::Spanish => "Lupe",
            LanguageCode::French => "Lea",
        }
    }

    /// Call AWS Polly to synthesize a single text batch
    async fn call_polly(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        let voice_name = Self::get_voice_for_language(language);
        let voice_id = VoiceId::from(voice_name);
        let engine = Engine::Neural;

        tracing::info!(
            language = %language,
            voice = voice_name,
            engine = ?engine,
            output_format = "Mp3",
            text_length = text.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(text)
            .voice_id(voice_id)
            .output_format(OutputFormat::Mp3)
            .engine(engine.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    language = %language,
                    voice = voice_name,
                    engine = ?engine,
                    text_length = text.len(),
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {}", e)
            })?;

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            format!("Failed to read audio stream: {}", e)
        })?;

        Ok(audio_stream.into_bytes().to_vec())
    }
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    fn provider_name(&self) -> &'static str {
        "polly"
    }

    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        tracing::info!(
            batch_count = batches.len(),
            text_length = text.len(),
            "Text split into batches"
        );

        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let audio_data = self.call_polly(batch, language).await?;
            merged_audio.extend(audio_data);

            tracing::debug!(
                batch_index = index,
                total_audio_size = merged_audio.len(),
                "Batch synthesized and merged"
            );
        }

        let duration = start_time.elapsed();
        let throughput_chars_per_sec = if duration.as_secs_f64() > 0.0 {
            text.len() as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        tracing::info!(
            provider = "polly",
            latency_ms = duration.as_millis(),
            characters_count = text.len(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            throughput_chars_per_sec = format!("{:.2}", throughput_chars_per_sec),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }
}
