use super::text_batches::split_into_batches;
use super::tts_repository::TtsRepository;
use crate::domain::tts::LanguageCode;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use regex::Regex;
use serde_json::{json, Value};
use std::sync::OnceLock;

/// Google Translate speaks at most 100 characters per request
const MAX_BATCH_SIZE: usize = 100;

const TTS_RPC_ID: &str = "jQ1olc";
const BATCHEXECUTE_PATH: &str = "/_/TranslateWebserverUi/data/batchexecute";
const REFERER: &str = "http://translate.google.com/";
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";

fn audio_payload() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"jQ1olc","\[\\"(.*)\\"]"#).expect("valid audio payload pattern")
    })
}

/// Google Translate text-to-speech implementation of TTS repository.
///
/// The region hint picks the Google top-level domain (`com`, `co.uk`, `co.in`, ...),
/// which changes the accent of the voice.
pub struct GoogleTtsRepository {
    client: reqwest::Client,
    base_url: String,
    slow: bool,
}

impl GoogleTtsRepository {
    pub fn new(region_hint: &str, slow: bool) -> Result<Self, reqwest::Error> {
        Self::with_base_url(format!("https://translate.google.{}", region_hint), slow)
    }

    /// Point the repository at another endpoint, e.g. a proxy or a local stand-in
    pub fn with_base_url(base_url: impl Into<String>, slow: bool) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            slow,
        })
    }

    /// Build the `f.req` form value for one chunk of text
    fn package_rpc(&self, text: &str, language: LanguageCode) -> Result<String, String> {
        let speed = if self.slow { Value::Bool(true) } else { Value::Null };
        let parameter = serde_json::to_string(&json!([text, language.as_str(), speed, "null"]))
            .map_err(|e| format!("Failed to encode TTS parameters: {}", e))?;
        let rpc = json!([[[TTS_RPC_ID, parameter, Value::Null, "generic"]]]);

        serde_json::to_string(&rpc).map_err(|e| format!("Failed to encode TTS request: {}", e))
    }

    /// Call Google Translate TTS to synthesize a single text batch
    async fn call_google(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        tracing::debug!(
            language = %language,
            text_length = text.len(),
            text_preview = %text.chars().take(50).collect::<String>(),
            "Calling Google Translate TTS"
        );

        let payload = self.package_rpc(text, language)?;
        let url = format!("{}{}", self.base_url, BATCHEXECUTE_PATH);

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::REFERER, REFERER)
            .form(&[("f.req", payload.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    url = %url,
                    language = %language,
                    "Google Translate TTS request failed"
                );
                format!("Google TTS error: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                language = %language,
                "Google Translate TTS returned an error status"
            );
            return Err(format!("Google TTS returned HTTP {}", status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read Google TTS response: {}", e))?;

        decode_audio(&body)
    }

    /// Synthesize multiple text batches and merge the audio results in order
    async fn synthesize_batches(
        &self,
        batches: &[String],
        language: LanguageCode,
    ) -> Result<Vec<u8>, String> {
        let mut merged_audio = Vec::new();

        for (index, batch) in batches.iter().enumerate() {
            let audio_data = self.call_google(batch, language).await?;
            merged_audio.extend(audio_data);

            tracing::debug!(
                batch_index = index,
                total_audio_size = merged_audio.len(),
                "Batch synthesized and merged"
            );
        }

        Ok(merged_audio)
    }
}

/// Pull the base64 MP3 segments out of a batchexecute response
fn decode_audio(body: &str) -> Result<Vec<u8>, String> {
    let mut audio = Vec::new();

    for line in body.lines().filter(|line| line.contains(TTS_RPC_ID)) {
        if let Some(captures) = audio_payload().captures(line) {
            let decoded = STANDARD
                .decode(&captures[1])
                .map_err(|e| format!("Invalid audio payload from Google TTS: {}", e))?;
            audio.extend(decoded);
        }
    }

    if audio.is_empty() {
        return Err("No audio stream in Google TTS response".to_string());
    }

    Ok(audio)
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    fn provider_name(&self) -> &'static str {
        "google"
    }

    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        // Punctuation-only chunks make the endpoint fail
        let batches: Vec<String> = split_into_batches(text, MAX_BATCH_SIZE)
            .into_iter()
            .filter(|batch| batch.chars().any(char::is_alphanumeric))
            .collect();

        if batches.is_empty() {
            return Err("No text to send to the TTS API".to_string());
        }

        tracing::info!(
            batch_count = batches.len(),
            text_length = text.len(),
            "Text split into batches"
        );

        let audio_data = self.synthesize_batches(&batches, language).await?;

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "google",
            latency_ms = duration.as_millis(),
            characters_count = text.len(),
            batch_count = batches.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
