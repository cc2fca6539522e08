use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    /// Upper bound for a multipart upload body
    pub max_upload_bytes: usize,
    // Speech provider
    pub tts_provider: TtsProvider,
    pub tts_region_hint: String,
    pub tts_slow: bool,
    pub tts_base_url: Option<String>,
    pub aws_region: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    Google,
    Polly,
}

impl TtsProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            TtsProvider::Google => "google",
            TtsProvider::Polly => "polly",
        }
    }
}

impl std::str::FromStr for TtsProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(TtsProvider::Google),
            "polly" => Ok(TtsProvider::Polly),
            other => Err(format!("Unknown TTS_PROVIDER '{}', expected google or polly", other)),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })
                .unwrap_or(Environment::Development),
            log_format: env::var("LOG_FORMAT")
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| "52428800".to_string())
                .parse()?,
            tts_provider: env::var("TTS_PROVIDER")
                .unwrap_or_else(|_| "google".to_string())
                .parse::<TtsProvider>()?,
            tts_region_hint: env::var("TTS_REGION_HINT").unwrap_or_else(|_| "com".to_string()),
            tts_slow: env::var("TTS_SLOW")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
            tts_base_url: env::var("TTS_BASE_URL").ok().filter(|s| !s.is_empty()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string()),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
            max_upload_bytes: 52_428_800,
            tts_provider: TtsProvider::Google,
            tts_region_hint: "com".to_string(),
            tts_slow: false,
            tts_base_url: None,
            aws_region: "eu-west-1".to_string(),
        }
    }
}
