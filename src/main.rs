use narrated_docs::controllers::conversion::ConversionController;
use narrated_docs::domain::conversion::ConversionService;
use narrated_docs::domain::tts::{LanguageCatalog, TtsService};
use narrated_docs::infrastructure::config::{Config, LogFormat, TtsProvider};
use narrated_docs::infrastructure::http::{build_router, start_http_server};
use narrated_docs::infrastructure::repositories::{
    GoogleTtsRepository, PollyTtsRepository, TtsRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        tts_provider = config.tts_provider.as_str(),
        "Starting narrated-docs on {}:{}",
        config.host,
        config.port
    );

    let tts_repo = build_tts_repository(&config).await?;

    // === DEPENDENCY INJECTION SETUP ===
    let catalog = Arc::new(LanguageCatalog::default());
    let tts_service = Arc::new(TtsService::new(tts_repo));
    let conversion_service = Arc::new(ConversionService::new(
        tts_service.clone(),
        catalog.clone(),
    ));
    let conversion_controller = Arc::new(ConversionController::new(conversion_service));

    let app = build_router(
        tts_service,
        catalog,
        conversion_controller,
        config.max_upload_bytes,
    );

    start_http_server(Arc::new(config), app).await?;

    Ok(())
}

async fn build_tts_repository(
    config: &Config,
) -> Result<Arc<dyn TtsRepository>, Box<dyn std::error::Error>> {
    match config.tts_provider {
        TtsProvider::Google => {
            let repo = match &config.tts_base_url {
                Some(base_url) => GoogleTtsRepository::with_base_url(base_url, config.tts_slow)?,
                None => GoogleTtsRepository::new(&config.tts_region_hint, config.tts_slow)?,
            };
            tracing::info!(
                region_hint = %config.tts_region_hint,
                slow = config.tts_slow,
                "Google Translate TTS client initialized"
            );
            Ok(Arc::new(repo))
        }
        TtsProvider::Polly => {
            let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
            let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
            if !has_access_key || !has_secret_key {
                tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers");
            }

            let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.aws_region.clone()));
            if let Some(base_url) = &config.tts_base_url {
                loader = loader.endpoint_url(base_url);
            }
            let aws_config = loader.load().await;

            tracing::info!(region = ?aws_config.region(), "AWS Polly client initialized");
            let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
            Ok(Arc::new(PollyTtsRepository::new(polly_client)))
        }
    }
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "narrated_docs=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
