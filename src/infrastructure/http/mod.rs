pub mod request_id;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::controllers::{
    conversion::{ConversionController, X_CHARACTER_COUNT, X_LANGUAGE, X_PAGE_COUNT},
    health, languages,
};
use crate::domain::tts::{LanguageCatalog, TtsService};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router. Kept separate from `start_http_server` so the
/// e2e tests can serve the exact same routes on an ephemeral port.
pub fn build_router(
    tts_service: Arc<TtsService>,
    catalog: Arc<LanguageCatalog>,
    conversion_controller: Arc<ConversionController>,
    max_upload_bytes: usize,
) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(tts_service);

    let language_routes = Router::new()
        .route("/api/languages", get(languages::list_languages))
        .with_state(catalog);

    // Upload routes carry their own body limit
    let upload_routes = Router::new()
        .route("/api/documents/preview", post(ConversionController::preview))
        .route("/api/convert", post(ConversionController::convert))
        .with_state(conversion_controller)
        .layer(DefaultBodyLimit::max(max_upload_bytes));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([
            header::CONTENT_DISPOSITION,
            HeaderName::from_static(X_CHARACTER_COUNT),
            HeaderName::from_static(X_LANGUAGE),
            HeaderName::from_static(X_PAGE_COUNT),
            HeaderName::from_static(X_REQUEST_ID),
        ]);

    Router::new()
        .merge(health_routes)
        .merge(language_routes)
        .merge(upload_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
