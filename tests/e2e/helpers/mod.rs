use narrated_docs::controllers::conversion::ConversionController;
use narrated_docs::domain::conversion::ConversionService;
use narrated_docs::domain::tts::{LanguageCatalog, TtsService};
use narrated_docs::infrastructure::config::Config;
use narrated_docs::infrastructure::http::build_router;
use narrated_docs::infrastructure::repositories::TtsRepository;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod fixtures;

use api_client::TestClient;
use tts_mocks::FakeTtsRepository;

pub struct TestContext {
    pub client: TestClient,
    pub tts: Arc<FakeTtsRepository>,
    #[allow(dead_code)]
    pub config: Config,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let config = Config {
                port: 0, // Will be assigned by the OS
                max_upload_bytes: 1024 * 1024,
                ..Config::default()
            };

            let tts = Arc::new(FakeTtsRepository::default());
            let base_url = spawn_app(tts.clone(), &config).await;

            Self {
                client: TestClient::new(&base_url),
                tts,
                config,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Server task ends with the test runtime
        }
    }
}

/// Serve the application router backed by `tts_repo` on an ephemeral port
pub async fn spawn_app(tts_repo: Arc<dyn TtsRepository>, config: &Config) -> String {
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

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
