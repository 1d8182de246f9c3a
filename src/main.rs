use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use tawau::application::services::{ChatService, SummaryService, UploadPipeline};
use tawau::infrastructure::auth::SupabaseAuthGateway;
use tawau::infrastructure::extraction::PdfExtractor;
use tawau::infrastructure::llm::GeminiClient;
use tawau::infrastructure::observability::{init_tracing, TracingConfig};
use tawau::infrastructure::persistence::{create_pool, PgDocumentRepository};
use tawau::infrastructure::storage::SupabaseBlobStore;
use tawau::infrastructure::translation::Pdf2zhRunner;
use tawau::infrastructure::workspace::TempWorkspace;
use tawau::presentation::config::Settings;
use tawau::presentation::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional .env file for local runs.
    let _ = dotenvy::dotenv();

    let settings = Settings::from_env()?;
    init_tracing(
        TracingConfig::for_environment(settings.environment),
        settings.server.port,
    );

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;

    let workspace = Arc::new(TempWorkspace::new(&settings.workspace.scratch_dir)?);
    let extractor = Arc::new(PdfExtractor::new());
    let llm_client = Arc::new(GeminiClient::new(settings.llm.api_key.clone()));
    let blob_store = Arc::new(SupabaseBlobStore::new(
        settings.storage.base_url.clone(),
        settings.storage.service_key.clone(),
        settings.storage.bucket.clone(),
    ));
    let translator = Arc::new(Pdf2zhRunner::new(
        settings.translation.command.clone(),
        Some(settings.llm.api_key.clone()),
    ));
    let document_repository = Arc::new(PgDocumentRepository::new(pool));
    let auth_gateway = Arc::new(SupabaseAuthGateway::new(
        settings.storage.base_url.clone(),
        settings.storage.service_key.clone(),
    ));

    let summaries = Arc::new(SummaryService::new(
        llm_client.clone(),
        settings.llm.summary_model.clone(),
    ));
    let upload_pipeline = Arc::new(UploadPipeline::new(
        workspace,
        extractor,
        summaries,
        blob_store.clone(),
        translator,
        document_repository.clone(),
    ));
    let chat_service = Arc::new(ChatService::new(
        llm_client,
        document_repository.clone(),
        settings.llm.chat_fallback_model.clone(),
    ));

    let state = AppState {
        upload_pipeline,
        chat_service,
        auth_gateway,
        document_repository,
        blob_store,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
