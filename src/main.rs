use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use portfolio_assistant::application::ports::FileConverter;
use portfolio_assistant::application::services::{
    ChatService, ConversionService, ModelSelector, PromptBuilder, ResponseCache,
};
use portfolio_assistant::domain::KnowledgeBase;
use portfolio_assistant::infrastructure::conversion::{ImagePdfConverter, PdfDocxConverter};
use portfolio_assistant::infrastructure::llm::GeminiClient;
use portfolio_assistant::infrastructure::observability::{TracingConfig, init_tracing};
use portfolio_assistant::infrastructure::storage::LocalScratchStore;
use portfolio_assistant::presentation::config::load_knowledge_base;
use portfolio_assistant::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::new(
            environment.as_str(),
            settings.logging.level.clone(),
            settings.logging.enable_json,
        ),
        settings.server.port,
    );

    let llm_client = Arc::new(GeminiClient::new(
        settings.llm.api_key.clone(),
        settings.llm.base_url.clone(),
    ));

    let active_model = ModelSelector::new(
        Arc::clone(&llm_client),
        settings.llm.preferred_model_ids(),
    )
    .select()
    .await;

    let knowledge_base = match &settings.prompt.knowledge_base_path {
        Some(path) => {
            tracing::info!(path = %path, "Loading knowledge base");
            load_knowledge_base(path)?
        }
        None => KnowledgeBase::default(),
    };

    let chat_service = Arc::new(ChatService::new(
        Arc::clone(&llm_client),
        active_model,
        PromptBuilder::new(knowledge_base, settings.prompt.max_message_chars),
        ResponseCache::new(settings.cache.capacity),
        settings.llm.request_timeout(),
    ));

    let scratch_store = Arc::new(LocalScratchStore::new(PathBuf::from(
        &settings.conversion.scratch_dir,
    ))?);
    let image_to_pdf: Arc<dyn FileConverter> = Arc::new(ImagePdfConverter::new());
    let pdf_to_word: Arc<dyn FileConverter> = Arc::new(PdfDocxConverter::new());

    let conversion_service = Arc::new(ConversionService::new(
        scratch_store,
        image_to_pdf,
        pdf_to_word,
        settings.conversion.timeout(),
    ));

    let state = AppState {
        chat_service,
        conversion_service,
        max_upload_size_bytes: settings.conversion.max_upload_size_bytes,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
