use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::compression::predicate::{DefaultPredicate, Predicate, SizeAbove};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::LlmClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    chat_handler, health_handler, img_to_pdf_handler, pdf_to_word_handler, root_handler,
};
use crate::presentation::state::AppState;

const GZIP_MIN_SIZE: u16 = 1000;

pub fn create_router<L>(state: AppState<L>) -> Router
where
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let compression = CompressionLayer::new()
        .compress_when(DefaultPredicate::new().and(SizeAbove::new(GZIP_MIN_SIZE)));

    let tools = Router::new()
        .route("/tools/img-to-pdf", post(img_to_pdf_handler::<L>))
        .route("/tools/pdf-to-word", post(pdf_to_word_handler::<L>))
        .layer(DefaultBodyLimit::max(state.max_upload_size_bytes));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler::<L>))
        .route("/chat", post(chat_handler::<L>))
        .merge(tools)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(compression)
        .layer(cors)
        .with_state(state)
}
