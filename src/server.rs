use axum::{
    Json, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::protocol::{CHAT_PATH, ChatRequest, ErrorBody, ResponsePayload};

/// Message returned for an empty chat request.
pub const EMPTY_INPUT_ERROR: &str = "No input provided";

/// Bind the configured address and serve until the process stops.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let addr = config.server.address();
    let listener = TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %listener.local_addr()?,
        "Server started"
    );

    serve(listener, AppState::new(config)).await
}

/// Serve the analysis API on an already bound listener.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    axum::serve(listener, router(state).into_make_service()).await?;
    Ok(())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let timeout = state.config.server.request_timeout();

    let app = Router::new()
        .route(CHAT_PATH, post(api_chat))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http());

    limit_request_time(app, timeout).with_state(state)
}

/// Answer `408 Request Timeout` for any request that outlives `timeout`.
fn limit_request_time<S>(app: Router<S>, timeout: Option<Duration>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    match timeout {
        Some(duration) => app.layer(axum::middleware::from_fn(
            move |req: Request, next: Next| async move { with_timeout(duration, req, next).await },
        )),
        None => app,
    }
}

async fn with_timeout(duration: Duration, req: Request, next: Next) -> axum::response::Response {
    match tokio::time::timeout(duration, next.run(req)).await {
        Ok(res) => res,
        Err(_) => {
            tracing::warn!(timeout_secs = duration.as_secs(), "Request timed out");
            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// POST /chat - Learn from a message and report on its last word.
async fn api_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ResponsePayload>, (StatusCode, Json<ErrorBody>)> {
    if req.message.is_empty() {
        tracing::debug!("Rejected empty chat request");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: EMPTY_INPUT_ERROR.to_string(),
            }),
        ));
    }

    tracing::info!(
        message_length = req.message.len(),
        "Received chat request"
    );

    let (payload, vocabulary) = {
        let mut engine = state.engine.write().await;
        let payload = engine.analyze(&req.message);
        (payload, engine.word_count())
    };

    tracing::debug!(
        last_word = %payload.last_word,
        next_word = %payload.next_word,
        vocabulary,
        "Chat request processed"
    );

    Ok(Json(payload))
}

/// GET /health - Liveness check.
async fn health() -> &'static str {
    "ok"
}
