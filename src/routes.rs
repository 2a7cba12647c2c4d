use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::engine::EngineClient;
use crate::error::ForwardError;

/// The one-screen order form, embedded so the binary is self-contained.
const ORDER_PAGE: &str = include_str!("../static/index.html");

#[derive(Clone)]
pub struct AppState {
    pub engine: EngineClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(order_page))
        .route("/healthz", get(|| async { "ok" }))
        .route("/api/order", post(submit_order))
        .with_state(state)
}

#[tracing::instrument(level = "info")]
async fn order_page() -> Html<&'static str> {
    Html(ORDER_PAGE)
}

/// Fixed wire shape every local failure collapses to.
fn failure_body() -> Json<Value> {
    Json(json!({ "status": "error", "message": "Failed to process order" }))
}

#[tracing::instrument(level = "info", skip(state, body))]
async fn submit_order(State(state): State<AppState>, body: String) -> (StatusCode, Json<Value>) {
    match forward(&state.engine, &body).await {
        Ok(reply) => {
            let status = reply.get("status").and_then(Value::as_str).unwrap_or("?");
            debug!(status, "engine_reply");
            (StatusCode::OK, Json(reply))
        }
        Err(e) => {
            error!("Error forwarding request: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, failure_body())
        }
    }
}

// A body that is not JSON must never reach the engine.
async fn forward(engine: &EngineClient, body: &str) -> Result<Value, ForwardError> {
    let order: Value = serde_json::from_str(body).map_err(ForwardError::MalformedInput)?;
    engine.submit(&order).await
}
