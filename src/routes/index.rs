use axum::{response::IntoResponse, Json};
use tracing::instrument;

#[instrument(name = "Index")]
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "index": "Welcome to the Newsletter RESTful API",
    }))
}
