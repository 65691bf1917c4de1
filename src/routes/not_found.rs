use axum::{response::IntoResponse, Json};
use hyper::StatusCode;
use tracing::instrument;

#[instrument(name = "Not Found")]
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": "resource not found"})),
    )
}
