use axum::{
    extract::{rejection::FormRejection, Path, State},
    Form, Json,
};
use tracing::instrument;

use crate::{
    appstate::AppState, domain::NewsletterUpdate, error::ApiError, representation::NewsletterFull,
    store,
};

#[instrument(name = "Fetch a newsletter", skip(state))]
pub async fn get_newsletter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<NewsletterFull>, ApiError> {
    let newsletter = store::get(&state.db_pool, id).await?;
    Ok(Json(newsletter.into()))
}

#[instrument(name = "Patch a newsletter", skip(state, form))]
pub async fn patch_newsletter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    form: Result<Form<NewsletterUpdate>, FormRejection>,
) -> Result<Json<NewsletterFull>, ApiError> {
    let Form(changes) = form.map_err(|e| ApiError::Validation(e.body_text()))?;
    let newsletter = store::update(&state.db_pool, id, changes).await?;
    Ok(Json(newsletter.into()))
}

#[instrument(name = "Delete a newsletter", skip(state))]
pub async fn delete_newsletter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    store::delete(&state.db_pool, id).await?;
    Ok(Json(serde_json::json!({
        "message": "record successfully deleted",
    })))
}
