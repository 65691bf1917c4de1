use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use hyper::StatusCode;
use tracing::instrument;

use crate::{
    appstate::AppState,
    domain::NewNewsletter,
    error::ApiError,
    representation::{NewsletterFull, NewsletterSummary},
    store,
};

#[instrument(name = "List newsletters", skip(state))]
pub async fn list_newsletters(
    State(state): State<AppState>,
) -> Result<Json<Vec<NewsletterSummary>>, ApiError> {
    let newsletters = store::list(&state.db_pool).await?;
    Ok(Json(newsletters.into_iter().map(Into::into).collect()))
}

#[instrument(name = "Create a newsletter", skip(state, form))]
pub async fn create_newsletter(
    State(state): State<AppState>,
    form: Result<Form<NewNewsletter>, FormRejection>,
) -> Result<(StatusCode, Json<NewsletterFull>), ApiError> {
    let Form(new) = form.map_err(|e| ApiError::Validation(e.body_text()))?;
    let newsletter = store::create(&state.db_pool, new).await?;
    Ok((StatusCode::CREATED, Json(newsletter.into())))
}
