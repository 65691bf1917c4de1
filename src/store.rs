use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::domain::{NewNewsletter, Newsletter, NewsletterUpdate};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("no newsletter with the requested id")]
    NotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[instrument(name = "Insert a new newsletter", skip(pool))]
pub async fn create(pool: &SqlitePool, new: NewNewsletter) -> Result<Newsletter, StoreError> {
    let newsletter = sqlx::query_as::<_, Newsletter>(
        r#"INSERT INTO newsletters (title, body, published_at)
           VALUES (?, ?, ?)
           RETURNING id, title, body, published_at"#,
    )
    .bind(&new.title)
    .bind(&new.body)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(newsletter)
}

#[instrument(name = "Fetch a newsletter by id", skip(pool))]
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Newsletter, StoreError> {
    sqlx::query_as::<_, Newsletter>(
        r#"SELECT id, title, body, published_at FROM newsletters WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NotFound)
}

#[instrument(name = "List all newsletters", skip(pool))]
pub async fn list(pool: &SqlitePool) -> Result<Vec<Newsletter>, StoreError> {
    let newsletters = sqlx::query_as::<_, Newsletter>(
        r#"SELECT id, title, body, published_at FROM newsletters ORDER BY id"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(newsletters)
}

/// Applies the submitted fields to the row and returns the updated entity.
///
/// The read and the write share one transaction so that two concurrent
/// patches to the same id cannot interleave.
#[instrument(name = "Update a newsletter", skip(pool))]
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    changes: NewsletterUpdate,
) -> Result<Newsletter, StoreError> {
    let mut transaction = pool.begin().await?;

    let mut newsletter = sqlx::query_as::<_, Newsletter>(
        r#"SELECT id, title, body, published_at FROM newsletters WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(&mut *transaction)
    .await?
    .ok_or(StoreError::NotFound)?;

    if let Some(title) = changes.title {
        newsletter.title = title;
    }
    if let Some(body) = changes.body {
        newsletter.body = body;
    }

    sqlx::query(r#"UPDATE newsletters SET title = ?, body = ? WHERE id = ?"#)
        .bind(&newsletter.title)
        .bind(&newsletter.body)
        .bind(id)
        .execute(&mut *transaction)
        .await?;

    transaction.commit().await?;

    Ok(newsletter)
}

#[instrument(name = "Delete a newsletter", skip(pool))]
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
    let result = sqlx::query(r#"DELETE FROM newsletters WHERE id = ?"#)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound);
    }

    Ok(())
}
