use chrono::{DateTime, Utc};

/// A persisted newsletter row.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Newsletter {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
}

/// Fields required to create a newsletter. The id and timestamp are
/// assigned by the store.
#[derive(Debug, serde::Deserialize)]
pub struct NewNewsletter {
    pub title: String,
    pub body: String,
}

/// The writable subset of fields for a partial update.
///
/// `deny_unknown_fields` turns an attempt to patch anything outside the
/// allow-list (e.g. `id` or `published_at`) into a deserialization error,
/// which the handler maps to 400.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewsletterUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
}
