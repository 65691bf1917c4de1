//! JSON projections of the newsletter entity, with embedded hypermedia
//! links. Link construction is a pure function of the id and the fixed
//! route table, no framework reflection involved.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::Newsletter;

pub const COLLECTION_PATH: &str = "/newsletters";

pub fn item_href(id: i64) -> String {
    format!("{COLLECTION_PATH}/{id}")
}

/// A single hypermedia link: where to go and which verb to use there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub method: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ItemLinks {
    #[serde(rename = "self")]
    pub self_: Link,
    pub update: Link,
    pub delete: Link,
    pub collection: Link,
}

impl ItemLinks {
    pub fn for_id(id: i64) -> Self {
        Self {
            self_: Link {
                href: item_href(id),
                method: "GET",
            },
            update: Link {
                href: item_href(id),
                method: "PATCH",
            },
            delete: Link {
                href: item_href(id),
                method: "DELETE",
            },
            collection: Link {
                href: COLLECTION_PATH.into(),
                method: "GET",
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryLinks {
    #[serde(rename = "self")]
    pub self_: Link,
}

/// The complete projection, returned by item routes and by create.
#[derive(Debug, Serialize)]
pub struct NewsletterFull {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
    #[serde(rename = "_links")]
    pub links: ItemLinks,
}

/// The reduced projection used in collection listings: no body, self
/// link only.
#[derive(Debug, Serialize)]
pub struct NewsletterSummary {
    pub id: i64,
    pub title: String,
    pub published_at: DateTime<Utc>,
    #[serde(rename = "_links")]
    pub links: SummaryLinks,
}

impl From<Newsletter> for NewsletterFull {
    fn from(newsletter: Newsletter) -> Self {
        let links = ItemLinks::for_id(newsletter.id);
        Self {
            id: newsletter.id,
            title: newsletter.title,
            body: newsletter.body,
            published_at: newsletter.published_at,
            links,
        }
    }
}

impl From<Newsletter> for NewsletterSummary {
    fn from(newsletter: Newsletter) -> Self {
        let self_ = Link {
            href: item_href(newsletter.id),
            method: "GET",
        };
        Self {
            id: newsletter.id,
            title: newsletter.title,
            published_at: newsletter.published_at,
            links: SummaryLinks { self_ },
        }
    }
}
