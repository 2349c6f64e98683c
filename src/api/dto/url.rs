//! DTOs for listing stored URLs.

use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// A stored mapping as exposed over HTTP.
#[derive(Debug, Serialize)]
pub struct UrlItem {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl From<UrlRecord> for UrlItem {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            alias: record.alias,
            url: record.target,
        }
    }
}
