//! DTOs for the save endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::api::dto::response::Status;

/// Compiled regex for custom alias validation.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request to map a target URL to an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The target URL (must be an absolute URL).
    #[validate(required, url)]
    pub url: Option<String>,

    /// Optional alias; a random one is generated when absent or empty.
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = "*ALIAS_REGEX"))]
    pub alias: Option<String>,
}

impl SaveRequest {
    /// Treats an empty alias the same as a missing one.
    pub fn normalized(mut self) -> Self {
        self.alias = self.alias.filter(|alias| !alias.is_empty());
        self
    }
}

/// Successful save response.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: Status,
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            status: Status::Ok,
            alias,
        }
    }
}
