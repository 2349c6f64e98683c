//! Shared response envelope.

use serde::Serialize;

/// Outcome marker carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    Error,
}

/// Envelope for operations that return nothing but their outcome.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: Status,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: Status::Ok }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_value(Status::Ok).unwrap(), json!("OK"));
        assert_eq!(serde_json::to_value(Status::Error).unwrap(), json!("Error"));
    }

    #[test]
    fn test_ok_envelope() {
        let body = serde_json::to_value(StatusResponse::ok()).unwrap();
        assert_eq!(body, json!({ "status": "OK" }));
    }
}
