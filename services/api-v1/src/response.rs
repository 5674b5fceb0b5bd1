use serde::{Deserialize, Serialize};

use crate::Envelope;

/// Status is the envelope every PlaceNext API response carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// Zero on success.
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub request_id: String,
}

impl Status {
    /// The status of a successful call answered without body.
    pub fn ok() -> Self {
        Self {
            code: 0,
            message: "OK".to_string(),
            request_id: String::new(),
        }
    }
}

impl Envelope for Status {
    fn ok() -> Self {
        Status::ok()
    }
}

/// NssResponse carries the Net Sentiment Score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NssResponse {
    #[serde(flatten)]
    pub status: Status,
    #[serde(default)]
    pub score: i64,
}

impl Envelope for NssResponse {
    fn ok() -> Self {
        Self {
            status: Status::ok(),
            score: 0,
        }
    }
}
