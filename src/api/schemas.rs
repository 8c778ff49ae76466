//! Request and response bodies

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub status: Status,
    pub message: String,
}

/// `position` is kept loose so that a missing or non-string value is reported as an invalid
/// position rather than a deserialization failure.
#[derive(Deserialize, Debug)]
pub struct TriggerPosition {
    #[serde(default)]
    pub position: Option<Value>,
}

#[derive(Serialize, Debug)]
pub struct PositionTriggered {
    pub status: Status,
    pub position: String,
    pub image_url: String,
}

#[derive(Deserialize, Debug)]
pub struct ForceReading {
    #[serde(default)]
    pub force_value: Option<Value>,
}

#[derive(Serialize, Debug)]
pub struct Acknowledgement {
    pub status: Status,
    pub message: &'static str,
}

#[derive(Serialize, Debug)]
pub struct ForceValue {
    pub force_value: Number,
}

/// Text frame sent to WebSocket clients.
#[derive(Serialize, Debug)]
pub struct UpdateFrame<'a, T> {
    pub event: &'a str,
    pub data: &'a T,
}
