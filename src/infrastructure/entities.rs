//! Process state and the payloads pushed to real-time clients

use crate::core::positions::PositionCode;
use serde::Serialize;
use serde_json::Number;

/// Event name real-time clients listen for.
pub const UPDATE_EVENT: &str = "update_position";

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessState {
    pub last_position: Option<PositionCode>,
    pub force_value: Number,
}

impl Default for ProcessState {
    fn default() -> Self {
        ProcessState {
            last_position: None,
            force_value: Number::from(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionUpdate {
    pub position: String,
    pub image_url: String,
}
