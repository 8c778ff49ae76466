//! Infrastructure traits, used for DI on higher levels

use crate::core::positions::PositionCode;
use async_trait::async_trait;
use serde_json::Number;

#[async_trait]
pub trait StateRepository: Send + Sync {
    async fn last_position(&self) -> Option<PositionCode>;
    async fn set_last_position(&self, position: PositionCode);

    async fn force_value(&self) -> Number;
    async fn set_force_value(&self, value: Number);
}
