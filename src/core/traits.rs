//! DI "Interfaces"

use crate::core::positions::PositionCode;
use crate::infrastructure::entities::PositionUpdate;
use async_trait::async_trait;
use serde_json::Number;

#[async_trait]
pub trait PositionService: Send + Sync {
    /// Records `position` as the current position and pushes the update to every subscriber.
    ///
    /// `host` is the authority the client used to reach us; the image URL is built from it.
    async fn trigger(&self, position: PositionCode, host: &str) -> PositionUpdate;
}

#[async_trait]
pub trait ForceSensorService: Send + Sync {
    /// Stores a new force reading. The last write wins.
    async fn record(&self, value: Number);

    /// The stored reading, `0` until one is recorded.
    async fn current(&self) -> Number;
}
