//! Implementations for the service the app needs.
//!

use crate::core::positions::PositionCode;
use crate::core::traits::{ForceSensorService, PositionService};
use crate::infrastructure::broadcaster::UpdateBroadcaster;
use crate::infrastructure::entities::PositionUpdate;
use crate::infrastructure::traits::StateRepository;
use async_trait::async_trait;
use di::{Ref, injectable};
use log::{debug, info};
use serde_json::Number;

#[injectable(PositionService)]
pub struct RelayPositionService {
    repo: Ref<dyn StateRepository>,
    broadcaster: Ref<UpdateBroadcaster>,
}

#[async_trait]
impl PositionService for RelayPositionService {
    async fn trigger(&self, position: PositionCode, host: &str) -> PositionUpdate {
        self.repo.set_last_position(position).await;

        let update = PositionUpdate {
            position: position.display_name(),
            image_url: position.image_url(host),
        };
        info!("Received Position: {}", update.position);

        let delivered = self.broadcaster.publish(update.clone());
        debug!("position update delivered to {delivered} subscriber(s)");

        update
    }
}

#[injectable(ForceSensorService)]
pub struct RelayForceSensorService {
    repo: Ref<dyn StateRepository>,
}

#[async_trait]
impl ForceSensorService for RelayForceSensorService {
    async fn record(&self, value: Number) {
        info!("Force Sensor Value: {value}");
        self.repo.set_force_value(value).await;
    }

    async fn current(&self) -> Number {
        self.repo.force_value().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::state::InMemoryStateRepository;
    use std::sync::Arc;

    fn position_service() -> (
        RelayPositionService,
        Arc<InMemoryStateRepository>,
        Arc<UpdateBroadcaster>,
    ) {
        let repo = Arc::new(InMemoryStateRepository::create());
        let broadcaster = Arc::new(UpdateBroadcaster::create());
        let service = RelayPositionService {
            repo: repo.clone(),
            broadcaster: broadcaster.clone(),
        };
        (service, repo, broadcaster)
    }

    #[tokio::test]
    async fn trigger_records_and_publishes() {
        let (service, repo, broadcaster) = position_service();
        let mut updates = broadcaster.subscribe();

        let update = service
            .trigger(PositionCode::HeadFirstProne, "relay.local")
            .await;

        assert_eq!(update.position, "HEAD FIRST PRONE");
        assert_eq!(
            update.image_url,
            "http://relay.local/positions/image_2.jpeg.jpg"
        );
        assert_eq!(
            repo.last_position().await,
            Some(PositionCode::HeadFirstProne)
        );
        assert_eq!(updates.try_recv().unwrap(), update);
        assert!(updates.try_recv().is_err());
    }

    #[tokio::test]
    async fn trigger_without_subscribers_still_records() {
        let (service, repo, _broadcaster) = position_service();

        service.trigger(PositionCode::FeetFirst, "relay.local").await;

        assert_eq!(repo.last_position().await, Some(PositionCode::FeetFirst));
    }

    #[tokio::test]
    async fn force_value_last_write_wins() {
        let service = RelayForceSensorService {
            repo: Arc::new(InMemoryStateRepository::create()),
        };
        assert_eq!(service.current().await, Number::from(0));

        service.record(Number::from(3)).await;
        service.record(Number::from_f64(7.25).unwrap()).await;

        assert_eq!(service.current().await, Number::from_f64(7.25).unwrap());
    }
}
