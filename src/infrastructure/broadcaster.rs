//! Fan-out of position updates to real-time subscribers

use crate::infrastructure::entities::PositionUpdate;
use di::inject;
use di::injectable;
use log::debug;
use tokio::sync::broadcast;

/// Updates buffered per subscriber before a slow one starts skipping.
const CHANNEL_CAPACITY: usize = 64;

pub struct UpdateBroadcaster {
    sender: broadcast::Sender<PositionUpdate>,
}

#[injectable]
impl UpdateBroadcaster {
    #[inject]
    pub fn create() -> UpdateBroadcaster {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        UpdateBroadcaster { sender }
    }
}

impl UpdateBroadcaster {
    /// Receives every update published after this call. Nothing is replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<PositionUpdate> {
        self.sender.subscribe()
    }

    /// Fire-and-forget send. Returns how many subscribers the update was queued for.
    pub fn publish(&self, update: PositionUpdate) -> usize {
        match self.sender.send(update) {
            Ok(receivers) => receivers,
            Err(_) => {
                debug!("no subscribers connected, position update dropped");
                0
            }
        }
    }

    /// Live subscriptions; a closed client stops counting once its connection task ends.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
