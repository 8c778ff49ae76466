//! In-process state holder

use crate::core::positions::PositionCode;
use crate::infrastructure::entities::ProcessState;
use crate::infrastructure::traits::StateRepository;
use async_trait::async_trait;
use di::inject;
use di::injectable;
use serde_json::Number;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Holds the latest position and force reading for the lifetime of the process.
///
/// Nothing is persisted; a restart resets both values to their defaults.
pub struct InMemoryStateRepository {
    state: RwLock<ProcessState>,
}

#[injectable(StateRepository)]
impl InMemoryStateRepository {
    #[inject]
    pub fn create() -> InMemoryStateRepository {
        InMemoryStateRepository {
            state: RwLock::new(ProcessState::default()),
        }
    }
}

impl InMemoryStateRepository {
    // Writers never leave the state half-updated, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, ProcessState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ProcessState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    fn snapshot(&self) -> ProcessState {
        self.read().clone()
    }
}

#[async_trait]
impl StateRepository for InMemoryStateRepository {
    async fn last_position(&self) -> Option<PositionCode> {
        self.read().last_position
    }

    async fn set_last_position(&self, position: PositionCode) {
        self.write().last_position = Some(position);
    }

    async fn force_value(&self) -> Number {
        self.read().force_value.clone()
    }

    async fn set_force_value(&self, value: Number) {
        self.write().force_value = value;
    }
}
