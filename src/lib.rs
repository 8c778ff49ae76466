//! Patient position relay - Library exports for testing
//!
//! (c) Softlandia 2025

pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

use crate::core::services::{RelayForceSensorService, RelayPositionService};
use crate::infrastructure::broadcaster::UpdateBroadcaster;
use crate::infrastructure::state::InMemoryStateRepository;
use anyhow::anyhow;
use di::{Injectable, ServiceCollection, ServiceProvider};

/// Registers every service the HTTP layer resolves.
///
/// State and the broadcaster are singletons shared by every request scope; services are scoped.
pub fn service_provider() -> anyhow::Result<ServiceProvider> {
    ServiceCollection::new()
        .add(InMemoryStateRepository::singleton())
        .add(UpdateBroadcaster::singleton())
        .add(RelayPositionService::scoped())
        .add(RelayForceSensorService::scoped())
        .build_provider()
        .map_err(|e| anyhow!("invalid service registrations: {e}"))
}
