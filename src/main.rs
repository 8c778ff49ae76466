//! Patient position relay
//!
//! (c) Softlandia 2025

use patient_position_relay::api;
use patient_position_relay::config::Settings;
use patient_position_relay::infrastructure::images::ImageDirectory;
use patient_position_relay::service_provider;

use anyhow::Context;
use log::info;
use tokio::runtime::{Builder, Runtime};

fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env()?;

    let runtime: Runtime = Builder::new_multi_thread().enable_all().build()?;

    runtime.block_on(web_server_task(settings))
}

async fn web_server_task(settings: Settings) -> anyhow::Result<()> {
    let images = ImageDirectory::new(&settings.positions_dir);
    images.ensure_exists().await.with_context(|| {
        format!(
            "cannot create image directory {}",
            settings.positions_dir.display()
        )
    })?;
    info!("serving position images from {}", images.root().display());

    let app = api::app(images, service_provider()?);

    let listener = tokio::net::TcpListener::bind(settings.bind_address)
        .await
        .with_context(|| format!("cannot listen on {}", settings.bind_address))?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    info!("Shutting down...");

    Ok(())
}
