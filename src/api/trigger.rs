//! Position trigger endpoint

use crate::api::ExtractHost;
use crate::api::error::ApiError;
use crate::api::schemas::{PositionTriggered, Status, TriggerPosition};
use crate::core::positions::PositionCode;
use crate::core::traits::PositionService;
use axum::routing::post;
use axum::{Json, Router};
use di_axum::Inject;

pub fn router() -> Router {
    Router::new().route("/trigger", post(trigger_position))
}

async fn trigger_position(
    Inject(position_service): Inject<dyn PositionService>,
    host: Option<ExtractHost>,
    Json(request): Json<TriggerPosition>,
) -> Result<Json<PositionTriggered>, ApiError> {
    let code = request
        .position
        .as_ref()
        .and_then(|p| p.as_str())
        .ok_or(ApiError::InvalidPosition)?;
    let position: PositionCode = code.parse()?;

    // the body is judged first so an unknown position is reported as such even without a host
    let ExtractHost(host) = host.ok_or(ApiError::MissingHost)?;

    let update = position_service.trigger(position, &host).await;

    Ok(Json(PositionTriggered {
        status: Status::Success,
        position: update.position,
        image_url: update.image_url,
    }))
}
