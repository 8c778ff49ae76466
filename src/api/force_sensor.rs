//! Force sensor endpoint

use crate::api::error::ApiError;
use crate::api::schemas::{Acknowledgement, ForceReading, ForceValue, Status};
use crate::core::traits::ForceSensorService;
use axum::routing::get;
use axum::{Json, Router};
use di_axum::Inject;
use serde_json::Value;

pub fn router() -> Router {
    Router::new().route("/force_sensor", get(current_force).post(record_force))
}

async fn record_force(
    Inject(force_service): Inject<dyn ForceSensorService>,
    Json(reading): Json<ForceReading>,
) -> Result<Json<Acknowledgement>, ApiError> {
    let value = match reading.force_value {
        None | Some(Value::Null) => return Err(ApiError::MissingForceValue),
        Some(Value::Number(value)) => value,
        Some(_) => return Err(ApiError::InvalidForceValue),
    };

    force_service.record(value).await;

    Ok(Json(Acknowledgement {
        status: Status::Success,
        message: "Force sensor value updated.",
    }))
}

async fn current_force(
    Inject(force_service): Inject<dyn ForceSensorService>,
) -> Json<ForceValue> {
    Json(ForceValue {
        force_value: force_service.current().await,
    })
}
