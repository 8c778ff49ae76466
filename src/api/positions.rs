//! Static position images

use crate::infrastructure::images::ImageDirectory;
use axum::extract::{Path, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Router};
use log::debug;
use tower::ServiceExt;
use tower_http::services::ServeFile;

pub fn router() -> Router {
    Router::new().route("/:filename", get(get_image))
}

async fn get_image(
    Extension(images): Extension<ImageDirectory>,
    Path(filename): Path<String>,
    request: Request,
) -> Response {
    let Some(path) = images.resolve(&filename) else {
        debug!("refusing image request for {filename:?}");
        return StatusCode::NOT_FOUND.into_response();
    };

    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
