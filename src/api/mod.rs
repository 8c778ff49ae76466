use crate::api::error::ApiError;
use crate::core::positions::IMAGES_PATH;
use crate::infrastructure::images::ImageDirectory;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::HOST;
use axum::http::request::Parts;
use axum::{Extension, Router};
use di::ServiceProvider;
use di_axum::RouterServiceProviderExtensions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod force_sensor;
pub mod positions;
pub mod schemas;
pub mod trigger;
pub mod updates;

/// Host (and port) the client addressed, taken from `Host` or, for HTTP/2, the URI authority.
#[derive(Debug)]
pub struct ExtractHost(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ExtractHost
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, ApiError> {
        if let Some(host) = parts.headers.get(HOST) {
            let host = host.to_str().map_err(|_| ApiError::MissingHost)?;
            if host.is_empty() {
                return Err(ApiError::MissingHost);
            }
            Ok(ExtractHost(host.to_owned()))
        } else if let Some(authority) = parts.uri.authority() {
            Ok(ExtractHost(authority.as_str().to_owned()))
        } else {
            Err(ApiError::MissingHost)
        }
    }
}

/// The complete application: every route, CORS for any origin, request tracing and DI.
pub fn app(images: ImageDirectory, provider: ServiceProvider) -> Router {
    Router::new()
        .merge(trigger::router())
        .merge(force_sensor::router())
        .merge(updates::router())
        .nest(IMAGES_PATH, positions::router())
        .layer(Extension(images))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_headers(Any)
                .allow_methods(Any)
                .allow_origin(Any),
        )
        .with_provider(provider)
}
