//! Shared helpers for the integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use di::ServiceProvider;
use patient_position_relay::api;
use patient_position_relay::infrastructure::broadcaster::UpdateBroadcaster;
use patient_position_relay::infrastructure::images::ImageDirectory;
use patient_position_relay::infrastructure::traits::StateRepository;
use patient_position_relay::service_provider;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const HOST: &str = "localhost:5000";

pub struct TestApp {
    pub router: Router,
    pub provider: ServiceProvider,
    pub images: TempDir,
}

impl TestApp {
    /// Fresh state, a fresh broadcaster and an empty temp image directory.
    pub fn new() -> TestApp {
        let images = tempfile::tempdir().unwrap();
        let provider = service_provider().unwrap();
        let router = api::app(ImageDirectory::new(images.path()), provider.clone());

        TestApp {
            router,
            provider,
            images,
        }
    }

    pub fn state(&self) -> di::Ref<dyn StateRepository> {
        self.provider.get_required::<dyn StateRepository>()
    }

    pub fn broadcaster(&self) -> di::Ref<UpdateBroadcaster> {
        self.provider.get_required::<UpdateBroadcaster>()
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.send(post_json(path, body)).await
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.send(get(path)).await
    }
}

pub fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("Host", HOST)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header("Host", HOST)
        .body(Body::empty())
        .unwrap()
}
