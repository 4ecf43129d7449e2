//! Service root

use axum::{Json, Router, routing::get};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello World!",
    })
}

pub fn router() -> Router {
    Router::new().route("/", get(root))
}
