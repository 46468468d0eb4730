//! Demo routes (e.g., /api/v1/demo/*)

use axum::{routing::{get, post}, Router};
use crate::api::controller::demo::DemoController;

pub fn demo_routes() -> Router {
    Router::new()
        .route("/success", get(DemoController::success))
        .route("/error", get(DemoController::error))
        .route("/signup", post(DemoController::signup))
        .route("/items", get(DemoController::items))
        .route("/items/{id}", get(DemoController::item))
        .route("/accepted", post(DemoController::accepted))
        .route("/status", get(DemoController::status_success))
        .route("/status/error", get(DemoController::status_error))

        .route("/echo", post(DemoController::echo))
}
