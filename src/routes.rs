use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::api::controller::demo::DemoController;
use crate::api::util::reply::Reply;

/// Build the demo application router
pub fn app_router() -> Router {
    let api_v1 = Router::new()
        .nest("/demo", crate::api::routes::demo_routes::demo_routes());

    Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // API v1
        .nest("/api/v1", api_v1)

        // JSON 404 for anything else
        .fallback(DemoController::not_found)
        .layer(CorsLayer::very_permissive())
}

async fn root() -> &'static str {
    "Server is running!"
}

async fn health_check() -> Reply<()> {
    Reply::status_success("OK", None)
}
