//! Router configuration for the Postbox HTTP binding.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_account, delete_account, delete_messages, list_accounts, list_messages, login,
    read_new_messages, send_message, AppState,
};

/// Create the main API router.
///
/// Every operation is a `POST` under `/api` taking its request as JSON.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let account_routes = Router::new()
        .route("/create_account", post(create_account))
        .route("/login", post(login))
        .route("/list_accounts", post(list_accounts))
        .route("/delete_account", post(delete_account));

    let message_routes = Router::new()
        .route("/send_message", post(send_message))
        .route("/read_new_messages", post(read_new_messages))
        .route("/list_messages", post(list_messages))
        .route("/delete_messages", post(delete_messages));

    let api_routes = Router::new().merge(account_routes).merge(message_routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
