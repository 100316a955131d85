//! Weather Dash web application.
//!
//! HTTP server rendering the dashboard page behind the identity provider's
//! forwarded session headers. Views are rendered server-side with `maud`.

pub mod auth;
pub mod handlers;
pub mod state;
pub mod views;

use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub use state::AppState;

/// Build the application router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard_handler))
        .route("/location", get(handlers::location_handler))
        .route("/auth/signin", post(handlers::sign_in_handler))
        .route("/auth/signout", post(handlers::sign_out_handler))
        .route("/health", get(handlers::health_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}
