//! # modguard_api
//!
//! HTTP API library for Modguard.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use modguard_core::auth::credentials::CredentialStore;
use modguard_core::classifier::TextClassifier;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{auth, moderate, protected};

/// Shared application state passed to all handlers.
///
/// Everything here is read-only for the process lifetime, so concurrent
/// requests need no synchronization.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Demo credential mapping.
    pub credentials: Arc<CredentialStore>,
    /// Injected toxicity classifier.
    pub classifier: Arc<dyn TextClassifier>,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/api/login", post(auth::login_handler))
        .route("/api/moderate", post(moderate::moderate_handler));

    // Protected routes (require the session token)
    let protected = Router::new()
        .route("/api/protected", get(protected::protected_handler))
        .layer(axum::middleware::from_fn(
            middleware::auth::require_session,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}
