pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::hooks::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile write hooks
        .route(
            "/api/v1/hooks/profiles/created",
            post(handlers::handle_profile_created),
        )
        .route(
            "/api/v1/hooks/profiles/updated",
            post(handlers::handle_profile_updated),
        )
        .with_state(state)
}
