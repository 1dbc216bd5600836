//! Route definitions
//!
//! All API routes organized by domain.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{health, identity, links, profiles, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate
/// middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(profile_routes())
        .merge(user_routes())
        .merge(link_routes())
        .merge(identity_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Profile routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles", post(profiles::upsert_profile))
        .route("/profiles/:handle", get(profiles::get_profile))
        .route("/username/check", get(profiles::check_username))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/me", get(users::get_current_user))
}

/// Link routes
fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(links::upsert_link))
        .route("/links/:link_id", delete(links::delete_link))
}

/// Identity webhook routes
fn identity_routes() -> Router<AppState> {
    Router::new()
        .route("/identity/pre-signup", post(identity::pre_signup))
        .route("/identity/post-confirmation", post(identity::post_confirmation))
}
