//! API routes module
//!
//! Every resource mounts the same generic document handler stack; only the
//! [`Resource`](domain_documents::Resource) descriptor differs. Routes live
//! at the root of the server, matching the paths clients already use.

pub mod courses;
pub mod health;
pub mod products;
pub mod users;
pub mod welcome;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(welcome::router())
        .nest("/products", products::router(state))
        .nest("/courses", courses::router(state))
        .nest("/users", users::router(state))
        .merge(health::router(state.clone()))
}
