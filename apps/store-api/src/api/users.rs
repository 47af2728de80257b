//! Users API routes
//!
//! Users are documents like any other resource, with two twists: the role
//! field is always forced to "user" on creation (clients cannot grant
//! themselves elevated roles), and `POST /users/register` is an extra
//! creation route kept for clients of the original signup flow.

use axum::Router;
use domain_documents::{DocumentService, MongoDocumentRepository, Resource, handlers};
use mongodb::bson::Document;

use crate::state::AppState;

fn force_default_role(fields: &mut Document) {
    fields.insert("role", "user");
}

const USERS: Resource = Resource::new("User", "users")
    .with_create_hook(force_default_role)
    .with_create_aliases(&["/register"]);

/// Create users router
pub fn router(state: &AppState) -> Router {
    let repository = MongoDocumentRepository::new(state.db.clone(), USERS.collection);
    let service = DocumentService::new(repository, USERS);

    handlers::router(service)
}
