//! Courses API routes

use axum::Router;
use domain_documents::{DocumentService, MongoDocumentRepository, Resource, handlers};

use crate::state::AppState;

const COURSES: Resource = Resource::new("Course", "courses");

/// Create courses router
pub fn router(state: &AppState) -> Router {
    let repository = MongoDocumentRepository::new(state.db.clone(), COURSES.collection);
    let service = DocumentService::new(repository, COURSES);

    handlers::router(service)
}
