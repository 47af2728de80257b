//! Products API routes

use axum::Router;
use domain_documents::{DocumentService, MongoDocumentRepository, Resource, handlers};

use crate::state::AppState;

const PRODUCTS: Resource = Resource::new("Product", "products");

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = MongoDocumentRepository::new(state.db.clone(), PRODUCTS.collection);
    let service = DocumentService::new(repository, PRODUCTS);

    handlers::router(service)
}
