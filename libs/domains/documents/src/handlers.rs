//! Axum handlers shared by every document resource.
//!
//! One set of handlers serves products, courses and users alike; the
//! [`Resource`](crate::models::Resource) held by the service supplies the
//! per-resource collection name, display name and creation policy. Mount the
//! returned router under the resource's own path segment.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde_json::{Map, Value};
use utoipa::OpenApi;

use axum_helpers::errors::responses::{
    BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
};
use axum_helpers::extractors::JsonBody;

use crate::error::DocumentError;
use crate::models::{DeleteAck, InsertAck, StoredDocument};
use crate::repository::DocumentRepository;
use crate::service::DocumentService;

/// Routes for one resource: collection CRUD plus any creation aliases.
pub fn router<R: DocumentRepository + 'static>(service: DocumentService<R>) -> Router {
    let state = Arc::new(service);

    let mut router = Router::new()
        .route("/", get(list_documents::<R>).post(create_document::<R>))
        .route(
            "/{id}",
            get(get_document::<R>)
                .put(update_document::<R>)
                .delete(delete_document::<R>),
        );

    for alias in state.resource().create_aliases {
        router = router.route(alias, post(create_document::<R>));
    }

    router.with_state(state)
}

#[utoipa::path(
    get,
    path = "",
    responses(
        (status = 200, description = "Every document in the collection", body = [StoredDocument]),
        (status = 500, response = InternalServerErrorResponse),
    ),
    tag = "documents"
)]
pub async fn list_documents<R: DocumentRepository>(
    State(service): State<Arc<DocumentService<R>>>,
) -> Result<impl IntoResponse, DocumentError> {
    let documents = service.list().await?;
    Ok(Json(documents))
}

#[utoipa::path(
    post,
    path = "",
    request_body(content = Object, description = "Document fields; any id is ignored"),
    responses(
        (status = 201, description = "Document created", body = InsertAck),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse),
    ),
    tag = "documents"
)]
pub async fn create_document<R: DocumentRepository>(
    State(service): State<Arc<DocumentService<R>>>,
    JsonBody(payload): JsonBody<Map<String, Value>>,
) -> Result<impl IntoResponse, DocumentError> {
    let ack = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ack)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    params(("id" = String, Path, description = "Document id (24-character hex)")),
    responses(
        (status = 200, description = "The requested document", body = StoredDocument),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
    ),
    tag = "documents"
)]
pub async fn get_document<R: DocumentRepository>(
    State(service): State<Arc<DocumentService<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, DocumentError> {
    let document = service.get(&id).await?;
    Ok(Json(document))
}

#[utoipa::path(
    put,
    path = "/{id}",
    params(("id" = String, Path, description = "Document id (24-character hex)")),
    request_body(content = Object, description = "Fields to merge into the document"),
    responses(
        (status = 200, description = "The document after the merge", body = StoredDocument),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
    ),
    tag = "documents"
)]
pub async fn update_document<R: DocumentRepository>(
    State(service): State<Arc<DocumentService<R>>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<Map<String, Value>>,
) -> Result<impl IntoResponse, DocumentError> {
    let document = service.update(&id, payload).await?;
    Ok(Json(document))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    params(("id" = String, Path, description = "Document id (24-character hex)")),
    responses(
        (status = 200, description = "Document deleted", body = DeleteAck),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
    ),
    tag = "documents"
)]
pub async fn delete_document<R: DocumentRepository>(
    State(service): State<Arc<DocumentService<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, DocumentError> {
    service.delete(&id).await?;
    Ok(Json(DeleteAck {
        message: format!("{} deleted", service.resource().name),
    }))
}

/// Paths and schemas for one mounted resource; nest this under each
/// resource's path in the application's top-level document.
#[derive(OpenApi)]
#[openapi(
    paths(
        list_documents,
        create_document,
        get_document,
        update_document,
        delete_document,
    ),
    components(
        schemas(StoredDocument, InsertAck, DeleteAck),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse),
    ),
    tags((name = "documents", description = "Schemaless document CRUD"))
)]
pub struct ApiDoc;
