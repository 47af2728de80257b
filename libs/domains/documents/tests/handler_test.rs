//! Handler tests for the documents domain
//!
//! These tests verify that the shared HTTP handlers work correctly:
//! - Request deserialization (JSON → BSON payloads)
//! - Response serialization (stored documents → flat JSON)
//! - HTTP status codes
//! - Error responses
//!
//! They run against an in-memory repository, so they cover everything above
//! the store gateway without needing a MongoDB instance.

use std::sync::Mutex;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mongodb::bson::{Document, doc, oid::ObjectId};
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

use domain_documents::{
    DocumentRepository, DocumentResult, DocumentService, InsertAck, Resource, StoredDocument,
    handlers,
};

/// Store gateway backed by a Vec, preserving insertion order.
#[derive(Default)]
struct InMemoryRepository {
    documents: Mutex<Vec<(ObjectId, Document)>>,
}

impl InMemoryRepository {
    fn stored(id: ObjectId, fields: &Document) -> DocumentResult<StoredDocument> {
        let mut doc = doc! { "_id": id };
        doc.extend(fields.clone());
        StoredDocument::from_bson(doc)
    }
}

#[async_trait]
impl DocumentRepository for InMemoryRepository {
    async fn list(&self) -> DocumentResult<Vec<StoredDocument>> {
        let documents = self.documents.lock().unwrap();
        documents
            .iter()
            .map(|(id, fields)| Self::stored(*id, fields))
            .collect()
    }

    async fn find_by_id(&self, id: ObjectId) -> DocumentResult<Option<StoredDocument>> {
        let documents = self.documents.lock().unwrap();
        documents
            .iter()
            .find(|(stored_id, _)| *stored_id == id)
            .map(|(id, fields)| Self::stored(*id, fields))
            .transpose()
    }

    async fn insert(&self, fields: Document) -> DocumentResult<InsertAck> {
        let id = ObjectId::new();
        self.documents.lock().unwrap().push((id, fields));
        Ok(InsertAck { id: id.to_hex() })
    }

    async fn update_by_id(
        &self,
        id: ObjectId,
        changes: Document,
    ) -> DocumentResult<Option<StoredDocument>> {
        let mut documents = self.documents.lock().unwrap();
        let Some((_, fields)) = documents.iter_mut().find(|(stored_id, _)| *stored_id == id)
        else {
            return Ok(None);
        };

        for (key, value) in changes {
            fields.insert(key, value);
        }

        Self::stored(id, fields).map(Some)
    }

    async fn delete_by_id(&self, id: ObjectId) -> DocumentResult<bool> {
        let mut documents = self.documents.lock().unwrap();
        let before = documents.len();
        documents.retain(|(stored_id, _)| *stored_id != id);
        Ok(documents.len() < before)
    }
}

fn products_app() -> Router {
    const PRODUCTS: Resource = Resource::new("Product", "products");
    handlers::router(DocumentService::new(InMemoryRepository::default(), PRODUCTS))
}

fn users_app() -> Router {
    fn force_default_role(fields: &mut Document) {
        fields.insert("role", "user");
    }

    const USERS: Resource = Resource::new("User", "users")
        .with_create_hook(force_default_role)
        .with_create_aliases(&["/register"]);

    handlers::router(DocumentService::new(InMemoryRepository::default(), USERS))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&payload).unwrap()))
        .unwrap()
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_product_lifecycle() {
    let app = products_app();

    // Create
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "pen", "price": 2, "meta": { "color": "blue", "stock": 5 } }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let ack = json_body(response.into_body()).await;
    let id = ack["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 24);

    // Read back
    let response = app.clone().oneshot(get(&format!("/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let product = json_body(response.into_body()).await;
    assert_eq!(product["id"], json!(id));
    assert_eq!(product["name"], json!("pen"));
    assert_eq!(product["meta"], json!({ "color": "blue", "stock": 5 }));

    // Merge update: price changes, name survives, nested object is replaced
    // wholesale rather than deep-merged.
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/{id}"),
            json!({ "price": 3, "meta": { "color": "red" } }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response.into_body()).await;
    assert_eq!(updated["name"], json!("pen"));
    assert_eq!(updated["price"], json!(3));
    assert_eq!(updated["meta"], json!({ "color": "red" }));

    // Delete
    let response = app.clone().oneshot(delete(&format!("/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "message": "Product deleted" }));

    // Gone
    let response = app.oneshot(get(&format!("/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_returns_every_document_in_insertion_order() {
    let app = products_app();

    for name in ["pen", "book", "mug"] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/", json!({ "name": name })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed = json_body(response.into_body()).await;
    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|doc| doc["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["pen", "book", "mug"]);
}

#[tokio::test]
async fn test_malformed_id_is_rejected_with_400() {
    let app = products_app();

    for request in [
        get("/not-an-id"),
        json_request("PUT", "/not-an-id", json!({ "price": 1 })),
        delete("/not-an-id"),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response.into_body()).await;
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["error"], json!("Invalid id: not-an-id"));
    }
}

#[tokio::test]
async fn test_unknown_id_maps_to_404() {
    let app = products_app();
    let id = ObjectId::new().to_hex();

    for request in [
        get(&format!("/{id}")),
        json_request("PUT", &format!("/{id}"), json!({ "price": 1 })),
        delete(&format!("/{id}")),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response.into_body()).await;
        assert_eq!(body, json!({ "error": "Product not found" }));
    }
}

#[tokio::test]
async fn test_create_ignores_caller_supplied_id() {
    let app = products_app();

    let forged = ObjectId::new().to_hex();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "id": forged, "name": "pen" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let ack = json_body(response.into_body()).await;
    assert_ne!(ack["id"], json!(forged));

    let response = app.oneshot(get("/")).await.unwrap();
    let listed = json_body(response.into_body()).await;
    let stored = &listed.as_array().unwrap()[0];
    assert_eq!(stored["id"], ack["id"]);
    assert_eq!(stored["name"], json!("pen"));
}

#[tokio::test]
async fn test_register_alias_creates_and_forces_role() {
    let app = users_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/register",
            json!({ "email": "a@b.c", "role": "admin" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let ack = json_body(response.into_body()).await;
    let id = ack["id"].as_str().unwrap().to_string();

    let response = app.oneshot(get(&format!("/{id}"))).await.unwrap();
    let user = json_body(response.into_body()).await;
    assert_eq!(user["email"], json!("a@b.c"));
    assert_eq!(user["role"], json!("user"));
}

#[tokio::test]
async fn test_plain_create_also_forces_role() {
    let app = users_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/", json!({ "email": "a@b.c" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let ack = json_body(response.into_body()).await;
    let id = ack["id"].as_str().unwrap().to_string();

    let response = app.oneshot(get(&format!("/{id}"))).await.unwrap();
    let user = json_body(response.into_body()).await;
    assert_eq!(user["role"], json!("user"));
}

#[tokio::test]
async fn test_empty_update_payload_returns_document_unchanged() {
    let app = products_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/", json!({ "name": "pen", "price": 2 })))
        .await
        .unwrap();
    let ack = json_body(response.into_body()).await;
    let id = ack["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/{id}"), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let unchanged = json_body(response.into_body()).await;
    assert_eq!(unchanged["name"], json!("pen"));
    assert_eq!(unchanged["price"], json!(2));
}

#[tokio::test]
async fn test_non_object_payload_is_rejected() {
    let app = products_app();

    let response = app
        .oneshot(json_request("POST", "/", json!([1, 2, 3])))
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    let body = json_body(response.into_body()).await;
    assert!(body.as_object().unwrap().contains_key("error"));
}
