//! Documents Domain
//!
//! A generic CRUD domain over schemaless MongoDB collections. One handler
//! stack serves every resource; per-resource behavior (collection name,
//! creation hooks, extra creation routes) is wired through a [`Resource`]
//! descriptor instead of duplicating the code path per collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (shared by every resource)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← id decoding, payload policy, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Opaque documents, acknowledgments, Resource descriptor
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_documents::{
//!     DocumentService, MongoDocumentRepository, Resource, handlers,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! const PRODUCTS: Resource = Resource::new("Product", "products");
//!
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("store");
//!
//! let repository = MongoDocumentRepository::new(db, PRODUCTS.collection);
//! let service = DocumentService::new(repository, PRODUCTS);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod ids;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{DocumentError, DocumentResult};
pub use handlers::ApiDoc;
pub use models::{DeleteAck, InsertAck, Resource, StoredDocument};
pub use self::mongodb::MongoDocumentRepository;
pub use repository::DocumentRepository;
pub use service::DocumentService;
