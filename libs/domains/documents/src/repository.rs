use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};

use crate::error::DocumentResult;
use crate::models::{InsertAck, StoredDocument};

/// Repository trait for document persistence.
///
/// This is the store gateway: collection-scoped CRUD primitives that return
/// a value or signal absence (`Option`/`bool`), never an HTTP concern.
/// Absence is mapped to `NotFound` by the service layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// All documents in the collection, in the store's natural order.
    async fn list(&self) -> DocumentResult<Vec<StoredDocument>>;

    /// Find one document by id.
    async fn find_by_id(&self, id: ObjectId) -> DocumentResult<Option<StoredDocument>>;

    /// Insert a document; the store assigns the id.
    async fn insert(&self, fields: Document) -> DocumentResult<InsertAck>;

    /// Set-only merge of `changes` into the document with this id, returning
    /// the post-update document, or `None` if the id matched nothing.
    async fn update_by_id(
        &self,
        id: ObjectId,
        changes: Document,
    ) -> DocumentResult<Option<StoredDocument>>;

    /// Delete one document by id; `false` means nothing matched.
    async fn delete_by_id(&self, id: ObjectId) -> DocumentResult<bool>;
}
