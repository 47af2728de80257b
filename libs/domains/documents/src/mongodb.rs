//! MongoDB implementation of DocumentRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};
use tracing::instrument;

use crate::error::{DocumentError, DocumentResult};
use crate::models::{InsertAck, StoredDocument};
use crate::repository::DocumentRepository;

/// MongoDB implementation of the DocumentRepository.
///
/// Works on raw BSON documents; the collection carries no schema and the
/// store is the sole arbiter of write ordering for a single document.
pub struct MongoDocumentRepository {
    collection: Collection<Document>,
}

impl MongoDocumentRepository {
    /// Create a repository over one collection.
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("store");
    /// let repo = MongoDocumentRepository::new(db, "products");
    /// ```
    pub fn new(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Document>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    fn id_filter(id: ObjectId) -> Document {
        doc! { "_id": id }
    }
}

#[async_trait]
impl DocumentRepository for MongoDocumentRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> DocumentResult<Vec<StoredDocument>> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;

        docs.into_iter().map(StoredDocument::from_bson).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> DocumentResult<Option<StoredDocument>> {
        let doc = self.collection.find_one(Self::id_filter(id)).await?;
        doc.map(StoredDocument::from_bson).transpose()
    }

    #[instrument(skip(self, fields))]
    async fn insert(&self, fields: Document) -> DocumentResult<InsertAck> {
        let result = self.collection.insert_one(&fields).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DocumentError::Store("insert returned a non-ObjectId id".to_string()))?;

        tracing::info!(document_id = %id, "Document inserted");
        Ok(InsertAck { id: id.to_hex() })
    }

    #[instrument(skip(self, changes))]
    async fn update_by_id(
        &self,
        id: ObjectId,
        changes: Document,
    ) -> DocumentResult<Option<StoredDocument>> {
        // MongoDB rejects an empty $set stage; an empty merge is a plain read.
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_update(Self::id_filter(id), doc! { "$set": changes })
            .with_options(options)
            .await?;

        if updated.is_some() {
            tracing::info!(document_id = %id, "Document updated");
        }
        updated.map(StoredDocument::from_bson).transpose()
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: ObjectId) -> DocumentResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count > 0 {
            tracing::info!(document_id = %id, "Document deleted");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
