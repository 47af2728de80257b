//! Document service - the resource-handler core

use std::sync::Arc;
use tracing::instrument;

use serde_json::{Map, Value};

use crate::error::{DocumentError, DocumentResult};
use crate::ids;
use crate::models::{self, InsertAck, Resource, StoredDocument};
use crate::repository::DocumentRepository;

/// Generic resource service.
///
/// Implements the five CRUD operations for one resource by composing the id
/// codec with store-gateway calls and applying the resource's policy (for
/// example the User creation hook). Raw id text is decoded here, before any
/// store call, so a malformed id can never reach the gateway.
pub struct DocumentService<R: DocumentRepository> {
    repository: Arc<R>,
    resource: Resource,
}

impl<R: DocumentRepository> DocumentService<R> {
    pub fn new(repository: R, resource: Resource) -> Self {
        Self {
            repository: Arc::new(repository),
            resource,
        }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// All documents in the collection.
    #[instrument(skip(self), fields(resource = self.resource.name))]
    pub async fn list(&self) -> DocumentResult<Vec<StoredDocument>> {
        self.repository.list().await
    }

    /// One document by raw id text.
    #[instrument(skip(self), fields(resource = self.resource.name))]
    pub async fn get(&self, id: &str) -> DocumentResult<StoredDocument> {
        let id = ids::decode(id)?;
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DocumentError::NotFound {
                resource: self.resource.name,
            })
    }

    /// Insert a new document, applying the resource's creation hook.
    ///
    /// Any caller-supplied identity is discarded; the store assigns the id
    /// and the acknowledgment carries it back.
    #[instrument(skip(self, payload), fields(resource = self.resource.name))]
    pub async fn create(&self, payload: Map<String, Value>) -> DocumentResult<InsertAck> {
        let mut fields = models::payload_to_bson(payload)?;

        if let Some(hook) = self.resource.create_hook {
            hook(&mut fields);
        }

        self.repository.insert(fields).await
    }

    /// Set-only merge into an existing document; returns the result.
    ///
    /// Fields present in the payload win; fields absent from it are left
    /// untouched. Nested objects are replaced wholesale.
    #[instrument(skip(self, payload), fields(resource = self.resource.name))]
    pub async fn update(
        &self,
        id: &str,
        payload: Map<String, Value>,
    ) -> DocumentResult<StoredDocument> {
        let id = ids::decode(id)?;
        let changes = models::payload_to_bson(payload)?;

        self.repository
            .update_by_id(id, changes)
            .await?
            .ok_or(DocumentError::NotFound {
                resource: self.resource.name,
            })
    }

    /// Delete one document by raw id text.
    #[instrument(skip(self), fields(resource = self.resource.name))]
    pub async fn delete(&self, id: &str) -> DocumentResult<()> {
        let id = ids::decode(id)?;

        if self.repository.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(DocumentError::NotFound {
                resource: self.resource.name,
            })
        }
    }
}

impl<R: DocumentRepository> Clone for DocumentService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            resource: self.resource,
        }
    }
}
