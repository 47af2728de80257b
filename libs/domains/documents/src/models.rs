use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::{DocumentError, DocumentResult};

/// Per-resource wiring for the generic CRUD stack.
///
/// The three resources share one handler/service/repository code path; this
/// descriptor carries everything that differs between them.
#[derive(Clone, Copy, Debug)]
pub struct Resource {
    /// Singular display name used in messages ("Product").
    pub name: &'static str,
    /// Backing MongoDB collection name.
    pub collection: &'static str,
    /// Hook applied to the payload immediately before insertion.
    pub create_hook: Option<fn(&mut Document)>,
    /// Additional POST routes that create documents (e.g. "/register").
    pub create_aliases: &'static [&'static str],
}

impl Resource {
    pub const fn new(name: &'static str, collection: &'static str) -> Self {
        Self {
            name,
            collection,
            create_hook: None,
            create_aliases: &[],
        }
    }

    pub const fn with_create_hook(mut self, hook: fn(&mut Document)) -> Self {
        self.create_hook = Some(hook);
        self
    }

    pub const fn with_create_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.create_aliases = aliases;
        self
    }
}

/// A stored document as returned to API clients.
///
/// The store's `_id` surfaces as the flat hex `id` field; every other field
/// passes through untouched. No schema is enforced beyond the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoredDocument {
    /// Store-assigned identifier (24-character hex)
    pub id: String,
    /// The document's remaining fields, verbatim
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub fields: Map<String, Value>,
}

impl StoredDocument {
    /// Build the client-facing view of a raw store document.
    pub fn from_bson(mut doc: Document) -> DocumentResult<Self> {
        let id = match doc.remove("_id") {
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(other) => other.to_string(),
            None => return Err(DocumentError::Store("document missing _id".to_string())),
        };

        let mut fields = Map::new();
        for (key, value) in doc {
            fields.insert(key, value.into_relaxed_extjson());
        }

        Ok(Self { id, fields })
    }
}

/// Insert acknowledgment: the store-assigned id of the new document.
///
/// Create returns this instead of re-reading the inserted document; a
/// single-document insert is atomic, so the document is exactly the payload
/// plus this id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InsertAck {
    /// Store-assigned identifier (24-character hex)
    pub id: String,
}

/// Delete confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteAck {
    pub message: String,
}

/// Convert an inbound JSON payload into a storable BSON document.
///
/// Caller-supplied `id`/`_id` keys are stripped: the store assigns and owns
/// the identity, and updates must never touch it.
pub fn payload_to_bson(mut payload: Map<String, Value>) -> DocumentResult<Document> {
    payload.remove("id");
    payload.remove("_id");

    match Bson::try_from(Value::Object(payload)) {
        Ok(Bson::Document(doc)) => Ok(doc),
        Ok(_) => Err(DocumentError::Validation(
            "payload must be a JSON object".to_string(),
        )),
        Err(e) => Err(DocumentError::Validation(e.to_string())),
    }
}
