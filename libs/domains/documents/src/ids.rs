//! Conversion of externally supplied id text into store object ids.

use mongodb::bson::oid::ObjectId;

use crate::error::DocumentError;

/// Decode a path-segment id into the store's [`ObjectId`] representation.
///
/// Pure function; any text that is not a valid 24-character hex ObjectId is
/// rejected with [`DocumentError::MalformedId`] before the store is ever
/// consulted. Malformed ids are deliberately kept distinct from "not found".
pub fn decode(text: &str) -> Result<ObjectId, DocumentError> {
    ObjectId::parse_str(text).map_err(|_| DocumentError::MalformedId(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_valid_hex_id() {
        let id = ObjectId::new();
        assert_eq!(decode(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(decode("abc123"), Err(DocumentError::MalformedId(_))));
        assert!(matches!(decode(""), Err(DocumentError::MalformedId(_))));
    }

    #[test]
    fn rejects_wrong_charset() {
        // Right length, not hex
        let err = decode("zzzzzzzzzzzzzzzzzzzzzzzz").unwrap_err();
        assert!(matches!(err, DocumentError::MalformedId(text) if text.len() == 24));
    }
}
