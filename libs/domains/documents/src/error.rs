use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    /// The supplied id text is not a valid store identifier.
    #[error("malformed document id '{0}'")]
    MalformedId(String),

    /// A well-formed id matched no document in the collection.
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// The payload could not be converted into a storable document.
    #[error("invalid payload: {0}")]
    Validation(String),

    /// Connectivity or internal fault in the persistence layer.
    #[error("store error: {0}")]
    Store(String),
}

pub type DocumentResult<T> = Result<T, DocumentError>;

/// Convert DocumentError to AppError for standardized error responses.
///
/// Client-caused errors (malformed id, bad payload, missing document) keep
/// their message; store faults are passed on as internal errors whose detail
/// is logged rather than returned to the caller.
impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::MalformedId(id) => AppError::BadRequest(format!("Invalid id: {}", id)),
            DocumentError::NotFound { resource } => {
                AppError::NotFound(format!("{} not found", resource))
            }
            DocumentError::Validation(msg) => AppError::BadRequest(msg),
            DocumentError::Store(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for DocumentError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for DocumentError {
    fn from(err: mongodb::error::Error) -> Self {
        DocumentError::Store(err.to_string())
    }
}
