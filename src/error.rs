use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Not in a folio project. Run 'folio init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .folio/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Invalid entity type: {0}")]
    InvalidEntityType(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not logged in. Run 'folio login' first.")]
    NotAuthenticated,

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
