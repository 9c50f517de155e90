use crate::model::RecordId;
use crate::validation::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("No record is being edited")]
    NotEditing,

    #[error("Items per page must be positive, got {0}")]
    InvalidPageSize(usize),

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Invalid filter graph: {0}")]
    Schema(String),

    #[error("Bundled data is invalid: {0}")]
    Fixture(String),

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DeskError>;
