//! Editor-specific error types

use shared::{EntityId, HypervideoId, SharedError};
use thiserror::Error;

use crate::core::SaveTarget;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("{kind} not found: {id}")]
    EntityNotFound { kind: &'static str, id: EntityId },

    #[error("Resource not found: {resource_id}")]
    ResourceNotFound { resource_id: String },

    #[error("Could not save data ({message})")]
    SaveFailed { target: SaveTarget, message: String },

    #[error("Failed to load hypervideo {hypervideo_id}: {message}")]
    LoadFailed { hypervideo_id: HypervideoId, message: String },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl ModelError {
    pub fn config(field: impl Into<String>) -> Self {
        ModelError::ConfigurationError { field: field.into() }
    }

    pub fn load(hypervideo_id: &HypervideoId, message: impl Into<String>) -> Self {
        ModelError::LoadFailed {
            hypervideo_id: hypervideo_id.clone(),
            message: message.into(),
        }
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
