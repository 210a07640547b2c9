//! Shared error types for the hypervideo editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid identifier: {input:?}")]
    InvalidId { input: String },

    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
