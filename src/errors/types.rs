use std::fmt::Display;

use thiserror::Error;

use crate::codec::CodecError;

/// Gateway failure taxonomy. The HTTP mapping lives in `api::errors`.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("{message}")]
    Validation { field: String, message: String },

    #[error("{message}")]
    NotFound { field: String, message: String },

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BridgeError {
    pub fn validation(field: &str, message: impl Display) -> Self {
        BridgeError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn not_found(field: &str, message: impl Display) -> Self {
        BridgeError::NotFound {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
