//! Error types for the Petal system.
//!
//! The public read path never propagates a fault to the caller —
//! services in `petal-resolve` convert these into typed empty results
//! at each boundary. The variants exist so the boundary knows *what*
//! it is degrading from and so operators see the detail in logs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PetalError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PetalResult<T> = Result<T, PetalError>;
