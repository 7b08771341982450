//! Error types for frame and export operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use crate::frame::RelationshipId;
use thiserror::Error;

/// Result type alias for framedot operations.
pub type Result<T> = std::result::Result<T, FrameError>;

/// Error type for all frame and export operations.
///
/// Errors are designed to fail fast and provide clear context about what went wrong.
#[derive(Error, Debug)]
pub enum FrameError {
    /// Object not found in the frame
    #[error("Object not found: {object_id}")]
    ObjectNotFound {
        /// ID of the missing object
        object_id: String,
    },

    /// An object with this ID already exists in the frame
    #[error("Duplicate object: {object_id}")]
    DuplicateObject {
        /// ID of the conflicting object
        object_id: String,
    },

    /// A relationship endpoint does not refer to any object in the frame
    #[error("Relationship {relationship_id} references missing object: {object_id}")]
    DanglingReference {
        /// ID of the offending relationship
        relationship_id: RelationshipId,
        /// Endpoint ID that has no object behind it
        object_id: String,
    },

    /// Output sink error (file creation, stream write, etc.)
    #[error("Sink error: {message}")]
    Sink {
        /// Detailed error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl FrameError {
    /// Create a sink error from a message and optional source.
    pub fn sink<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Sink {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
