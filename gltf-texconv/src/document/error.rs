//! Error types for loading and saving documents.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors that can occur while reading or writing a glTF document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document path does not exist.
    #[error("document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Failed to read the document file.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is a binary `.glb` container, which is not supported.
    #[error("{} is a binary glTF container; only JSON .gltf documents are supported", .0.display())]
    BinaryContainer(PathBuf),

    /// The content is not a valid glTF JSON document.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize the document.
    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Failed to write the document file.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
