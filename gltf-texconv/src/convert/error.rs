//! Error types for conversion runs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::document::DocumentError;
use crate::encoder::EncoderError;

/// Result type for converter operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur while configuring or running a conversion.
///
/// A failed encode of a single image is not an error; it is recorded in the
/// [`super::ConversionReport`] and the run continues.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The requested target format is not one of the supported extensions.
    #[error("unsupported target format '{requested}' (supported: {supported})")]
    UnsupportedFormat { requested: String, supported: String },

    /// Invalid converter configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// `convert` was called before a document was loaded.
    #[error("no document loaded; call load() before convert()")]
    NotLoaded,

    /// Loading or saving the document failed.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// The encoder executable is unavailable.
    #[error(transparent)]
    Encoder(#[from] EncoderError),

    /// A material or texture references an entry that does not exist.
    #[error("{referrer} references {kind} {index}, but the document has only {len}")]
    InvalidIndex {
        referrer: String,
        kind: &'static str,
        index: usize,
        len: usize,
    },

    /// Failed to resolve a directory path.
    #[error("failed to resolve directory {}: {source}", .path.display())]
    ResolveDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to create an output directory.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to copy a buffer file next to the output document.
    #[error("failed to copy buffer {} to {}: {source}", .from.display(), .to.display())]
    CopyBuffer {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// True if the encoder executable does not exist.
    ///
    /// Other launch failures, such as a permission error, are not counted.
    pub fn is_encoder_missing(&self) -> bool {
        matches!(self, ConvertError::Encoder(EncoderError::NotFound { .. }))
    }
}
