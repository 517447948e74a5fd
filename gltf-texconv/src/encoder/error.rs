//! Error types for the external encoder.

use std::io;

use thiserror::Error;

/// The encoder executable could not be started.
///
/// Both variants are fatal for a conversion run: every later invocation
/// would fail the same way. An encoder that starts and then exits with a
/// non-zero status is not an error; see [`super::EncodeOutcome::Failed`].
#[derive(Debug, Error)]
pub enum EncoderError {
    /// The executable was not found on `PATH` or at the configured location.
    #[error(
        "texture encoder '{executable}' not found. \
         Please install it and make sure it is on your PATH"
    )]
    NotFound { executable: String },

    /// The executable exists but could not be launched.
    #[error("failed to launch texture encoder '{executable}': {source}")]
    Spawn {
        executable: String,
        #[source]
        source: io::Error,
    },
}
