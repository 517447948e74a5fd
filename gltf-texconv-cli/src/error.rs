//! CLI error types.

use std::fmt;

use gltf_texconv::convert::ConvertError;
use gltf_texconv::logging::LoggingError;

/// Errors reported to the user before exiting.
#[derive(Debug)]
pub enum CliError {
    /// Invalid arguments or converter settings.
    Config(ConvertError),

    /// The input document could not be loaded.
    Load(ConvertError),

    /// The texture encoder executable does not exist.
    EncoderMissing(ConvertError),

    /// The conversion run failed.
    Convert(ConvertError),

    /// Logging could not be initialized.
    Logging(LoggingError),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 2,
            CliError::Load(_) => 3,
            CliError::EncoderMissing(_) => 4,
            CliError::Convert(_) | CliError::Logging(_) => 1,
        }
    }

    /// Classify an error raised while running a conversion.
    pub fn from_convert(err: ConvertError) -> Self {
        if err.is_encoder_missing() {
            CliError::EncoderMissing(err)
        } else {
            CliError::Convert(err)
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Load(e) => write!(f, "Failed to load input: {}", e),
            CliError::EncoderMissing(e) => write!(f, "{}", e),
            CliError::Convert(e) => write!(f, "Conversion failed: {}", e),
            CliError::Logging(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e)
            | CliError::Load(e)
            | CliError::EncoderMissing(e)
            | CliError::Convert(e) => std::error::Error::source(e),
            CliError::Logging(_) => None,
        }
    }
}

impl From<LoggingError> for CliError {
    fn from(e: LoggingError) -> Self {
        CliError::Logging(e)
    }
}
