//! `texturec` subprocess encoder.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::{EncodeJob, EncodeOutcome, EncoderError, TextureEncoder};

/// Executable looked up on `PATH` when none is configured.
pub const DEFAULT_EXECUTABLE: &str = "texturec";

/// Encoder that runs the `texturec` command-line tool once per image.
#[derive(Debug, Clone)]
pub struct TexturecEncoder {
    executable: PathBuf,
    name: String,
}

impl TexturecEncoder {
    /// Create an encoder for the given executable name or path.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        let executable = executable.into();
        let name = executable.display().to_string();
        Self { executable, name }
    }

    /// The configured executable.
    pub fn executable(&self) -> &PathBuf {
        &self.executable
    }

    /// Run the executable with exactly `args` and wait for it.
    ///
    /// Stdout and stderr are captured and joined (stdout first). The text is
    /// only returned when the process exits unsuccessfully.
    pub fn run(&self, args: &[OsString]) -> Result<EncodeOutcome, EncoderError> {
        debug!(executable = %self.name, ?args, "Running texture encoder");

        let output = Command::new(&self.executable)
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => EncoderError::NotFound {
                    executable: self.name.clone(),
                },
                _ => EncoderError::Spawn {
                    executable: self.name.clone(),
                    source: e,
                },
            })?;

        if output.status.success() {
            return Ok(EncodeOutcome::Success);
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(EncodeOutcome::Failed {
            status: output.status.code(),
            output: text,
        })
    }
}

impl Default for TexturecEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_EXECUTABLE)
    }
}

impl TextureEncoder for TexturecEncoder {
    fn encode(&self, job: &EncodeJob) -> Result<EncodeOutcome, EncoderError> {
        self.run(&job.to_args())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
