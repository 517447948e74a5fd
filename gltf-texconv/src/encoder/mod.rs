//! External texture encoder abstraction.
//!
//! The [`TextureEncoder`] trait is the seam between the conversion run and
//! whatever actually produces the compressed files. Production code uses
//! [`TexturecEncoder`], which shells out to `texturec`; tests substitute a
//! recording implementation.
//!
//! ```text
//! ConversionRun ──EncodeJob──► TextureEncoder ──► Ok(Success)
//!                                   │             Ok(Failed { status, output })
//!                                   │             Err(EncoderError)   (fatal)
//!                                   ▼
//!                           texturec -f IN -o OUT -t TYPE -q QUALITY
//!                                    [--mips] [--linear] [--normalmap]
//! ```

mod error;
mod texturec;

use std::ffi::OsString;
use std::path::PathBuf;

pub use error::EncoderError;
pub use texturec::{TexturecEncoder, DEFAULT_EXECUTABLE};

use crate::format::Quality;

/// One image to encode, with every parameter the encoder needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeJob {
    /// Absolute path of the source image.
    pub input: PathBuf,
    /// Absolute path of the file to produce.
    pub output: PathBuf,
    /// Encoder texture type, e.g. `BC3`.
    pub texture_type: String,
    pub quality: Quality,
    pub mips: bool,
    /// Source data is linear; no gamma correction.
    pub linear: bool,
    /// Source is a tangent-space normal map.
    pub normal_map: bool,
}

impl EncodeJob {
    /// Build the `texturec` argument list for this job.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-f".into(),
            self.input.clone().into(),
            "-o".into(),
            self.output.clone().into(),
            "-t".into(),
            self.texture_type.clone().into(),
            "-q".into(),
            self.quality.as_str().into(),
        ];
        if self.mips {
            args.push("--mips".into());
        }
        if self.linear {
            args.push("--linear".into());
        }
        if self.normal_map {
            args.push("--normalmap".into());
        }
        args
    }
}

/// Result of an encoder invocation that actually ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeOutcome {
    Success,
    /// The encoder exited unsuccessfully.
    Failed {
        /// Exit code, `None` if terminated by a signal.
        status: Option<i32>,
        /// Captured stdout followed by captured stderr. The two streams are
        /// read separately, so their lines are not interleaved.
        output: String,
    },
}

impl EncodeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, EncodeOutcome::Success)
    }
}

/// Something that can turn one source image into one target file.
///
/// Implementations block until the file is produced (or the attempt failed).
/// `Err` means the encoder itself is unavailable and the run must stop.
pub trait TextureEncoder {
    fn encode(&self, job: &EncodeJob) -> Result<EncodeOutcome, EncoderError>;

    /// Human-readable encoder name for logs.
    fn name(&self) -> &str;
}
