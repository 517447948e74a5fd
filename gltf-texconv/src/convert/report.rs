//! Summary of a conversion run.

use std::fmt;
use std::path::PathBuf;

/// An image whose encoder invocation exited unsuccessfully.
///
/// The document still points at `output`; the file may be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeFailure {
    pub image_index: usize,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Encoder exit code, `None` if it was killed by a signal.
    pub status: Option<i32>,
    /// Encoder stdout then stderr, verbatim.
    pub output_text: String,
}

/// What a conversion run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Images handed to the encoder (successfully or not).
    pub images_converted: usize,
    /// Images left untouched (embedded or `data:` URIs).
    pub images_skipped: usize,
    /// Encoder invocations that exited unsuccessfully.
    pub failures: Vec<EncodeFailure>,
    /// Buffer files copied next to the output document.
    pub buffers_copied: usize,
}

impl ConversionReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} images converted ({} failed), {} skipped, {} buffers copied",
            self.images_converted,
            self.failures.len(),
            self.images_skipped,
            self.buffers_copied
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let report = ConversionReport {
            images_converted: 4,
            images_skipped: 1,
            failures: vec![EncodeFailure {
                image_index: 2,
                input: PathBuf::from("/in/a.png"),
                output: PathBuf::from("/out/a.dds"),
                status: Some(1),
                output_text: "bad image".to_string(),
            }],
            buffers_copied: 2,
        };
        assert!(report.has_failures());
        assert_eq!(
            report.to_string(),
            "4 images converted (1 failed), 1 skipped, 2 buffers copied"
        );
    }

    #[test]
    fn test_default_is_empty() {
        let report = ConversionReport::default();
        assert!(!report.has_failures());
        assert_eq!(report.images_converted, 0);
    }
}
