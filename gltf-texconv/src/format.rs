//! Target file formats and encoding quality levels.

use std::fmt;
use std::str::FromStr;

use crate::convert::ConvertError;

/// Output file format for converted textures.
///
/// Each format owns its file extension and the MIME string written into the
/// document's image entries. `.exr` has no registered MIME type, so the
/// informal `image/x-exr` is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetFormat {
    /// DirectDraw Surface
    #[default]
    Dds,
    /// OpenEXR
    Exr,
    /// Radiance RGBE
    Hdr,
    /// Khronos texture container
    Ktx,
    /// Portable Network Graphics
    Png,
}

impl TargetFormat {
    /// All supported formats, in the order they are listed to users.
    pub const ALL: [TargetFormat; 5] = [
        TargetFormat::Dds,
        TargetFormat::Exr,
        TargetFormat::Hdr,
        TargetFormat::Ktx,
        TargetFormat::Png,
    ];

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            TargetFormat::Dds => "dds",
            TargetFormat::Exr => "exr",
            TargetFormat::Hdr => "hdr",
            TargetFormat::Ktx => "ktx",
            TargetFormat::Png => "png",
        }
    }

    /// MIME type written to `image.mimeType`.
    pub fn mime_type(&self) -> &'static str {
        match self {
            TargetFormat::Dds => "image/vnd-ms.dds",
            TargetFormat::Exr => "image/x-exr",
            TargetFormat::Hdr => "image/vnd.radiance",
            TargetFormat::Ktx => "image/ktx",
            TargetFormat::Png => "image/png",
        }
    }

    fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

/// Parses `.ktx` or `ktx` (case-insensitive).
impl FromStr for TargetFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ext = s.trim().trim_start_matches('.').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.extension() == ext)
            .ok_or_else(|| ConvertError::UnsupportedFormat {
                requested: s.to_string(),
                supported: Self::supported_list(),
            })
    }
}

/// Encoding quality passed to `texturec -q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quality {
    #[default]
    Default,
    Fastest,
    Highest,
}

impl Quality {
    /// The token `texturec` expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Default => "default",
            Quality::Fastest => "fastest",
            Quality::Highest => "highest",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Quality::Default),
            "fastest" => Ok(Quality::Fastest),
            "highest" => Ok(Quality::Highest),
            _ => Err(ConvertError::InvalidConfig(format!(
                "unknown quality '{}' (expected default, fastest or highest)",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_table() {
        assert_eq!(TargetFormat::Dds.mime_type(), "image/vnd-ms.dds");
        assert_eq!(TargetFormat::Exr.mime_type(), "image/x-exr");
        assert_eq!(TargetFormat::Hdr.mime_type(), "image/vnd.radiance");
        assert_eq!(TargetFormat::Ktx.mime_type(), "image/ktx");
        assert_eq!(TargetFormat::Png.mime_type(), "image/png");
    }

    #[test]
    fn test_display_includes_dot() {
        assert_eq!(TargetFormat::Ktx.to_string(), ".ktx");
        assert_eq!(TargetFormat::default().to_string(), ".dds");
    }

    #[test]
    fn test_parse_with_and_without_dot() {
        assert_eq!(".ktx".parse::<TargetFormat>().unwrap(), TargetFormat::Ktx);
        assert_eq!("DDS".parse::<TargetFormat>().unwrap(), TargetFormat::Dds);
        assert_eq!("hdr".parse::<TargetFormat>().unwrap(), TargetFormat::Hdr);
    }

    #[test]
    fn test_parse_unsupported_format_lists_choices() {
        let err = ".jpg".parse::<TargetFormat>().unwrap_err();
        match &err {
            ConvertError::UnsupportedFormat {
                requested,
                supported,
            } => {
                assert_eq!(requested, ".jpg");
                assert_eq!(supported, ".dds, .exr, .hdr, .ktx, .png");
            }
            other => panic!("Expected UnsupportedFormat, got {:?}", other),
        }
        assert!(err.to_string().contains(".jpg"));
    }

    #[test]
    fn test_quality_round_trip_tokens() {
        for quality in [Quality::Default, Quality::Fastest, Quality::Highest] {
            assert_eq!(quality.as_str().parse::<Quality>().unwrap(), quality);
        }
        assert!("best".parse::<Quality>().is_err());
    }
}
