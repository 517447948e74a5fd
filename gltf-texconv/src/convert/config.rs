//! Converter configuration.

use std::path::PathBuf;

use super::{ConvertError, ConvertResult};
use crate::encoder::DEFAULT_EXECUTABLE;
use crate::format::{Quality, TargetFormat};

/// Default `texturec -t` value.
pub const DEFAULT_TEXTURE_TYPE: &str = "BC3";

/// Settings shared by every image of a conversion run.
///
/// # Example
///
/// ```
/// use gltf_texconv::convert::ConverterConfig;
/// use gltf_texconv::format::{Quality, TargetFormat};
///
/// let config = ConverterConfig::new(TargetFormat::Ktx)
///     .with_texture_type("BC7")
///     .with_quality(Quality::Highest)
///     .with_mips(true);
///
/// assert_eq!(config.format(), TargetFormat::Ktx);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    format: TargetFormat,
    texture_type: String,
    quality: Quality,
    mips: bool,
    executable: PathBuf,
}

impl ConverterConfig {
    /// Create a config for `format` with default type, quality and no mips.
    pub fn new(format: TargetFormat) -> Self {
        Self {
            format,
            texture_type: DEFAULT_TEXTURE_TYPE.to_string(),
            quality: Quality::Default,
            mips: false,
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
        }
    }

    /// Set the encoder texture type (`texturec --formats` lists them).
    pub fn with_texture_type(mut self, texture_type: impl Into<String>) -> Self {
        self.texture_type = texture_type.into();
        self
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    /// Ask the encoder to generate mip-maps.
    pub fn with_mips(mut self, mips: bool) -> Self {
        self.mips = mips;
        self
    }

    /// Use a specific encoder executable instead of `texturec` on `PATH`.
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    pub fn format(&self) -> TargetFormat {
        self.format
    }

    pub fn texture_type(&self) -> &str {
        &self.texture_type
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn mips(&self) -> bool {
        self.mips
    }

    pub fn executable(&self) -> &PathBuf {
        &self.executable
    }

    /// Reject settings the encoder could never accept.
    pub fn validate(&self) -> ConvertResult<()> {
        if self.texture_type.is_empty() {
            return Err(ConvertError::InvalidConfig(
                "texture type must not be empty".to_string(),
            ));
        }
        if self.texture_type.chars().any(char::is_whitespace) {
            return Err(ConvertError::InvalidConfig(format!(
                "texture type '{}' must not contain whitespace",
                self.texture_type
            )));
        }
        if self.executable.as_os_str().is_empty() {
            return Err(ConvertError::InvalidConfig(
                "encoder executable must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new(TargetFormat::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConverterConfig::default();
        assert_eq!(config.format(), TargetFormat::Dds);
        assert_eq!(config.texture_type(), "BC3");
        assert_eq!(config.quality(), Quality::Default);
        assert!(!config.mips());
        assert_eq!(config.executable(), &PathBuf::from("texturec"));
    }

    #[test]
    fn test_builder_chain() {
        let config = ConverterConfig::new(TargetFormat::Png)
            .with_texture_type("RGBA8")
            .with_quality(Quality::Fastest)
            .with_mips(true)
            .with_executable("/opt/bin/texturec");

        assert_eq!(config.format(), TargetFormat::Png);
        assert_eq!(config.texture_type(), "RGBA8");
        assert_eq!(config.quality(), Quality::Fastest);
        assert!(config.mips());
        assert_eq!(config.executable(), &PathBuf::from("/opt/bin/texturec"));
    }

    #[test]
    fn test_validate_rejects_empty_type() {
        let config = ConverterConfig::default().with_texture_type("");
        assert!(matches!(
            config.validate(),
            Err(ConvertError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_whitespace_type() {
        let config = ConverterConfig::default().with_texture_type("BC3 --mips");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_executable() {
        let config = ConverterConfig::default().with_executable("");
        assert!(config.validate().is_err());
    }
}
