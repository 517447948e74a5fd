//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use gltf_texconv::convert::DEFAULT_TEXTURE_TYPE;
use gltf_texconv::format::{Quality, TargetFormat};

/// Convert every texture of a glTF document with texturec.
#[derive(Debug, Parser)]
#[command(name = "gltf-texconv", version, about)]
pub struct Cli {
    /// Input file path
    #[arg(short = 'f', value_name = "INPUT", required = true)]
    pub input: PathBuf,

    /// Output file path
    #[arg(short = 'o', value_name = "OUTPUT", required = true)]
    pub output: PathBuf,

    /// File format
    #[arg(long, value_enum, default_value = ".dds")]
    pub format: FormatArg,

    /// Output format type (run texturec --formats for a list)
    #[arg(short = 't', long = "type", default_value = DEFAULT_TEXTURE_TYPE)]
    pub texture_type: String,

    /// Encoding quality
    #[arg(short = 'q', value_enum, default_value = "default")]
    pub quality: QualityArg,

    /// Generate mip-maps
    #[arg(short = 'm', long)]
    pub mips: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Target file format selection for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// DirectDraw Surface (image/vnd-ms.dds)
    #[value(name = ".dds", alias = "dds")]
    Dds,
    /// OpenEXR (image/x-exr)
    #[value(name = ".exr", alias = "exr")]
    Exr,
    /// Radiance HDR (image/vnd.radiance)
    #[value(name = ".hdr", alias = "hdr")]
    Hdr,
    /// Khronos KTX (image/ktx)
    #[value(name = ".ktx", alias = "ktx")]
    Ktx,
    /// PNG (image/png)
    #[value(name = ".png", alias = "png")]
    Png,
}

impl From<FormatArg> for TargetFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Dds => TargetFormat::Dds,
            FormatArg::Exr => TargetFormat::Exr,
            FormatArg::Hdr => TargetFormat::Hdr,
            FormatArg::Ktx => TargetFormat::Ktx,
            FormatArg::Png => TargetFormat::Png,
        }
    }
}

/// Encoding quality selection for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QualityArg {
    Default,
    Fastest,
    Highest,
}

impl From<QualityArg> for Quality {
    fn from(quality: QualityArg) -> Self {
        match quality {
            QualityArg::Default => Quality::Default,
            QualityArg::Fastest => Quality::Fastest,
            QualityArg::Highest => Quality::Highest,
        }
    }
}
