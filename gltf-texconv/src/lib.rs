//! gltf-texconv - Compressed texture conversion for glTF documents
//!
//! This library rewrites the texture references of a glTF 2.0 document so
//! that every image used by a material points at a file in one target
//! format (DDS, KTX, ...). The actual pixel encoding is delegated to the
//! external `texturec` tool.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────┐
//! │     GltfConverter     │  load → convert → save → copy buffers
//! └──────────┬────────────┘
//!            │ one ConversionRun per convert()
//!            ▼
//! ┌───────────────────────┐
//! │    ConversionRun      │  walks materials, dedupes images,
//! │                       │  rewrites uri / mimeType
//! └──────────┬────────────┘
//!            │ EncodeJob
//!            ▼
//! ┌───────────────────────┐
//! │    TextureEncoder     │ (trait)
//! └──────────┬────────────┘
//!            ▼
//! ┌───────────────────────┐
//! │    TexturecEncoder    │  spawns `texturec -f .. -o .. -t .. -q ..`
//! └───────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use gltf_texconv::convert::{ConverterConfig, GltfConverter};
//! use gltf_texconv::format::TargetFormat;
//!
//! let config = ConverterConfig::new(TargetFormat::Ktx).with_mips(true);
//! let mut converter = GltfConverter::with_texturec(config)?;
//! converter.load("assets/scene.gltf")?;
//! let report = converter.convert("out/scene.gltf")?;
//! println!("{}", report);
//! # Ok::<(), gltf_texconv::convert::ConvertError>(())
//! ```

pub mod convert;
pub mod document;
pub mod encoder;
pub mod format;
pub mod logging;

/// Crate version, reported by the CLI banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
