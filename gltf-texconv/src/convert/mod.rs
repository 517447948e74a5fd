//! Texture conversion for glTF documents.
//!
//! [`GltfConverter`] owns the loaded document and drives one
//! [`ConversionRun`] per `convert()` call:
//!
//! 1. every material is visited in document order;
//! 2. each present slot is classified by [`TextureSlot::role`];
//! 3. the slot's image is encoded unless this run already encoded it;
//! 4. the image's `uri` and `mimeType` are rewritten to the new file;
//! 5. the document is saved and buffer files are copied if the output
//!    lives in a different directory.
//!
//! | Slot | linear | normal map |
//! |---|---|---|
//! | baseColor | no | no |
//! | metallicRoughness | yes | no |
//! | normal | yes | yes |
//! | occlusion | yes | no |
//! | emissive | no | no |

mod config;
mod converter;
mod error;
mod planner;
mod report;
mod role;

pub use config::{ConverterConfig, DEFAULT_TEXTURE_TYPE};
pub use converter::GltfConverter;
pub use error::{ConvertError, ConvertResult};
pub use planner::{replace_extension, ConversionRun, FailureHandler};
pub use report::{ConversionReport, EncodeFailure};
pub use role::{material_slots, ConversionRole, TextureSlot};
