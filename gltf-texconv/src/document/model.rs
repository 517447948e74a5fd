//! Serde model of the glTF members the converter touches.
//!
//! Only materials, textures, images and buffers are modelled. Every other
//! member, at the top level and inside each modelled object, lands in an
//! `other` map via `#[serde(flatten)]` and is written back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque JSON members preserved across a load/save cycle.
pub type Extra = Map<String, Value>;

/// A loaded glTF document.
///
/// Entries are addressed by their position in each array. The converter only
/// ever changes `Image::uri` and `Image::mime_type`, so indices held by
/// materials, textures and the opaque parts of the document stay valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<Material>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub textures: Vec<Texture>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buffers: Vec<Buffer>,

    #[serde(flatten)]
    pub other: Extra,
}

/// A material and its optional texture slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pbr_metallic_roughness: Option<PbrMetallicRoughness>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_texture: Option<TextureInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occlusion_texture: Option<TextureInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissive_texture: Option<TextureInfo>,

    #[serde(flatten)]
    pub other: Extra,
}

/// The `pbrMetallicRoughness` group of a material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PbrMetallicRoughness {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color_texture: Option<TextureInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metallic_roughness_texture: Option<TextureInfo>,

    #[serde(flatten)]
    pub other: Extra,
}

/// Reference from a material slot to a texture.
///
/// `scale`, `strength` and `texCoord` live in `other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureInfo {
    pub index: usize,

    #[serde(flatten)]
    pub other: Extra,
}

impl TextureInfo {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            other: Extra::new(),
        }
    }
}

/// A texture: an image plus (opaque) sampler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Texture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<usize>,

    #[serde(flatten)]
    pub other: Extra,
}

impl Texture {
    pub fn new(source: usize) -> Self {
        Self {
            source: Some(source),
            other: Extra::new(),
        }
    }
}

/// An image entry. Images stored in buffer views have no `uri`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(flatten)]
    pub other: Extra,
}

impl Image {
    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Self::default()
        }
    }
}

/// A binary buffer. The first buffer of a `.glb` has no `uri`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buffer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(flatten)]
    pub other: Extra,
}

impl Buffer {
    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Self::default()
        }
    }
}

/// Returns true for `data:` URIs, which reference no file.
pub fn is_data_uri(uri: &str) -> bool {
    uri.starts_with("data:")
}
