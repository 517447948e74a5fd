//! Material texture slots and their encoding roles.

use std::fmt;

use crate::document::{Material, TextureInfo};

/// A texture slot of a glTF material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    BaseColor,
    MetallicRoughness,
    Normal,
    Occlusion,
    Emissive,
}

/// How the encoder must treat a texture's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionRole {
    /// Data is linear; no gamma correction before compression.
    pub is_linear: bool,
    /// Data is a tangent-space normal map.
    pub is_normal: bool,
}

impl TextureSlot {
    /// Slots in the order a material is walked.
    pub const ALL: [TextureSlot; 5] = [
        TextureSlot::BaseColor,
        TextureSlot::MetallicRoughness,
        TextureSlot::Normal,
        TextureSlot::Occlusion,
        TextureSlot::Emissive,
    ];

    /// Encoding role of textures bound to this slot.
    ///
    /// Colour slots are sRGB encoded; everything else is linear data.
    pub fn role(&self) -> ConversionRole {
        match self {
            TextureSlot::BaseColor | TextureSlot::Emissive => ConversionRole {
                is_linear: false,
                is_normal: false,
            },
            TextureSlot::MetallicRoughness | TextureSlot::Occlusion => ConversionRole {
                is_linear: true,
                is_normal: false,
            },
            TextureSlot::Normal => ConversionRole {
                is_linear: true,
                is_normal: true,
            },
        }
    }

    /// The material's reference for this slot, if present.
    pub fn texture_info<'a>(&self, material: &'a Material) -> Option<&'a TextureInfo> {
        let pbr = material.pbr_metallic_roughness.as_ref();
        match self {
            TextureSlot::BaseColor => pbr.and_then(|p| p.base_color_texture.as_ref()),
            TextureSlot::MetallicRoughness => {
                pbr.and_then(|p| p.metallic_roughness_texture.as_ref())
            }
            TextureSlot::Normal => material.normal_texture.as_ref(),
            TextureSlot::Occlusion => material.occlusion_texture.as_ref(),
            TextureSlot::Emissive => material.emissive_texture.as_ref(),
        }
    }
}

impl fmt::Display for TextureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextureSlot::BaseColor => "baseColor",
            TextureSlot::MetallicRoughness => "metallicRoughness",
            TextureSlot::Normal => "normal",
            TextureSlot::Occlusion => "occlusion",
            TextureSlot::Emissive => "emissive",
        };
        f.write_str(name)
    }
}

/// Texture indices of every present slot, in walk order.
pub fn material_slots(material: &Material) -> Vec<(TextureSlot, usize)> {
    TextureSlot::ALL
        .into_iter()
        .filter_map(|slot| slot.texture_info(material).map(|info| (slot, info.index)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PbrMetallicRoughness;

    fn role(is_linear: bool, is_normal: bool) -> ConversionRole {
        ConversionRole {
            is_linear,
            is_normal,
        }
    }

    #[test]
    fn test_role_table() {
        assert_eq!(TextureSlot::BaseColor.role(), role(false, false));
        assert_eq!(TextureSlot::MetallicRoughness.role(), role(true, false));
        assert_eq!(TextureSlot::Normal.role(), role(true, true));
        assert_eq!(TextureSlot::Occlusion.role(), role(true, false));
        assert_eq!(TextureSlot::Emissive.role(), role(false, false));
    }

    #[test]
    fn test_empty_material_has_no_slots() {
        assert!(material_slots(&Material::default()).is_empty());
    }

    #[test]
    fn test_pbr_group_without_textures() {
        let material = Material {
            pbr_metallic_roughness: Some(PbrMetallicRoughness::default()),
            ..Material::default()
        };
        assert!(material_slots(&material).is_empty());
    }

    #[test]
    fn test_all_slots_in_walk_order() {
        let material = Material {
            pbr_metallic_roughness: Some(PbrMetallicRoughness {
                base_color_texture: Some(TextureInfo::new(0)),
                metallic_roughness_texture: Some(TextureInfo::new(1)),
                ..PbrMetallicRoughness::default()
            }),
            normal_texture: Some(TextureInfo::new(2)),
            occlusion_texture: Some(TextureInfo::new(3)),
            emissive_texture: Some(TextureInfo::new(4)),
            ..Material::default()
        };

        assert_eq!(
            material_slots(&material),
            vec![
                (TextureSlot::BaseColor, 0),
                (TextureSlot::MetallicRoughness, 1),
                (TextureSlot::Normal, 2),
                (TextureSlot::Occlusion, 3),
                (TextureSlot::Emissive, 4),
            ]
        );
    }

    #[test]
    fn test_direct_slots_without_pbr_group() {
        let material = Material {
            normal_texture: Some(TextureInfo::new(5)),
            emissive_texture: Some(TextureInfo::new(5)),
            ..Material::default()
        };
        assert_eq!(
            material_slots(&material),
            vec![(TextureSlot::Normal, 5), (TextureSlot::Emissive, 5)]
        );
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(TextureSlot::MetallicRoughness.to_string(), "metallicRoughness");
    }
}
