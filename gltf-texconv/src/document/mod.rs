//! glTF document loading and saving.
//!
//! The converter sees a glTF file as an owned aggregate of four arrays
//! (materials, textures, images, buffers) with index-based references
//! between them. Everything else in the file is opaque and preserved.
//!
//! # Example
//!
//! ```no_run
//! use gltf_texconv::document::Document;
//!
//! let doc = Document::load("scene.gltf")?;
//! println!("{} images", doc.images.len());
//! doc.save("copy.gltf")?;
//! # Ok::<(), gltf_texconv::document::DocumentError>(())
//! ```

mod error;
mod model;

use std::fs;
use std::io;
use std::path::Path;

pub use error::{DocumentError, DocumentResult};
pub use model::{
    is_data_uri, Buffer, Document, Extra, Image, Material, PbrMetallicRoughness, Texture,
    TextureInfo,
};

/// Magic bytes at the start of a binary glTF container.
const GLB_MAGIC: &[u8; 4] = b"glTF";

impl Document {
    /// Load a JSON glTF document from disk.
    pub fn load(path: impl AsRef<Path>) -> DocumentResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DocumentError::NotFound(path.to_path_buf()),
            _ => DocumentError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        if bytes.starts_with(GLB_MAGIC) {
            return Err(DocumentError::BinaryContainer(path.to_path_buf()));
        }

        Self::from_slice(&bytes).map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a document from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Serialize the document as pretty-printed JSON.
    pub fn to_vec_pretty(&self) -> DocumentResult<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(DocumentError::Serialize)
    }

    /// Write the document to disk, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> DocumentResult<()> {
        let path = path.as_ref();
        let bytes = self.to_vec_pretty()?;
        fs::write(path, bytes).map_err(|e| DocumentError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
