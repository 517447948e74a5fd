//! A single conversion run over a loaded document.
//!
//! `ConversionRun` walks materials in document order, dispatches every
//! present texture slot with its [`ConversionRole`], and converts each
//! referenced image at most once. The set of converted image indices lives
//! only as long as the run.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::role::{material_slots, ConversionRole};
use super::{ConversionReport, ConvertError, ConvertResult, ConverterConfig, EncodeFailure};
use crate::document::{is_data_uri, Document};
use crate::encoder::{EncodeJob, EncodeOutcome, TextureEncoder};

/// Called with every encoder failure as soon as it happens.
pub type FailureHandler<'a> = dyn FnMut(&EncodeFailure) + 'a;

/// Mutable state of one `convert()` call.
pub struct ConversionRun<'a> {
    document: &'a mut Document,
    config: &'a ConverterConfig,
    encoder: &'a dyn TextureEncoder,
    input_dir: &'a Path,
    output_dir: &'a Path,
    converted: HashSet<usize>,
    report: ConversionReport,
    on_failure: Option<&'a mut FailureHandler<'a>>,
}

impl<'a> ConversionRun<'a> {
    /// Start a run with an empty converted-set.
    pub fn new(
        document: &'a mut Document,
        config: &'a ConverterConfig,
        encoder: &'a dyn TextureEncoder,
        input_dir: &'a Path,
        output_dir: &'a Path,
    ) -> Self {
        Self {
            document,
            config,
            encoder,
            input_dir,
            output_dir,
            converted: HashSet::new(),
            report: ConversionReport::default(),
            on_failure: None,
        }
    }

    /// Hand each encoder failure to `handler` before the run continues.
    ///
    /// The failure is still recorded in the report.
    pub fn with_failure_handler(mut self, handler: &'a mut FailureHandler<'a>) -> Self {
        self.on_failure = Some(handler);
        self
    }

    /// Walk every material and return what was done.
    ///
    /// Stops at the first fatal error; per-image encoder failures are
    /// collected in the report instead.
    pub fn run(mut self) -> ConvertResult<ConversionReport> {
        for material_index in 0..self.document.materials.len() {
            self.convert_material(material_index)?;
        }
        Ok(self.report)
    }

    /// Dispatch every present slot of a material to [`Self::convert_texture`].
    pub fn convert_material(&mut self, material_index: usize) -> ConvertResult<()> {
        let material = self.document.materials.get(material_index).ok_or_else(|| {
            ConvertError::InvalidIndex {
                referrer: "material walk".to_string(),
                kind: "material",
                index: material_index,
                len: self.document.materials.len(),
            }
        })?;

        for (slot, texture_index) in material_slots(material) {
            if texture_index >= self.document.textures.len() {
                return Err(ConvertError::InvalidIndex {
                    referrer: format!("material {} {} slot", material_index, slot),
                    kind: "texture",
                    index: texture_index,
                    len: self.document.textures.len(),
                });
            }
            debug!(material = material_index, %slot, texture = texture_index, "Dispatching slot");
            self.convert_texture(texture_index, slot.role())?;
        }
        Ok(())
    }

    /// Convert the image behind `texture_index` unless this run already did.
    ///
    /// The image's `uri` and `mimeType` are rewritten even when the encoder
    /// reports a failure, so the document always names the expected file.
    pub fn convert_texture(
        &mut self,
        texture_index: usize,
        role: ConversionRole,
    ) -> ConvertResult<()> {
        let texture =
            self.document
                .textures
                .get(texture_index)
                .ok_or_else(|| ConvertError::InvalidIndex {
                    referrer: "texture conversion".to_string(),
                    kind: "texture",
                    index: texture_index,
                    len: self.document.textures.len(),
                })?;

        let Some(image_index) = texture.source else {
            debug!(texture = texture_index, "Texture has no source image, skipping");
            return Ok(());
        };

        if image_index >= self.document.images.len() {
            return Err(ConvertError::InvalidIndex {
                referrer: format!("texture {}", texture_index),
                kind: "image",
                index: image_index,
                len: self.document.images.len(),
            });
        }

        if !self.converted.insert(image_index) {
            debug!(image = image_index, "Image already converted in this run");
            return Ok(());
        }

        let old_uri = match self.document.images[image_index].uri.as_deref() {
            Some(uri) if !is_data_uri(uri) => uri.to_string(),
            _ => {
                warn!(
                    image = image_index,
                    "Image is embedded in the document, leaving it unchanged"
                );
                self.report.images_skipped += 1;
                return Ok(());
            }
        };

        let format = self.config.format();
        let new_uri = replace_extension(&old_uri, format.extension());
        let input = self.input_dir.join(&old_uri);
        let output = self.output_dir.join(&new_uri);

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| ConvertError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        info!("Converting {}", input.display());
        let job = EncodeJob {
            input,
            output,
            texture_type: self.config.texture_type().to_string(),
            quality: self.config.quality(),
            mips: self.config.mips(),
            linear: role.is_linear,
            normal_map: role.is_normal,
        };

        let outcome = self.encoder.encode(&job)?;
        self.report.images_converted += 1;

        if let EncodeOutcome::Failed { status, output } = outcome {
            warn!(
                image = image_index,
                input = %job.input.display(),
                status = ?status,
                encoder = self.encoder.name(),
                "Texture encoder failed"
            );
            debug!(image = image_index, output = %output, "Encoder output");
            let failure = EncodeFailure {
                image_index,
                input: job.input,
                output: job.output,
                status,
                output_text: output,
            };
            if let Some(handler) = self.on_failure.as_deref_mut() {
                handler(&failure);
            }
            self.report.failures.push(failure);
        }

        let image = &mut self.document.images[image_index];
        image.uri = Some(new_uri);
        image.mime_type = Some(format.mime_type().to_string());
        Ok(())
    }
}

/// Replace the file extension of a relative URI, keeping its directories.
///
/// A name without an extension (or a dot-file such as `.png`) gets the
/// extension appended.
pub fn replace_extension(uri: &str, extension: &str) -> String {
    let name_start = uri.rfind('/').map_or(0, |i| i + 1);
    let stem_end = match uri[name_start..].rfind('.') {
        Some(0) | None => uri.len(),
        Some(dot) => name_start + dot,
    };
    format!("{}.{}", &uri[..stem_end], extension)
}
