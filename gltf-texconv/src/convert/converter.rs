//! Document-level conversion: load, walk, save, copy buffers.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use tracing::{debug, info};

use super::planner::{ConversionRun, FailureHandler};
use super::{ConversionReport, ConvertError, ConvertResult, ConverterConfig, EncodeFailure};
use crate::document::{is_data_uri, Document};
use crate::encoder::{TextureEncoder, TexturecEncoder};

/// A loaded document and the directory its relative URIs resolve against.
#[derive(Debug)]
struct LoadedDocument {
    document: Document,
    directory: PathBuf,
}

/// Converts every material texture of a glTF document to one target format.
///
/// # Example
///
/// ```no_run
/// use gltf_texconv::convert::{ConverterConfig, GltfConverter};
/// use gltf_texconv::format::TargetFormat;
///
/// let mut converter = GltfConverter::with_texturec(ConverterConfig::new(TargetFormat::Dds))?;
/// converter.load("in/scene.gltf")?;
/// let report = converter.convert("out/scene.gltf")?;
/// for failure in &report.failures {
///     eprint!("{}", failure.output_text);
/// }
/// # Ok::<(), gltf_texconv::convert::ConvertError>(())
/// ```
pub struct GltfConverter {
    config: ConverterConfig,
    encoder: Box<dyn TextureEncoder>,
    loaded: Option<LoadedDocument>,
}

impl GltfConverter {
    /// Create a converter using `encoder` for every image.
    ///
    /// Fails if the configuration is invalid; no I/O happens here.
    pub fn new(config: ConverterConfig, encoder: Box<dyn TextureEncoder>) -> ConvertResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            encoder,
            loaded: None,
        })
    }

    /// Create a converter that runs the configured `texturec` executable.
    pub fn with_texturec(config: ConverterConfig) -> ConvertResult<Self> {
        let encoder = TexturecEncoder::new(config.executable().clone());
        Self::new(config, Box::new(encoder))
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// The loaded document, if any.
    pub fn document(&self) -> Option<&Document> {
        self.loaded.as_ref().map(|l| &l.document)
    }

    /// Canonical directory of the loaded document.
    pub fn input_dir(&self) -> Option<&Path> {
        self.loaded.as_ref().map(|l| l.directory.as_path())
    }

    /// Load the document at `path`, replacing any previously loaded one.
    pub fn load(&mut self, path: impl AsRef<Path>) -> ConvertResult<()> {
        let path = path.as_ref();
        let document = Document::load(path)?;
        let directory = resolve_dir(&parent_dir(path))?;

        debug!(
            path = %path.display(),
            materials = document.materials.len(),
            images = document.images.len(),
            "Loaded document"
        );

        self.loaded = Some(LoadedDocument {
            document,
            directory,
        });
        Ok(())
    }

    /// Convert the loaded document and write it to `output_path`.
    ///
    /// Images are written next to the output document by the encoder.
    /// Buffer files are copied when the output directory differs from the
    /// input directory. Nothing is written if the walk fails.
    pub fn convert(&mut self, output_path: impl AsRef<Path>) -> ConvertResult<ConversionReport> {
        self.convert_with(output_path, &mut |_: &EncodeFailure| {})
    }

    /// Like [`convert`](Self::convert), but passes every encoder failure to
    /// `on_failure` when it happens, so its output survives a later error.
    pub fn convert_with(
        &mut self,
        output_path: impl AsRef<Path>,
        on_failure: &mut FailureHandler<'_>,
    ) -> ConvertResult<ConversionReport> {
        let loaded = self.loaded.as_mut().ok_or(ConvertError::NotLoaded)?;
        let output_path = output_path.as_ref();

        let output_dir = parent_dir(output_path);
        fs::create_dir_all(&output_dir).map_err(|e| ConvertError::CreateDir {
            path: output_dir.clone(),
            source: e,
        })?;
        let output_dir = resolve_dir(&output_dir)?;

        let mut report = ConversionRun::new(
            &mut loaded.document,
            &self.config,
            &*self.encoder,
            &loaded.directory,
            &output_dir,
        )
        .with_failure_handler(on_failure)
        .run()?;

        loaded.document.save(output_path)?;

        if output_dir != loaded.directory {
            report.buffers_copied = copy_buffers(&loaded.document, &loaded.directory, &output_dir)?;
        }

        info!(output = %output_path.display(), "{}", report);
        Ok(report)
    }
}

/// Parent directory of a file path; `.` for bare file names.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn resolve_dir(dir: &Path) -> ConvertResult<PathBuf> {
    fs::canonicalize(dir).map_err(|e| ConvertError::ResolveDir {
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Copy every external buffer file from `input_dir` to `output_dir`.
///
/// Permissions and access/modification times are carried over. Returns the
/// number of files copied.
fn copy_buffers(document: &Document, input_dir: &Path, output_dir: &Path) -> ConvertResult<usize> {
    let mut copied = 0;

    for uri in document.buffers.iter().filter_map(|b| b.uri.as_deref()) {
        if is_data_uri(uri) {
            continue;
        }

        let from = input_dir.join(uri);
        let to = output_dir.join(uri);
        let copy_err = |source| ConvertError::CopyBuffer {
            from: from.clone(),
            to: to.clone(),
            source,
        };

        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent).map_err(copy_err)?;
        }
        fs::copy(&from, &to).map_err(copy_err)?;

        let metadata = fs::metadata(&from).map_err(copy_err)?;
        filetime::set_file_times(
            &to,
            FileTime::from_last_access_time(&metadata),
            FileTime::from_last_modification_time(&metadata),
        )
        .map_err(copy_err)?;

        debug!(from = %from.display(), to = %to.display(), "Copied buffer");
        copied += 1;
    }

    Ok(copied)
}
