//! Conversion command: build the converter from arguments and run it.

use std::io::{self, Write};

use gltf_texconv::convert::{ConversionReport, ConverterConfig, EncodeFailure, GltfConverter};
use gltf_texconv::format::TargetFormat;
use tracing::{info, warn};

use crate::cli::Cli;
use crate::error::CliError;

/// Translate parsed arguments into converter settings.
pub fn config_from_args(cli: &Cli) -> ConverterConfig {
    ConverterConfig::new(TargetFormat::from(cli.format))
        .with_texture_type(cli.texture_type.clone())
        .with_quality(cli.quality.into())
        .with_mips(cli.mips)
}

/// Run the conversion described by `cli`.
///
/// Encoder failures for individual images are printed to stderr verbatim
/// and do not fail the command.
pub fn run(cli: &Cli) -> Result<ConversionReport, CliError> {
    run_with(cli, config_from_args(cli), &mut io::stderr())
}

/// Run with explicit settings, writing encoder output to `diagnostics` as
/// each failure happens.
pub fn run_with<W: Write>(
    cli: &Cli,
    config: ConverterConfig,
    diagnostics: &mut W,
) -> Result<ConversionReport, CliError> {
    let mut converter = GltfConverter::with_texturec(config).map_err(CliError::Config)?;

    converter.load(&cli.input).map_err(CliError::Load)?;
    info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        format = %converter.config().format(),
        "Starting conversion"
    );

    let mut forward = |failure: &EncodeFailure| {
        if let Err(e) = forward_encoder_output(diagnostics, &failure.output_text) {
            warn!(error = %e, "Failed to forward encoder output");
        }
    };

    converter
        .convert_with(&cli.output, &mut forward)
        .map_err(CliError::from_convert)
}

/// Write encoder output unchanged, ending it with a newline if it has none.
pub fn forward_encoder_output<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    if !text.is_empty() && !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()
}
