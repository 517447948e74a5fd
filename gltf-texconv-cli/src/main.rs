//! gltf-texconv CLI - Command-line interface
//!
//! Converts every material texture of a glTF document with `texturec` and
//! writes a rewritten document next to the converted files.

mod cli;
mod error;
mod run;

use std::error::Error;
use std::process;

use clap::Parser;
use gltf_texconv::logging::{init_logging, verbosity_directive};

use cli::Cli;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = try_main(&cli) {
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(e.exit_code());
    }
}

fn try_main(cli: &Cli) -> Result<(), CliError> {
    init_logging(verbosity_directive(cli.verbose))?;

    let report = run::run(cli)?;
    println!("{}", report);
    if report.has_failures() {
        println!(
            "{} image(s) failed to encode; {} still references the expected files.",
            report.failures.len(),
            cli.output.display()
        );
    }
    Ok(())
}
