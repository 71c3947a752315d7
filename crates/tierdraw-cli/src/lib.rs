//! CLI logic for the Tierdraw diagram generator.
//!
//! This module contains the core CLI logic: load configuration, read the
//! graph description, and write the draw.io document.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use tierdraw::{DiagramBuilder, FileSink, FileSource, TierdrawError};

/// Run the Tierdraw CLI application
///
/// Reads the input file as a JSON graph description, lays it out and writes
/// the resulting draw.io document to the output path.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `TierdrawError` for:
/// - Configuration loading errors
/// - File I/O errors
/// - Invalid graph descriptions
/// - Export errors
pub fn run(args: &Args) -> Result<(), TierdrawError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing graph description"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = FileSource::new(&args.input);
    let mut sink = FileSink::new(&args.output);

    DiagramBuilder::new(app_config).generate(&source, &mut sink)?;

    info!(output_file:? = sink.path(); "draw.io document exported successfully");

    Ok(())
}
