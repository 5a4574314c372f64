//! CLI logic for the LibSea converter.
//!
//! This module contains the core CLI logic: it reads a Graphviz DOT file,
//! assembles a LibSea document, and writes the rendered text.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use libsea::{DocumentBuilder, LibseaError};

/// Run the LibSea CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `LibseaError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - DOT parsing errors
/// - Assembly errors
pub fn run(args: &Args) -> Result<(), LibseaError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing graph"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.no_comments {
        app_config.render_mut().set_comments(false);
    }
    if args.no_labels {
        app_config.render_mut().set_labels(false);
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = DocumentBuilder::new(app_config);
    let graph = builder.parse_dot(&source)?;
    let document = builder.assemble(&graph)?;
    let text = builder.render(&document);

    fs::write(&args.output, text)?;

    info!(output_file = args.output; "LibSea document written");

    Ok(())
}
