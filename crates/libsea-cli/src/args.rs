//! Command-line argument definitions for the LibSea CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, output switches, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the LibSea converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input Graphviz DOT file
    #[arg(help = "Path to the input DOT file")]
    pub input: String,

    /// Path to the output LibSea file
    #[arg(short, long, default_value = "out.libsea")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Omit section comments and blank separator lines
    #[arg(long)]
    pub no_comments: bool,

    /// Omit `@name=` field labels
    #[arg(long)]
    pub no_labels: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
