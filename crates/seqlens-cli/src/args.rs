//! Command-line argument definitions for the seqlens CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input snapshot, the diagram name to
//! look up, output destination, configuration file selection, and logging
//! verbosity.

use clap::Parser;

/// Command-line arguments for the seqlens diagram inspector
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input project snapshot (JSON)
    #[arg(help = "Path to the project snapshot file")]
    pub input: String,

    /// Name of the sequence diagram to inspect
    #[arg(short, long, default_value = "example")]
    pub diagram: String,

    /// Path to the output report file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
