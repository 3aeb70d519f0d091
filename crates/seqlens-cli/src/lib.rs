//! CLI logic for the seqlens diagram inspector.
//!
//! This module contains the core CLI logic for the seqlens diagram inspector.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use seqlens::{Inspector, SeqlensError, project::Project};

/// Run the seqlens CLI application
///
/// This function opens the project snapshot, inspects every sequence diagram
/// matching the requested name, and writes the textual report to the output
/// file or to stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SeqlensError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Snapshot parsing errors
/// - Ambiguous containers under the strict containment policy
pub fn run(args: &Args) -> Result<(), SeqlensError> {
    info!(
        input_path = args.input,
        diagram_name = args.diagram;
        "Inspecting project snapshot"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Open the project snapshot; released on every exit path via Drop
    let project = Project::open(&args.input)?;

    // Inspect using the Inspector API
    let inspector = Inspector::new(app_config);
    let report = inspector.inspect(&project, &args.diagram)?;

    // Write the report
    match &args.output {
        Some(path) => {
            fs::write(path, &report)?;
            info!(output_file = path; "Report written successfully");
        }
        None => {
            io::stdout().lock().write_all(report.as_bytes())?;
        }
    }

    Ok(())
}
