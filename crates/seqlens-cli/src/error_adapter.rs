//! Error adapter for converting SeqlensError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI. Seqlens errors
//! carry no source-code spans, so the adapter only supplies an error code and
//! the error chain.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use seqlens::SeqlensError;

/// Adapter wrapping a [`SeqlensError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a SeqlensError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            SeqlensError::Io(_) => "seqlens::io",
            SeqlensError::Open { .. } => "seqlens::open",
            SeqlensError::AmbiguousContainer { .. } => "seqlens::ambiguous_container",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            SeqlensError::AmbiguousContainer { .. } => Some(Box::new(
                "set `containment = \"last_wins\"` to accept multiple combined fragments",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
