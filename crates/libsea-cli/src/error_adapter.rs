//! Error adapter for converting LibseaError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use libsea::{AssemblyError, LibseaError};

/// Adapter that renders a [`LibseaError`] as a miette diagnostic.
///
/// Every error gets a stable diagnostic code; assembly errors also carry a
/// help message pointing at the offending input.
pub struct ErrorAdapter<'a>(pub &'a LibseaError);

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
            LibseaError::Io(_) => "libsea::io",
            LibseaError::Dot(_) => "libsea::dot",
            LibseaError::Assembly(_) => "libsea::assembly",
            LibseaError::Config(_) => "libsea::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            LibseaError::Assembly(AssemblyError::MissingRequiredAttribute { name }) => format!(
                "set `{name}=True` or `{name}=False` on at least one {}",
                if name == libsea::ROOT_ATTRIBUTE {
                    "node"
                } else {
                    "edge"
                }
            ),
            LibseaError::Assembly(AssemblyError::DuplicateNodeIdentity { node }) => {
                format!("give node `{node}` a unique name")
            }
            LibseaError::Assembly(AssemblyError::UnknownEndpoint { node }) => {
                format!("declare node `{node}` before using it in an edge")
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
