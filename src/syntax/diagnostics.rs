//! Structured parse diagnostics.
//!
//! Every failure mode of every parser is represented as data: a
//! [`Diagnostic`] with a 1-based line, a message, and a [`Severity`].
//! No parser in this crate returns `Err` or panics on malformed input.

use serde::Serialize;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A hard error that makes the document invalid
    #[default]
    Error,
    /// A warning that does not invalidate the document
    Warning,
    /// An informational note
    Info,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// A single parser diagnostic.
///
/// `line` is 1-based; document-level diagnostics that have no specific
/// location use line 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Create a warning diagnostic
    pub fn warning(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Create an informational diagnostic
    pub fn info(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            severity: Severity::Info,
        }
    }
}
