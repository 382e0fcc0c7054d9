//! Dual-parser reconciliation.
//!
//! The grammar engine runs first; when it rejects a document outright
//! but the permissive fallback still recovers at least one module, the
//! fallback result is substituted. The preference is asymmetric on
//! purpose: a navigable partial tree beats a more precise error when the
//! primary parser found no structure at all.

use super::fallback::FallbackParser;
use super::primary::PrimaryParser;
use super::{ParseResult, SchemaParser};

/// Runs both parsing strategies and reconciles their results.
pub struct ParseCoordinator {
    primary: Box<dyn SchemaParser + Send + Sync>,
    fallback: Box<dyn SchemaParser + Send + Sync>,
}

impl Default for ParseCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseCoordinator {
    pub fn new() -> Self {
        Self {
            primary: Box::new(PrimaryParser),
            fallback: Box::new(FallbackParser),
        }
    }

    /// Swap in custom strategies; the coordinator only depends on the
    /// [`SchemaParser`] capability.
    pub fn with_parsers(
        primary: Box<dyn SchemaParser + Send + Sync>,
        fallback: Box<dyn SchemaParser + Send + Sync>,
    ) -> Self {
        Self { primary, fallback }
    }

    /// Parse one document, reconciling primary and fallback results.
    pub fn parse_document(&self, content: &str, filename: &str) -> ParseResult {
        let primary = self.primary.parse(content, filename);
        if primary.valid || primary.errors.is_empty() {
            return primary;
        }

        let fallback = self.fallback.parse(content, filename);
        if !fallback.modules.is_empty() && primary.modules.is_empty() {
            tracing::debug!(
                file = filename,
                modules = fallback.modules.len(),
                "grammar engine found no roots, substituting fallback parse"
            );
            return fallback;
        }

        // The primary result generally carries more precise diagnostics,
        // so it wins even when invalid.
        primary
    }
}

/// Parse a single document with the default strategies.
pub fn parse_document(content: &str, filename: &str) -> ParseResult {
    ParseCoordinator::new().parse_document(content, filename)
}
