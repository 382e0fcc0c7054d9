//! Parsing strategies and their reconciliation.
//!
//! Two independent strategies produce the same [`ParseResult`] shape:
//!
//! - [`PrimaryParser`] delegates to a pest grammar engine and normalizes
//!   its statement tree; precise, but rejects malformed documents.
//! - [`FallbackParser`] scans logical lines with keyword matching and a
//!   parent stack; tolerant of malformed and incomplete input.
//!
//! [`ParseCoordinator`] runs the primary first and substitutes the
//! fallback when the engine recovers no structure. Neither strategy ever
//! returns `Err` or panics: all failures surface as diagnostics.

mod coordinator;
mod fallback;
mod grammar;
pub mod lexer;
mod metadata;
pub(crate) mod primary;

use crate::syntax::ParseResult;

pub use coordinator::{ParseCoordinator, parse_document};
pub use fallback::FallbackParser;
pub use grammar::EngineError;
pub use metadata::MetadataExtractor;
pub use primary::{PrimaryParser, Statement};

/// The parse capability both strategies implement.
///
/// Total contract: implementations never return `Err` and never panic on
/// malformed input; every failure mode is a diagnostic on the result.
pub trait SchemaParser {
    fn parse(&self, content: &str, filename: &str) -> ParseResult;
}
