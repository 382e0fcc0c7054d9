//! Parser-agnostic syntax model.
//!
//! Both parsing strategies (grammar engine and line-oriented fallback)
//! normalize their output into the same shapes defined here, so every
//! downstream consumer sees one uniform tree regardless of which parser
//! produced it.

mod diagnostics;
mod node;
mod result;

pub use diagnostics::{Diagnostic, Severity};
pub use node::{NodeKind, NodeProperties, SchemaNode};
pub use result::{ModuleMetadata, ParseResult, ParserKind};
