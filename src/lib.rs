//! # yangtree
//!
//! Core library for YANG module parsing, schema trees, and dependency graphs.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Batch parsing over many files, dependency aggregation
//!   ↓
//! graph     → Import dependency graph (nodes/edges)
//!   ↓
//! parser    → Logos scanner, fallback parser, pest grammar, coordinator
//!   ↓
//! syntax    → SchemaNode tree, ParseResult, diagnostics, metadata
//!   ↓
//! base      → Primitives (LineIndex)
//! ```
//!
//! The parsing entry point is [`parse_document`], which runs the
//! grammar-engine parser first and substitutes a permissive line-oriented
//! fallback parse when the engine cannot recover any structure. Batch
//! callers use [`parse_batch`], which additionally aggregates an import
//! dependency graph across all documents.

// ============================================================================
// MODULES (dependency order: base → syntax → parser → graph → project)
// ============================================================================

/// Foundation types: LineIndex
pub mod base;

/// Syntax: SchemaNode tree, ParseResult, diagnostics, module metadata
pub mod syntax;

/// Parser: logos scanner, fallback parser, pest grammar adapter, coordinator
pub mod parser;

/// Dependency graph built from per-file import lists
pub mod graph;

/// Project-level batch parsing
pub mod project;

// Re-export commonly needed items
pub use graph::{DependencyGraph, EdgeKind, GraphEdge, GraphNode};
pub use parser::{FallbackParser, ParseCoordinator, PrimaryParser, SchemaParser, parse_document};
pub use project::{BatchResult, BatchSummary, FileParseResult, SourceFile, parse_batch};
pub use syntax::{
    Diagnostic, ModuleMetadata, NodeKind, NodeProperties, ParseResult, ParserKind, SchemaNode,
    Severity,
};
