//! Project-level batch parsing.
//!
//! Documents arrive already read into memory (the upload layer bounds
//! their size) and each parse is independent and side-effect-free, so
//! the batch fans out across a rayon worker pool. Dependency and summary
//! aggregation happens afterwards on the calling thread.

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::graph::DependencyGraph;
use crate::parser::parse_document;
use crate::syntax::ParseResult;

/// One in-memory document of a batch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A per-file parse outcome, tagged with its filename on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileParseResult {
    pub filename: String,
    #[serde(flatten)]
    pub result: ParseResult,
}

/// Aggregate counters over a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    /// Documents parsed
    pub total_modules: usize,
    /// Documents that parsed without errors
    pub valid_modules: usize,
    /// Diagnostics across all documents
    pub total_errors: usize,
}

/// The full outcome of a batch parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub files: Vec<FileParseResult>,
    /// Per-file imported module names, in input and declaration order
    pub dependencies: IndexMap<String, Vec<SmolStr>>,
    pub graph: DependencyGraph,
    pub summary: BatchSummary,
}

/// Parse a batch of documents and aggregate their dependency graph.
///
/// Output order matches input order regardless of worker scheduling.
pub fn parse_batch(files: &[SourceFile]) -> BatchResult {
    tracing::debug!(files = files.len(), "parsing batch");

    let parsed: Vec<FileParseResult> = files
        .par_iter()
        .map(|file| FileParseResult {
            filename: file.name.clone(),
            result: parse_document(&file.content, &file.name),
        })
        .collect();

    let mut dependencies: IndexMap<String, Vec<SmolStr>> = IndexMap::new();
    for file in &parsed {
        dependencies.insert(file.filename.clone(), file.result.metadata.imports.clone());
    }
    let graph = DependencyGraph::build(&dependencies);

    let summary = BatchSummary {
        total_modules: parsed.len(),
        valid_modules: parsed.iter().filter(|file| file.result.valid).count(),
        total_errors: parsed.iter().map(|file| file.result.error_count()).sum(),
    };

    BatchResult {
        files: parsed,
        dependencies,
        graph,
        summary,
    }
}
