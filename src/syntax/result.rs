//! Parse results and module metadata.

use indexmap::IndexMap;
use serde::Serialize;
use smol_str::SmolStr;

use super::diagnostics::Diagnostic;
use super::node::SchemaNode;

/// Which parsing strategy produced a [`ParseResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserKind {
    Primary,
    Fallback,
}

/// Header-level metadata of a parsed document.
///
/// Import and include lists keep declaration order and preserve
/// duplicates; revision dates appear as declared (most recent first by
/// YANG convention, but the order is taken from the document).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleMetadata {
    pub filename: String,
    pub imports: Vec<SmolStr>,
    pub includes: Vec<SmolStr>,
    pub revisions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<SmolStr>,
}

impl ModuleMetadata {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            imports: Vec::new(),
            includes: Vec::new(),
            revisions: Vec::new(),
            namespace: None,
            prefix: None,
        }
    }
}

/// The complete outcome of parsing one document.
///
/// Built once and returned immutably; `valid == false` together with a
/// populated `errors` list is the only failure signal a caller ever sees.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub valid: bool,
    /// Root module name to root node. Keys are unique; a repeated module
    /// name keeps the last declaration.
    pub tree: IndexMap<SmolStr, SchemaNode>,
    /// Top-level modules/submodules in declaration order. Normally one,
    /// but malformed documents may declare several.
    pub modules: Vec<SchemaNode>,
    pub errors: Vec<Diagnostic>,
    pub metadata: ModuleMetadata,
    pub parser_used: ParserKind,
}

impl ParseResult {
    pub fn new(filename: &str, parser_used: ParserKind) -> Self {
        Self {
            valid: true,
            tree: IndexMap::new(),
            modules: Vec::new(),
            errors: Vec::new(),
            metadata: ModuleMetadata::new(filename),
            parser_used,
        }
    }

    /// Register a top-level module or submodule.
    pub fn push_module(&mut self, node: SchemaNode) {
        self.tree.insert(node.name.clone(), node.clone());
        self.modules.push(node);
    }

    /// Record a diagnostic and mark the result invalid when it is an error.
    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity.is_error() {
            self.valid = false;
        }
        self.errors.push(diagnostic);
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::NodeKind;

    #[test]
    fn push_module_updates_tree_and_list() {
        let mut result = ParseResult::new("a.yang", ParserKind::Fallback);
        result.push_module(SchemaNode::new(NodeKind::Module, "alpha"));
        assert_eq!(result.modules.len(), 1);
        assert!(result.tree.contains_key("alpha"));
    }

    #[test]
    fn error_diagnostic_invalidates_result() {
        let mut result = ParseResult::new("a.yang", ParserKind::Primary);
        assert!(result.valid);
        result.push_diagnostic(Diagnostic::error(1, "bad"));
        assert!(!result.valid);
        result.push_diagnostic(Diagnostic::info(1, "note"));
        assert_eq!(result.error_count(), 2);
    }

    #[test]
    fn wire_shape_uses_camel_case() {
        let result = ParseResult::new("a.yang", ParserKind::Primary);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["parserUsed"], "primary");
        assert!(json["metadata"]["imports"].is_array());
    }
}
