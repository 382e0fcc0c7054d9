//! Header metadata extraction for the primary parse path.
//!
//! Walks the root statements for namespace, prefix, imports, includes,
//! and revision dates. Order and duplicates are preserved exactly as
//! declared; the dependency graph later reflects literal import counts.

use smol_str::SmolStr;

use super::primary::Statement;
use crate::syntax::ModuleMetadata;

pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Collect metadata across every top-level module/submodule.
    ///
    /// Documents normally have a single root; when a malformed document
    /// declares several, list fields accumulate across all of them and
    /// the first declared namespace/prefix wins.
    pub fn extract(filename: &str, roots: &[&Statement]) -> ModuleMetadata {
        let mut metadata = ModuleMetadata::new(filename);
        for root in roots {
            for child in &root.children {
                match child.keyword.as_str() {
                    "namespace" => {
                        if metadata.namespace.is_none() {
                            metadata.namespace = child.argument.clone();
                        }
                    }
                    "prefix" => {
                        if metadata.prefix.is_none() {
                            metadata.prefix = child.argument.as_deref().map(SmolStr::new);
                        }
                    }
                    "import" => {
                        if let Some(name) = child.argument.as_deref() {
                            metadata.imports.push(SmolStr::new(name));
                        }
                    }
                    "include" => {
                        if let Some(name) = child.argument.as_deref() {
                            metadata.includes.push(SmolStr::new(name));
                        }
                    }
                    "revision" => {
                        if let Some(date) = child.argument.clone() {
                            metadata.revisions.push(date);
                        }
                    }
                    _ => {}
                }
            }
        }
        metadata
    }
}
