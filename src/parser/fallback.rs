//! Line-oriented recovery parser.
//!
//! Deliberately permissive: it matches statement keywords per logical
//! line and attaches nodes through a stack of arena indices, so a
//! partially malformed document still yields a partial, inspectable
//! tree. Grammatical correctness is the primary parser's job; this one
//! optimizes for diagnostic usefulness.

use smol_str::SmolStr;

use super::SchemaParser;
use super::lexer;
use crate::syntax::{Diagnostic, NodeKind, ParseResult, ParserKind, SchemaNode};

pub(crate) const NO_MODULE_MESSAGE: &str = "No module or submodule declaration found";

/// The permissive line-oriented parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackParser;

impl SchemaParser for FallbackParser {
    fn parse(&self, content: &str, filename: &str) -> ParseResult {
        let mut result = ParseResult::new(filename, ParserKind::Fallback);
        let lines = lexer::logical_lines(content);

        // Arena of nodes plus child indices; the stack holds the current
        // insertion path as indices into the arena.
        let mut arena: Vec<SchemaNode> = Vec::new();
        let mut children: Vec<Vec<usize>> = Vec::new();
        let mut stack: Vec<usize> = Vec::new();
        let mut roots: Vec<usize> = Vec::new();
        let mut depth: i64 = 0;

        fn alloc(
            arena: &mut Vec<SchemaNode>,
            children: &mut Vec<Vec<usize>>,
            node: SchemaNode,
        ) -> usize {
            arena.push(node);
            children.push(Vec::new());
            arena.len() - 1
        }

        for line in &lines {
            let trimmed = line.text.trim();
            let mut parts = trimmed.split_whitespace();
            let keyword = parts.next().unwrap_or_default();
            let argument = parts.next().and_then(clean_argument);

            if let Some(argument) = argument {
                match keyword {
                    "module" | "submodule" => {
                        let kind = NodeKind::from_keyword(keyword).unwrap_or(NodeKind::Unknown);
                        let node = SchemaNode::new(kind, argument).with_line(line.line);
                        let index = alloc(&mut arena, &mut children, node);
                        roots.push(index);
                        stack.push(index);
                    }
                    "import" => result.metadata.imports.push(argument),
                    "include" => result.metadata.includes.push(argument),
                    "revision" => result.metadata.revisions.push(argument.to_string()),
                    "container" | "list" | "rpc" | "notification" => {
                        let kind = NodeKind::from_keyword(keyword).unwrap_or(NodeKind::Unknown);
                        let node = SchemaNode::new(kind, argument).with_line(line.line);
                        let index = alloc(&mut arena, &mut children, node);
                        if let Some(&parent) = stack.last() {
                            children[parent].push(index);
                        }
                        stack.push(index);
                    }
                    "leaf" | "leaf-list" => {
                        let kind = NodeKind::from_keyword(keyword).unwrap_or(NodeKind::Unknown);
                        let node = SchemaNode::new(kind, argument).with_line(line.line);
                        let index = alloc(&mut arena, &mut children, node);
                        if let Some(&parent) = stack.last() {
                            children[parent].push(index);
                        }
                    }
                    _ => {}
                }
            }

            depth += line.opens as i64 - line.closes as i64;

            // Closing braces pop insertion points, but the first pushed
            // module is never evicted. This bounds recovery from
            // unbalanced trailing braces.
            for _ in 0..line.closes {
                if stack.len() > 1 {
                    stack.pop();
                }
            }
        }

        if depth != 0 {
            let last_line = lines.last().map(|line| line.line).unwrap_or(1);
            result.push_diagnostic(Diagnostic::error(
                last_line,
                format!("Unmatched braces detected. Depth: {depth}"),
            ));
        }

        for &root in &roots {
            let node = materialize(&arena, &children, root);
            result.push_module(node);
        }

        if result.modules.is_empty() {
            result.push_diagnostic(Diagnostic::error(1, NO_MODULE_MESSAGE));
        }

        result
    }
}

/// Rebuild an owned subtree from the arena.
fn materialize(arena: &[SchemaNode], children: &[Vec<usize>], index: usize) -> SchemaNode {
    let mut node = arena[index].clone();
    node.children = children[index]
        .iter()
        .map(|&child| materialize(arena, children, child))
        .collect();
    node
}

/// Strip trailing statement delimiters and surrounding quotes from a
/// captured argument.
fn clean_argument(raw: &str) -> Option<SmolStr> {
    let trimmed = raw.trim_end_matches(['{', '}', ';']).trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| {
            trimmed
                .strip_prefix('\'')
                .and_then(|s| s.strip_suffix('\''))
        })
        .unwrap_or(trimmed);
    if unquoted.is_empty() {
        None
    } else {
        Some(SmolStr::new(unquoted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_argument_strips_quotes_and_delimiters() {
        assert_eq!(clean_argument("\"urn:x\";").as_deref(), Some("urn:x"));
        assert_eq!(clean_argument("system{").as_deref(), Some("system"));
        assert_eq!(clean_argument("'2024-01-01'").as_deref(), Some("2024-01-01"));
        assert_eq!(clean_argument(";"), None);
    }
}
