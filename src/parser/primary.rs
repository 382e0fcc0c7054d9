//! Adapter over the pest grammar engine.
//!
//! The engine yields a generic statement tree; everything here is the
//! normalization pass that turns it into the shared [`SchemaNode`]
//! model. Engine rejections become a single diagnostic carrying the
//! engine's message, so the public contract stays total.

use pest::Parser;
use pest::iterators::Pair;
use smol_str::SmolStr;

use super::SchemaParser;
use super::fallback::NO_MODULE_MESSAGE;
use super::grammar::{EngineError, Rule, YangGrammar};
use super::metadata::MetadataExtractor;
use crate::syntax::{Diagnostic, NodeKind, ParseResult, ParserKind, SchemaNode};

/// One raw statement as produced by the grammar engine, before any
/// keyword semantics are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub keyword: SmolStr,
    pub argument: Option<String>,
    /// 1-based source line of the keyword
    pub line: usize,
    pub children: Vec<Statement>,
}

impl Statement {
    /// First child with the given keyword.
    pub fn find(&self, keyword: &str) -> Option<&Statement> {
        self.children.iter().find(|child| child.keyword == keyword)
    }
}

/// The grammar-engine-backed parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrimaryParser;

impl SchemaParser for PrimaryParser {
    fn parse(&self, content: &str, filename: &str) -> ParseResult {
        let mut result = ParseResult::new(filename, ParserKind::Primary);

        let statements = match parse_statements(content) {
            Ok(statements) => statements,
            Err(error) => {
                tracing::debug!(file = filename, "grammar engine rejected document");
                result.push_diagnostic(Diagnostic::error(error.line(), error.to_string()));
                return result;
            }
        };

        let roots: Vec<&Statement> = statements
            .iter()
            .filter(|stmt| matches!(stmt.keyword.as_str(), "module" | "submodule"))
            .collect();

        result.metadata = MetadataExtractor::extract(filename, &roots);
        for root in roots {
            result.push_module(normalize(root));
        }

        if result.modules.is_empty() {
            result.push_diagnostic(Diagnostic::error(1, NO_MODULE_MESSAGE));
        }

        result
    }
}

/// Run the engine and lift its pairs into the raw statement tree.
pub fn parse_statements(content: &str) -> Result<Vec<Statement>, EngineError> {
    let file = YangGrammar::parse(Rule::file, content)
        .map_err(Box::new)?
        .next()
        .ok_or(EngineError::EmptyParse)?;
    Ok(file
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::statement)
        .map(build_statement)
        .collect())
}

fn build_statement(pair: Pair<'_, Rule>) -> Statement {
    let (line, _) = pair.as_span().start_pos().line_col();
    let mut keyword = SmolStr::default();
    let mut argument = None;
    let mut children = Vec::new();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::keyword => keyword = SmolStr::new(inner.as_str()),
            Rule::argument => argument = Some(argument_text(inner)),
            Rule::block => children.extend(
                inner
                    .into_inner()
                    .filter(|child| child.as_rule() == Rule::statement)
                    .map(build_statement),
            ),
            _ => {}
        }
    }

    Statement {
        keyword,
        argument,
        line,
        children,
    }
}

/// Resolve an argument pair to its text, joining `+`-concatenated
/// string literals and applying escape sequences.
fn argument_text(pair: Pair<'_, Rule>) -> String {
    let Some(inner) = pair.into_inner().next() else {
        return String::new();
    };
    match inner.as_rule() {
        Rule::unquoted_arg => inner.as_str().to_string(),
        Rule::string_arg => inner
            .into_inner()
            .filter(|piece| piece.as_rule() == Rule::quoted)
            .map(|piece| unquote(piece.as_str()))
            .collect(),
        _ => inner.as_str().to_string(),
    }
}

/// Strip surrounding quotes and resolve backslash escapes in
/// double-quoted literals; single-quoted literals are taken verbatim.
fn unquote(literal: &str) -> String {
    if let Some(body) = literal
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
    {
        return body.to_string();
    }
    let Some(body) = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
    else {
        return literal.to_string();
    };
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Schema-node keywords that recurse into child nodes. `input`, `output`,
/// `case`, `anyxml`, and `anydata` have no dedicated kind and map to
/// [`NodeKind::Unknown`].
fn is_data_keyword(keyword: &str) -> bool {
    NodeKind::from_keyword(keyword)
        .map(|kind| !matches!(kind, NodeKind::Module | NodeKind::Submodule))
        .unwrap_or(false)
        || matches!(keyword, "case" | "input" | "output" | "anyxml" | "anydata")
}

/// Map one raw statement into a schema node, absorbing attribute
/// substatements and recursing into child data nodes.
fn normalize(stmt: &Statement) -> SchemaNode {
    let kind = NodeKind::from_keyword(&stmt.keyword).unwrap_or(NodeKind::Unknown);
    let name = stmt
        .argument
        .clone()
        .unwrap_or_else(|| stmt.keyword.to_string());
    let mut node = SchemaNode::new(kind, name).with_line(stmt.line);

    for child in &stmt.children {
        match child.keyword.as_str() {
            "description" => node.description = child.argument.clone(),
            "mandatory" => node.mandatory = matches!(child.argument.as_deref(), Some("true")),
            "config" => node.config = !matches!(child.argument.as_deref(), Some("false")),
            "type" => {
                node.properties.type_name = child.argument.as_deref().map(SmolStr::new);
                for constraint in &child.children {
                    match constraint.keyword.as_str() {
                        "range" => node.properties.range = constraint.argument.clone(),
                        "length" => node.properties.length = constraint.argument.clone(),
                        "pattern" => node.properties.pattern = constraint.argument.clone(),
                        _ => {}
                    }
                }
            }
            "default" => node.properties.default = child.argument.clone(),
            "units" => node.properties.units = child.argument.clone(),
            "status" => node.properties.status = child.argument.clone(),
            keyword if is_data_keyword(keyword) => node.children.push(normalize(child)),
            _ => {}
        }
    }

    node
}
