//! The pest grammar engine behind the primary parser.
//!
//! The grammar itself lives in `yang.pest` and stays a black box: the
//! rest of the crate only sees [`YangGrammar::parse`] and the
//! [`EngineError`] it may produce.

use pest::error::LineColLocation;
use pest_derive::Parser;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "parser/yang.pest"]
pub struct YangGrammar;

/// Errors surfaced by the grammar engine.
///
/// Converted into a single diagnostic by the primary parser; never
/// escapes the public parse contract.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine rejected the document outright.
    #[error("{}", .0.variant.message())]
    Grammar(#[from] Box<pest::error::Error<Rule>>),

    /// The engine accepted the document but produced no output.
    #[error("grammar engine produced no parse output")]
    EmptyParse,
}

impl EngineError {
    /// 1-based line the error points at, or 1 when the engine gives none.
    pub fn line(&self) -> usize {
        match self {
            Self::Grammar(error) => match error.line_col {
                LineColLocation::Pos((line, _)) => line,
                LineColLocation::Span((line, _), _) => line,
            },
            Self::EmptyParse => 1,
        }
    }
}
