//! Logos-based structural scanner.
//!
//! Splits raw document text into logical lines and tracks brace nesting.
//! A logical line ends at `;`, `{`, `}`, or a physical newline, so a
//! whole module written on one physical line still yields one logical
//! line per statement. Braces inside string literals and comments are
//! trivia here and never count toward nesting depth.

use logos::Logos;

use crate::base::LineIndex;

/// Structural tokens of a YANG document
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r#""([^"\\]|\\.)*""#)]
    DoubleString,

    #[regex(r"'[^']*'")]
    SingleString,

    // =========================================================================
    // STRUCTURE
    // =========================================================================
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token(";")]
    Semicolon,

    #[token("/")]
    Slash,

    /// Keywords, identifiers, dates, unquoted arguments
    #[regex(r#"[^ \t\r\n{};'"/]+"#)]
    Word,
}

/// One logical line of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Normalized text (single spaces between tokens, trailing delimiter kept)
    pub text: String,
    /// 1-based physical line of the first token
    pub line: usize,
    /// Count of `{` on this logical line (outside strings/comments)
    pub opens: usize,
    /// Count of `}` on this logical line
    pub closes: usize,
}

/// Scan `content` into logical lines.
///
/// Never fails: characters the lexer cannot classify are carried through
/// as plain text so malformed documents still produce scannable lines.
pub fn logical_lines(content: &str) -> Vec<LogicalLine> {
    let index = LineIndex::new(content);
    let mut lines = Vec::new();
    let mut lexer = Token::lexer(content);

    let mut text = String::new();
    let mut start_line = 0usize;
    let mut opens = 0usize;
    let mut closes = 0usize;

    let mut flush = |text: &mut String, start_line: &mut usize, opens: &mut usize, closes: &mut usize| {
        if !text.trim().is_empty() {
            lines.push(LogicalLine {
                text: std::mem::take(text),
                line: *start_line,
                opens: *opens,
                closes: *closes,
            });
        } else {
            text.clear();
        }
        *start_line = 0;
        *opens = 0;
        *closes = 0;
    };

    while let Some(token) = lexer.next() {
        let slice = lexer.slice();
        // Pin the line on the first non-trivia token of the buffer, so a
        // multi-line block comment never skews positions.
        if start_line == 0
            && !matches!(
                token,
                Ok(Token::Whitespace)
                    | Ok(Token::Newline)
                    | Ok(Token::LineComment)
                    | Ok(Token::BlockComment)
            )
        {
            start_line = index.line_of(lexer.span().start);
        }
        match token {
            Ok(Token::Whitespace) => {
                if !text.is_empty() && !text.ends_with(' ') {
                    text.push(' ');
                }
            }
            Ok(Token::Newline) => flush(&mut text, &mut start_line, &mut opens, &mut closes),
            Ok(Token::LineComment) | Ok(Token::BlockComment) => {}
            Ok(Token::LBrace) => {
                opens += 1;
                text.push('{');
                flush(&mut text, &mut start_line, &mut opens, &mut closes);
            }
            Ok(Token::RBrace) => {
                closes += 1;
                text.push('}');
                flush(&mut text, &mut start_line, &mut opens, &mut closes);
            }
            Ok(Token::Semicolon) => {
                text.push(';');
                flush(&mut text, &mut start_line, &mut opens, &mut closes);
            }
            Ok(Token::DoubleString)
            | Ok(Token::SingleString)
            | Ok(Token::Slash)
            | Ok(Token::Word)
            | Err(()) => text.push_str(slice),
        }
    }
    flush(&mut text, &mut start_line, &mut opens, &mut closes);

    lines
}

/// Net brace depth of the whole document (outside strings/comments).
pub fn brace_depth(lines: &[LogicalLine]) -> i64 {
    lines
        .iter()
        .map(|line| line.opens as i64 - line.closes as i64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(content: &str) -> Vec<String> {
        logical_lines(content).into_iter().map(|l| l.text).collect()
    }

    #[test]
    fn splits_single_physical_line_into_statements() {
        let lines = texts("module m { leaf l { type string; } }");
        assert_eq!(
            lines,
            vec!["module m {", "leaf l {", "type string;", "}", "}"]
        );
    }

    #[test]
    fn tracks_physical_line_numbers() {
        let lines = logical_lines("module m {\n  container c {\n  }\n}\n");
        assert_eq!(lines[0].line, 1);
        assert_eq!(lines[1].line, 2);
        assert_eq!(lines[2].line, 3);
        assert_eq!(lines[3].line, 4);
    }

    #[test]
    fn braces_inside_strings_do_not_nest() {
        let lines = logical_lines(r#"pattern "[a-z]{1,3}";"#);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].opens, 0);
        assert_eq!(lines[0].closes, 0);
        assert_eq!(brace_depth(&lines), 0);
    }

    #[test]
    fn comments_are_dropped() {
        let lines = texts("// header\nmodule m { /* opening { */ }\n");
        assert_eq!(lines, vec!["module m {", "}"]);
    }

    #[test]
    fn net_depth_reflects_unbalanced_braces() {
        let lines = logical_lines("container c { leaf l {");
        assert_eq!(brace_depth(&lines), 2);
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(logical_lines("").is_empty());
        assert!(logical_lines("  \n\t\n").is_empty());
    }
}
