//! Parse Coordinator Tests
//!
//! Reconciliation between the grammar engine and the line-oriented
//! fallback: structure-found beats error-detail.

use rstest::rstest;
use yangtree::{ParseCoordinator, ParserKind, parse_document};

#[test]
fn well_formed_documents_use_the_primary_parser() {
    let result = parse_document(
        "module m { namespace \"urn:x\"; prefix m; container c { leaf l { type string; } } }",
        "m.yang",
    );
    assert!(result.valid);
    assert_eq!(result.parser_used, ParserKind::Primary);
    assert_eq!(result.modules.len(), 1);
}

#[test]
fn fallback_substitutes_when_engine_finds_no_roots() {
    // Unclosed module: the engine rejects outright, the fallback still
    // recovers the module skeleton.
    let result = parse_document("module m {\ncontainer c {\nleaf l { type string; }\n", "m.yang");
    assert_eq!(result.parser_used, ParserKind::Fallback);
    assert!(!result.valid);
    assert_eq!(result.modules.len(), 1);
    assert_eq!(result.modules[0].name, "m");
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.message.contains("Unmatched braces"))
    );
}

#[test]
fn primary_result_wins_when_neither_finds_structure() {
    let result = parse_document("@@@ garbage @@@", "junk.yang");
    assert!(!result.valid);
    assert_eq!(result.parser_used, ParserKind::Primary);
    assert!(result.modules.is_empty());
}

#[test]
fn empty_input_reports_missing_module() {
    let result = parse_document("", "empty.yang");
    assert!(!result.valid);
    assert!(result.modules.is_empty());
    assert_eq!(
        result.errors[0].message,
        "No module or submodule declaration found"
    );
}

#[rstest]
#[case("module m { container c { leaf l { type string; } } }", true)]
#[case("module m { container c {", false)]
#[case("", false)]
fn coordinator_never_fails(#[case] input: &str, #[case] valid: bool) {
    let coordinator = ParseCoordinator::new();
    let result = coordinator.parse_document(input, "any.yang");
    assert_eq!(result.valid, valid);
    assert_eq!(result.valid, result.errors.is_empty());
}

#[test]
fn substituted_result_keeps_fallback_metadata() {
    let result = parse_document(
        "module m {\nimport alpha { prefix a;\nimport beta { prefix b;\n",
        "m.yang",
    );
    assert_eq!(result.parser_used, ParserKind::Fallback);
    assert_eq!(result.metadata.imports, vec!["alpha", "beta"]);
}
