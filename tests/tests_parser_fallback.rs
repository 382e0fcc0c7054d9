//! Fallback Parser Tests
//!
//! The line-oriented recovery parser: keyword matching, stack-based
//! parent attachment, brace depth validation, and metadata capture.

use rstest::rstest;
use yangtree::{FallbackParser, NodeKind, ParseResult, ParserKind, SchemaParser};

/// Helper to run the fallback parser with a fixed filename
fn parse(input: &str) -> ParseResult {
    FallbackParser.parse(input, "test.yang")
}

// ============================================================================
// Well-Formed Documents
// ============================================================================

#[test]
fn single_line_module_builds_full_tree() {
    let result = parse(
        "module m { namespace \"urn:x\"; prefix \"m\"; container c { leaf l { type string; } } }",
    );
    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.parser_used, ParserKind::Fallback);
    assert_eq!(result.modules.len(), 1);

    let module = &result.modules[0];
    assert_eq!(module.kind, NodeKind::Module);
    assert_eq!(module.name, "m");
    let container = module.find_child("c").expect("container c");
    assert_eq!(container.kind, NodeKind::Container);
    let leaf = container.find_child("l").expect("leaf l");
    assert_eq!(leaf.kind, NodeKind::Leaf);
    assert!(result.tree.contains_key("m"));
}

#[test]
fn multi_line_module_tracks_source_lines() {
    let result = parse(
        "module lines {\n\
         \x20 container sys {\n\
         \x20   leaf host { type string; }\n\
         \x20 }\n\
         }\n",
    );
    assert!(result.valid);
    let module = &result.modules[0];
    assert_eq!(module.line, Some(1));
    let container = module.find_child("sys").unwrap();
    assert_eq!(container.line, Some(2));
    assert_eq!(container.find_child("host").unwrap().line, Some(3));
}

#[rstest]
#[case("container", NodeKind::Container)]
#[case("list", NodeKind::List)]
#[case("rpc", NodeKind::Rpc)]
#[case("notification", NodeKind::Notification)]
fn scope_keywords_become_children(#[case] keyword: &str, #[case] kind: NodeKind) {
    let result = parse(&format!("module m {{ {keyword} x {{ }} }}"));
    assert!(result.valid);
    let child = result.modules[0].find_child("x").expect("child x");
    assert_eq!(child.kind, kind);
}

#[rstest]
#[case("leaf", NodeKind::Leaf)]
#[case("leaf-list", NodeKind::LeafList)]
fn leaf_keywords_do_not_open_scopes(#[case] keyword: &str, #[case] kind: NodeKind) {
    let result = parse(&format!(
        "module m {{ {keyword} a; {keyword} b; }}"
    ));
    assert!(result.valid);
    let module = &result.modules[0];
    assert_eq!(module.children.len(), 2);
    assert_eq!(module.children[0].kind, kind);
    assert_eq!(module.children[1].name, "b");
}

#[test]
fn submodule_is_a_valid_root() {
    let result = parse("submodule s { leaf x { type string; } }");
    assert!(result.valid);
    assert_eq!(result.modules[0].kind, NodeKind::Submodule);
}

#[test]
fn sibling_containers_attach_to_the_module() {
    let result = parse("module m {\ncontainer a {\n}\ncontainer b {\n}\n}\n");
    assert!(result.valid);
    let module = &result.modules[0];
    assert!(module.find_child("a").is_some());
    assert!(module.find_child("b").is_some());
}

// ============================================================================
// Malformed Documents
// ============================================================================

#[test]
fn missing_closing_braces_are_reported_with_depth() {
    let result = parse("container c { leaf l { type string; }");
    assert!(!result.valid);
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.message.contains("Unmatched braces") && e.message.contains("1"))
    );
}

#[rstest]
#[case("module m { container c {", 2)]
#[case("module m { } }", -1)]
fn net_depth_appears_in_the_message(#[case] input: &str, #[case] depth: i64) {
    let result = parse(input);
    assert!(!result.valid);
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.message == format!("Unmatched braces detected. Depth: {depth}"))
    );
}

#[test]
fn missing_module_declaration_is_reported_at_line_one() {
    let result = parse("container c { }");
    assert!(!result.valid);
    let error = result
        .errors
        .iter()
        .find(|e| e.message == "No module or submodule declaration found")
        .expect("missing-module diagnostic");
    assert_eq!(error.line, 1);
}

#[test]
fn empty_input_reports_missing_module() {
    let result = parse("");
    assert!(!result.valid);
    assert!(result.modules.is_empty());
    assert_eq!(
        result.errors[0].message,
        "No module or submodule declaration found"
    );
}

#[test]
fn partial_tree_survives_unbalanced_input() {
    let result = parse("module m {\ncontainer a {\nleaf x { type string; }\n");
    assert!(!result.valid);
    assert_eq!(result.modules.len(), 1);
    let container = result.modules[0].find_child("a").expect("container a");
    assert!(container.find_child("x").is_some());
}

#[test]
fn trailing_braces_never_evict_the_module() {
    let result = parse("module m {\n}\n}\n}\ncontainer late {\n}\n");
    // Extra closes leave depth negative, but "late" still attaches to m.
    assert!(!result.valid);
    assert!(result.modules[0].find_child("late").is_some());
}

// ============================================================================
// Metadata Capture
// ============================================================================

#[test]
fn imports_includes_and_revisions_are_collected_in_order() {
    let result = parse(
        "module m {\n\
         import alpha { prefix a; }\n\
         import beta { prefix b; }\n\
         import alpha { prefix a2; }\n\
         include sub-one;\n\
         revision 2024-06-01;\n\
         revision 2023-01-01;\n\
         }\n",
    );
    assert_eq!(result.metadata.imports, vec!["alpha", "beta", "alpha"]);
    assert_eq!(result.metadata.includes, vec!["sub-one"]);
    assert_eq!(result.metadata.revisions, vec!["2024-06-01", "2023-01-01"]);
    assert_eq!(result.metadata.filename, "test.yang");
}

// ============================================================================
// Idempotence
// ============================================================================

#[rstest]
#[case("module m { container c { leaf l { type string; } } }")]
#[case("container broken {")]
#[case("")]
fn parsing_twice_is_structurally_identical(#[case] input: &str) {
    assert_eq!(parse(input), parse(input));
}
