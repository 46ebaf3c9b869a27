//! Error handling tests for the dictionary parser.
//!
//! Verifies detection and reporting of:
//! - Unclosed delimiters (braces, parens, brackets)
//! - Missing statement terminators and unexpected EOF
//! - Malformed vector/dimension literals (wrong element count)
//! - Duplicate keys within one nesting level
//! - Missing header structure when parsing as a field file

use foamkit::parser::{parse_dictionary, parse_field_file, ParseError, ParseErrorKind};
use foamkit::{FoamError, SchemaError};

/// Helper to verify that parsing fails.
fn expect_error(source: &str) -> ParseError {
    match parse_dictionary(source) {
        Ok(dict) => panic!("expected parse error, got {:?}", dict),
        Err(e) => e,
    }
}

// =============================================================================
// Unclosed delimiters
// =============================================================================

#[test]
fn test_unclosed_brace() {
    let e = expect_error("boundaryField\n{\n    inlet\n    {\n        type slip;\n    }\n");
    assert_eq!(e.kind, ParseErrorKind::UnexpectedEof);
}

#[test]
fn test_unclosed_paren() {
    let e = expect_error("value uniform (0 0 0;\n");
    assert!(
        e.kind == ParseErrorKind::UnexpectedEof || e.kind == ParseErrorKind::UnexpectedToken,
        "got {:?}",
        e
    );
}

#[test]
fn test_unclosed_bracket() {
    let e = expect_error("dimensions [0 1 -1 0 0 0 0;\n");
    assert_eq!(e.kind, ParseErrorKind::UnexpectedToken);
}

#[test]
fn test_stray_closing_brace() {
    let e = expect_error("}\n");
    assert_eq!(e.kind, ParseErrorKind::UnexpectedToken);
    assert_eq!(e.line, 1);
}

// =============================================================================
// Missing terminators and EOF
// =============================================================================

#[test]
fn test_missing_semicolon() {
    let e = expect_error("setFormat raw\nsurfaceFormat vtk;\n");
    assert_eq!(e.kind, ParseErrorKind::UnexpectedToken);
    assert!(e.message.contains("';'"), "got: {}", e.message);
}

#[test]
fn test_eof_after_key() {
    let e = expect_error("internalField");
    assert_eq!(e.kind, ParseErrorKind::UnexpectedEof);
}

#[test]
fn test_eof_inside_vector() {
    let e = expect_error("value (0 0");
    assert_eq!(e.kind, ParseErrorKind::UnexpectedEof);
    assert!(e.message.contains("')'"), "got: {}", e.message);
}

// =============================================================================
// Malformed literals
// =============================================================================

#[test]
fn test_two_element_vector_rejected() {
    let e = expect_error("start (0.02 0);\n");
    assert_eq!(e.kind, ParseErrorKind::MalformedLiteral);
    assert!(e.message.contains("2 components"), "got: {}", e.message);
}

#[test]
fn test_four_element_vector_rejected() {
    let e = expect_error("start (1 2 3 4);\n");
    assert_eq!(e.kind, ParseErrorKind::MalformedLiteral);
    assert!(e.message.contains("4 components"), "got: {}", e.message);
}

#[test]
fn test_short_dimension_set_rejected() {
    let e = expect_error("dimensions [0 2 -2 0 0 0];\n");
    assert_eq!(e.kind, ParseErrorKind::MalformedLiteral);
    assert!(e.message.contains("expected 7"), "got: {}", e.message);
}

#[test]
fn test_long_dimension_set_rejected() {
    let e = expect_error("dimensions [0 2 -2 0 0 0 0 0];\n");
    assert_eq!(e.kind, ParseErrorKind::MalformedLiteral);
}

#[test]
fn test_word_inside_dimension_set_rejected() {
    let e = expect_error("dimensions [0 2 m 0 0 0 0];\n");
    assert_eq!(e.kind, ParseErrorKind::UnexpectedToken);
}

#[test]
fn test_unlexable_character() {
    let e = expect_error("type @wall;\n");
    assert_eq!(e.kind, ParseErrorKind::InvalidToken);
    assert_eq!(e.line, 1);
}

// =============================================================================
// Duplicate keys
// =============================================================================

#[test]
fn test_duplicate_key_rejected() {
    let e = expect_error("setFormat raw;\nsetFormat vtk;\n");
    assert_eq!(e.kind, ParseErrorKind::DuplicateKey);
    assert_eq!(e.line, 2);
    assert!(e.message.contains("setFormat"), "got: {}", e.message);
}

#[test]
fn test_duplicate_key_in_nested_block() {
    let e = expect_error("inlet\n{\n    type slip;\n    type wedge;\n}\n");
    assert_eq!(e.kind, ParseErrorKind::DuplicateKey);
    assert_eq!(e.line, 4);
}

#[test]
fn test_same_key_at_different_levels_is_fine() {
    // `type` in two sibling patches is not a duplicate
    let dict = parse_dictionary(
        "boundaryField\n{\n    inlet { type slip; }\n    outlet { type wedge; }\n}\n",
    )
    .expect("sibling blocks may repeat keys");
    let boundary = dict.dict("boundaryField").unwrap();
    assert_eq!(boundary.len(), 2);
}

// =============================================================================
// Header schema
// =============================================================================

#[test]
fn test_field_file_without_header() {
    let err = parse_field_file("dimensions [0 1 -1 0 0 0 0];\n").unwrap_err();
    assert!(matches!(
        err,
        FoamError::Schema(SchemaError::MissingHeader(ref key)) if key == "FoamFile"
    ));
}

#[test]
fn test_field_file_with_incomplete_header() {
    let source = "FoamFile\n{\n    version 2.0;\n    format ascii;\n    object U;\n}\n";
    let err = parse_field_file(source).unwrap_err();
    assert!(matches!(
        err,
        FoamError::Schema(SchemaError::MissingHeader(ref key)) if key == "class"
    ));
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn test_empty_source() {
    let dict = parse_dictionary("").expect("empty source is an empty dictionary");
    assert!(dict.is_empty());
}

#[test]
fn test_only_comments() {
    let source = "// line comment\n/* block\n   comment */\n";
    let dict = parse_dictionary(source).expect("comment-only source is empty");
    assert!(dict.is_empty());
}

#[test]
fn test_error_location_is_one_based() {
    let e = expect_error("a 1;\nb 2;\nc ;\n");
    assert_eq!(e.line, 3);
    assert!(e.column >= 1);
}
