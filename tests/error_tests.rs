//! Decoder failures: each malformed document maps to one error kind and
//! points at the line (and, for token errors, the column) that caused it.

use serde::Deserialize;
use toon_codec::{decode, from_str, Error, ErrorKind};

fn fail(input: &str) -> Error {
    match decode(input) {
        Ok(value) => panic!("expected an error for {:?}, decoded {:?}", input, value),
        Err(err) => err,
    }
}

#[test]
fn test_malformed_scalar_points_at_token() {
    let err = fail("name: \"open");
    assert!(
        matches!(err, Error::MalformedScalar { line: 1, col: 7, .. }),
        "{:?}",
        err
    );

    let err = fail("a: 1\nb: \"\\x\"");
    assert_eq!(err.kind(), ErrorKind::MalformedScalar);
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_invalid_header_points_at_token() {
    let err = fail("rows: [x]: 1");
    assert!(
        matches!(err, Error::InvalidHeader { line: 1, col: 8, .. }),
        "{:?}",
        err
    );

    assert_eq!(fail("rows: [2]{a,}:\n  1,2\n  3,4").kind(), ErrorKind::InvalidHeader);
    assert_eq!(fail("rows: [2]{a b:\n  1").kind(), ErrorKind::InvalidHeader);
}

#[test]
fn test_row_width_mismatch() {
    let err = fail("users: [2]{id,name}:\n  1,Alice\n  2,Bob,extra");
    assert_eq!(
        err,
        Error::HeaderMismatch {
            line: 3,
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn test_row_count_mismatch_reports_header_line() {
    let err = fail("a: 1\nusers: [3]{id}:\n  1\n  2\nb: 2");
    assert_eq!(
        err,
        Error::RowCountMismatch {
            line: 2,
            declared: 3,
            found: 2
        }
    );

    let err = fail("tags: [2]: a,b,c");
    assert_eq!(err.kind(), ErrorKind::RowCountMismatch);
}

#[test]
fn test_unterminated_blocks() {
    let err = fail("a: 1\nuser:");
    assert_eq!(err.kind(), ErrorKind::UnterminatedBlock);
    assert_eq!(err.line(), Some(2));

    assert_eq!(fail("users: [2]{id}:").kind(), ErrorKind::UnterminatedBlock);
    assert_eq!(fail("-").kind(), ErrorKind::UnterminatedBlock);
}

#[test]
fn test_indentation_errors() {
    let err = fail("user:\n  name: Alice\n   age: 3");
    assert_eq!(
        err,
        Error::UnexpectedIndent {
            line: 3,
            expected: 2,
            found: 3,
            context: "   age: 3".to_string()
        }
    );

    assert_eq!(fail("a: 1\n    b: 2").kind(), ErrorKind::UnexpectedIndent);
    assert_eq!(fail("a:\n\tb: 1").kind(), ErrorKind::UnexpectedIndent);
}

#[test]
fn test_structural_errors() {
    assert_eq!(fail("a: 1\nstray").kind(), ErrorKind::Syntax);
    assert_eq!(fail("- 1\n- 2\nkey: v").kind(), ErrorKind::Syntax);
    assert_eq!(fail("[2]:\n  - 1\n  two: 2").kind(), ErrorKind::Syntax);

    let err = fail("x: 1\ny: 2\nx: 3");
    assert_eq!(err, Error::duplicate_key(3, "x"));
}

#[test]
fn test_error_messages() {
    let err = fail("[3]{a,b}:\n  1,2\n  3,4");
    assert_eq!(
        err.to_string(),
        "Row count mismatch for header at line 1: declared 3, found 2"
    );

    let err = fail("x: 1\nx: 2");
    assert_eq!(err.to_string(), "Duplicate key 'x' at line 2");
}

#[test]
fn test_type_errors_are_custom() {
    #[derive(Deserialize, Debug)]
    #[allow(dead_code)]
    struct Point {
        x: i32,
        y: i32,
    }

    let err = from_str::<Point>("x: 1\ny: high").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Custom);
    assert_eq!(err.line(), None);

    let err = from_str::<Point>("x: 1\ny: \"open").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedScalar);
}
