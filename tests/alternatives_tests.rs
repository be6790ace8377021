//! Alternation parsing through the public API

use segment_matcher::{extract_alternatives, Matcher, SyntaxError};

#[test]
fn test_alternatives_extractor() {
    let matcher = Matcher::new();
    assert_eq!(
        matcher.extract_alternatives("[name|alternate]").unwrap(),
        vec!["name", "alternate"]
    );
    assert_eq!(
        matcher
            .extract_alternatives("[name|alternate||last]")
            .unwrap(),
        vec!["name", "alternate", "last"]
    );
}

#[test]
fn test_fails_with_incomplete_syntax() {
    let err = extract_alternatives("[invalid|syntax").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::UnterminatedAlternation {
            token: "[invalid|syntax".into()
        }
    );
}

#[test]
fn test_fails_with_no_alternatives() {
    let err = extract_alternatives("[]").unwrap_err();
    assert!(matches!(err, SyntaxError::NoAlternatives { .. }));
}

#[test]
fn test_fails_with_empty_alternatives() {
    let err = extract_alternatives("[|]").unwrap_err();
    assert!(matches!(err, SyntaxError::EmptyAlternative { .. }));
    assert_eq!(err.token(), "[|]");
}

#[test]
fn test_wildcard_members_are_kept_verbatim() {
    assert_eq!(extract_alternatives("[a|*|?]").unwrap(), vec!["a", "*", "?"]);
}
