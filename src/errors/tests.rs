//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnknownToken { token: '@' }, Position::new(3, 7));

    assert_eq!(error.get_error_name(), "UnknownToken");
    assert_eq!(error.get_kind(), &ErrorImpl::UnknownToken { token: '@' });
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnterminatedComment, Position::new(42, 5));

    assert_eq!(error.get_position().line, 42);
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_error_names() {
    let cases = [
        (ErrorImpl::EofMisuse, "EofMisuse"),
        (ErrorImpl::UnterminatedComment, "UnterminatedComment"),
        (ErrorImpl::UnterminatedString { delimiter: '"' }, "UnterminatedString"),
        (
            ErrorImpl::UnsupportedFeature {
                feature: "Hex colors".to_string(),
            },
            "UnsupportedFeature",
        ),
        (ErrorImpl::UnknownToken { token: '~' }, "UnknownToken"),
    ];

    for (kind, name) in cases {
        assert_eq!(Error::new(kind, Position::null()).get_error_name(), name);
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::EofMisuse, Position::null());

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnknownToken { token: '~' }, Position::null());

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unknown token: `~`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(ErrorImpl::UnterminatedComment, Position::new(2, 9));

    assert_eq!(
        error.to_string(),
        "multi-line comment reaches end of input at line 2, column 9"
    );
}

#[test]
fn test_unsupported_feature_message() {
    let error = Error::new(
        ErrorImpl::UnsupportedFeature {
            feature: "Hex color literals".to_string(),
        },
        Position::new(1, 1),
    );

    assert_eq!(error.get_tip().to_string(), "Hex color literals are not supported");
}
