//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at_start(error_impl: ErrorImpl) -> Error {
    Error::new(error_impl, Position(0, Rc::new("test.lang".to_string())))
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Position(42, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parse_and_runtime_errors_are_distinguished() {
    assert!(at_start(ErrorImpl::UnexpectedEndOfInput).is_parse_error());
    assert!(at_start(ErrorImpl::ExpectedExplicitValue).is_parse_error());
    assert!(!at_start(ErrorImpl::DivisionByZero).is_parse_error());
    assert!(!at_start(ErrorImpl::VariableNotDeclared {
        variable: "x".to_string()
    })
    .is_parse_error());
}

#[test]
fn test_error_display() {
    assert_eq!(at_start(ErrorImpl::DivisionByZero).to_string(), "division by zero");
    assert_eq!(
        at_start(ErrorImpl::VariableNotDeclared {
            variable: "foo".to_string()
        })
        .to_string(),
        "undefined variable: foo"
    );
    assert_eq!(
        at_start(ErrorImpl::InvalidStringOperation {
            operator: "-".to_string()
        })
        .to_string(),
        "invalid operation for strings: -"
    );
}

#[test]
fn test_unknown_type_error() {
    let error = at_start(ErrorImpl::UnknownType {
        type_: "CustomType".to_string(),
    });

    assert_eq!(error.get_error_name(), "UnknownType");
    assert!(error.get_tip().to_string().contains("CustomType"));
}

#[test]
fn test_error_tip_none() {
    let error = at_start(ErrorImpl::UnrecognisedToken {
        token: "@".to_string(),
    });

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
