use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::EofMisuse => "EofMisuse",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnsupportedFeature { .. } => "UnsupportedFeature",
            ErrorImpl::UnknownToken { .. } => "UnknownToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::EofMisuse => ErrorTip::None,
            ErrorImpl::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "Multi-line comment reaches end of input, did you forget `*/`?",
            )),
            ErrorImpl::UnterminatedString { delimiter } => ErrorTip::Suggestion(format!(
                "String literal reaches end of input, expected a closing `{}`",
                delimiter
            )),
            ErrorImpl::UnsupportedFeature { feature } => {
                ErrorTip::Suggestion(format!("{} are not supported", feature))
            }
            ErrorImpl::UnknownToken { token } => {
                ErrorTip::Suggestion(format!("Unknown token: `{}`", token.escape_default()))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.internal_error, self.position.line, self.position.column
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("reached end of input twice (lexer crash)")]
    EofMisuse,
    #[error("multi-line comment reaches end of input")]
    UnterminatedComment,
    #[error("string literal delimited by {delimiter:?} reaches end of input")]
    UnterminatedString { delimiter: char },
    #[error("unsupported feature: {feature}")]
    UnsupportedFeature { feature: String },
    #[error("unknown token: {token:?}")]
    UnknownToken { token: char },
}
