use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Odd indentation of {spaces} spaces at position {position}")]
    OddIndentation { spaces: usize, position: usize },
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("Expected '=' after '!' at position {position}")]
    IncompleteNotEqual { position: usize },
    #[error("Unrecognized escape sequence '\\{character}' at position {position}")]
    UnrecognizedEscape { character: char, position: usize },
    #[error("Unterminated string literal at position {position}")]
    UnterminatedString { position: usize },
    #[error("Invalid integer literal '{literal}' at position {position}")]
    InvalidIntegerLiteral { literal: String, position: usize },
}

pub type LexResult<T> = Result<T, LexError>;
