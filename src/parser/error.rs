use thiserror::Error;

use crate::lexer::LexError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected {expected}, got {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("Unknown class '{name}'")]
    UnknownClass { name: String },
    #[error("Unknown base class '{name}'")]
    UnknownBaseClass { name: String },
    #[error("The first parameter of method '{name}' must be 'self'")]
    MethodMissingSelf { name: String },
    #[error("'def' is only allowed inside a class body")]
    DefOutsideClass,
    #[error("Invalid assignment target")]
    InvalidAssignmentTarget,
    #[error("str() expects exactly 1 argument, got {found}")]
    StringifyArity { found: usize },
    #[error(transparent)]
    Lex(#[from] LexError),
}
