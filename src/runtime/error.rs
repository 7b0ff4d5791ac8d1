use thiserror::Error;

/// Typed errors raised while executing a program.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("Undefined name '{name}'")]
    UndefinedName { name: String },
    #[error("Undefined field '{field}'")]
    UndefinedField { field: String },
    #[error("Cannot access field '{field}' on a value of type {type_name}")]
    FieldAccessOnNonInstance {
        field: String,
        type_name: &'static str,
    },
    #[error("Cannot call method '{method}' on a value of type {type_name}")]
    MethodCallOnNonInstance {
        method: String,
        type_name: &'static str,
    },
    #[error("Unknown method '{method}' for class '{class}'")]
    UnknownMethod { method: String, class: String },
    #[error("Method '{method}' expected {expected} arguments, got {found}")]
    MethodArityMismatch {
        method: String,
        expected: usize,
        found: usize,
    },
    #[error("Unsupported operand types for '{operation}': {lhs} and {rhs}")]
    UnsupportedOperands {
        operation: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },
    #[error("Operand of '{operation}' must be a Bool, got {got}")]
    OperandMustBeBool {
        operation: &'static str,
        got: &'static str,
    },
    #[error("Method '{method}' must return a Bool, got {got}")]
    MethodMustReturnBool {
        method: &'static str,
        got: &'static str,
    },
    #[error("Condition of 'if' must be a Bool, got {got}")]
    ConditionMustBeBool { got: &'static str },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("'return' outside of a method body")]
    ReturnOutsideMethod,
    #[error("Failed to write output: {message}")]
    OutputWrite { message: String },
}

pub type ExecResult<T> = Result<T, RuntimeError>;
