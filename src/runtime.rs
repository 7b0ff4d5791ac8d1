//! Runtime value model: tagged values, classes, instances and closures.

mod class;
mod context;
mod error;
mod value;

pub use class::{Class, ClassInstance, Method};
pub use context::Context;
pub use error::{ExecResult, RuntimeError};
pub use value::{Closure, Value};
