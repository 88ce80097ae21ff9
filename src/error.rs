use derive_more::Display;

use crate::types::BoxError;

pub type Result<T> = core::result::Result<T, FunctionError>;

#[derive(Debug, Display)]
pub enum FunctionError {
    /// `evaluate` was called on a type that never overrode it.
    #[display("{type_name} does not implement evaluate()")]
    Unimplemented { type_name: &'static str },
    /// A required construction argument was missing or malformed.
    #[display("invalid argument: {_0}")]
    InvalidArgument(String),
    /// Failure raised by a user-supplied callable. Displays exactly as the original error.
    #[display("{_0}")]
    Callable(BoxError),
}

impl FunctionError {
    /// Returns the error raised by a wrapped callable, if this is one.
    pub fn callable_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            FunctionError::Callable(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

impl std::error::Error for FunctionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FunctionError::Callable(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

impl From<BoxError> for FunctionError {
    /// A callable that forwards a [`FunctionError`] (e.g. via `?` on another field)
    /// gets it back unchanged instead of nested one level deeper.
    fn from(error: BoxError) -> Self {
        match error.downcast::<FunctionError>() {
            Ok(inner) => *inner,
            Err(other) => FunctionError::Callable(other),
        }
    }
}
