use std::{fmt, sync::Arc};

use crate::{
    error::{FunctionError, Result},
    types::{BoxError, Point, SharedFunction3D, Value},
};

/// A scalar field: maps `(x, y, z)` to a [`Value`].
///
/// Counterpart of [`VectorFunction3D`](crate::vector_function::VectorFunction3D), consumed by
/// [`ScalarToVectorFunction3D`](crate::compose::ScalarToVectorFunction3D) to build one vector
/// component per axis.
pub trait Function3D: Send + Sync {
    fn evaluate(&self, x: Value, y: Value, z: Value) -> Result<Value> {
        let _ = (x, y, z);
        Err(FunctionError::Unimplemented {
            type_name: std::any::type_name::<Self>(),
        })
    }

    /// Same as [`evaluate`](Function3D::evaluate), taking a [`Point`].
    #[inline]
    fn evaluate_at(&self, point: &Point) -> Result<Value> {
        self.evaluate(point.x, point.y, point.z)
    }
}

impl<T: Function3D + ?Sized> Function3D for Arc<T> {
    #[inline]
    fn evaluate(&self, x: Value, y: Value, z: Value) -> Result<Value> {
        (**self).evaluate(x, y, z)
    }
}

impl<T: Function3D + ?Sized> Function3D for Box<T> {
    #[inline]
    fn evaluate(&self, x: Value, y: Value, z: Value) -> Result<Value> {
        (**self).evaluate(x, y, z)
    }
}

impl<T: Function3D + ?Sized> Function3D for &T {
    #[inline]
    fn evaluate(&self, x: Value, y: Value, z: Value) -> Result<Value> {
        (**self).evaluate(x, y, z)
    }
}

/// A scalar field with the same value everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant3D {
    value: Value,
}

impl Constant3D {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> Value {
        self.value
    }
}

impl TryFrom<Option<Value>> for Constant3D {
    type Error = FunctionError;

    fn try_from(value: Option<Value>) -> Result<Self> {
        value.map(Self::new).ok_or_else(|| {
            FunctionError::InvalidArgument("a constant field needs a value".to_string())
        })
    }
}

impl Function3D for Constant3D {
    #[inline]
    fn evaluate(&self, _x: Value, _y: Value, _z: Value) -> Result<Value> {
        Ok(self.value)
    }
}

/// Results a scalar callable may return.
pub trait ScalarOutput {
    fn into_output(self) -> Result<Value>;
}

impl ScalarOutput for Value {
    #[inline]
    fn into_output(self) -> Result<Value> {
        Ok(self)
    }
}

impl<T: ScalarOutput, E: Into<BoxError>> ScalarOutput for core::result::Result<T, E> {
    #[inline]
    fn into_output(self) -> Result<Value> {
        self.map_err(|e| FunctionError::from(Into::<BoxError>::into(e)))?
            .into_output()
    }
}

type ScalarCallable = dyn Fn(Value, Value, Value) -> Result<Value> + Send + Sync;

/// Adapts an arbitrary `(x, y, z) -> scalar` closure.
///
/// Errors raised by the closure are passed through untouched.
#[derive(Clone)]
pub struct OpaqueCallableFunction3D {
    callable: Arc<ScalarCallable>,
}

impl OpaqueCallableFunction3D {
    pub fn new<F, R>(callable: F) -> Self
    where
        F: Fn(Value, Value, Value) -> R + Send + Sync + 'static,
        R: ScalarOutput,
    {
        Self {
            callable: Arc::new(move |x: Value, y: Value, z: Value| {
                callable(x, y, z).into_output()
            }),
        }
    }
}

impl fmt::Debug for OpaqueCallableFunction3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueCallableFunction3D")
            .field("callable", &"<callable>")
            .finish()
    }
}

impl Function3D for OpaqueCallableFunction3D {
    #[inline]
    fn evaluate(&self, x: Value, y: Value, z: Value) -> Result<Value> {
        (self.callable)(x, y, z)
    }
}

/// Anything that can stand in for a scalar field.
pub enum Function3DInput {
    Function(SharedFunction3D),
    Constant(Value),
    Callable(OpaqueCallableFunction3D),
}

impl Function3DInput {
    /// Wraps a closure. Nothing about it is checked until it is evaluated.
    pub fn callable<F, R>(callable: F) -> Self
    where
        F: Fn(Value, Value, Value) -> R + Send + Sync + 'static,
        R: ScalarOutput,
    {
        Function3DInput::Callable(OpaqueCallableFunction3D::new(callable))
    }
}

impl From<SharedFunction3D> for Function3DInput {
    fn from(function: SharedFunction3D) -> Self {
        Function3DInput::Function(function)
    }
}

impl From<Value> for Function3DInput {
    fn from(value: Value) -> Self {
        Function3DInput::Constant(value)
    }
}

impl From<OpaqueCallableFunction3D> for Function3DInput {
    fn from(function: OpaqueCallableFunction3D) -> Self {
        Function3DInput::Callable(function)
    }
}

/// Only the value is kept; the dispatcher builds a new [`Constant3D`] from it.
impl From<Constant3D> for Function3DInput {
    fn from(constant: Constant3D) -> Self {
        Function3DInput::Constant(constant.value())
    }
}

/// Normalizes any [`Function3DInput`] into a shared scalar field.
///
/// Already-shared functions come back as the same `Arc`.
pub fn autowrap_function3d(input: impl Into<Function3DInput>) -> SharedFunction3D {
    match input.into() {
        Function3DInput::Function(function) => function,
        Function3DInput::Constant(value) => {
            tracing::trace!(value, "wrapping constant as Constant3D");
            Arc::new(Constant3D::new(value))
        }
        Function3DInput::Callable(function) => {
            tracing::trace!("wrapping opaque scalar callable");
            Arc::new(function)
        }
    }
}
