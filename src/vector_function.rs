use std::{fmt, sync::Arc};

use crate::{
    error::{FunctionError, Result},
    types::{BoxError, Point, Value, Vector},
};

/// A vector field: maps `(x, y, z)` to a [`Vector`].
///
/// This is the one operation callers sample in their inner loops, so the trait carries a
/// single evaluation method and nothing else. Hold concrete variants directly to get static
/// dispatch, or a [`SharedVectorFunction3D`](crate::types::SharedVectorFunction3D) when the
/// field type is only known at runtime.
///
/// Implementors must override [`evaluate`](VectorFunction3D::evaluate). The provided body
/// only reports [`FunctionError::Unimplemented`]:
///
/// ```
/// use vector_field3d::{error::FunctionError, vector_function::VectorFunction3D};
///
/// struct Unfinished;
/// impl VectorFunction3D for Unfinished {}
///
/// assert!(matches!(
///     Unfinished.evaluate(0., 0., 0.),
///     Err(FunctionError::Unimplemented { .. })
/// ));
/// ```
///
/// Non-finite coordinates are not rejected; what a variant returns for them is up to the variant.
pub trait VectorFunction3D: Send + Sync {
    fn evaluate(&self, x: Value, y: Value, z: Value) -> Result<Vector> {
        let _ = (x, y, z);
        Err(FunctionError::Unimplemented {
            type_name: std::any::type_name::<Self>(),
        })
    }

    /// Call form taking a [`Point`]. Identical to [`evaluate`](VectorFunction3D::evaluate).
    #[inline]
    fn evaluate_at(&self, point: &Point) -> Result<Vector> {
        self.evaluate(point.x, point.y, point.z)
    }
}

impl<T: VectorFunction3D + ?Sized> VectorFunction3D for Arc<T> {
    #[inline]
    fn evaluate(&self, x: Value, y: Value, z: Value) -> Result<Vector> {
        (**self).evaluate(x, y, z)
    }
}

impl<T: VectorFunction3D + ?Sized> VectorFunction3D for Box<T> {
    #[inline]
    fn evaluate(&self, x: Value, y: Value, z: Value) -> Result<Vector> {
        (**self).evaluate(x, y, z)
    }
}

impl<T: VectorFunction3D + ?Sized> VectorFunction3D for &T {
    #[inline]
    fn evaluate(&self, x: Value, y: Value, z: Value) -> Result<Vector> {
        (**self).evaluate(x, y, z)
    }
}

/// A vector field with the same value everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantVector3D {
    value: Vector,
}

impl ConstantVector3D {
    pub fn new(value: Vector) -> Self {
        Self { value }
    }

    /// The vector returned for every position.
    pub fn value(&self) -> Vector {
        self.value
    }
}

impl TryFrom<Option<Vector>> for ConstantVector3D {
    type Error = FunctionError;

    fn try_from(value: Option<Vector>) -> Result<Self> {
        value.map(Self::new).ok_or_else(|| {
            FunctionError::InvalidArgument("a constant vector field needs a value".to_string())
        })
    }
}

impl TryFrom<&[Value]> for ConstantVector3D {
    type Error = FunctionError;

    fn try_from(components: &[Value]) -> Result<Self> {
        match components {
            [x, y, z] => Ok(Self::new(Vector::new(*x, *y, *z))),
            _ => Err(FunctionError::InvalidArgument(format!(
                "a constant vector field needs 3 components, got {}",
                components.len()
            ))),
        }
    }
}

impl VectorFunction3D for ConstantVector3D {
    #[inline]
    fn evaluate(&self, _x: Value, _y: Value, _z: Value) -> Result<Vector> {
        Ok(self.value)
    }
}

/// Vector-shaped values a callable may return.
///
/// A `Result` is unwrapped first; its error is surfaced through [`FunctionError::from`].
pub trait CallableOutput {
    fn into_output(self) -> Result<Vector>;
}

impl CallableOutput for Vector {
    #[inline]
    fn into_output(self) -> Result<Vector> {
        Ok(self)
    }
}

impl CallableOutput for [Value; 3] {
    #[inline]
    fn into_output(self) -> Result<Vector> {
        Ok(Vector::from(self))
    }
}

impl CallableOutput for (Value, Value, Value) {
    #[inline]
    fn into_output(self) -> Result<Vector> {
        Ok(Vector::new(self.0, self.1, self.2))
    }
}

impl<T: CallableOutput, E: Into<BoxError>> CallableOutput for core::result::Result<T, E> {
    #[inline]
    fn into_output(self) -> Result<Vector> {
        self.map_err(|e| FunctionError::from(Into::<BoxError>::into(e)))?
            .into_output()
    }
}

type VectorCallable = dyn Fn(Value, Value, Value) -> Result<Vector> + Send + Sync;

/// Adapts an arbitrary `(x, y, z) -> vector` closure.
///
/// The closure is taken as-is: it is assumed to be a pure mapping and is not inspected.
/// Whatever it fails with reaches the caller of [`evaluate`](VectorFunction3D::evaluate)
/// unchanged.
#[derive(Clone)]
pub struct OpaqueCallableVectorFunction3D {
    callable: Arc<VectorCallable>,
}

impl OpaqueCallableVectorFunction3D {
    pub fn new<F, R>(callable: F) -> Self
    where
        F: Fn(Value, Value, Value) -> R + Send + Sync + 'static,
        R: CallableOutput,
    {
        Self {
            callable: Arc::new(move |x: Value, y: Value, z: Value| {
                callable(x, y, z).into_output()
            }),
        }
    }
}

impl fmt::Debug for OpaqueCallableVectorFunction3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueCallableVectorFunction3D")
            .field("callable", &"<callable>")
            .finish()
    }
}

impl VectorFunction3D for OpaqueCallableVectorFunction3D {
    #[inline]
    fn evaluate(&self, x: Value, y: Value, z: Value) -> Result<Vector> {
        (self.callable)(x, y, z)
    }
}
