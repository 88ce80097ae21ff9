use std::sync::Arc;

use crate::{
    types::{SharedVectorFunction3D, Value, Vector},
    vector_function::{CallableOutput, ConstantVector3D, OpaqueCallableVectorFunction3D},
};

/// Anything accepted where a vector field is expected.
///
/// Variants are resolved by [`autowrap_vectorfunction3d`] in declaration order.
pub enum VectorFunction3DInput {
    /// Already a vector field. Passed through untouched.
    Function(SharedVectorFunction3D),
    /// A plain vector, promoted to a [`ConstantVector3D`].
    Vector(Vector),
    /// An opaque closure, shared as an [`OpaqueCallableVectorFunction3D`].
    Callable(OpaqueCallableVectorFunction3D),
}

impl VectorFunction3DInput {
    /// Wraps a closure.
    ///
    /// Nothing is checked here. A closure that fails, or returns something that is not a
    /// vector, only errors once it is evaluated.
    pub fn callable<F, R>(callable: F) -> Self
    where
        F: Fn(Value, Value, Value) -> R + Send + Sync + 'static,
        R: CallableOutput,
    {
        VectorFunction3DInput::Callable(OpaqueCallableVectorFunction3D::new(callable))
    }
}

impl From<SharedVectorFunction3D> for VectorFunction3DInput {
    fn from(function: SharedVectorFunction3D) -> Self {
        VectorFunction3DInput::Function(function)
    }
}

impl From<Vector> for VectorFunction3DInput {
    fn from(vector: Vector) -> Self {
        VectorFunction3DInput::Vector(vector)
    }
}

impl From<[Value; 3]> for VectorFunction3DInput {
    fn from(components: [Value; 3]) -> Self {
        VectorFunction3DInput::Vector(Vector::from(components))
    }
}

/// Only the vector is kept: the dispatcher builds a new [`ConstantVector3D`] from it rather
/// than reusing this one. Share the field as a [`SharedVectorFunction3D`] to keep it as-is.
impl From<ConstantVector3D> for VectorFunction3DInput {
    fn from(constant: ConstantVector3D) -> Self {
        VectorFunction3DInput::Vector(constant.value())
    }
}

impl From<OpaqueCallableVectorFunction3D> for VectorFunction3DInput {
    fn from(function: OpaqueCallableVectorFunction3D) -> Self {
        VectorFunction3DInput::Callable(function)
    }
}

/// Normalizes any [`VectorFunction3DInput`] into a shared vector field.
///
/// Resolution order:
/// 1. an existing [`SharedVectorFunction3D`] is returned as the same `Arc`, so wrapping twice
///    is a no-op
/// 2. a [`Vector`] becomes a [`ConstantVector3D`]
/// 3. a closure is used through its [`OpaqueCallableVectorFunction3D`] adapter
///
/// ```
/// use vector_field3d::{autowrap::*, types::Vector, vector_function::VectorFunction3D};
///
/// let field = autowrap_vectorfunction3d(VectorFunction3DInput::callable(|_x, _y, _z| {
///     Vector::new(1., 0., 0.)
/// }));
/// assert_eq!(field.evaluate(0., 1., 3.5).unwrap(), Vector::new(1., 0., 0.));
/// ```
pub fn autowrap_vectorfunction3d(
    input: impl Into<VectorFunction3DInput>,
) -> SharedVectorFunction3D {
    match input.into() {
        VectorFunction3DInput::Function(function) => function,
        VectorFunction3DInput::Vector(vector) => {
            tracing::trace!(
                x = vector.x,
                y = vector.y,
                z = vector.z,
                "wrapping vector as ConstantVector3D"
            );
            Arc::new(ConstantVector3D::new(vector))
        }
        VectorFunction3DInput::Callable(function) => {
            tracing::trace!("wrapping opaque vector callable");
            Arc::new(function)
        }
    }
}
