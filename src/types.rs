use std::sync::Arc;

use nalgebra::{Point3, Vector3};

use crate::{function3d::Function3D, vector_function::VectorFunction3D};

/// Real number used for coordinates and field components.
pub type Value = f64;

/// A 3D point with [`Value`] components.
pub type Point = Point3<Value>;

/// A 3D vector with [`Value`] components. This is the result type of every vector field.
pub type Vector = Vector3<Value>;

/// Error type carried by opaque callables.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A shared, type-erased vector field.
///
/// This is what [`autowrap_vectorfunction3d`](crate::autowrap::autowrap_vectorfunction3d) hands back.
pub type SharedVectorFunction3D = Arc<dyn VectorFunction3D>;

/// A shared, type-erased scalar field.
pub type SharedFunction3D = Arc<dyn Function3D>;
