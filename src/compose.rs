use crate::{
    error::Result,
    function3d::{Function3D, Function3DInput, autowrap_function3d},
    types::{SharedFunction3D, Value, Vector},
    vector_function::VectorFunction3D,
};

/// A vector field built from three scalar fields, one per component.
///
/// ```text
/// evaluate(x, y, z) = ( fx(x, y, z), fy(x, y, z), fz(x, y, z) )
/// ```
///
/// The component types are independent, so constant and closure components can be mixed
/// while each one is still called without indirection. Use
/// [`from_inputs`](ScalarToVectorFunction3D::from_inputs) to auto-wrap raw numbers and
/// closures instead.
#[derive(Debug, Clone)]
pub struct ScalarToVectorFunction3D<X, Y, Z> {
    x: X,
    y: Y,
    z: Z,
}

impl<X: Function3D, Y: Function3D, Z: Function3D> ScalarToVectorFunction3D<X, Y, Z> {
    pub fn new(x: X, y: Y, z: Z) -> Self {
        Self { x, y, z }
    }

    /// The x-component field.
    pub fn x(&self) -> &X {
        &self.x
    }

    /// The y-component field.
    pub fn y(&self) -> &Y {
        &self.y
    }

    /// The z-component field.
    pub fn z(&self) -> &Z {
        &self.z
    }
}

impl ScalarToVectorFunction3D<SharedFunction3D, SharedFunction3D, SharedFunction3D> {
    /// Normalizes each component through [`autowrap_function3d`].
    ///
    /// Wrapping happens here, once; evaluation only calls the wrapped components.
    pub fn from_inputs(
        x: impl Into<Function3DInput>,
        y: impl Into<Function3DInput>,
        z: impl Into<Function3DInput>,
    ) -> Self {
        tracing::debug!("composing vector field from three scalar components");
        Self::new(
            autowrap_function3d(x),
            autowrap_function3d(y),
            autowrap_function3d(z),
        )
    }
}

impl<X: Function3D, Y: Function3D, Z: Function3D> VectorFunction3D
    for ScalarToVectorFunction3D<X, Y, Z>
{
    /// Components are evaluated x, then y, then z. The first failure aborts the evaluation.
    #[inline]
    fn evaluate(&self, x: Value, y: Value, z: Value) -> Result<Vector> {
        let vx = self.x.evaluate(x, y, z)?;
        let vy = self.y.evaluate(x, y, z)?;
        let vz = self.z.evaluate(x, y, z)?;
        Ok(Vector::new(vx, vy, vz))
    }
}
