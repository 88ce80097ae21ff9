pub mod autowrap;
pub mod compose;
pub mod error;
pub mod function3d;
pub mod types;
pub mod vector_function;

pub use autowrap::{VectorFunction3DInput, autowrap_vectorfunction3d};
pub use compose::ScalarToVectorFunction3D;
pub use function3d::{Constant3D, Function3D, autowrap_function3d};
pub use vector_function::{ConstantVector3D, OpaqueCallableVectorFunction3D, VectorFunction3D};
