use std::sync::Arc;

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use vector_field3d::{
    ScalarToVectorFunction3D, VectorFunction3D, VectorFunction3DInput, autowrap_vectorfunction3d,
    error::Result,
    function3d::Function3DInput,
    types::{SharedVectorFunction3D, Value, Vector},
};

const RESOLUTION: usize = 16;
const SCALE: Value = 0.25;

fn main() -> Result<()> {
    env_logger::init();

    let components: SharedVectorFunction3D = Arc::new(ScalarToVectorFunction3D::from_inputs(
        Function3DInput::callable(|x, _y, _z| x.sin()),
        1.0_f64,
        Function3DInput::callable(|_x, _y, z| -z),
    ));

    let fields: Vec<(&str, SharedVectorFunction3D)> = vec![
        ("uniform", autowrap_vectorfunction3d(Vector::new(0.5, 0.5, 0.5))),
        (
            "swirl",
            autowrap_vectorfunction3d(VectorFunction3DInput::callable(|x, y, _z| {
                Vector::new(-y, x, 0.)
            })),
        ),
        ("components", components),
    ];

    for (name, field) in &fields {
        let mean = mean_magnitude(field)?;
        log::info!("{name}: mean |F| = {mean:.4}");
        println!("{name:>10}: mean |F| over {RESOLUTION}^3 grid = {mean:.4}");
    }
    Ok(())
}

/// Samples `field` at every grid corner, one X slice per rayon task.
fn mean_magnitude(field: &SharedVectorFunction3D) -> Result<Value> {
    let per_x: Vec<Value> = (0..=RESOLUTION)
        .into_par_iter()
        .map(|x| -> Result<Value> {
            let mut total = 0.;
            for y in 0..=RESOLUTION {
                for z in 0..=RESOLUTION {
                    let v = field.evaluate(
                        x as Value * SCALE,
                        y as Value * SCALE,
                        z as Value * SCALE,
                    )?;
                    total += v.norm();
                }
            }
            Ok(total)
        })
        .collect::<Result<_>>()?;

    let samples = (RESOLUTION + 1).pow(3) as Value;
    Ok(per_x.iter().sum::<Value>() / samples)
}
