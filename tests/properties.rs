use std::sync::Arc;

use proptest::prelude::*;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use vector_field3d::{
    Constant3D, ConstantVector3D, OpaqueCallableVectorFunction3D, ScalarToVectorFunction3D,
    VectorFunction3D, VectorFunction3DInput, autowrap_vectorfunction3d,
    error::FunctionError,
    function3d::{Function3D, Function3DInput, OpaqueCallableFunction3D},
    types::{SharedVectorFunction3D, Value, Vector},
};

fn coord() -> impl Strategy<Value = Value> {
    -1e300..1e300
}

fn vector() -> impl Strategy<Value = Vector> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vector::new(x, y, z))
}

proptest! {
    #[test]
    fn constant_field_is_position_independent(
        v in vector(),
        x in coord(),
        y in coord(),
        z in coord(),
    ) {
        let f = ConstantVector3D::new(v);
        prop_assert_eq!(f.evaluate(x, y, z).unwrap(), v);
    }

    #[test]
    fn autowrap_promotion_matches_direct_construction(
        v in vector(),
        x in coord(),
        y in coord(),
        z in coord(),
    ) {
        let wrapped = autowrap_vectorfunction3d(v);
        let direct = ConstantVector3D::new(v);
        prop_assert_eq!(wrapped.evaluate(x, y, z).unwrap(), v);
        prop_assert_eq!(wrapped.evaluate(x, y, z).unwrap(), direct.evaluate(x, y, z).unwrap());
    }

    #[test]
    fn composition_matches_componentwise_evaluation(
        c in coord(),
        x in coord(),
        y in coord(),
        z in coord(),
    ) {
        let fx = OpaqueCallableFunction3D::new(|x, y, _z| x * y);
        let fy = OpaqueCallableFunction3D::new(|_x, y, z| (y - z).abs());
        let fz = Constant3D::new(c);
        let f = ScalarToVectorFunction3D::new(fx.clone(), fy.clone(), fz);
        let expected = Vector::new(
            fx.evaluate(x, y, z).unwrap(),
            fy.evaluate(x, y, z).unwrap(),
            fz.evaluate(x, y, z).unwrap(),
        );
        prop_assert_eq!(f.evaluate(x, y, z).unwrap(), expected);
    }

    #[test]
    fn callable_results_and_errors_pass_through(x in coord(), y in coord(), z in coord()) {
        let g = |x: Value, y: Value, z: Value| {
            if x < 0. {
                Err(format!("x = {x} is negative"))
            } else {
                Ok(Vector::new(x, y * 0.5, -z))
            }
        };
        let f = OpaqueCallableVectorFunction3D::new(g);
        match (f.evaluate(x, y, z), g(x, y, z)) {
            (Ok(got), Ok(expected)) => prop_assert_eq!(got, expected),
            (Err(got), Err(expected)) => {
                prop_assert!(matches!(got, FunctionError::Callable(_)));
                prop_assert_eq!(got.to_string(), expected);
            }
            (got, expected) => prop_assert!(false, "{got:?} != {expected:?}"),
        }
    }
}

#[test]
fn constant_field_ignores_extreme_positions() {
    let v = Vector::new(0.5, 0.5, 0.5);
    let f = ConstantVector3D::new(v);
    assert_eq!(f.evaluate(1., 1., 6.).unwrap(), v);
    assert_eq!(f.evaluate(-1., 7e6, -1e300).unwrap(), v);
}

#[test]
fn autowrap_is_idempotent() {
    let fields: Vec<SharedVectorFunction3D> = vec![
        Arc::new(ConstantVector3D::new(Vector::x())),
        Arc::new(OpaqueCallableVectorFunction3D::new(|x, y, z| [x, y, z])),
        Arc::new(ScalarToVectorFunction3D::from_inputs(1.0_f64, 2.0_f64, 3.0_f64)),
    ];
    for f in fields {
        let again = autowrap_vectorfunction3d(f.clone());
        assert!(Arc::ptr_eq(&f, &again));
    }
}

#[test]
fn composition_of_constants() {
    let f = ScalarToVectorFunction3D::from_inputs(1.0_f64, 2.0_f64, 3.0_f64);
    assert_eq!(f.evaluate(3.5, 6.2, -2.2).unwrap(), Vector::new(1., 2., 3.));
}

#[test]
fn dispatcher_wraps_plain_callable() {
    let f = autowrap_vectorfunction3d(VectorFunction3DInput::callable(|_x, _y, _z| {
        Vector::new(1., 0., 0.)
    }));
    assert_eq!(f.evaluate(0., 1., 3.5).unwrap(), Vector::new(1., 0., 0.));
}

#[test]
fn callable_failure_reaches_the_caller() {
    let f = autowrap_vectorfunction3d(VectorFunction3DInput::callable(|x, _y, _z| {
        if x < 0. {
            Err(format!("negative x: {x}"))
        } else {
            Ok(Vector::new(x.sqrt(), 0., 0.))
        }
    }));
    assert_eq!(f.evaluate(4., 0., 0.).unwrap(), Vector::new(2., 0., 0.));

    let err = f.evaluate(-1., 0., 0.).unwrap_err();
    assert_eq!(err.to_string(), "negative x: -1");
}

#[test]
fn nested_fields_propagate_inner_failures_unchanged() {
    struct Unfinished;
    impl Function3D for Unfinished {}

    let component: Arc<dyn Function3D> = Arc::new(Unfinished);
    let inner = ScalarToVectorFunction3D::from_inputs(0.0_f64, component, 0.0_f64);
    let outer = autowrap_vectorfunction3d(VectorFunction3DInput::callable(move |x, y, z| {
        inner.evaluate(x, y, z)
    }));
    assert!(matches!(
        outer.evaluate(1., 2., 3.),
        Err(FunctionError::Unimplemented { .. })
    ));
}

#[test]
fn mixed_scalar_inputs() {
    let f = ScalarToVectorFunction3D::from_inputs(
        Constant3D::new(9.),
        Function3DInput::callable(|_x, _y, z| z * z),
        -1.0_f64,
    );
    assert_eq!(f.evaluate(0., 0., 3.).unwrap(), Vector::new(9., 9., -1.));
}

#[test]
fn shared_field_is_safe_to_sample_concurrently() {
    let field = autowrap_vectorfunction3d(VectorFunction3DInput::callable(|x, y, z| {
        Vector::new(y * z, x * z, x * y)
    }));

    let n = 64usize;
    let sums: Vec<Value> = (0..n)
        .into_par_iter()
        .map(|i| {
            let t = i as Value;
            let v = field.evaluate(t, 2. * t, 1.).unwrap();
            v.x + v.y + v.z
        })
        .collect();

    for (i, sum) in sums.iter().enumerate() {
        let t = i as Value;
        assert_eq!(*sum, 2. * t + t + 2. * t * t);
    }
}
