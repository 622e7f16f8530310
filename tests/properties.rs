use approx::assert_relative_eq;
use fixed_linalg::*;
use itertools::{iproduct, Itertools};

const SEED: u64 = 0x5eed_1a19_c0ff_ee00;

fn init_logger() {
    env_logger::builder()
        .is_test(true)
        .filter_module("fixed_linalg", log::LevelFilter::Trace)
        .try_init()
        .ok();
}

fn random_vec<const N: usize>(rng: &mut fastrand::Rng) -> Vector<f64, N> {
    Vector::from_fn(|_| rng.f64() * 20.0 - 10.0)
}

fn random_ivec<const N: usize>(rng: &mut fastrand::Rng) -> Vector<i32, N> {
    Vector::from_fn(|_| rng.i32(-100..100))
}

fn random_mat<const R: usize, const C: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, R, C> {
    Matrix::from_fn(|_, _| rng.f64() * 4.0 - 2.0)
}

#[test]
fn vector_addition_laws() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..100 {
        let vecs: [Vector<i32, 4>; 3] = std::array::from_fn(|_| random_ivec(&mut rng));
        for (&a, &b) in vecs.iter().tuple_combinations() {
            assert_eq!(a + b, b + a);
            assert_eq!(dot(a, b), dot(b, a));
        }
        let [a, b, c] = vecs;
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a - a, Vector::<i32, 4>::ZERO);
    }
}

#[test]
fn normalized_length() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..100 {
        let v = random_vec::<5>(&mut rng);
        if v == Vector::<f64, 5>::ZERO {
            continue;
        }
        assert_relative_eq!(length(normalize(v)), 1.0, epsilon = 1e-12);
    }

    let v = vec3(3.0, 4.0, 0.0);
    assert_eq!(length(v), 5.0);
    assert_relative_eq!(normalize(v), vec3(0.6, 0.8, 0.0));
    assert_eq!(distance(Vec3::<f64>::ZERO, v), 5.0);
}

#[test]
fn lerp_endpoints() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..100 {
        let a = random_vec::<3>(&mut rng);
        let b = random_vec::<3>(&mut rng);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_relative_eq!(lerp(a, b, 0.5), (a + b) / 2.0, epsilon = 1e-12);
    }
}

#[test]
fn concatenation() {
    let v: Vec4<i32> = cat!(vec2(1, 2), vec2(3, 4));
    assert_eq!(v, [1, 2, 3, 4]);
}

#[test]
fn identity_products() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    let id = Mat3::<f64>::identity();
    assert_eq!(id * id, id);
    for _ in 0..20 {
        let m = random_mat::<3, 3>(&mut rng);
        assert_eq!(m * id, m);
        assert_eq!(id * m, m);
    }
}

#[test]
fn determinant_of_2x2() {
    let m = Matrix::from_rows([[1, 2], [3, 4]]);
    assert_eq!(determinant(m), -2);
}

#[test]
fn inverse_round_trip() -> anyhow::Result<()> {
    init_logger();

    let mut rng = fastrand::Rng::with_seed(SEED);
    let mut inverted = 0;
    for _ in 0..50 {
        let m = random_mat::<4, 4>(&mut rng);
        if m.determinant().abs() < 0.1 {
            continue;
        }
        let inv = inverse(m)?;
        assert_relative_eq!(inv * m, Mat4::identity(), epsilon = 1e-9);
        assert_relative_eq!(m * inv, Mat4::identity(), epsilon = 1e-9);
        inverted += 1;
    }
    assert!(inverted > 0);
    Ok(())
}

#[test]
fn inverse_of_zero_row_is_singular() {
    init_logger();

    let m = Matrix::from_rows([[1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [4.0, 5.0, 6.0]]);
    match inverse(m) {
        Err(Error::Singular { determinant, .. }) => assert_eq!(determinant, 0.0),
        other => panic!("expected a singular matrix error, got {other:?}"),
    }
}

#[test]
fn transpose_involution() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..20 {
        let m = random_mat::<2, 5>(&mut rng);
        assert_eq!(transpose(transpose(m)), m);
    }
}

#[test]
fn kronecker_blocks() {
    let a = Matrix::from_rows([[1, -2], [3, 0]]);
    let b = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
    let k: Matrix<i32, 4, 6> = kronecker_product(a, b);
    assert_eq!(k.shape(), (2 * 2, 2 * 3));

    for (i, j, r, c) in iproduct!(0..2, 0..2, 0..2, 0..3) {
        assert_eq!(k[(i * 2 + r, j * 3 + c)], a[(i, j)] * b[(r, c)]);
    }

    let lazy: Matrix<i32, 4, 6> = kronecker!(a, b);
    assert_eq!(lazy, k);
}

#[test]
fn rank_of_dependent_rows() {
    init_logger();

    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..20 {
        let base = random_ivec::<4>(&mut rng);
        let factor = rng.i32(-5..5);
        let other = random_ivec::<4>(&mut rng);
        let m = Matrix::from_rows([base, base * factor, other]);
        assert!(rank(m) < 3, "{m:?}");
    }
    assert_eq!(rank(Matrix::from_rows([[1, 0], [0, 1], [1, 1]])), 2);
}

#[test]
fn wrong_length_source() {
    let err = Vec3::<i32>::try_from(vec![1, 2]).unwrap_err();
    assert_eq!(err, Error::SizeMismatch { expected: 3, found: 2 });

    let err = Vec3::<f32>::try_from(StepRange::new(0, 10, 2)).unwrap_err();
    assert_eq!(err, Error::SizeMismatch { expected: 3, found: 5 });
}
