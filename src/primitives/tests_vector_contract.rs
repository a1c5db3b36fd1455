// =========================================================================
// Vector contract: algebraic identities that every operation must honour.
//
// Higher-level operations (mean, distance) are compositions of the
// primitives, so these checks pin the compositions down exactly.
// =========================================================================

use super::*;

/// Adding then subtracting the same vector returns the original.
#[test]
fn contract_add_sub_round_trip() {
    let v = Vector::from_slice(&[1.5, -2.25, 3.0]);
    let w = Vector::from_slice(&[0.1, 0.2, -0.3]);

    let back = v.add(&w).expect("same len").sub(&w).expect("same len");

    assert!(
        back.approx_eq(&v, 1e-12),
        "CONTRACT add/sub: got {back:?}, expected {v:?}"
    );
}

/// Mean equals the sum scaled by 1/n.
#[test]
fn contract_mean_is_scaled_sum() {
    let vs = [
        Vector::from_slice(&[2.0, 4.0]),
        Vector::from_slice(&[6.0, 8.0]),
        Vector::from_slice(&[10.0, -3.0]),
        Vector::from_slice(&[0.5, 0.25]),
    ];

    let mean = Vector::mean_of(&vs).expect("non-empty");
    let expected = Vector::sum_of(&vs)
        .expect("non-empty")
        .mul_scalar(1.0 / vs.len() as f64);

    assert_eq!(mean, expected, "CONTRACT mean: mean != sum * 1/n");
}

/// Magnitude is non-negative and zero only for the zero vector.
#[test]
fn contract_magnitude_nonneg() {
    let v = Vector::from_slice(&[-3.0, -4.0]);
    let m = v.magnitude();

    assert!(m >= 0.0, "CONTRACT magnitude: {m} < 0");
    assert!((m - 5.0).abs() < 1e-12);
    assert_eq!(Vector::zeros(7).magnitude(), 0.0);
}

/// Distance is symmetric and zero against itself.
#[test]
fn contract_distance_metric() {
    let v = Vector::from_slice(&[1.0, -2.0, 3.0, 0.5]);
    let w = Vector::from_slice(&[4.0, 0.0, -1.0, 2.0]);

    let vw = v.distance(&w).expect("same len");
    let wv = w.distance(&v).expect("same len");

    assert!((vw - wv).abs() < 1e-12, "CONTRACT distance: {vw} != {wv}");
    assert_eq!(v.distance(&v).expect("same len"), 0.0);
}

/// Squared distance is the square of distance.
#[test]
fn contract_squared_distance_matches_distance() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let w = Vector::from_slice(&[-1.0, 5.0, 0.0]);

    let d = v.distance(&w).expect("same len");
    let d2 = v.squared_distance(&w).expect("same len");

    assert!((d * d - d2).abs() < 1e-9, "CONTRACT sq-dist: {d}^2 != {d2}");
}

/// Sum of squares is the dot product with itself.
#[test]
fn contract_sum_of_squares_is_self_dot() {
    let v = Vector::from_slice(&[0.5, -1.5, 2.0]);
    let dot = v.dot(&v).expect("same len");

    assert!((v.sum_of_squares() - dot).abs() < 1e-12);
}
