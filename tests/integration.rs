//! Integration tests for the linalg-primer library.
//!
//! These tests drive the public free-function API end to end.

use linalg_primer::prelude::*;

fn sample_matrix() -> Matrix<f64> {
    Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
        .expect("rectangular test data")
}

#[test]
fn test_vector_workflow() {
    let v1 = Vector::from_slice(&[1.0, 2.0]);
    let v2 = Vector::from_slice(&[2.0, 1.0]);
    let v3 = Vector::from_slice(&[3.0, 3.0]);

    assert_eq!(add(&v1, &v2).expect("same len").as_slice(), &[3.0, 3.0]);

    let vs = [v1.clone(), v2, v3];
    let sum = vector_sum(&vs).expect("non-empty, equal lengths");
    assert_eq!(sum.as_slice(), &[6.0, 6.0]);

    let mean = vector_mean(&vs).expect("non-empty, equal lengths");
    assert!(mean.approx_eq(&Vector::from_slice(&[2.0, 2.0]), 1e-12));

    assert_eq!(scalar_multiply(2.0, &v1).as_slice(), &[2.0, 4.0]);
}

#[test]
fn test_vector_metrics_workflow() {
    let origin = Vector::zeros(2);
    let p = Vector::from_slice(&[3.0, 4.0]);

    assert!((magnitude(&p) - 5.0).abs() < 1e-12);
    assert!((sum_of_squares(&p) - 25.0).abs() < 1e-12);
    assert!((distance(&origin, &p).expect("same len") - 5.0).abs() < 1e-12);
    assert!((squared_distance(&origin, &p).expect("same len") - 25.0).abs() < 1e-12);
    assert!((dot(&p, &p).expect("same len") - 25.0).abs() < 1e-12);

    let back = subtract(&p, &p).expect("same len");
    assert_eq!(magnitude(&back), 0.0);
}

#[test]
fn test_matrix_workflow() {
    let a = sample_matrix();

    assert_eq!(shape(&a), (3, 2));
    assert_eq!(get_row(&a, 1).expect("row 1").as_slice(), &[3.0, 4.0]);
    assert_eq!(get_column(&a, 1).expect("column 1").as_slice(), &[2.0, 4.0, 6.0]);
}

#[test]
fn test_identity_from_entry_function() {
    let eye = make_matrix(3, 3, |i, j| if i == j { 1.0 } else { 0.0 }).expect("3x3");
    assert_eq!(
        eye.to_rows(),
        vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ]
    );
    assert_eq!(eye, Matrix::identity(3).expect("3x3"));
}

#[test]
fn test_vectors_feed_matrix_rows() {
    let v1 = Vector::from_slice(&[1.0, 2.0]);
    let v2 = Vector::from_slice(&[2.0, 1.0]);
    let sum = add(&v1, &v2).expect("same len");

    let m = Matrix::from_vectors(&[v1, v2, sum]).expect("equal lengths");
    let xs = get_column(&m, 0).expect("column 0");
    let ys = get_column(&m, 1).expect("column 1");
    assert_eq!(xs.as_slice(), &[1.0, 2.0, 3.0]);
    assert_eq!(ys.as_slice(), &[2.0, 1.0, 3.0]);
}

#[test]
fn test_error_scenarios() {
    let short = Vector::from_slice(&[1.0, 2.0]);
    let long = Vector::from_slice(&[1.0, 2.0, 3.0]);
    assert!(matches!(
        add(&short, &long),
        Err(LinalgError::DimensionMismatch { .. })
    ));

    assert!(matches!(vector_mean(&[]), Err(LinalgError::EmptyInput { .. })));
    assert!(matches!(vector_sum(&[]), Err(LinalgError::EmptyInput { .. })));

    let a = sample_matrix();
    assert_eq!(
        get_row(&a, 5),
        Err(LinalgError::IndexOutOfRange { index: 5, len: 3 })
    );

    assert!(matches!(
        make_matrix(usize::MAX, 2, |_, _| 0.0),
        Err(LinalgError::InvalidDimension { .. })
    ));
}

#[test]
fn test_empty_matrix_shape() {
    let empty = Matrix::<f64>::from_rows(vec![]).expect("no rows");
    assert_eq!(shape(&empty), (0, 0));
}

#[test]
fn test_matrix_json_round_trip() {
    let a = sample_matrix();
    let json = serde_json::to_string(&a).expect("serializable");
    let back: Matrix<f64> = serde_json::from_str(&json).expect("rectangular");
    assert_eq!(a, back);

    let v: Vector<f64> = serde_json::from_str("[1.0, 2.0]").expect("plain list");
    assert_eq!(v.as_slice(), &[1.0, 2.0]);
}

#[test]
fn test_concurrent_reads() {
    let a = std::sync::Arc::new(sample_matrix());
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let a = std::sync::Arc::clone(&a);
            std::thread::spawn(move || get_column(&*a, t % 2).expect("in range"))
        })
        .collect();
    for (t, h) in handles.into_iter().enumerate() {
        let col = h.join().expect("thread completes");
        assert_eq!(col, get_column(&*a, t % 2).expect("in range"));
    }
}
