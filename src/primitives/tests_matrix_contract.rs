// =========================================================================
// Matrix contract: shape and accessor identities.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

/// shape() reports (row count, length of row 0).
#[test]
fn contract_shape_matches_rows() {
    let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    let expected = (rows.len(), rows[0].len());
    let a = Matrix::from_rows(rows).expect("valid");

    assert_eq!(a.shape(), expected, "CONTRACT shape: {:?}", a.shape());
}

/// Every column has one entry per row.
#[test]
fn contract_column_len_is_row_count() {
    let a = Matrix::from_fn(4, 3, |i, j| (i + j) as f64).expect("valid");

    for j in 0..a.n_cols() {
        let col = a.column(j).expect("in range");
        assert_eq!(col.len(), a.n_rows(), "CONTRACT column {j} length");
    }
}

/// row(i)[j] == column(j)[i] == get(i, j)
#[test]
fn contract_row_column_agree() {
    let a = Matrix::from_fn(3, 4, |i, j| (7 * i + j) as f64 * 0.5).expect("valid");

    for i in 0..3 {
        let row = a.row(i).expect("in range");
        for j in 0..4 {
            let col = a.column(j).expect("in range");
            let x = a.get(i, j).expect("in range");
            assert_eq!(row[j], x, "CONTRACT row({i})[{j}]");
            assert_eq!(col[i], x, "CONTRACT column({j})[{i}]");
        }
    }
}

/// from_fn is deterministic: the same entry function gives the same matrix.
#[test]
fn contract_from_fn_deterministic() {
    let f = |i: usize, j: usize| if i == j { 1.0 } else { 0.0 };
    let a = Matrix::from_fn(5, 5, f).expect("valid");
    let b = Matrix::from_fn(5, 5, f).expect("valid");

    assert_eq!(a, b);
    assert_eq!(a, Matrix::identity(5).expect("valid"));
}

/// Rows rebuilt through to_rows/from_rows give back the same matrix.
#[test]
fn contract_rows_reconstruct() {
    let a = Matrix::from_fn(3, 2, |i, j| (i * 2 + j) as f64).expect("valid");
    let b = Matrix::from_rows(a.to_rows()).expect("valid");

    assert_eq!(a, b);
}
