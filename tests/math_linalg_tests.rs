#![cfg(feature = "dev")]

use zahlenmauer_rs::internals::math::linalg::reduce_to_rref;
use zahlenmauer_rs::internals::primitives::matrix::AugmentedMatrix;

fn matrix_from(rows: &[Vec<f64>]) -> AugmentedMatrix<f64> {
    AugmentedMatrix::from_rows(rows).unwrap()
}

#[test]
fn test_rref_two_by_three() {
    let matrix = matrix_from(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);

    let reduced = reduce_to_rref(matrix);

    assert_eq!(reduced.row(0), &[1.0, 0.0, -1.0]);
    assert_eq!(reduced.row(1), &[0.0, 1.0, 2.0]);
}

#[test]
fn test_rref_identity_is_fixed_point() {
    let matrix = matrix_from(&[vec![1.0, 0.0, 5.0], vec![0.0, 1.0, 7.0]]);

    let reduced = reduce_to_rref(matrix.clone());

    assert_eq!(reduced, matrix);
}

#[test]
fn test_rref_idempotent() {
    let matrix = matrix_from(&[
        vec![2.0, 1.0, -1.0, 8.0],
        vec![-3.0, -1.0, 2.0, -11.0],
        vec![-2.0, 1.0, 2.0, -3.0],
    ]);

    let once = reduce_to_rref(matrix);
    let twice = reduce_to_rref(once.clone());

    assert_eq!(once, twice);
}

#[test]
fn test_rref_swaps_zero_leading_row() {
    let matrix = matrix_from(&[vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 3.0]]);

    let reduced = reduce_to_rref(matrix);

    assert_eq!(reduced.row(0), &[1.0, 0.0, 3.0]);
    assert_eq!(reduced.row(1), &[0.0, 1.0, 2.0]);
}

#[test]
fn test_rref_skips_all_zero_column() {
    let matrix = matrix_from(&[vec![0.0, 2.0, 4.0], vec![0.0, 1.0, 2.0]]);

    let reduced = reduce_to_rref(matrix);

    // The first column holds no pivot; the cursor moves on to column 1.
    assert_eq!(reduced.row(0), &[0.0, 1.0, 2.0]);
    assert_eq!(reduced.row(1), &[0.0, 0.0, 0.0]);
}

#[test]
fn test_rref_normalizes_pivots() {
    let matrix = matrix_from(&[vec![2.0, 0.0, 6.0], vec![0.0, 4.0, 8.0]]);

    let reduced = reduce_to_rref(matrix);

    assert_eq!(reduced.row(0), &[1.0, 0.0, 3.0]);
    assert_eq!(reduced.row(1), &[0.0, 1.0, 2.0]);
}

#[test]
fn test_rref_leaves_redundant_rows_zeroed() {
    // Row 2 is the sum of rows 0 and 1: rank 2, three rows.
    let matrix = matrix_from(&[
        vec![1.0, 0.0, 2.0],
        vec![0.0, 1.0, 3.0],
        vec![1.0, 1.0, 5.0],
    ]);

    let reduced = reduce_to_rref(matrix);

    assert_eq!(reduced.row(0), &[1.0, 0.0, 2.0]);
    assert_eq!(reduced.row(1), &[0.0, 1.0, 3.0]);
    assert_eq!(reduced.row(2), &[0.0, 0.0, 0.0]);
}

#[test]
fn test_rref_contradiction_reaches_last_row() {
    // x = 3 and x = 5 cannot both hold; elimination leaves 0 = 1 at the
    // bottom (the RHS column becomes the final pivot).
    let matrix = matrix_from(&[vec![1.0, 3.0], vec![1.0, 5.0]]);

    let reduced = reduce_to_rref(matrix);

    assert_eq!(reduced.row(0), &[1.0, 0.0]);
    assert_eq!(reduced.row(1), &[0.0, 1.0]);
}

#[test]
fn test_rref_single_row() {
    let matrix = matrix_from(&[vec![3.0, 0.0, 9.0]]);

    let reduced = reduce_to_rref(matrix);

    assert_eq!(reduced.row(0), &[1.0, 0.0, 3.0]);
}

#[test]
fn test_rref_f32_precision() {
    let matrix =
        AugmentedMatrix::from_rows(&[vec![2.0f32, 0.0, 4.0], vec![0.0, 2.0, 6.0]]).unwrap();

    let reduced = reduce_to_rref(matrix);

    assert_eq!(reduced.row(0), &[1.0f32, 0.0, 2.0]);
    assert_eq!(reduced.row(1), &[0.0f32, 1.0, 3.0]);
}

#[test]
#[should_panic(expected = "empty system")]
fn test_rref_empty_matrix_panics() {
    let matrix = AugmentedMatrix::<f64>::with_columns(3);
    let _ = reduce_to_rref(matrix);
}
