#![cfg(feature = "dev")]

use zahlenmauer_rs::internals::engine::executor::{SolveConfig, WallExecutor};
use zahlenmauer_rs::internals::primitives::errors::WallError;

fn solve(rows: usize, flat: &[Option<f64>]) -> Result<(), WallError> {
    WallExecutor::run(rows, flat, &SolveConfig::default()).map(|_| ())
}

#[test]
fn test_reference_scenario() {
    // Top 14, bottom row 5, ?, 3: the single bottom unknown is forced and
    // the middle row follows from it.
    let flat = vec![Some(14.0), None, None, Some(5.0), None, Some(3.0)];

    let solution = WallExecutor::run(3, &flat, &SolveConfig::default()).unwrap();

    assert!(!solution.is_inconsistent());
    assert_eq!(
        solution.values(),
        &[Some(14.0), Some(8.0), Some(6.0), Some(5.0), Some(3.0), Some(3.0)]
    );
}

#[test]
fn test_fully_known_consistent_input_is_returned_unchanged() {
    let flat = vec![
        Some(10.0),
        Some(4.0),
        Some(6.0),
        Some(1.0),
        Some(3.0),
        Some(3.0),
    ];

    let solution = WallExecutor::run(3, &flat, &SolveConfig::default()).unwrap();

    assert!(!solution.is_inconsistent());
    assert_eq!(solution.values(), flat.as_slice());
}

#[test]
fn test_underdetermined_cells_stay_unknown() {
    // Known top and middle row are mutually consistent but leave the
    // bottom row with one degree of freedom.
    let flat = vec![Some(10.0), Some(4.0), Some(6.0), None, None, None];

    let solution = WallExecutor::run(3, &flat, &SolveConfig::default()).unwrap();

    assert!(!solution.is_inconsistent());
    assert_eq!(
        solution.values(),
        &[Some(10.0), Some(4.0), Some(6.0), None, None, None]
    );
}

#[test]
fn test_all_unknown_derives_nothing() {
    let flat: Vec<Option<f64>> = vec![None; 6];

    let solution = WallExecutor::run(3, &flat, &SolveConfig::default()).unwrap();

    assert!(!solution.is_inconsistent());
    assert!(solution.values().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_single_row_all_unknown_short_circuits() {
    let flat: Vec<Option<f64>> = vec![None];

    let solution = WallExecutor::run(1, &flat, &SolveConfig::default()).unwrap();

    assert!(!solution.is_inconsistent());
    assert_eq!(solution.values(), &[None]);
}

#[test]
fn test_single_row_known_cell() {
    let flat = vec![Some(7.0)];

    let solution = WallExecutor::run(1, &flat, &SolveConfig::default()).unwrap();

    assert_eq!(solution.values(), &[Some(7.0)]);
}

#[test]
fn test_contradictory_pyramid_is_inconsistent() {
    // 10 is not 4 + 5.
    let flat = vec![Some(10.0), Some(4.0), Some(5.0)];

    let solution = WallExecutor::run(2, &flat, &SolveConfig::default()).unwrap();

    assert!(solution.is_inconsistent());
    assert!(solution.values().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_propagation_downward() {
    // Known top and one bottom cell force the remaining bottom cell.
    let flat = vec![Some(10.0), Some(4.0), None];

    let solution = WallExecutor::run(2, &flat, &SolveConfig::default()).unwrap();

    assert_eq!(solution.values(), &[Some(10.0), Some(4.0), Some(6.0)]);
}

#[test]
fn test_snapping_keeps_grid_aligned_values_exact() {
    let flat = vec![Some(14.0), None, None, Some(5.0), None, Some(3.0)];
    let config = SolveConfig {
        snap_exponent: Some(-4),
    };

    let solution = WallExecutor::run(3, &flat, &config).unwrap();

    assert_eq!(
        solution.values(),
        &[Some(14.0), Some(8.0), Some(6.0), Some(5.0), Some(3.0), Some(3.0)]
    );
}

#[test]
fn test_invalid_rows() {
    assert_eq!(solve(0, &[]), Err(WallError::InvalidRows(0)));
}

#[test]
fn test_mismatched_flat_length() {
    assert_eq!(
        solve(2, &[Some(1.0), None]),
        Err(WallError::MismatchedInput {
            expected: 3,
            got: 2,
        })
    );
}

#[test]
fn test_non_finite_value_rejected() {
    let result = solve(1, &[Some(f64::NAN)]);
    assert!(matches!(result, Err(WallError::InvalidNumericValue(_))));
}

#[test]
fn test_invalid_snap_exponent() {
    let flat = vec![Some(1.0)];
    let config = SolveConfig {
        snap_exponent: Some(40),
    };

    let result = WallExecutor::run(1, &flat, &config);

    assert_eq!(
        result.unwrap_err(),
        WallError::InvalidSnapExponent(40)
    );
}

#[test]
fn test_f32_pipeline() {
    let flat = vec![Some(10.0f32), Some(4.0), None];

    let solution = WallExecutor::run(2, &flat, &SolveConfig::default()).unwrap();

    assert_eq!(solution.values(), &[Some(10.0f32), Some(4.0), Some(6.0)]);
}
