use super::*;

/// Exhaustive minimum over all injective row -> column maps (rows <= cols).
fn brute_force_min(cost: &CostMatrix) -> f64 {
    fn go(cost: &CostMatrix, row: usize, used: &mut Vec<bool>, acc: f64, best: &mut f64) {
        if row == cost.rows() {
            if acc < *best {
                *best = acc;
            }
            return;
        }
        for col in 0..cost.cols() {
            if !used[col] {
                used[col] = true;
                go(cost, row + 1, used, acc + cost[(row, col)], best);
                used[col] = false;
            }
        }
    }

    let mut best = f64::INFINITY;
    go(cost, 0, &mut vec![false; cost.cols()], 0.0, &mut best);
    best
}

fn matrix(rows: &[&[f64]]) -> CostMatrix {
    CostMatrix::from_fn(rows.len(), rows[0].len(), |i, j| rows[i][j])
}

#[test]
fn test_square_known_optimum() {
    let cost = matrix(&[&[4.0, 1.0, 3.0], &[2.0, 0.0, 5.0], &[3.0, 2.0, 2.0]]);
    let assignment = solve(&cost).unwrap();

    assert_eq!(assignment.pairs(), &[(0, 1), (1, 0), (2, 2)]);
    assert_eq!(assignment.total_cost(&cost), 5.0);
}

#[test]
fn test_wide_matrix_assigns_every_row() {
    let cost = matrix(&[&[9.0, 2.0, 7.0, 8.0], &[6.0, 4.0, 3.0, 7.0]]);
    let assignment = solve(&cost).unwrap();

    assert_eq!(assignment.len(), 2);
    assert_eq!(assignment.pairs(), &[(0, 1), (1, 2)]);
}

#[test]
fn test_tall_matrix_assigns_every_column() {
    let cost = matrix(&[&[9.0, 6.0], &[2.0, 4.0], &[7.0, 3.0], &[8.0, 7.0]]);
    let assignment = solve(&cost).unwrap();

    assert_eq!(assignment.pairs(), &[(1, 0), (2, 1)]);
    assert_eq!(assignment.total_cost(&cost), 5.0);
}

#[test]
fn test_matches_brute_force() {
    // Deterministic pseudo-random matrices of several shapes.
    let mut state = 0x2545_f491_4f6c_dd1du64;
    for (rows, cols) in [(1, 1), (2, 3), (3, 3), (4, 4), (3, 5), (5, 5), (6, 6)] {
        let cost = CostMatrix::from_fn(rows, cols, |_, _| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 1000) as f64 / 100.0
        });

        let assignment = solve(&cost).unwrap();
        let expected = brute_force_min(&cost);
        assert!(
            (assignment.total_cost(&cost) - expected).abs() < 1e-9,
            "{rows}x{cols}: got {}, expected {expected}",
            assignment.total_cost(&cost)
        );
    }
}

#[test]
fn test_ties_resolve_to_diagonal() {
    let cost = CostMatrix::zeros(4, 4);
    let assignment = solve(&cost).unwrap();
    assert_eq!(assignment.pairs(), &[(0, 0), (1, 1), (2, 2), (3, 3)]);
}

#[test]
fn test_forbidden_entries_are_avoided() {
    let inf = FORBIDDEN_COST;
    let cost = matrix(&[&[0.0, inf], &[inf, 0.0]]);
    let assignment = solve(&cost).unwrap();

    assert_eq!(assignment.pairs(), &[(0, 0), (1, 1)]);
    assert_eq!(assignment.total_cost(&cost), 0.0);
}

#[test]
fn test_infeasible() {
    let inf = FORBIDDEN_COST;
    let cost = matrix(&[&[1.0, inf], &[1.0, inf]]);
    assert!(matches!(
        solve(&cost),
        Err(AssignmentError::Infeasible { .. })
    ));
}

#[test]
fn test_nan_rejected() {
    let cost = matrix(&[&[1.0, f64::NAN]]);
    assert!(matches!(
        solve(&cost),
        Err(AssignmentError::InvalidCost { row: 0, col: 1, .. })
    ));
}

#[test]
fn test_negative_infinity_rejected() {
    let cost = matrix(&[&[f64::NEG_INFINITY]]);
    assert!(solve(&cost).is_err());
}

#[test]
fn test_empty_dimensions() {
    assert!(solve(&CostMatrix::zeros(0, 3)).unwrap().is_empty());
    assert!(solve(&CostMatrix::zeros(3, 0)).unwrap().is_empty());
    assert!(solve(&CostMatrix::zeros(0, 0)).unwrap().is_empty());
}

#[test]
fn test_negative_costs() {
    let cost = matrix(&[&[-1.0, -5.0], &[-3.0, -2.0]]);
    let assignment = solve(&cost).unwrap();
    assert_eq!(assignment.total_cost(&cost), -8.0);
}

#[test]
fn test_complement() {
    let similarity = matrix(&[&[1.0, 0.25]]);
    let cost = similarity.complement(1.0);
    assert_eq!(cost[(0, 0)], 0.0);
    assert_eq!(cost[(0, 1)], 0.75);
}

#[test]
fn test_costs_in_pair_order() {
    let cost = matrix(&[&[4.0, 1.0], &[2.0, 9.0]]);
    let assignment = solve(&cost).unwrap();
    assert_eq!(assignment.costs(&cost), vec![1.0, 2.0]);
}
