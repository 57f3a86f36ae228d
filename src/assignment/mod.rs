//! Rectangular linear assignment problem.
//!
//! [`solve`] finds a minimum-cost one-to-one pairing between the rows and
//! columns of a [`CostMatrix`] using the shortest augmenting path method
//! (Jonker-Volgenant with Crouse's rectangular extension). Every row is paired
//! when `rows <= cols`, every column otherwise.
//!
//! `+inf` entries mark forbidden pairings. NaN and `-inf` entries are rejected.

mod error;

#[cfg(test)]
mod tests;

pub use error::AssignmentError;

use std::ops::{Index, IndexMut};

use tracing::trace;

/// Cost of a pairing the solver must never pick.
pub const FORBIDDEN_COST: f64 = f64::INFINITY;

/// Dense row-major matrix of pairing costs (or similarities before inversion).
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Matrix whose entry `(i, j)` is `f(i, j)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Elementwise `value - x`, e.g. turning similarities into costs with `value = 1`.
    pub fn complement(&self, value: f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|x| value - x).collect(),
        }
    }

    fn transposed(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |i, j| self[(j, i)])
    }

    fn validate(&self) -> Result<(), AssignmentError> {
        for i in 0..self.rows {
            for j in 0..self.cols {
                let value = self[(i, j)];
                if value.is_nan() || value == f64::NEG_INFINITY {
                    return Err(AssignmentError::InvalidCost {
                        row: i,
                        col: j,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for CostMatrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.cols + j]
    }
}

/// Optimal pairing returned by [`solve`], sorted by row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    pairs: Vec<(usize, usize)>,
}

impl Assignment {
    /// `(row, col)` pairs in ascending row order.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Costs of the selected pairs, in pair order.
    pub fn costs(&self, cost: &CostMatrix) -> Vec<f64> {
        self.pairs.iter().map(|&(i, j)| cost[(i, j)]).collect()
    }

    /// Sum of the selected costs.
    pub fn total_cost(&self, cost: &CostMatrix) -> f64 {
        self.pairs.iter().map(|&(i, j)| cost[(i, j)]).sum()
    }
}

/// Solves the assignment problem on `cost`.
///
/// An empty dimension yields an empty assignment.
pub fn solve(cost: &CostMatrix) -> Result<Assignment, AssignmentError> {
    if cost.is_empty() {
        return Ok(Assignment::default());
    }
    cost.validate()?;

    let transpose = cost.cols < cost.rows;
    let pairs = if transpose {
        let t = cost.transposed();
        let mut pairs: Vec<(usize, usize)> = solve_wide(&t)?
            .into_iter()
            .enumerate()
            .map(|(col, row)| (row, col))
            .collect();
        pairs.sort_unstable();
        pairs
    } else {
        solve_wide(cost)?.into_iter().enumerate().collect()
    };

    trace!(
        rows = cost.rows,
        cols = cost.cols,
        assigned = pairs.len(),
        "Solved assignment problem"
    );

    Ok(Assignment { pairs })
}

/// Shortest augmenting path solver for `rows <= cols`. Returns the column of every row.
fn solve_wide(cost: &CostMatrix) -> Result<Vec<usize>, AssignmentError> {
    let (nr, nc) = (cost.rows, cost.cols);

    let mut state = SolverState {
        u: vec![0.0; nr],
        v: vec![0.0; nc],
        shortest: vec![f64::INFINITY; nc],
        path: vec![usize::MAX; nc],
        col4row: vec![None; nr],
        row4col: vec![None; nc],
        visited_rows: vec![false; nr],
        visited_cols: vec![false; nc],
        remaining: vec![0; nc],
    };

    for cur_row in 0..nr {
        let (sink, min_val) = state
            .augmenting_path(cost, cur_row)
            .ok_or(AssignmentError::Infeasible { row: cur_row })?;

        // Update dual variables.
        state.u[cur_row] += min_val;
        for i in 0..nr {
            if state.visited_rows[i] && i != cur_row {
                if let Some(j) = state.col4row[i] {
                    state.u[i] += min_val - state.shortest[j];
                }
            }
        }
        for j in 0..nc {
            if state.visited_cols[j] {
                state.v[j] -= min_val - state.shortest[j];
            }
        }

        // Augment along the path back to the current row.
        let mut j = sink;
        loop {
            let i = state.path[j];
            state.row4col[j] = Some(i);
            let previous = state.col4row[i].replace(j);
            if i == cur_row {
                break;
            }
            j = match previous {
                Some(prev) => prev,
                None => break,
            };
        }
    }

    state
        .col4row
        .into_iter()
        .enumerate()
        .map(|(row, col)| col.ok_or(AssignmentError::Infeasible { row }))
        .collect()
}

struct SolverState {
    u: Vec<f64>,
    v: Vec<f64>,
    shortest: Vec<f64>,
    path: Vec<usize>,
    col4row: Vec<Option<usize>>,
    row4col: Vec<Option<usize>>,
    visited_rows: Vec<bool>,
    visited_cols: Vec<bool>,
    remaining: Vec<usize>,
}

impl SolverState {
    /// Dijkstra-style search from `cur_row` to the nearest free column.
    /// Returns `(sink column, path length)` or `None` if every column is forbidden.
    fn augmenting_path(&mut self, cost: &CostMatrix, cur_row: usize) -> Option<(usize, f64)> {
        let nc = cost.cols;
        let mut min_val = 0.0;

        // Scanning columns high to low makes ties resolve to the lowest index.
        let mut num_remaining = nc;
        for (it, slot) in self.remaining.iter_mut().enumerate() {
            *slot = nc - it - 1;
        }
        self.visited_rows.fill(false);
        self.visited_cols.fill(false);
        self.shortest.fill(f64::INFINITY);

        let mut i = cur_row;
        loop {
            let mut index = None;
            let mut lowest = f64::INFINITY;
            self.visited_rows[i] = true;

            for it in 0..num_remaining {
                let j = self.remaining[it];
                let r = min_val + cost[(i, j)] - self.u[i] - self.v[j];
                if r < self.shortest[j] {
                    self.path[j] = i;
                    self.shortest[j] = r;
                }
                if self.shortest[j] < lowest
                    || (self.shortest[j] == lowest && self.row4col[j].is_none())
                {
                    lowest = self.shortest[j];
                    index = Some(it);
                }
            }

            min_val = lowest;
            if min_val == f64::INFINITY {
                return None;
            }
            let index = index?;

            let j = self.remaining[index];
            self.visited_cols[j] = true;
            num_remaining -= 1;
            self.remaining[index] = self.remaining[num_remaining];

            match self.row4col[j] {
                None => return Some((j, min_val)),
                Some(row) => i = row,
            }
        }
    }
}
