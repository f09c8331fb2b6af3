//! Rim hook tableau value type and its height-parity sign.

use crate::types::Grid;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::Mul;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Sign
// ─────────────────────────────────────────────────────────────

/// The sign of a hook or a whole tableau: always +1 or -1, never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// Sign value +1.
    Positive,
    /// Sign value -1.
    Negative,
}

impl Sign {
    /// Sign of a single hook spanning `height` rows: `(-1)^(height - 1)`.
    pub fn from_height(height: usize) -> Self {
        if height % 2 == 1 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    /// The sign as an integer, +1 or -1.
    pub fn value(self) -> i64 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sign::Positive => write!(f, "+1"),
            Sign::Negative => write!(f, "-1"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Tableau
// ─────────────────────────────────────────────────────────────

/// A completed rim hook tableau.
///
/// The labels `1..=labels` partition the grid into connected border strips,
/// one per weight entry. Tableaux are terminal, immutable results of the
/// enumerator: equality and hashing look at the grid contents alone, since
/// the label alphabet is deducible from the weight length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RimHookTableau {
    grid: Grid,
    labels: usize,
}

impl RimHookTableau {
    /// Wraps a complete grid together with its label alphabet size.
    pub(crate) fn new(grid: Grid, labels: usize) -> Self {
        Self { grid, labels }
    }

    /// Returns the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the size of the label alphabet, `weight.len()`.
    pub fn labels(&self) -> usize {
        self.labels
    }

    /// Returns the ordered rows of integer labels, for display and export.
    pub fn rows(&self) -> Vec<Vec<usize>> {
        self.grid
            .rows()
            .iter()
            .map(|row| row.iter().map(|cell| cell.label().unwrap_or(0)).collect())
            .collect()
    }

    /// Returns the number of distinct rows spanned by the hook with the
    /// given label.
    pub fn height(&self, label: usize) -> usize {
        self.grid.height_of(label)
    }

    /// Computes the sign of the tableau: the product over every hook of
    /// `(-1)^(height - 1)`.
    #[instrument(skip(self))]
    pub fn sign(&self) -> Sign {
        (1..=self.labels)
            .map(|label| Sign::from_height(self.height(label)))
            .fold(Sign::Positive, Mul::mul)
    }
}

impl PartialEq for RimHookTableau {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for RimHookTableau {}

impl Hash for RimHookTableau {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

impl std::fmt::Display for RimHookTableau {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.grid.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn grid_from_rows(rows: &[&[usize]]) -> Grid {
        let shape: Vec<usize> = rows.iter().map(|row| row.len()).collect();
        let mut grid = Grid::from_shape(&shape);
        for (r, row) in rows.iter().enumerate() {
            for (c, &label) in row.iter().enumerate() {
                grid.set(r, c, Cell::Hook(label));
            }
        }
        grid
    }

    #[test]
    fn test_sign_parity_by_height() {
        assert_eq!(Sign::from_height(1), Sign::Positive);
        assert_eq!(Sign::from_height(2), Sign::Negative);
        assert_eq!(Sign::from_height(3), Sign::Positive);
    }

    #[test]
    fn test_sign_multiplication() {
        assert_eq!(Sign::Positive * Sign::Positive, Sign::Positive);
        assert_eq!(Sign::Positive * Sign::Negative, Sign::Negative);
        assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
    }

    #[test]
    fn test_single_row_tableau_is_positive() {
        let tableau = RimHookTableau::new(grid_from_rows(&[&[1, 1, 1]]), 1);
        assert_eq!(tableau.height(1), 1);
        assert_eq!(tableau.sign(), Sign::Positive);
    }

    #[test]
    fn test_two_row_hook_is_negative() {
        // Hook 1 spans both rows, hook 2 spans one.
        let tableau = RimHookTableau::new(grid_from_rows(&[&[1], &[1, 2]]), 2);
        assert_eq!(tableau.height(1), 2);
        assert_eq!(tableau.height(2), 1);
        assert_eq!(tableau.sign(), Sign::Negative);
    }

    #[test]
    fn test_equality_ignores_label_alphabet() {
        let a = RimHookTableau::new(grid_from_rows(&[&[1, 1]]), 1);
        let b = RimHookTableau::new(grid_from_rows(&[&[1, 1]]), 7);
        assert_eq!(a, b);
    }
}
