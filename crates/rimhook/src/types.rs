//! Core domain types for rim hook tableaux.

use serde::{Deserialize, Serialize};

/// A single cell of a tableau grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unfilled cell.
    Empty,
    /// Cell occupied by the rim hook with the given label (1-based).
    Hook(usize),
}

impl Cell {
    /// Checks whether the cell is still unfilled.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the hook label, or `None` for an unfilled cell.
    pub fn label(self) -> Option<usize> {
        match self {
            Cell::Empty => None,
            Cell::Hook(label) => Some(label),
        }
    }
}

/// A partially or fully labeled grid in French notation.
///
/// Row 0 is the topmost (shortest) row; row lengths are fixed by the shape
/// the grid was seeded from and never change. Filled cells never change
/// value once set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    /// Rows of cells, top row first.
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates an all-empty grid with the given row lengths.
    pub fn from_shape(shape: &[usize]) -> Self {
        Self {
            rows: shape.iter().map(|&len| vec![Cell::Empty; len]).collect(),
        }
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the rows of the grid, top row first.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Gets the cell at the given coordinate, or `None` outside the shape.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Sets a cell. The caller guarantees the coordinate lies inside the
    /// shape and that the cell has not been filled before.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.rows[row][col] = cell;
    }

    /// Checks whether every cell is filled.
    pub fn is_complete(&self) -> bool {
        self.rows.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Returns the largest hook label present anywhere in the grid, or 0
    /// for a grid with no filled cells.
    pub fn max_label(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter_map(|cell| cell.label())
            .max()
            .unwrap_or(0)
    }

    /// Returns the row-length profile of the grid.
    pub fn shape(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    /// Returns the number of distinct rows containing the given label.
    pub fn height_of(&self, label: usize) -> usize {
        self.rows
            .iter()
            .filter(|row| row.contains(&Cell::Hook(label)))
            .count()
    }

    /// Returns the number of cells carrying the given label.
    pub fn count_of(&self, label: usize) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Hook(label))
            .count()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell.label() {
                    Some(label) => write!(f, "{label}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
