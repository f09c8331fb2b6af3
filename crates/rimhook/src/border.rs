//! Outer-border scanning and rim hook placement.
//!
//! A rim hook is inserted by choosing a contiguous window of border cells in
//! scan order, labeling the window, and keeping the result only when the
//! unfilled complement is still a legal staircase.

use crate::types::{Cell, Grid};
use tracing::instrument;

/// A cell coordinate: row index in French notation (top row 0), column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Coord {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

// ─────────────────────────────────────────────────────────────
//  Border scan
// ─────────────────────────────────────────────────────────────

/// Collects the unfilled cells on the current outer border, in scan order
/// (rows top to bottom, columns left to right).
///
/// An empty cell qualifies if it sits in the last row, in column 0, directly
/// above a filled cell, or diagonally above-right of a filled cell. Column 0
/// is always part of the border: the rows below it can only be longer in
/// French notation, so its cells are never interior.
#[instrument(skip(grid))]
pub(crate) fn border_candidates(grid: &Grid) -> Vec<Coord> {
    let mut candidates = Vec::new();
    let last_row = grid.row_count() - 1;
    let filled = |r: usize, c: usize| matches!(grid.cell(r, c), Some(other) if !other.is_empty());

    for (row, cells) in grid.rows().iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if !cell.is_empty() {
                continue;
            }
            let on_border = row == last_row
                || col == 0
                || filled(row + 1, col)
                || filled(row + 1, col - 1);
            if on_border {
                candidates.push(Coord { row, col });
            }
        }
    }

    candidates
}

// ─────────────────────────────────────────────────────────────
//  Hook placement
// ─────────────────────────────────────────────────────────────

/// Produces every grid reachable from `grid` by placing one connected rim
/// hook of `hook_length` cells on the current outer border.
///
/// The input grid is never mutated; every returned grid is an independent
/// copy, so divergent extensions of the same partial grid cannot alias.
/// When fewer border cells than `hook_length` are available, the input grid
/// is returned unchanged: a dead end that the enumerator's completeness
/// filter discards after the final hook.
#[instrument(skip(grid))]
pub(crate) fn extend(grid: &Grid, hook_length: usize) -> Vec<Grid> {
    assert!(hook_length > 0, "cannot insert a hook of length zero");
    assert!(grid.row_count() > 0, "grid cannot be empty");

    let candidates = border_candidates(grid);
    if candidates.len() < hook_length {
        return vec![grid.clone()];
    }

    let label = grid.max_label() + 1;
    let mut placements = Vec::new();

    for window in candidates.windows(hook_length) {
        if !is_connected(window) {
            continue;
        }
        let mut next = grid.clone();
        for &Coord { row, col } in window {
            next.set(row, col, Cell::Hook(label));
        }
        if leaves_legal_border(&next, window) {
            placements.push(next);
        }
    }

    placements
}

/// Checks that no consecutive pair of window cells jumps strictly down and
/// right at once; such a jump would disconnect the strip.
fn is_connected(window: &[Coord]) -> bool {
    window
        .windows(2)
        .all(|pair| !(pair[1].row > pair[0].row && pair[1].col > pair[0].col))
}

/// Checks that no cell of the freshly labeled strip has an unfilled cell
/// directly below or directly to its left, which would leave a hole in the
/// staircase required of the complement.
fn leaves_legal_border(grid: &Grid, window: &[Coord]) -> bool {
    window.iter().all(|&Coord { row, col }| {
        let below_open = grid.cell(row + 1, col) == Some(Cell::Empty);
        let left_open = col > 0 && grid.cell(row, col - 1) == Some(Cell::Empty);
        !below_open && !left_open
    })
}
