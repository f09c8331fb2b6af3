//! Enumeration of every rim hook tableau for one shape and weight.

use crate::border;
use crate::error::ValidationError;
use crate::tableau::{RimHookTableau, Sign};
use crate::types::Grid;
use tracing::instrument;

/// Every rim hook tableau of a given shape and content, in French notation:
/// the first shape entry is the topmost (shortest) row, and weight entries
/// are inserted left to right, the k-th entry labeling its cells `k`.
///
/// The result set is built once at construction and queried read-only
/// afterward. Structurally identical grids reached through different border
/// windows are kept as separate entries: the aggregate sign counts
/// multiplicities, matching the character-formula semantics.
///
/// # Example
///
/// ```
/// use rimhook::RimHookTableaux;
///
/// let tableaux = RimHookTableaux::new(vec![1, 2, 3, 4], vec![3, 4, 2, 1]).unwrap();
/// assert_eq!(tableaux.len(), 4);
/// assert_eq!(
///     tableaux.tableaux()[0].rows(),
///     vec![vec![2], vec![2, 2], vec![1, 2, 3], vec![1, 1, 3, 4]],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RimHookTableaux {
    shape: Vec<usize>,
    weight: Vec<usize>,
    tableaux: Vec<RimHookTableau>,
}

impl RimHookTableaux {
    /// Enumerates every rim hook tableau of the given shape and weight.
    ///
    /// Seeds a single empty grid, then folds the weight sequence through
    /// the border extender, carrying every live partial grid forward.
    /// Grids still holding unfilled cells after the last hook are dropped.
    /// An empty result set is a valid outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the shape or weight is empty,
    /// contains a zero entry, the totals disagree, or the shape is not
    /// non-decreasing in French notation.
    #[instrument]
    pub fn new(shape: Vec<usize>, weight: Vec<usize>) -> Result<Self, ValidationError> {
        validate(&shape, &weight)?;

        let mut working = vec![Grid::from_shape(&shape)];
        for &hook_length in &weight {
            working = working
                .iter()
                .flat_map(|grid| border::extend(grid, hook_length))
                .collect();
        }

        let labels = weight.len();
        let tableaux = working
            .into_iter()
            .filter(Grid::is_complete)
            .map(|grid| RimHookTableau::new(grid, labels))
            .collect();

        Ok(Self {
            shape,
            weight,
            tableaux,
        })
    }

    /// Returns the shape the set was built from.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the weight the set was built from.
    pub fn weight(&self) -> &[usize] {
        &self.weight
    }

    /// Returns the enumerated tableaux in generation order.
    pub fn tableaux(&self) -> &[RimHookTableau] {
        &self.tableaux
    }

    /// Returns the number of tableaux in the set.
    pub fn len(&self) -> usize {
        self.tableaux.len()
    }

    /// Checks whether no valid filling exists.
    pub fn is_empty(&self) -> bool {
        self.tableaux.is_empty()
    }

    /// Iterates over the tableaux in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, RimHookTableau> {
        self.tableaux.iter()
    }

    /// Returns the itemized signs, one per tableau in iteration order.
    pub fn signs(&self) -> Vec<Sign> {
        self.tableaux.iter().map(RimHookTableau::sign).collect()
    }

    /// Sums the signs of every tableau in the set: the Murnaghan-Nakayama
    /// value of the irreducible character indexed by the shape, evaluated
    /// at the cycle type given by the weight.
    #[instrument(skip(self))]
    pub fn character(&self) -> i64 {
        self.tableaux.iter().map(|tableau| tableau.sign().value()).sum()
    }
}

impl<'a> IntoIterator for &'a RimHookTableaux {
    type Item = &'a RimHookTableau;
    type IntoIter = std::slice::Iter<'a, RimHookTableau>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for RimHookTableaux {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, tableau) in self.tableaux.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            tableau.fmt(f)?;
        }
        Ok(())
    }
}

/// Computes the Murnaghan-Nakayama character value for one (shape, weight)
/// pair in a single call.
///
/// # Errors
///
/// Returns a [`ValidationError`] under the same conditions as
/// [`RimHookTableaux::new`].
#[instrument]
pub fn character(shape: Vec<usize>, weight: Vec<usize>) -> Result<i64, ValidationError> {
    Ok(RimHookTableaux::new(shape, weight)?.character())
}

/// Validates the data-model invariants of a (shape, weight) pair, failing
/// fast before any search begins.
fn validate(shape: &[usize], weight: &[usize]) -> Result<(), ValidationError> {
    if shape.is_empty() {
        return Err(ValidationError::EmptyShape);
    }
    if weight.is_empty() {
        return Err(ValidationError::EmptyWeight);
    }
    if let Some(index) = shape.iter().position(|&len| len == 0) {
        return Err(ValidationError::ZeroRow { index });
    }
    if let Some(index) = weight.iter().position(|&len| len == 0) {
        return Err(ValidationError::ZeroHook { index });
    }

    let shape_total: usize = shape.iter().sum();
    let weight_total: usize = weight.iter().sum();
    if shape_total != weight_total {
        return Err(ValidationError::TotalMismatch {
            shape: shape_total,
            weight: weight_total,
        });
    }

    if let Some(index) = (1..shape.len()).find(|&i| shape[i] < shape[i - 1]) {
        return Err(ValidationError::DecreasingShape { index });
    }

    Ok(())
}
