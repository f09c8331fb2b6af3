//! Rim hook tableau enumeration for Murnaghan-Nakayama character values.
//!
//! A rim hook tableau is a filling of a partition shape (French notation,
//! shortest row first) by connected border strips of prescribed lengths,
//! inserted left to right from a weight sequence. Summing the sign of every
//! filling gives the value of an irreducible symmetric-group character: the
//! shape indexes the representation, the weight indexes the conjugacy class.
//!
//! # Architecture
//!
//! - **Border**: finds every placement of the next hook on the outer border
//! - **Tableau**: a completed grid with its height-parity sign
//! - **Tableaux**: drives the weight sequence and caches the result set
//!
//! # Example
//!
//! ```
//! use rimhook::RimHookTableaux;
//!
//! # fn example() -> Result<(), rimhook::ValidationError> {
//! let tableaux = RimHookTableaux::new(vec![1, 2, 3, 4], vec![3, 4, 2, 1])?;
//! assert_eq!(tableaux.len(), 4);
//! assert_eq!(tableaux.character(), 0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod border;
mod error;
mod tableau;
mod tableaux;
mod types;

// Crate-level exports - validation
pub use error::ValidationError;

// Crate-level exports - domain types
pub use types::{Cell, Grid};

// Crate-level exports - tableaux and signs
pub use tableau::{RimHookTableau, Sign};
pub use tableaux::{character, RimHookTableaux};

/// Alias for clarity in character computations.
pub type CharacterValue = i64;
