//! Error types for molecular operations
//!
//! Provides error types for building and manipulating molecular data.

use thiserror::Error;

/// Errors that can occur when working with molecular data
#[derive(Error, Debug, Clone)]
pub enum MolError {
    /// Atom symbol not present in the element table
    #[error("Unknown atom symbol: {0}")]
    UnknownSymbol(String),

    /// Atom index is out of bounds
    #[error("Atom index {0} is out of bounds (atom count: {1})")]
    AtomIndexOutOfBounds(u32, usize),

    /// Bond endpoints coincide, so the bond direction is undefined
    #[error("Degenerate bond: atoms {0} and {1} coincide")]
    DegenerateBond(u32, u32),

    /// Element data source could not be parsed
    #[error("Invalid element data: {0}")]
    InvalidElementData(String),
}

/// Result type alias for molecular operations
pub type MolResult<T> = Result<T, MolError>;
