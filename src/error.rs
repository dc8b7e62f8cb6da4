// src/error.rs
use thiserror::Error;

/// Malformed lattice parameters, rejected before any labeling happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatticeError
{
    #[error("Lattice size must be at least 1")]
    ZeroSize,

    #[error("Lattice dimension must be at least 1")]
    ZeroDimension,

    #[error("Bond lattices are only defined for dimension 1 or 2 (got {dimension})")]
    UnsupportedBondDimension { dimension: usize },

    #[error("Lattice with size {size} in {dimension} dimensions does not fit in memory indices")]
    TooLarge { size: usize, dimension: usize },

    #[error("Element count {found} does not match the lattice (expected {expected})")]
    InconsistentTotal { expected: usize, found: usize },

    #[error("Occupancy has {found} entries but the lattice has {expected} elements")]
    OccupancyLength { expected: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum PercolationError
{
    #[error("Invalid lattice: {0}")]
    Lattice(#[from] LatticeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not enough arguments: need filename containing parameters")]
    NotEnoughArguments,

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Bad delimiter in line \"{0}\"")]
    BadDelimiter(String),

    #[error("Could not parse parameter \"{name}\" from \"{value}\"")]
    InvalidParameter { name: String, value: String },

    #[error("Ensemble size must be non zero")]
    EmptyEnsemble,

    #[error("At least one occupation probability is needed")]
    NoProbabilities,

    #[error("Results length ({results}) should match probabilities length ({probabilities})")]
    LengthMismatch { probabilities: usize, results: usize },
}

pub type Result<T> = std::result::Result<T, PercolationError>;
