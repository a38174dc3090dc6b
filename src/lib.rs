//! Diversity statistics from a set of aligned sequences: the Pi estimator,
//! Watterson's estimator and Tajima's D.
//!
//! ```
//! let sequences = ["ACGTACGT", "ACGAACGT", "ACGTACCT", "ACGTACGT"];
//! let d = tajimas_d::tajimas_d(&sequences).unwrap();
//! assert!(d.is_finite());
//! ```

pub mod adapter;
mod alignment;
pub mod iter;
pub mod stats;
mod util;


pub use alignment::*;
pub use stats::{
    pi_estimator, pi_estimator_unchecked, tajimas_d, watterson_estimator,
    watterson_estimator_unchecked,
};
pub use util::{harmonic, harmonic_squares, UnorderedPair};

pub type PopgenResult<T> = Result<T, PopgenError>;

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum PopgenError {
    #[error("invalid sequence set: {0}")]
    InvalidInput(InvalidInput),
    #[error(
        "Tajima's D is undefined for {num_samples} sequences with \
         {segregating_sites} segregating sites: variance term is not positive"
    )]
    UndefinedStatistic {
        segregating_sites: usize,
        num_samples: usize,
    },
    #[error("io error: {0}")]
    Io(std::io::Error),
    #[cfg(feature = "noodles")]
    #[error("couldn't handle FASTA: {0}")]
    NoodlesFasta(std::io::Error),
}

/// Why a set of sequences can't be treated as an alignment.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("at least 2 sequences are required; got {found}")]
    TooFewSequences { found: usize },
    #[error("sequences are empty")]
    EmptySequences,
    #[error("sequence {index} has length {found}, expected {expected} (the length of sequence 0)")]
    MismatchedLength {
        index: usize,
        expected: usize,
        found: usize,
    },
}

impl From<InvalidInput> for PopgenError {
    fn from(e: InvalidInput) -> Self {
        PopgenError::InvalidInput(e)
    }
}

impl From<std::io::Error> for PopgenError {
    fn from(e: std::io::Error) -> Self {
        PopgenError::Io(e)
    }
}

impl PopgenError {
    /// `true` for errors caused by the sequences themselves rather than by I/O.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PopgenError::InvalidInput(_))
    }
}
