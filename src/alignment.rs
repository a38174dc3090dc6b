use crate::iter::Columns;
use crate::util::UnorderedPair;
use crate::{InvalidInput, PopgenResult};
use itertools::Itertools;

/// A borrowed set of sequences of equal length, compared symbol by symbol.
///
/// Sequences are anything viewable as bytes, so `&str`, `String` and `Vec<u8>` all work.
/// Construction through [`Alignment::new`] guarantees at least two sequences, all of the
/// same non-zero length; nothing here ever modifies the sequences.
#[derive(Debug)]
pub struct Alignment<'s, S: AsRef<[u8]>> {
    sequences: &'s [S],
}

// derive would require S: Clone/Copy
impl<S: AsRef<[u8]>> Clone for Alignment<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: AsRef<[u8]>> Copy for Alignment<'_, S> {}

/// The number of differing positions between one pair of sequences of an [`Alignment`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PairwiseDifference {
    pub pair: UnorderedPair<usize>,
    pub differences: usize,
}

/// Check that `sequences` can form an [`Alignment`].
///
/// # Errors
/// - [`InvalidInput::TooFewSequences`] if fewer than two sequences are given.
/// - [`InvalidInput::EmptySequences`] if the first sequence is empty.
/// - [`InvalidInput::MismatchedLength`] for the first sequence whose length differs from the first.
pub fn validate<S: AsRef<[u8]>>(sequences: &[S]) -> PopgenResult<()> {
    if sequences.len() < 2 {
        return Err(InvalidInput::TooFewSequences {
            found: sequences.len(),
        }
        .into());
    }

    let expected = sequences[0].as_ref().len();
    if expected == 0 {
        return Err(InvalidInput::EmptySequences.into());
    }

    if let Some((index, found)) = sequences
        .iter()
        .map(|seq| seq.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        return Err(InvalidInput::MismatchedLength {
            index,
            expected,
            found,
        }
        .into());
    }

    log::trace!(
        "validated {} sequences of length {}",
        sequences.len(),
        expected
    );
    Ok(())
}

/// The number of positions at which `a` and `b` differ.
///
/// Only the overlapping prefix is compared if the lengths differ.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

impl<'s, S: AsRef<[u8]>> Alignment<'s, S> {
    /// Validate `sequences` and wrap them.
    ///
    /// # Errors
    /// See [`validate`].
    pub fn new(sequences: &'s [S]) -> PopgenResult<Self> {
        validate(sequences)?;
        Ok(Self::new_unchecked(sequences))
    }

    /// Wrap `sequences` without validating them.
    ///
    /// Statistics computed from sequences that would fail [`validate`] are meaningless:
    /// they may be NaN, and differing lengths may panic on out-of-range positions.
    pub fn new_unchecked(sequences: &'s [S]) -> Self {
        Self { sequences }
    }

    pub fn sequences(&self) -> &'s [S] {
        self.sequences
    }

    pub fn get(&self, index: usize) -> Option<&'s [u8]> {
        self.sequences.get(index).map(AsRef::as_ref)
    }

    /// The number of sequences, `n`.
    pub fn num_sequences(&self) -> usize {
        self.sequences.len()
    }

    /// The length shared by every sequence, `L`.
    pub fn sequence_length(&self) -> usize {
        self.sequences.first().map_or(0, |seq| seq.as_ref().len())
    }

    pub fn columns(&self) -> Columns<'_, 's, S> {
        Columns {
            inner: self,
            next_position: (0, self.sequence_length()),
        }
    }

    /// The number of positions at which any sequence differs from the first.
    ///
    /// A position counts once no matter how many sequences differ there.
    pub fn segregating_sites(&self) -> usize {
        self.columns().filter(|column| column.is_segregating()).count()
    }

    /// The number of differing positions for every unordered pair of sequences.
    ///
    /// Pairs are yielded as `(0, 1), (0, 2), ..., (1, 2), ...`.
    pub fn pairwise_differences(&self) -> impl Iterator<Item = PairwiseDifference> + 's {
        let sequences: &'s [S] = self.sequences;
        sequences
            .iter()
            .map(AsRef::as_ref)
            .enumerate()
            .tuple_combinations()
            .map(|((i, a), (j, b))| PairwiseDifference {
                pair: UnorderedPair::new(i, j),
                differences: hamming_distance(a, b),
            })
    }

    /// Sum of [`hamming_distance`] over all `n choose 2` pairs of sequences.
    pub fn total_pairwise_differences(&self) -> usize {
        self.pairwise_differences().map(|pd| pd.differences).sum()
    }

    /// `n choose 2`.
    pub fn num_pairs(&self) -> usize {
        let n = self.num_sequences();
        n * n.saturating_sub(1) / 2
    }
}
