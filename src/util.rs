use std::cmp::Ordering;

#[derive(Ord, PartialOrd, Eq, PartialEq, Copy, Clone, Debug, Hash, Default)]
pub struct UnorderedPair<T: Ord>(pub T, pub T);

impl<T: Ord> UnorderedPair<T> {
    pub fn new(a: T, b: T) -> Self {
        match &a.cmp(&b) {
            Ordering::Less => Self(a, b),
            // stable
            Ordering::Equal => Self(a, b),
            Ordering::Greater => Self(b, a),
        }
    }
}

impl<T: Ord> From<(T, T)> for UnorderedPair<T> {
    fn from((a, b): (T, T)) -> Self {
        Self::new(a, b)
    }
}

/// The (n-1)th harmonic number, `a_1` in Tajima (1989) eqn 3.
///
/// This is an empty sum, i.e. 0, for `n < 2`.
pub fn harmonic(n: usize) -> f64 {
    (1..n).map(|i| 1f64 / i as f64).sum()
}

/// The (n-1)th harmonic number of squared reciprocals, `a_2` in Tajima (1989) eqn 4.
pub fn harmonic_squares(n: usize) -> f64 {
    (1..n).map(|i| 1f64 / (i * i) as f64).sum()
}
