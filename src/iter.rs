use crate::Alignment;
use std::collections::HashSet;

pub struct Columns<'a, 's, S: AsRef<[u8]>> {
    pub(crate) inner: &'a Alignment<'s, S>,
    // half-open range of positions not yet yielded from the front and the back
    pub(crate) next_position: (usize, usize),
}

/// One position of an [`Alignment`], across every sequence.
#[derive(Debug)]
pub struct Column<'a, 's, S: AsRef<[u8]>> {
    pub(crate) inner: &'a Alignment<'s, S>,
    pub(crate) position: usize,
}

// derive would require S: Clone
impl<S: AsRef<[u8]>> Clone for Column<'_, '_, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner,
            position: self.position,
        }
    }
}

impl<S: AsRef<[u8]>> PartialEq for Column<'_, '_, S> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.inner, other.inner) && self.position == other.position
    }
}

impl<S: AsRef<[u8]>> Column<'_, '_, S> {
    pub fn position(&self) -> usize {
        self.position
    }

    /// The symbol carried by the first sequence at this position.
    pub fn reference(&self) -> u8 {
        self.inner.sequences()[0].as_ref()[self.position]
    }

    /// Every sequence's symbol at this position, in sequence order.
    pub fn symbols(&self) -> impl Iterator<Item = u8> + '_ {
        let position = self.position;
        self.inner
            .sequences()
            .iter()
            .map(move |seq| seq.as_ref()[position])
    }

    /// `true` if any sequence differs from the first at this position.
    ///
    /// Stops comparing at the first mismatch.
    pub fn is_segregating(&self) -> bool {
        let reference = self.reference();
        self.symbols().any(|symbol| symbol != reference)
    }

    pub fn num_distinct_symbols(&self) -> usize {
        self.symbols().collect::<HashSet<_>>().len()
    }
}

impl<'a, 's, S: AsRef<[u8]>> Iterator for Columns<'a, 's, S> {
    type Item = Column<'a, 's, S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_position.0 >= self.next_position.1 {
            return None;
        }

        let ret = Column {
            inner: self.inner,
            position: self.next_position.0,
        };
        self.next_position.0 += 1;
        Some(ret)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }

    fn count(self) -> usize {
        self.len()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }

    // recall that skip uses this internally
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next_position.0 = self
            .next_position
            .0
            .saturating_add(n)
            .min(self.next_position.1);
        self.next()
    }
}

impl<S: AsRef<[u8]>> DoubleEndedIterator for Columns<'_, '_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next_position.0 >= self.next_position.1 {
            return None;
        }

        self.next_position.1 -= 1;
        Some(Column {
            inner: self.inner,
            position: self.next_position.1,
        })
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        // no wrapping below the front cursor; an exhausted iterator stays exhausted
        self.next_position.1 = self
            .next_position
            .1
            .saturating_sub(n)
            .max(self.next_position.0);
        self.next_back()
    }
}

impl<S: AsRef<[u8]>> ExactSizeIterator for Columns<'_, '_, S> {
    fn len(&self) -> usize {
        self.next_position.1.saturating_sub(self.next_position.0)
    }
}

#[cfg(test)]
fn make_alignment_sequences() -> [&'static str; 3] {
    ["ACGTA", "ACCTA", "TCGTG"]
}

#[test]
fn test_iteration_over_unchecked_empty() {
    let sequences: [&str; 2] = ["", ""];
    let alignment = Alignment::new_unchecked(&sequences);
    assert_eq!(alignment.columns().count(), 0);
    assert_eq!(alignment.columns().rev().count(), 0);
}

#[test]
fn test_iter_count() {
    let sequences = make_alignment_sequences();
    let alignment = Alignment::new(&sequences).unwrap();
    assert_eq!(alignment.columns().count(), alignment.sequence_length());
    assert_eq!(alignment.columns().filter(|c| c.is_segregating()).count(), 3);

    let mut iter = alignment.columns();
    let _ = iter.next().unwrap();
    assert_eq!(iter.count(), 4);
}

#[test]
fn test_nth() {
    let sequences = make_alignment_sequences();
    let alignment = Alignment::new(&sequences).unwrap();
    let mut iter = alignment.columns();
    assert_eq!(iter.nth(2).map(|c| c.position()), Some(2));
    let mut iter = alignment.columns();
    let _ = iter.next().unwrap();
    assert_eq!(iter.nth(1).map(|c| c.position()), Some(2));
    assert!(alignment.columns().nth(5).is_none());
}

#[test]
fn test_nth_back() {
    let sequences = make_alignment_sequences();
    let alignment = Alignment::new(&sequences).unwrap();
    let mut iter = alignment.columns();
    assert_eq!(iter.nth_back(0).map(|c| c.position()), Some(4));
    assert_eq!(iter.nth_back(3).map(|c| c.position()), Some(0));
    assert!(iter.next().is_none());
}

#[test]
fn test_exhaust_back() {
    // make sure we don't panic on decrementing 0usize
    let sequences = make_alignment_sequences();
    let alignment = Alignment::new(&sequences).unwrap();
    let mut iter = alignment.columns();
    _ = iter.next_back();
    _ = iter.nth_back(2);
    assert!(iter.next_back().is_some());
    assert!(iter.next_back().is_none());
    assert!(iter.nth_back(10).is_none());
}

#[test]
fn test_front_and_back_meet() {
    let sequences = make_alignment_sequences();
    let alignment = Alignment::new(&sequences).unwrap();
    let mut iter = alignment.columns();
    assert_eq!(iter.next().map(|c| c.position()), Some(0));
    assert_eq!(iter.next_back().map(|c| c.position()), Some(4));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.last().map(|c| c.position()), Some(3));
}

#[test]
fn test_single_column_getters() {
    let sequences = make_alignment_sequences();
    let alignment = Alignment::new(&sequences).unwrap();
    let column = alignment.columns().next().unwrap();
    assert_eq!(column.reference(), b'A');
    assert_eq!(column.symbols().collect::<Vec<_>>(), b"AAT");
    assert!(column.is_segregating());
    assert_eq!(column.num_distinct_symbols(), 2);

    let column = alignment.columns().nth(1).unwrap();
    assert!(!column.is_segregating());
    assert_eq!(column.num_distinct_symbols(), 1);
}
