//!
//! Borrowing iterator of `Sequence`
//!
use super::Sequence;

///
/// Iterator struct of Sequence
/// This can be created from `Sequence<T>.iter()`
pub struct SequenceIter<'a, T> {
    /// index of the next element
    index: usize,
    /// reference of the sequence
    sequence: &'a Sequence<T>,
}

impl<'a, T> SequenceIter<'a, T> {
    pub(crate) fn new(sequence: &'a Sequence<T>) -> SequenceIter<'a, T> {
        SequenceIter { index: 0, sequence }
    }
}

impl<'a, T> Iterator for SequenceIter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.sequence.get(self.index)?;
        self.index += 1;
        Some(item)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.sequence.len() - self.index;
        (rest, Some(rest))
    }
}

impl<'a, T> ExactSizeIterator for SequenceIter<'a, T> {}
