//!
//! `Sequence` Wrapper of growable ordered list
//!
//! Elements are appended to and removed from the end only.
//! Index `i` is valid iff `0 <= i < len`.
//!
use crate::error::{Error, Result};
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
pub mod iter;
pub use iter::SequenceIter;

/// `Sequence` struct
///
/// An ordered, mutable list of `T` backed by `std::Vec`.
/// Equality is structural: same length and pairwise-equal elements.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Sequence<T> {
    /// Backend storage of the Sequence
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    /// Create an empty sequence
    pub fn new() -> Sequence<T> {
        Sequence {
            elements: Vec::new(),
        }
    }
    /// Create an empty sequence with room for at least `capacity` elements
    pub fn with_capacity(capacity: usize) -> Sequence<T> {
        Sequence {
            elements: Vec::with_capacity(capacity),
        }
    }
    /// Get the number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    /// Get the size of the backing allocation.
    /// `self.capacity() >= self.len()` always holds.
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    ///
    /// Append `value` as the new last element.
    ///
    /// Returns `&mut self` so pushes can be chained:
    /// `s.push(1).push(2)`
    pub fn push(&mut self, value: T) -> &mut Self {
        self.elements.push(value);
        trace!("push: len={}", self.elements.len());
        self
    }
    ///
    /// Remove the last element and return it.
    ///
    /// On an empty sequence nothing is modified and
    /// `Error::EmptySequence` is returned.
    pub fn pop(&mut self) -> Result<T> {
        match self.elements.pop() {
            Some(value) => {
                trace!("pop: len={}", self.elements.len());
                Ok(value)
            }
            None => {
                debug!("pop: called on an empty sequence");
                Err(Error::EmptySequence)
            }
        }
    }
    /// Reference to the last element, if any
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }
    /// Reference to the element at `index`, or `None` if out of range
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
    /// Get an iterator on elements in ascending index order.
    pub fn iter<'a>(&'a self) -> SequenceIter<'a, T> {
        SequenceIter::new(self)
    }
    ///
    /// Call `visit(element, index)` once for every element,
    /// in ascending index order.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, element) in self.elements.iter().enumerate() {
            visit(element, index);
        }
    }
    ///
    /// Check if any element satisfies `predicate(element, index)`.
    ///
    /// Elements are tested in ascending index order and the scan stops
    /// at the first match. Always `false` on an empty sequence.
    pub fn exists<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.elements
            .iter()
            .enumerate()
            .any(|(index, element)| predicate(element, index))
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Structural equality, same as `==`
    pub fn equals(&self, other: &Sequence<T>) -> bool {
        self.elements == other.elements
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Sequence<T> {
        Sequence::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Sequence<T> {
        Sequence { elements }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter)
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = SequenceIter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Implement index access, s[i]
/// Panics if `index >= len`, same as slices.
impl<T> Index<usize> for Sequence<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

/// Implement index write access, s[i] = 10
impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.elements[index]
    }
}

impl<T: PartialEq> PartialEq<[T]> for Sequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.elements.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Sequence<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.elements.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Sequence<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.elements == other
    }
}

/// Format as `[a, b, c]`
impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "]")
    }
}
