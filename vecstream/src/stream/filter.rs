//! Operators that select a subset of a stream.

use std::collections::HashSet;
use std::hash::Hash;

use vecstream_container::Element;

use super::Stream;
use crate::error::{CollectionError, Result};

impl<T: Element> Stream<T> {
    /// Returns a new stream containing only the elements satisfying `predicate(element, index)`.
    ///
    /// # Examples
    /// ```
    /// use vecstream::Stream;
    ///
    /// let stream = Stream::of(vec![1, 2, 2, 3, 4, 3, 100]);
    /// let later = stream.filter(|_, index| index > 2);
    /// assert_eq!(later.as_slice(), &[3, 4, 3, 100]);
    /// assert_eq!(stream.len(), 7);
    /// ```
    pub fn filter<P: FnMut(&T, usize) -> bool>(&self, mut predicate: P) -> Stream<T> {
        let elements = self.elements
            .iter()
            .enumerate()
            .filter(|(index, x)| predicate(*x, *index))
            .map(|(_, x)| x.clone())
            .collect();
        self.derive("filter", elements)
    }

    /// Returns a new stream without the first `count` elements.
    ///
    /// Signals `CountOutOfRange` if `count` exceeds the length.
    pub fn skip(&self, count: usize) -> Result<Stream<T>> {
        let tail = self.elements.get(count..).ok_or(CollectionError::CountOutOfRange { count, len: self.len() })?;
        Ok(self.derive("skip", tail.to_vec()))
    }

    /// Returns a new stream of the first `count` elements.
    ///
    /// Signals `CountOutOfRange` if `count` exceeds the length.
    pub fn limit(&self, count: usize) -> Result<Stream<T>> {
        let head = self.elements.get(..count).ok_or(CollectionError::CountOutOfRange { count, len: self.len() })?;
        Ok(self.derive("limit", head.to_vec()))
    }

    /// Returns a new stream containing each distinct element exactly once.
    ///
    /// The order of the result is unspecified, and in particular need not follow first
    /// occurrence. Sort the result if a particular order is required.
    ///
    /// # Examples
    /// ```
    /// use vecstream::Stream;
    ///
    /// let distinct = Stream::of(vec![1, 2, 2, 3, 4, 3, 100])
    ///     .distinct()
    ///     .sort(|a, b| a < b);
    /// assert_eq!(distinct.as_slice(), &[1, 2, 3, 4, 100]);
    /// ```
    pub fn distinct(&self) -> Stream<T> where T: Eq + Hash {
        let seen: HashSet<T> = self.elements.iter().cloned().collect();
        self.derive("distinct", seen.into_iter().collect())
    }
}
