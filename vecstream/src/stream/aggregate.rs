//! Terminal operations reading a stream down to a single value.

use std::cmp::Ordering;

use vecstream_container::Element;

use super::Stream;
use crate::error::{CollectionError, Result};

impl<T: Element> Stream<T> {
    /// Folds the elements from the left, starting from the first element.
    ///
    /// A single element is returned as is. An empty stream signals `EmptySequence`.
    ///
    /// # Examples
    /// ```
    /// use vecstream::Stream;
    ///
    /// assert_eq!(Stream::of(vec![1, 2, 3]).reduce(|a, b| a + b), Ok(6));
    /// assert!(Stream::<i32>::of(vec![]).reduce(|a, b| a + b).is_err());
    /// ```
    pub fn reduce<F: FnMut(T, T) -> T>(&self, reducer: F) -> Result<T> {
        self.log_terminal("reduce");
        self.elements
            .iter()
            .cloned()
            .reduce(reducer)
            .ok_or(CollectionError::EmptySequence { operation: "reduce" })
    }

    /// Returns the greatest element according to `comparator`.
    ///
    /// Of several greatest elements, the first is returned. An empty stream signals
    /// `EmptySequence`.
    pub fn max<F: FnMut(&T, &T) -> Ordering>(&self, mut comparator: F) -> Result<T> {
        self.log_terminal("max");
        self.select("max", |best, x| comparator(best, x) == Ordering::Less)
    }

    /// Returns the least element according to `comparator`.
    ///
    /// Of several least elements, the first is returned. An empty stream signals
    /// `EmptySequence`.
    pub fn min<F: FnMut(&T, &T) -> Ordering>(&self, mut comparator: F) -> Result<T> {
        self.log_terminal("min");
        self.select("min", |best, x| comparator(best, x) == Ordering::Greater)
    }

    /// Scans the elements, replacing the best so far whenever `replace(best, x)` holds.
    fn select<F: FnMut(&T, &T) -> bool>(&self, operation: &'static str, mut replace: F) -> Result<T> {
        let (first, rest) = self.elements.split_first().ok_or(CollectionError::EmptySequence { operation })?;
        let mut best = first;
        for x in rest {
            if replace(best, x) {
                best = x;
            }
        }
        Ok(best.clone())
    }

    /// Returns `true` if no element satisfies `predicate`; vacuously `true` when empty.
    pub fn none_match<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> bool {
        self.log_terminal("none_match");
        !self.elements.iter().any(&mut predicate)
    }

    /// Returns `true` if every element satisfies `predicate(element, index)`; vacuously `true`
    /// when empty.
    pub fn all_match<P: FnMut(&T, usize) -> bool>(&self, mut predicate: P) -> bool {
        self.log_terminal("all_match");
        self.elements.iter().enumerate().all(|(index, x)| predicate(x, index))
    }

    /// Returns `true` if some element satisfies `predicate(element, index)`; `false` when
    /// empty.
    pub fn any_match<P: FnMut(&T, usize) -> bool>(&self, mut predicate: P) -> bool {
        self.log_terminal("any_match");
        self.elements.iter().enumerate().any(|(index, x)| predicate(x, index))
    }
}
