//! A resizable, ordered sequence with index-based mutation and search.
//!
//! Mutating methods return `&mut Self` so that calls chain:
//!
//! ```
//! use vecstream::Vector;
//!
//! let mut vector = Vector::new();
//! vector.push(1).push(2).push(3).push(100).push(1);
//! assert_eq!(vector.index_of(&100), Some(3));
//! assert_eq!(vector.last_index_of(&1), Some(4));
//! assert_eq!(vector.to_string(), "1, 2, 3, 100, 1");
//! ```
//!
//! Out-of-range arguments are signaled with a [`CollectionError`] wherever the operation
//! would otherwise have nothing sensible to do. The exceptions are [`Vector::delete`] and
//! [`Vector::delete_all`], which ignore indices that address nothing, and [`Vector::pop`] and
//! [`Vector::get_or_default`], which fall back to a default value.
//!
//! A `Vector` has no internal synchronization; sharing one between threads is the caller's
//! responsibility.

use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;
use vecstream_container::{Container, Element};

use crate::error::{CollectionError, Result};
use crate::stream::Stream;

/// An ordered, mutable, resizable sequence of elements.
///
/// Every index in `0 .. len()` holds an element. Clones and sub-slices are independent copies
/// that share no storage with their source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector<T> {
    elements: Vec<T>,
}

impl<T> Vector<T> {
    /// Creates an empty vector.
    pub fn new() -> Self {
        Vector { elements: Vec::new() }
    }
}

impl<T: Element> Vector<T> {
    /// Appends `value` at the end.
    #[inline]
    pub fn push(&mut self, value: T) -> &mut Self {
        self.elements.push(value);
        self
    }

    /// Removes and returns the last element.
    ///
    /// An empty vector yields `T::default()`, which is indistinguishable from popping a
    /// default-valued element; check [`Vector::is_empty`] first when that matters.
    pub fn pop(&mut self) -> T where T: Default {
        self.elements.pop().unwrap_or_default()
    }

    /// Returns the element at `index`, or `IndexOutOfRange`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.elements.get(index).ok_or(CollectionError::IndexOutOfRange { index, len: self.len() })
    }

    /// Returns a copy of the element at `index`, or `default` if there is none.
    pub fn get_or_default(&self, index: usize, default: T) -> T {
        self.elements.get(index).cloned().unwrap_or(default)
    }

    /// Replaces the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<&mut Self> {
        let len = self.len();
        if index >= len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        self.elements[index] = value;
        Ok(self)
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// `index` may equal `len()`, which appends.
    pub fn add_at(&mut self, index: usize, value: T) -> Result<&mut Self> {
        let len = self.len();
        if index > len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        self.elements.insert(index, value);
        Ok(self)
    }

    /// Inserts all elements of `other` starting at `index`, in order.
    pub fn add_vector_at(&mut self, index: usize, other: &Vector<T>) -> Result<&mut Self> {
        let len = self.len();
        if index > len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        let tail = self.elements.split_off(index);
        self.elements.extend(other.elements.iter().cloned());
        self.elements.extend(tail);
        Ok(self)
    }

    /// Appends all elements of `other`.
    pub fn add_vector(&mut self, other: &Vector<T>) -> &mut Self {
        self.add_array(other.to_slice())
    }

    /// Appends all elements of `other`.
    pub fn add_array(&mut self, other: &[T]) -> &mut Self {
        self.elements.extend_from_slice(other);
        self
    }

    /// Appends each of `values`.
    pub fn add_args<I: IntoIterator<Item=T>>(&mut self, values: I) -> &mut Self {
        self.elements.extend(values);
        self
    }

    /// Removes the element at `index`, shifting later elements left.
    ///
    /// An index past the end removes nothing.
    pub fn delete(&mut self, index: usize) -> &mut Self {
        if index < self.len() {
            self.elements.remove(index);
        }
        self
    }

    /// Removes every occurrence of `value`.
    pub fn delete_element(&mut self, value: &T) -> &mut Self {
        self.elements.retain(|x| x != value);
        self
    }

    /// Removes every occurrence of every element of `others`.
    pub fn delete_all_elements<C: Container<Item=T>>(&mut self, others: &C) -> &mut Self {
        self.elements.retain(|x| !others.contains_item(x));
        self
    }

    /// Removes the elements at `indices` in a single pass.
    ///
    /// The indices need not be sorted or distinct; those past the end are ignored. Surviving
    /// elements keep their relative order.
    pub fn delete_all(&mut self, indices: &[usize]) -> &mut Self {
        let doomed: HashSet<usize> = indices.iter().copied().collect();
        let mut index = 0;
        self.elements.retain(|_| {
            let keep = !doomed.contains(&index);
            index += 1;
            keep
        });
        self
    }

    /// Removes the elements in `[from, to)`.
    pub fn remove_range(&mut self, from: usize, to: usize) -> Result<&mut Self> {
        let len = self.len();
        if from > to || to > len {
            return Err(CollectionError::RangeOutOfBounds { from, to, len });
        }
        let tail = self.elements.split_off(to);
        self.elements.truncate(from);
        self.elements.extend(tail);
        Ok(self)
    }

    /// Removes every element for which `predicate(element, index)` holds.
    ///
    /// Indices passed to `predicate` are positions before any removal. Returns `true` if
    /// anything was removed.
    pub fn delete_if<F: FnMut(&T, usize) -> bool>(&mut self, mut predicate: F) -> bool {
        let before = self.len();
        let mut index = 0;
        self.elements.retain(|x| {
            let doomed = predicate(x, index);
            index += 1;
            !doomed
        });
        self.len() < before
    }

    /// The position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.elements.iter().position(|x| x == value)
    }

    /// The position of the last element equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.elements.iter().rposition(|x| x == value)
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns `true` if every element of `other` is present in `self`.
    ///
    /// Despite the name this only checks containment; `self` is not modified, and elements
    /// absent from `other` are not removed.
    pub fn retain_all<C: Container<Item=T>>(&self, other: &C) -> bool {
        other.iter().all(|x| self.contains(x))
    }

    /// Replaces every element with `mapper(element)`.
    pub fn replace_all<F: FnMut(&T) -> T>(&mut self, mut mapper: F) -> &mut Self {
        for element in self.elements.iter_mut() {
            let replacement = mapper(element);
            *element = replacement;
        }
        self
    }

    /// Sorts the elements in place, where `less(a, b)` reports whether `a` precedes `b`.
    ///
    /// The sort is stable. `less` must describe a strict weak order.
    pub fn sort<F: FnMut(&T, &T) -> bool>(&mut self, mut less: F) -> &mut Self {
        self.elements.sort_by(|a, b| crate::ordering(&mut less, a, b));
        self
    }

    /// Copies the elements in `[from, to)` into a new vector.
    pub fn sub_slice(&self, from: usize, to: usize) -> Result<Vector<T>> {
        let len = self.len();
        if from > to || to > len {
            return Err(CollectionError::RangeOutOfBounds { from, to, len });
        }
        Ok(Vector::from(self.elements[from..to].to_vec()))
    }

    /// Calls `f(element, index)` on each element, in order.
    pub fn for_each<F: FnMut(&T, usize)>(&self, mut f: F) {
        for (index, element) in self.elements.iter().enumerate() {
            f(element, index);
        }
    }

    /// Removes all elements.
    pub fn clear(&mut self) -> &mut Self {
        self.elements.clear();
        self
    }

    /// The number of elements.
    #[inline]
    pub fn len(&self) -> usize { self.elements.len() }
    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    /// The elements as a slice, borrowed from the vector's own storage.
    #[inline]
    pub fn to_slice(&self) -> &[T] {
        &self.elements
    }

    /// An iterator over the elements by reference.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns a stream over a snapshot of the current elements.
    ///
    /// Later changes to `self` are not visible to the stream, and vice versa.
    pub fn stream(&self) -> Stream<T> {
        Stream::from(self.elements.clone())
    }

    /// Unwraps the backing `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Element> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.elements.iter().join(", "))
    }
}

impl<T: Element> Container for Vector<T> {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    #[inline(always)]
    fn len(&self) -> usize { self.elements.len() }

    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(elements: Vec<T>) -> Self {
        Vector { elements }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        Vector { elements: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        self.elements.extend(iter)
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
