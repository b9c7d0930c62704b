//! Chainable, single-pass operations over a snapshot sequence.
//!
//! A [`Stream`] owns its elements outright. It is constructed from explicit values with
//! [`Stream::of`], or from a [`Vector`](crate::Vector) with `Vector::stream`, which copies
//! the vector's contents so that neither side observes later changes to the other.
//!
//! Operators come in two flavors. [`Stream::map`] and [`Stream::sort`] consume the stream and
//! return it with the same storage rearranged in place. [`Stream::filter`], [`Stream::skip`],
//! [`Stream::limit`], [`Stream::distinct`], [`stream_map`] and [`stream_flat_map`] leave their
//! input untouched and produce a fresh stream. Terminal operations such as
//! [`Stream::reduce`] read the stream down to a single value.
//!
//! ```
//! use vecstream::Stream;
//!
//! let total = Stream::of(vec![1, 2, 2, 3, 4, 3, 100])
//!     .filter(|_, index| index > 2)
//!     .map(|x, _| x * 2)
//!     .reduce(|a, b| a + b);
//!
//! assert_eq!(total, Ok(220));
//! ```
//!
//! Each operation rescans the whole current sequence; there is no cursor or exhaustion state.
//! When a [`CollectionLogger`] is attached with [`Stream::with_logger`], every operator and
//! terminal operation records an event, and derived streams inherit the logger.

mod aggregate;
mod filter;
mod map;

pub use map::{stream_flat_map, stream_map};

use std::fmt;
use std::rc::Rc;

use vecstream_container::{Container, Element};

use crate::logging::{CollectionLogger, OperatorEvent, TerminalEvent};
use crate::vector::Vector;

/// An ordered snapshot sequence supporting chained transformations.
#[derive(Clone)]
pub struct Stream<T> {
    elements: Vec<T>,
    logger: Option<CollectionLogger>,
}

impl<T> Stream<T> {
    /// Builds a stream over `elements`, carrying over the logger of `self`.
    fn derive<R>(&self, name: &'static str, elements: Vec<R>) -> Stream<R> {
        self.log_operator(name, elements.len());
        Stream {
            elements,
            logger: self.logger.as_ref().map(Rc::clone),
        }
    }

    fn log_operator(&self, name: &'static str, output: usize) {
        if let Some(logger) = &self.logger {
            logger.log(OperatorEvent::new(name, self.elements.len(), output).into());
        }
    }

    fn log_terminal(&self, name: &'static str) {
        if let Some(logger) = &self.logger {
            logger.log(TerminalEvent { name, input: self.elements.len() }.into());
        }
    }
}

impl<T: Element> Stream<T> {
    /// Creates a stream over `values`, in order.
    ///
    /// # Examples
    /// ```
    /// use vecstream::Stream;
    ///
    /// let stream = Stream::of(["a", "b"]);
    /// assert_eq!(stream.as_slice(), &["a", "b"]);
    /// ```
    pub fn of<I: IntoIterator<Item=T>>(values: I) -> Self {
        Stream {
            elements: values.into_iter().collect(),
            logger: None,
        }
    }

    /// Attaches `logger`, which records this stream's operations and those of the streams
    /// derived from it.
    pub fn with_logger(mut self, logger: CollectionLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// The attached logger, if any.
    pub fn logger(&self) -> Option<&CollectionLogger> {
        self.logger.as_ref()
    }

    /// Calls `f(element, index)` on each element, in order.
    pub fn for_each<F: FnMut(&T, usize)>(&self, mut f: F) {
        self.log_terminal("for_each");
        for (index, element) in self.elements.iter().enumerate() {
            f(element, index);
        }
    }

    /// Reorders the elements in place, where `less(a, b)` reports whether `a` precedes `b`.
    ///
    /// The sort is stable. `less` must describe a strict weak order.
    pub fn sort<F: FnMut(&T, &T) -> bool>(mut self, mut less: F) -> Self {
        self.elements.sort_by(|a, b| crate::ordering(&mut less, a, b));
        self.log_operator("sort", self.elements.len());
        self
    }

    /// Returns the first element, or `T::default()` if the stream is empty.
    pub fn find_first(&self) -> T where T: Default {
        self.log_terminal("find_first");
        self.elements.first().cloned().unwrap_or_default()
    }

    /// Returns some element, or `T::default()` if the stream is empty.
    ///
    /// Streams are evaluated sequentially, so this is always the first element.
    pub fn find_any(&self) -> T where T: Default {
        self.log_terminal("find_any");
        self.elements.first().cloned().unwrap_or_default()
    }

    /// The number of elements.
    #[inline]
    pub fn len(&self) -> usize { self.elements.len() }
    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Collects the elements into a [`Vector`].
    pub fn into_vector(self) -> Vector<T> {
        Vector::from(self.elements)
    }
}

impl<T> From<Vec<T>> for Stream<T> {
    fn from(elements: Vec<T>) -> Self {
        Stream { elements, logger: None }
    }
}

impl<T> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T: Element> Container for Stream<T> {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    #[inline(always)]
    fn len(&self) -> usize { self.elements.len() }

    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }
}

// The logger is summarized, as it has no useful `Debug` representation.
impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("elements", &self.elements)
            .field("logged", &self.logger.is_some())
            .finish()
    }
}
