//! Record-by-record transformations.

use vecstream_container::Element;

use super::Stream;

impl<T: Element> Stream<T> {
    /// Replaces each element with `mapper(element, index)`, in place.
    ///
    /// # Examples
    /// ```
    /// use vecstream::Stream;
    ///
    /// let negated = Stream::of(vec![1, 2, 3, 4]).map(|x, _| -x);
    /// assert!(negated.none_match(|x| *x > -1));
    /// ```
    pub fn map<F: FnMut(&T, usize) -> T>(mut self, mut mapper: F) -> Self {
        for (index, element) in self.elements.iter_mut().enumerate() {
            let replacement = mapper(element, index);
            *element = replacement;
        }
        self.log_operator("map", self.elements.len());
        self
    }
}

/// Produces a stream of `mapper(element, index)` for each element of `stream`.
///
/// Unlike [`Stream::map`], the element type may change, and `stream` is left as it was.
///
/// # Examples
/// ```
/// use vecstream::{stream_map, Stream};
///
/// let stream = Stream::of(vec![1, 20, 300]);
/// let lengths = stream_map(&stream, |x, _| x.to_string().len());
/// assert_eq!(lengths.as_slice(), &[1, 2, 3]);
/// ```
pub fn stream_map<T, R, F>(stream: &Stream<T>, mut mapper: F) -> Stream<R>
where
    T: Element,
    R: Element,
    F: FnMut(&T, usize) -> R,
{
    let elements = stream.elements.iter().enumerate().map(|(index, x)| mapper(x, index)).collect();
    stream.derive("stream_map", elements)
}

/// Produces a stream of all elements of `mapper(element, index)` for each element of
/// `stream`, concatenated in order.
///
/// The mapper may return any iterable, a [`Stream`] included.
///
/// # Examples
/// ```
/// use vecstream::{stream_flat_map, Stream};
///
/// let stream = Stream::of(vec![1usize, 2, 3]);
/// let flat = stream_flat_map(&stream, |x, _| Stream::of(vec![*x; *x]));
/// assert_eq!(flat.as_slice(), &[1, 2, 2, 3, 3, 3]);
/// ```
pub fn stream_flat_map<T, R, I, F>(stream: &Stream<T>, mut mapper: F) -> Stream<R>
where
    T: Element,
    R: Element,
    I: IntoIterator<Item=R>,
    F: FnMut(&T, usize) -> I,
{
    let elements = stream.elements.iter().enumerate().flat_map(|(index, x)| mapper(x, index)).collect();
    stream.derive("stream_flat_map", elements)
}
