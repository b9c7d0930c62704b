//! Specifications for elements and containers

#![forbid(missing_docs)]

use std::fmt::Display;

/// A type that can be held by a vecstream collection.
///
/// Elements must support equality, which backs search, membership and deduplication, and
/// conversion to a display string. We also require [`Clone`], as every derived collection is
/// an independent copy of its source rather than a view into it.
///
/// The trait is implemented for all types meeting these bounds.
pub trait Element: Clone + PartialEq + Display { }

impl<T: Clone + PartialEq + Display> Element for T { }

/// An ordered sequence that can reveal its contents by reference.
///
/// Bulk operations that accept "some other collection" are written against this trait, so
/// that a `Vec`, a `Vector` and a `Stream` of the same element type are interchangeable.
pub trait Container {
    /// The type of elements held by the container.
    type Item: Element;

    /// Iterator type when reading from the container.
    type Iter<'a>: Iterator<Item=&'a Self::Item> where Self: 'a;

    /// The number of elements in this container.
    fn len(&self) -> usize;

    /// Determine if the container contains any elements, corresponding to `len() == 0`.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator that reads the contents of this container, in order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if some element of the container equals `item`.
    #[inline]
    fn contains_item(&self, item: &Self::Item) -> bool {
        self.iter().any(|x| x == item)
    }
}

impl<T: Element> Container for Vec<T> {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    #[inline(always)]
    fn len(&self) -> usize { Vec::len(self) }
    #[inline(always)]
    fn is_empty(&self) -> bool { Vec::is_empty(self) }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

mod rc {
    use std::ops::Deref;
    use std::rc::Rc;

    use crate::Container;

    impl<C: Container> Container for Rc<C> {
        type Item = C::Item;
        type Iter<'a> = C::Iter<'a> where Self: 'a;

        fn len(&self) -> usize { self.deref().len() }

        fn iter(&self) -> Self::Iter<'_> {
            self.deref().iter()
        }
    }
}
