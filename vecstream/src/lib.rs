//! Vecstream provides a resizable vector and a chainable stream pipeline over it.
//!
//! The code is organized in crates that depend as little as possible on each other.
//!
//! **Containers**: The [`vecstream_container`] crate defines the [`Element`] bound, requiring
//! equality and display-string conversion, and the [`Container`] trait shared by every
//! sequence type.
//!
//! **Logging**: The [`vecstream_logging`] crate provides buffered, timestamped event logging,
//! which [`Stream`] uses to record the operators applied to it.
//!
//! **Collections**: This crate defines [`Vector`], an ordered sequence with index-based
//! mutation and search, and [`Stream`], a snapshot sequence with map, filter, reduce, sort,
//! distinct and flat-map operators.
//!
//! # Examples
//!
//! ```
//! use vecstream::{stream_flat_map, Vector};
//!
//! let mut vector = Vector::new();
//! vector.push(1).push(2).push(3).push(100);
//! vector.add_at(3, 200).unwrap();
//! assert_eq!(vector.to_slice(), &[1, 2, 3, 200, 100]);
//!
//! // streams take a snapshot, so the vector is unaffected.
//! let doubled = vector.stream().map(|x, _| x * 2);
//! assert_eq!(doubled.max(|a, b| a.cmp(b)), Ok(400));
//! assert_eq!(vector.len(), 5);
//!
//! let digits = stream_flat_map(&doubled, |x, _| x.to_string().chars().collect::<Vec<_>>());
//! assert_eq!(digits.len(), 9);
//! ```
//!
//! Neither type is synchronized, and streams are not `Send`; using one instance from several
//! threads is the caller's responsibility.

#![forbid(missing_docs)]

pub mod config;
pub mod error;
pub mod logging;
pub mod stream;
pub mod vector;

pub use config::Config;
pub use error::{CollectionError, Result};
pub use stream::{stream_flat_map, stream_map, Stream};
pub use vector::Vector;

pub use vecstream_container::{Container, Element};

/// Re-export of the `vecstream_container` crate.
pub mod container {
    pub use vecstream_container::*;
}

/// Re-export of the `vecstream_logging` crate.
pub mod logging_core {
    pub use vecstream_logging::*;
}

use std::cmp::Ordering;

/// Derives a total ordering of `a` and `b` from a strict "less than" predicate.
fn ordering<T, F: FnMut(&T, &T) -> bool>(less: &mut F, a: &T, b: &T) -> Ordering {
    if less(a, b) {
        Ordering::Less
    }
    else if less(b, a) {
        Ordering::Greater
    }
    else {
        Ordering::Equal
    }
}
