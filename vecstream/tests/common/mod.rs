//! Element types shared by the integration tests.

#![allow(dead_code)]

use std::fmt;

use vecstream::Vector;

/// A wrapped integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Int(pub i64);

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shorthand for a vector of `Int`.
pub fn ints(values: &[i64]) -> Vector<Int> {
    values.iter().copied().map(Int).collect()
}

/// Unwraps a slice of `Int`.
pub fn raw(values: &[Int]) -> Vec<i64> {
    values.iter().map(|x| x.0).collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pet {
    pub kind: String,
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Human {
    pub name: String,
    pub pets: Vector<Pet>,
}

impl fmt::Display for Human {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}]", self.name, self.pets)
    }
}
