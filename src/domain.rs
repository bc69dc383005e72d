//! Bounded integer domain.
//!
//! A [`Domain`] is an explicit, immutable inclusive range `[min, max]` that
//! every value-producing constructor takes by reference. An [`Elt`] can only
//! be obtained through [`Domain::value`], so holding an `Elt` is proof that
//! the underlying integer was inside the bound when it was created.
//!
//! # Invariants
//!
//! - `min <= max` (checked at construction)
//! - an `Elt` compares exactly like its underlying integer
//!
//! # Examples
//!
//! ```
//! use baxter_rs::domain::Domain;
//!
//! let dom = Domain::new(7);
//! let x = dom.value(3).unwrap();
//! assert_eq!(x.get(), 3);
//! assert!(dom.value(8).is_err());
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// An inclusive integer range shared by one logical run.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Domain {
    min: i64,
    max: i64,
}

impl Domain {
    /// Creates the domain `[1, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `max < 1`.
    pub fn new(max: i64) -> Self {
        Self::with_min(1, max)
    }

    /// Creates the domain `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn with_min(min: i64, max: i64) -> Self {
        assert!(min <= max, "Domain bounds must satisfy min <= max");
        Self { min, max }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of values in the domain.
    pub fn size(&self) -> usize {
        (self.max - self.min + 1) as usize
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Constructs a domain element, failing if `value` is out of bounds.
    pub fn value(&self, value: i64) -> Result<Elt> {
        if !self.contains(value) {
            return Err(Error::Domain {
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(Elt(value))
    }

    /// Parses a single textual integer token into a domain element.
    pub fn parse(&self, token: &str) -> Result<Elt> {
        let value = token
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::MalformedInput(format!("expected integer, got {:?}", token)))?;
        self.value(value)
    }

    /// All domain values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = Elt> + '_ {
        (self.min..=self.max).map(Elt)
    }

    /// Dense zero-based index of an element.
    pub fn index(&self, elt: Elt) -> usize {
        debug_assert!(self.contains(elt.0));
        (elt.0 - self.min) as usize
    }

    /// Element at a dense zero-based index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    pub fn at(&self, index: usize) -> Elt {
        assert!(index < self.size(), "Index {} is outside the domain", index);
        Elt(self.min + index as i64)
    }
}

/// A single value known to lie inside some [`Domain`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Elt(i64);

impl Elt {
    /// Returns the underlying integer.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Elt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Elt> for i64 {
    fn from(elt: Elt) -> Self {
        elt.0
    }
}
