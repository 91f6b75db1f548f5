//! Half-open numeric ranges and splitting one range around another

use std::cmp::{max, min};
use std::fmt;

/// A non-empty half-open range `[start, start + length)`.
///
/// Empty ranges are not values of this type: constructors return `None`
/// instead, so "no range" can never be confused with a range that happens to
/// start at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumericRange {
    start: i64,
    length: i64,
}

impl NumericRange {
    /// `None` when `length <= 0` or the end would overflow `i64`
    pub fn new(start: i64, length: i64) -> Option<Self> {
        if length <= 0 {
            return None;
        }
        start.checked_add(length)?;
        Some(Self { start, length })
    }

    /// Range covering `[start, end)`, `None` when `end <= start`
    pub fn from_bounds(start: i64, end: i64) -> Option<Self> {
        if end <= start {
            return None;
        }
        Self::new(start, end.checked_sub(start)?)
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    /// Exclusive end
    pub fn end(&self) -> i64 {
        self.start + self.length
    }

    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value < self.end()
    }

    /// The same range moved by `offset`
    pub fn shifted(self, offset: i64) -> Self {
        Self {
            start: self.start + offset,
            length: self.length,
        }
    }

    /// Split `self` into the parts left of, inside, and right of `window`.
    ///
    /// The three pieces are disjoint and together cover exactly `self`.
    pub fn split_around(self, window: NumericRange) -> RangeSplit {
        RangeSplit {
            before: Self::from_bounds(self.start, min(self.end(), window.start)),
            overlap: Self::from_bounds(
                max(self.start, window.start),
                min(self.end(), window.end()),
            ),
            after: Self::from_bounds(max(self.start, window.end()), self.end()),
        }
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// Result of [`NumericRange::split_around`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeSplit {
    pub before: Option<NumericRange>,
    pub overlap: Option<NumericRange>,
    pub after: Option<NumericRange>,
}

impl RangeSplit {
    /// The pieces outside the window
    pub fn leftovers(&self) -> impl Iterator<Item = NumericRange> {
        self.before.into_iter().chain(self.after)
    }
}
