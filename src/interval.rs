// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Half-open minute intervals on a continuous UTC timeline.
//!
//! Minute `0` is UTC midnight of the requested date; negative minutes belong
//! to the previous day and minutes from `1440` on to the next one.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A half-open range of whole minutes, `[start, end)`.
///
/// # Examples
///
/// ```
/// use sunlap::Interval;
///
/// let morning = Interval::new(360, 720);
/// let lunch = Interval::new(690, 780);
///
/// assert_eq!(morning.duration(), 360);
/// assert_eq!(morning.intersection(&lunch), Some(Interval::new(690, 720)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    /// Creates an interval without checking its orientation.
    #[inline]
    pub const fn new(start: i64, end: i64) -> Self {
        Interval { start, end }
    }

    /// Creates an interval, or `None` if it would be empty (`end <= start`).
    #[inline]
    pub const fn try_new(start: i64, end: i64) -> Option<Self> {
        if end > start {
            Some(Interval { start, end })
        } else {
            None
        }
    }

    /// Length in minutes.
    #[inline]
    pub const fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// `true` if `minute` lies in `[start, end)`.
    #[inline]
    pub const fn contains(&self, minute: i64) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Returns the overlapping sub-interval between `self` and `other`.
    ///
    /// Intervals are half-open: if one ends exactly when the other starts,
    /// the intersection is empty and `None` is returned.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        Self::try_new(self.start.max(other.start), self.end.min(other.end))
    }

    /// The same interval moved by `offset` minutes.
    #[inline]
    pub const fn shifted(&self, offset: i64) -> Self {
        Interval::new(self.start + offset, self.end + offset)
    }

    /// The part of `self` inside `window`, `None` if nothing is left.
    #[inline]
    pub fn clipped(&self, window: &Self) -> Option<Self> {
        self.intersection(window)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl From<(i64, i64)> for Interval {
    fn from((start, end): (i64, i64)) -> Self {
        Interval::new(start, end)
    }
}

/// Returns the gaps (complement) of `intervals` within the bounding `outer`
/// interval.
///
/// `intervals` must be sorted by start; they may touch or overlap. The
/// function runs in O(n) with a single pass.
pub fn complement_within(outer: Interval, intervals: &[Interval]) -> Vec<Interval> {
    let mut gaps = Vec::new();
    let mut cursor = outer.start;
    for iv in intervals {
        if iv.start > cursor {
            gaps.push(Interval::new(cursor, iv.start.min(outer.end)));
        }
        if iv.end > cursor {
            cursor = iv.end;
        }
        if cursor >= outer.end {
            break;
        }
    }
    if cursor < outer.end {
        gaps.push(Interval::new(cursor, outer.end));
    }
    gaps
}
