// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Shared windows between two interval sets.
//!
//! [`find_overlap`] intersects every pair of intervals of two continuous
//! timelines, clips the pieces to the requested day [`DAY_WINDOW`], and merges
//! whatever touches or overlaps into a minimal, sorted list of [`Segment`]s.

use crate::clock::{format_duration, minutes_to_clock};
use crate::interval::Interval;
use crate::timeline::DAY_WINDOW;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One merged shared window, in UTC minutes of the requested day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub start: i64,
    pub end: i64,
    pub minutes: i64,
}

impl Segment {
    /// The segment as a half-open interval.
    #[inline]
    pub const fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    /// Start as UTC `"HH:MM"`.
    pub fn start_clock(&self) -> String {
        minutes_to_clock(self.start)
    }

    /// End as UTC `"HH:MM"`; a segment ending at 1440 reads `"00:00"`.
    pub fn end_clock(&self) -> String {
        minutes_to_clock(self.end)
    }
}

impl From<Interval> for Segment {
    fn from(iv: Interval) -> Self {
        Segment {
            start: iv.start,
            end: iv.end,
            minutes: iv.duration(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} UTC ({})",
            self.start_clock(),
            self.end_clock(),
            format_duration(self.minutes)
        )
    }
}

/// Shared windows of one phase between two places.
///
/// `segments` are sorted by start and separated by gaps of at least one
/// minute; `total_minutes` is the sum of their lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OverlapResult {
    pub overlap: bool,
    pub total_minutes: i64,
    pub segments: Vec<Segment>,
}

impl OverlapResult {
    /// Builds a result from already merged intervals.
    fn from_merged(merged: Vec<Interval>) -> Self {
        let segments: Vec<Segment> = merged.into_iter().map(Segment::from).collect();
        OverlapResult {
            overlap: !segments.is_empty(),
            total_minutes: segments.iter().map(|s| s.minutes).sum(),
            segments,
        }
    }

    /// The segments as half-open intervals.
    pub fn intervals(&self) -> Vec<Interval> {
        self.segments.iter().map(Segment::interval).collect()
    }
}

/// Pairwise intersection of two interval sets.
///
/// Inputs need not be sorted or disjoint. Empty intersections are dropped.
pub fn intersect_all(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    a.iter()
        .flat_map(|x| b.iter().filter_map(move |y| x.intersection(y)))
        .collect()
}

/// Sorts `intervals` by start and merges those that overlap or touch.
///
/// Touching intervals (`next.start == current.end`) are merged; the output
/// therefore has a gap of at least one minute between consecutive entries.
/// Running it on its own output returns the same list.
pub fn merge_segments(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort();
    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for iv in intervals {
        if let Some(current) = merged.last_mut() {
            if iv.start <= current.end {
                current.end = current.end.max(iv.end);
                continue;
            }
        }
        merged.push(iv);
    }
    merged
}

/// Shared windows of two continuous timelines within the requested day.
///
/// Both inputs hold intervals of the same phase for two different places,
/// typically spanning `[-1440, 2880)`. The pairwise intersections are clipped
/// to `[0, 1440)` and merged. Empty inputs (polar day or night) simply give
/// an empty result.
///
/// # Examples
///
/// ```
/// use sunlap::{find_overlap, Interval};
///
/// let dubai = [Interval::new(88, 904)];
/// let sydney = [Interval::new(-189, 414), Interval::new(1251, 1854)];
///
/// let shared = find_overlap(&dubai, &sydney);
/// assert!(shared.overlap);
/// assert_eq!(shared.total_minutes, 326);
/// assert_eq!(shared.segments[0].start_clock(), "01:28");
/// ```
pub fn find_overlap(a: &[Interval], b: &[Interval]) -> OverlapResult {
    let clipped: Vec<Interval> = intersect_all(a, b)
        .iter()
        .filter_map(|iv| iv.clipped(&DAY_WINDOW))
        .collect();
    OverlapResult::from_merged(merge_segments(clipped))
}
