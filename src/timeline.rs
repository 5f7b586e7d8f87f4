// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Daylight and night intervals, for one day and for a three-day timeline.
//!
//! A single sunrise/sunset pair in UTC is ambiguous: when sunset is
//! numerically before sunrise the daylight crosses UTC midnight. The
//! single-day builder splits it into two pieces; the continuous builder
//! repeats that for the days before and after and shifts each day onto a
//! common axis, so a window spilling over from a neighbouring UTC day is
//! still present when the overlap engine clips to the requested day.

use crate::ephemeris::{SolarEvent, SunTime};
use crate::interval::{complement_within, Interval};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// The requested day on the continuous timeline, `[0, 1440)`.
pub const DAY_WINDOW: Interval = Interval::new(0, MINUTES_PER_DAY);

/// Daylight or night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    Daylight,
    Night,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Daylight => f.write_str("daylight"),
            Phase::Night => f.write_str("night"),
        }
    }
}

/// Daylight and night interval sets of one place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseIntervals {
    pub daylight: Vec<Interval>,
    pub night: Vec<Interval>,
}

impl PhaseIntervals {
    /// The interval set of `phase`.
    pub fn get(&self, phase: Phase) -> &[Interval] {
        match phase {
            Phase::Daylight => &self.daylight,
            Phase::Night => &self.night,
        }
    }

    /// Sum of the lengths of the intervals of `phase`.
    pub fn total_minutes(&self, phase: Phase) -> i64 {
        self.get(phase).iter().map(Interval::duration).sum()
    }

    fn polar_night() -> Self {
        Self {
            daylight: Vec::new(),
            night: vec![DAY_WINDOW],
        }
    }

    fn polar_day() -> Self {
        Self {
            daylight: vec![DAY_WINDOW],
            night: Vec::new(),
        }
    }

    fn extend_shifted(&mut self, other: PhaseIntervals, offset: i64) {
        self.daylight
            .extend(other.daylight.iter().map(|iv| iv.shifted(offset)));
        self.night
            .extend(other.night.iter().map(|iv| iv.shifted(offset)));
    }
}

/// Splits one UTC day `[0, 1440)` into daylight and night.
///
/// Finite times are rounded to whole minutes first. When both round to the
/// same minute, the unrounded daylight length decides: under half a day is a
/// day without daylight, otherwise the whole day is daylight.
///
/// * `sunset > sunrise`: daylight `[sunrise, sunset)`, night before and after.
/// * `sunset <= sunrise`: daylight `[sunrise, 1440)` and `[0, sunset)`,
///   night `[sunset, sunrise)`.
/// * `NoSunset` anywhere: the whole day is daylight.
/// * `NoSunrise` anywhere: the whole day is night.
///
/// Empty pieces are dropped, so for finite input the two sets always
/// partition the day exactly.
///
/// # Examples
///
/// ```
/// use sunlap::{build_day_intervals, Interval, SunTime};
///
/// // Sydney in June: sunrise 20:51 UTC, sunset 06:54 UTC.
/// let day = build_day_intervals(SunTime::At(1251.0), SunTime::At(414.0));
/// assert_eq!(day.daylight, vec![Interval::new(1251, 1440), Interval::new(0, 414)]);
/// assert_eq!(day.night, vec![Interval::new(414, 1251)]);
/// ```
pub fn build_day_intervals(sunrise: SunTime, sunset: SunTime) -> PhaseIntervals {
    match (sunrise, sunset) {
        (SunTime::At(rise), SunTime::At(set)) => {
            let (start, end) = (whole_minute_of_day(rise), whole_minute_of_day(set));
            if start != end {
                regular_day(start, end)
            } else if (set - rise).rem_euclid(MINUTES_PER_DAY as f64) < 720.0 {
                PhaseIntervals::polar_night()
            } else {
                PhaseIntervals::polar_day()
            }
        }
        (SunTime::NoSunset, _) | (_, SunTime::NoSunset) => PhaseIntervals::polar_day(),
        (SunTime::NoSunrise, _) | (_, SunTime::NoSunrise) => PhaseIntervals::polar_night(),
    }
}

/// Rounds a fractional minute to the nearest whole minute in `[0, 1440)`.
pub(crate) fn whole_minute_of_day(minutes: f64) -> i64 {
    (minutes.round() as i64).rem_euclid(MINUTES_PER_DAY)
}

fn regular_day(rise: i64, set: i64) -> PhaseIntervals {
    let daylight: Vec<Interval> = if set > rise {
        vec![Interval::new(rise, set)]
    } else {
        [
            Interval::try_new(rise, MINUTES_PER_DAY),
            Interval::try_new(0, set),
        ]
        .into_iter()
        .flatten()
        .collect()
    };

    let mut sorted = daylight.clone();
    sorted.sort();
    let night = complement_within(DAY_WINDOW, &sorted);

    PhaseIntervals { daylight, night }
}

/// Builds the three-day continuous timeline for one place.
///
/// `before`, `day` and `after` are the events of three consecutive UTC
/// dates. Each is split with [`build_day_intervals`] and shifted by
/// −1440, 0 and +1440 minutes respectively. Intervals are concatenated in
/// day order without merging, so the result spans `[-1440, 2880)`.
pub fn build_continuous_intervals(
    before: &SolarEvent,
    day: &SolarEvent,
    after: &SolarEvent,
) -> PhaseIntervals {
    let mut timeline = PhaseIntervals::default();
    for (index, event) in [before, day, after].into_iter().enumerate() {
        let offset = (index as i64 - 1) * MINUTES_PER_DAY;
        timeline.extend_shifted(build_day_intervals(event.sunrise, event.sunset), offset);
    }
    timeline
}
