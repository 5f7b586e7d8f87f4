// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day comparison between two sites.
//!
//! Runs the whole pipeline for one requested UTC date: three solar events per
//! site (day before, the day, day after), the continuous timelines, and the
//! daylight and night overlaps. Sites are passed in by the caller; nothing
//! here looks places up or keeps state between calls.

use crate::clock::{local_clock, minute_to_instant, parse_time_zone};
use crate::ephemeris::{solar_event_at, SolarEvent};
use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::horizon::Horizon;
use crate::overlap::{find_overlap, OverlapResult, Segment};
use crate::timeline::{build_continuous_intervals, Phase, PhaseIntervals};
use chrono::NaiveDate;
use chrono_tz::Tz;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A place to compare: coordinates plus the timezone used for local labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    pub point: GeoPoint,
    pub timezone: Tz,
}

impl Site {
    /// Creates a site from raw coordinates and an IANA timezone identifier.
    ///
    /// # Errors
    /// Returns a coordinate error or [`Error::UnknownTimeZone`].
    pub fn new(latitude: f64, longitude: f64, timezone_id: &str) -> Result<Self> {
        Ok(Self {
            point: GeoPoint::new(latitude, longitude)?,
            timezone: parse_time_zone(timezone_id)?,
        })
    }

    /// Creates a site from an already validated point and zone.
    pub const fn from_parts(point: GeoPoint, timezone: Tz) -> Self {
        Self { point, timezone }
    }
}

/// Knobs for [`compare_sites_with`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparisonOptions {
    /// Horizon defining sunrise and sunset; twilight variants widen daylight.
    pub horizon: Horizon,
}

/// One site's view of the requested day.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteDay {
    /// Solar event of the requested date itself.
    pub event: SolarEvent,
    /// Continuous daylight/night timeline over the three surrounding days.
    pub timeline: PhaseIntervals,
}

/// A segment with local wall-clock labels for one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSegment {
    pub segment: Segment,
    pub start_local: String,
    pub end_local: String,
}

/// Daylight and night shared by two sites on one UTC date.
#[derive(Debug, Clone, PartialEq)]
pub struct DayComparison {
    pub date: NaiveDate,
    pub first: SiteDay,
    pub second: SiteDay,
    pub daylight: OverlapResult,
    pub night: OverlapResult,
}

impl DayComparison {
    /// Overlap of the given phase.
    pub fn overlap(&self, phase: Phase) -> &OverlapResult {
        match phase {
            Phase::Daylight => &self.daylight,
            Phase::Night => &self.night,
        }
    }

    /// Segments of `phase` labelled with wall-clock times in `tz`.
    ///
    /// # Errors
    /// Returns [`Error::InstantOutOfRange`] if a boundary cannot be placed on
    /// the UTC axis, which only happens at the limits of the calendar.
    pub fn local_segments(&self, phase: Phase, tz: &Tz) -> Result<Vec<LocalSegment>> {
        self.overlap(phase)
            .segments
            .iter()
            .map(|segment| -> Result<LocalSegment> {
                Ok(LocalSegment {
                    segment: *segment,
                    start_local: local_clock(minute_to_instant(self.date, segment.start)?, tz),
                    end_local: local_clock(minute_to_instant(self.date, segment.end)?, tz),
                })
            })
            .collect()
    }
}

/// Compares two sites on `date` with the standard horizon.
///
/// # Errors
/// Returns [`Error::DateOutOfRange`] when `date` is the first or last
/// representable calendar day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use sunlap::{compare_sites, Site};
///
/// let dubai = Site::new(25.25, 55.37, "Asia/Dubai").unwrap();
/// let sydney = Site::new(-33.87, 151.21, "Australia/Sydney").unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
///
/// let day = compare_sites(&dubai, &sydney, date).unwrap();
/// assert!(day.daylight.overlap);
/// assert!(day.night.overlap);
/// ```
pub fn compare_sites(first: &Site, second: &Site, date: NaiveDate) -> Result<DayComparison> {
    compare_sites_with(first, second, date, &ComparisonOptions::default())
}

/// Compares two sites on `date` with explicit options.
///
/// # Errors
/// Returns [`Error::InvalidElevation`] for an out-of-range custom horizon and
/// [`Error::DateOutOfRange`] when `date` has no neighbouring day.
pub fn compare_sites_with(
    first: &Site,
    second: &Site,
    date: NaiveDate,
    options: &ComparisonOptions,
) -> Result<DayComparison> {
    let a = site_day(&first.point, date, options.horizon)?;
    let b = site_day(&second.point, date, options.horizon)?;

    let daylight = find_overlap(&a.timeline.daylight, &b.timeline.daylight);
    let night = find_overlap(&a.timeline.night, &b.timeline.night);
    debug!(
        "{date}: shared daylight {} min in {} segment(s), shared night {} min in {} segment(s)",
        daylight.total_minutes,
        daylight.segments.len(),
        night.total_minutes,
        night.segments.len()
    );

    Ok(DayComparison {
        date,
        first: a,
        second: b,
        daylight,
        night,
    })
}

/// Solar event of `date` plus the continuous timeline around it.
///
/// # Errors
/// Returns [`Error::InvalidElevation`] for an out-of-range custom horizon and
/// [`Error::DateOutOfRange`] when `date` has no neighbouring day.
pub fn site_day(point: &GeoPoint, date: NaiveDate, horizon: Horizon) -> Result<SiteDay> {
    let horizon = horizon.validated()?;
    let before = date.pred_opt().ok_or(Error::DateOutOfRange { date })?;
    let after = date.succ_opt().ok_or(Error::DateOutOfRange { date })?;

    let events = [before, date, after].map(|d| solar_event_at(point, d, horizon));
    let [ev_before, event, ev_after] = events;

    if event.is_polar_night() || event.is_polar_day() {
        debug!(
            "{point} on {date}: polar {}",
            if event.is_polar_day() { "day" } else { "night" }
        );
    } else {
        debug!(
            "{point} on {date}: sunrise {:?}, sunset {:?}, daylight {:.1} min",
            event.sunrise.minute_of_day(),
            event.sunset.minute_of_day(),
            event.daylight_minutes
        );
    }

    Ok(SiteDay {
        event,
        timeline: build_continuous_intervals(&ev_before, &event, &ev_after),
    })
}
