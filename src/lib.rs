// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Shared daylight and night between two places.
//!
//! For two points on Earth and a UTC calendar date, this crate answers which
//! UTC clock intervals are daylight at both places and which are night at
//! both.
//!
//! # Pipeline
//!
//! | Stage | Entry point |
//! |-------|-------------|
//! | Sunrise/sunset (NOAA low-precision model) | [`solar_event`], [`solar_event_at`] |
//! | One UTC day as daylight/night minutes | [`build_day_intervals`] |
//! | Day before + day + day after on one axis | [`build_continuous_intervals`] |
//! | Pairwise intersection, clip to the day, merge | [`find_overlap`] |
//! | `"HH:MM"` labels, UTC and local | [`minutes_to_clock`], [`to_local_clock`] |
//!
//! [`compare_sites`] runs all stages for two [`Site`]s.
//!
//! # Core types
//!
//! - [`GeoPoint`]: validated latitude/longitude.
//! - [`SunTime`]: a rise/set minute, or one of the polar markers
//!   [`SunTime::NoSunrise`] / [`SunTime::NoSunset`].
//! - [`SolarEvent`]: sunrise, sunset and daylight length of one date.
//! - [`Interval`]: half-open minute range on the continuous timeline, whose
//!   zero is UTC midnight of the requested date.
//! - [`OverlapResult`]: merged shared [`Segment`]s and their total length.
//!
//! Everything is pure and synchronous; results depend only on their inputs
//! and can be computed in parallel or cached freely.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sunlap::{compare_sites, Site};
//!
//! let dubai = Site::new(25.25, 55.37, "Asia/Dubai").unwrap();
//! let sydney = Site::new(-33.87, 151.21, "Australia/Sydney").unwrap();
//! let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//!
//! let day = compare_sites(&dubai, &sydney, date).unwrap();
//! for segment in &day.daylight.segments {
//!     println!("{segment}");
//! }
//! ```

pub mod clock;
mod compare;
mod ephemeris;
mod error;
mod geo;
mod horizon;
mod interval;
mod julian;
mod overlap;
mod timeline;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use clock::{
    format_duration, minute_to_instant, minute_to_local_clock, minutes_to_clock,
    parse_time_zone, to_local_clock, utc_offset_minutes,
};
pub use compare::{
    compare_sites, compare_sites_with, site_day, ComparisonOptions, DayComparison, LocalSegment,
    Site, SiteDay,
};
pub use ephemeris::{solar_event, solar_event_at, SolarEvent, SunTime};
pub use error::{check_coordinates, check_latitude, check_longitude, Error, Result};
pub use geo::GeoPoint;
pub use horizon::Horizon;
pub use interval::{complement_within, Interval};
pub use julian::JulianDate;
pub use overlap::{find_overlap, intersect_all, merge_segments, OverlapResult, Segment};
pub use timeline::{
    build_continuous_intervals, build_day_intervals, Phase, PhaseIntervals, DAY_WINDOW,
    MINUTES_PER_DAY,
};
