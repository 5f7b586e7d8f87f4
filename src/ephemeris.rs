// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision solar ephemeris (NOAA model) for sunrise and sunset.
//!
//! The model evaluates the Sun at 00:00 UTC of the requested calendar date:
//!
//! 1. Julian centuries `T` since J2000.0.
//! 2. Mean anomaly `M` and equation of centre `C` give the true ecliptic
//!    longitude `λ = M + C + 180° + 102.9372°`.
//! 3. Declination `δ = asin(sin ε · sin λ)` with `ε = 23.439° − 3.6e-7 T`.
//! 4. Equation of time `E` (minutes) and solar noon `720 − 4·lon − E`.
//! 5. Hour angle `cos H = (cos z − sin φ sin δ) / (cos φ cos δ)` for the
//!    zenith distance `z` of the [`Horizon`] (90.833° by default).
//!
//! `cos H > 1` means the Sun stays below the horizon all day and
//! `cos H ≤ −1` that it stays above it (at exactly −1 it only grazes the
//! horizon at midnight); both cases are reported through [`SunTime`] rather than
//! as errors.
//!
//! Accuracy is about a minute at mid latitudes, which is all the interval
//! engine needs since it works on whole minutes.

use crate::geo::GeoPoint;
use crate::horizon::Horizon;
use crate::julian::JulianDate;
use crate::timeline::{whole_minute_of_day, MINUTES_PER_DAY};
use crate::Result;
use chrono::NaiveDate;
use qtty::Days;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longitude of Earth's perihelion, degrees.
const PERIHELION_LONGITUDE: f64 = 102.9372;

/// Rise or set instant for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SunTime {
    /// Fractional UTC minute of the day, in `[0, 1440)`.
    At(f64),
    /// The Sun stays below the horizon for the whole day.
    NoSunrise,
    /// The Sun stays above the horizon for the whole day.
    NoSunset,
}

impl SunTime {
    /// Fractional minute of the day, `None` for the polar variants.
    #[inline]
    pub const fn minutes(&self) -> Option<f64> {
        match self {
            Self::At(minutes) => Some(*minutes),
            Self::NoSunrise | Self::NoSunset => None,
        }
    }

    /// Minute of the day rounded to the nearest whole minute, wrapped into
    /// `[0, 1440)`. `None` for the polar variants.
    pub fn minute_of_day(&self) -> Option<i64> {
        self.minutes().map(whole_minute_of_day)
    }

    /// `true` for [`SunTime::NoSunrise`] and [`SunTime::NoSunset`].
    #[inline]
    pub const fn is_polar(&self) -> bool {
        !matches!(self, Self::At(_))
    }
}

/// Sunrise and sunset for one place and one UTC calendar date.
///
/// Polar night is reported as `NoSunrise` in both fields with zero daylight,
/// polar day as `NoSunset` in both fields with 1440 minutes of daylight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolarEvent {
    pub sunrise: SunTime,
    pub sunset: SunTime,
    /// Minutes between sunrise and sunset.
    pub daylight_minutes: f64,
    /// Solar noon in UTC minutes from the date's midnight. Not normalized:
    /// far-east longitudes give negative values.
    pub solar_noon: f64,
}

impl SolarEvent {
    fn polar_night(solar_noon: f64) -> Self {
        Self {
            sunrise: SunTime::NoSunrise,
            sunset: SunTime::NoSunrise,
            daylight_minutes: 0.0,
            solar_noon,
        }
    }

    fn polar_day(solar_noon: f64) -> Self {
        Self {
            sunrise: SunTime::NoSunset,
            sunset: SunTime::NoSunset,
            daylight_minutes: MINUTES_PER_DAY as f64,
            solar_noon,
        }
    }

    /// The Sun never rises on this date.
    #[inline]
    pub fn is_polar_night(&self) -> bool {
        self.sunrise == SunTime::NoSunrise
    }

    /// The Sun never sets on this date.
    #[inline]
    pub fn is_polar_day(&self) -> bool {
        self.sunset == SunTime::NoSunset
    }
}

/// Sunrise/sunset for raw coordinates on `date`, standard horizon.
///
/// # Errors
/// Returns [`Error::InvalidLatitude`](crate::Error::InvalidLatitude) or
/// [`Error::InvalidLongitude`](crate::Error::InvalidLongitude) before any
/// computation when a coordinate is out of range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use sunlap::solar_event;
///
/// let equinox = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
/// let london = solar_event(51.5, 0.0, equinox).unwrap();
/// assert!((london.daylight_minutes - 720.0).abs() < 10.0);
/// ```
pub fn solar_event(latitude: f64, longitude: f64, date: NaiveDate) -> Result<SolarEvent> {
    let point = GeoPoint::new(latitude, longitude)?;
    Ok(solar_event_at(&point, date, Horizon::SunriseSunset))
}

/// Sunrise/sunset for a validated point on `date` against `horizon`.
///
/// The horizon is used as given; [`Horizon::validated`] checks a custom one.
pub fn solar_event_at(point: &GeoPoint, date: NaiveDate, horizon: Horizon) -> SolarEvent {
    let jd = JulianDate::from_date(date);
    let t = jd.julian_centuries().value();
    let lat = point.latitude().value().to_radians();
    let lon = point.longitude().value();

    let decl = declination(t);
    let noon = solar_noon(jd, lon);

    let cos_h = (horizon.zenith().value().to_radians().cos() - lat.sin() * decl.sin())
        / (lat.cos() * decl.cos());

    event_from_hour_angle(noon, cos_h)
}

/// Builds the event for solar noon `noon` (UTC minutes) and the cosine of
/// the rise/set hour angle.
fn event_from_hour_angle(noon: f64, cos_h: f64) -> SolarEvent {
    if cos_h > 1.0 {
        return SolarEvent::polar_night(noon);
    }
    if cos_h <= -1.0 {
        return SolarEvent::polar_day(noon);
    }

    // Hour angle in minutes of time: degrees / 15 hours, × 60.
    let half_day = cos_h.acos().to_degrees() / 15.0 * 60.0;
    let rise = noon - half_day;
    let set = noon + half_day;

    SolarEvent {
        sunrise: SunTime::At(wrap_minutes(rise)),
        sunset: SunTime::At(wrap_minutes(set)),
        // Already in [0, 1440); wrapping would fold a near-full day to zero.
        daylight_minutes: set - rise,
        solar_noon: noon,
    }
}

/// Wraps fractional minutes into `[0, 1440)`.
fn wrap_minutes(minutes: f64) -> f64 {
    let day = MINUTES_PER_DAY as f64;
    let wrapped = minutes.rem_euclid(day);
    // rem_euclid rounds tiny negative inputs up to `day` itself.
    if wrapped >= day {
        0.0
    } else {
        wrapped
    }
}

/// Mean anomaly of the Sun in degrees, reduced to (−360, 360).
fn mean_anomaly(t: f64) -> f64 {
    (357.52911 + t * (35999.05029 - 0.0001537 * t)) % 360.0
}

/// Equation of centre in degrees for mean anomaly `m` (degrees).
fn equation_of_center(t: f64, m: f64) -> f64 {
    let m = m.to_radians();
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

/// Solar declination in radians.
fn declination(t: f64) -> f64 {
    let m = mean_anomaly(t);
    let true_longitude = (m + equation_of_center(t, m) + 180.0 + PERIHELION_LONGITUDE).to_radians();
    let obliquity = (23.439 - 0.00000036 * t).to_radians();
    (obliquity.sin() * true_longitude.sin()).asin()
}

/// Equation of time in minutes.
fn equation_of_time(t: f64) -> f64 {
    let m = (357.52911 + t * 35999.05029).to_radians();
    229.18
        * (0.000075 + 0.001868 * m.cos()
            - 0.032077 * m.sin()
            - 0.014615 * (2.0 * m).cos()
            - 0.040849 * (2.0 * m).sin())
}

/// Solar noon in UTC minutes from midnight of the day `jd` starts.
fn solar_noon(jd: JulianDate, longitude: f64) -> f64 {
    let local = jd - Days::new(longitude / 360.0);
    let t = local.julian_centuries().value();
    720.0 - 4.0 * longitude - equation_of_time(t)
}
