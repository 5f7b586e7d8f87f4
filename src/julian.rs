// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date on the Universal Time axis.
//!
//! [`JulianDate`] stores a single [`Days`] quantity counted from the start of
//! the Julian Period. The low-precision solar model works directly on UT, so
//! no ΔT correction is applied when converting from civil dates.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use qtty::*;
use std::ops::{Add, Sub};

/// Julian Date (UT), continuous count of days since the Julian Period.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate {
    quantity: Days,
}

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Unix epoch: 1970-01-01T00:00:00 (JD 2 440 587.5).
    pub const UNIX_EPOCH: Self = Self::new(2_440_587.5);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian Date of 0001-01-01T00:00 in the proleptic Gregorian calendar,
    /// minus one day so that `num_days_from_ce() == 1` lands on it.
    const CE_OFFSET: f64 = 1_721_424.5;

    /// Create from a raw scalar (days since the Julian Period).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Julian Date of `date` at 00:00 UTC.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use sunlap::JulianDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    /// assert_eq!(JulianDate::from_date(date).value(), 2_451_544.5);
    /// ```
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.num_days_from_ce() as f64 + Self::CE_OFFSET)
    }

    /// Julian Date of a UTC instant, with sub-second precision.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds_since_epoch = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        Self::UNIX_EPOCH + (seconds_since_epoch + nanos).to::<Day>()
    }

    /// Julian centuries since J2000.0.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }
}

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.quantity)
    }
}

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

impl From<NaiveDate> for JulianDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}
