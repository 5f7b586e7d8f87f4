// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.
//!
//! Only malformed inputs are errors. A day without sunrise or sunset is a
//! regular [`SunTime`](crate::SunTime) state, and two places that never share
//! daylight simply produce an empty [`OverlapResult`](crate::OverlapResult).

use chrono::NaiveDate;

/// Result type alias for operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the boundary of the crate, before any computation runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Latitude outside −90°..=+90° (or not a finite number).
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    /// Longitude outside −180°..=+180° (or not a finite number).
    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },

    /// Custom horizon elevation outside −90°..=+90°.
    #[error("invalid horizon elevation {value}° (must be between -90° and +90°)")]
    InvalidElevation { value: f64 },

    /// Identifier not present in the IANA timezone database.
    #[error("unknown timezone identifier `{id}`")]
    UnknownTimeZone { id: String },

    /// The neighbouring calendar day of `date` is not representable.
    #[error("calendar date {date} has no representable neighbouring day")]
    DateOutOfRange { date: NaiveDate },

    /// A minute offset could not be turned into a UTC instant.
    #[error("minute offset {minute} from {date} is outside the representable range")]
    InstantOutOfRange { date: NaiveDate, minute: i64 },
}

/// Validates latitude is within −90..=+90 degrees.
///
/// # Errors
/// Returns [`Error::InvalidLatitude`] otherwise, including for NaN.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::InvalidLatitude { value: latitude });
    }
    Ok(())
}

/// Validates longitude is within −180..=+180 degrees.
///
/// # Errors
/// Returns [`Error::InvalidLongitude`] otherwise, including for NaN.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::InvalidLongitude { value: longitude });
    }
    Ok(())
}

/// Validates both coordinates, latitude first.
///
/// # Errors
/// Returns [`Error::InvalidLatitude`] or [`Error::InvalidLongitude`].
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}
