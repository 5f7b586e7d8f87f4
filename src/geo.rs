// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geographic observer position.

use crate::error::{check_coordinates, Result};
use qtty::Degrees;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// A point on Earth given by geodetic latitude and longitude.
///
/// Latitude is positive north, longitude positive east. Values are validated
/// on construction, so every `GeoPoint` in circulation is in range.
///
/// # Examples
///
/// ```
/// use sunlap::GeoPoint;
///
/// let dubai = GeoPoint::new(25.25, 55.37).unwrap();
/// assert_eq!(dubai.latitude().value(), 25.25);
///
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    latitude: Degrees,
    longitude: Degrees,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLatitude`](crate::Error::InvalidLatitude) or
    /// [`Error::InvalidLongitude`](crate::Error::InvalidLongitude) when a
    /// coordinate is out of range or not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude: Degrees::new(latitude),
            longitude: Degrees::new(longitude),
        })
    }

    /// Geodetic latitude, positive north.
    #[inline]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// Longitude, positive east.
    #[inline]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat = self.latitude.value();
        let lon = self.longitude.value();
        let ns = if lat < 0.0 { 'S' } else { 'N' };
        let ew = if lon < 0.0 { 'W' } else { 'E' };
        write!(f, "{:.4}°{} {:.4}°{}", lat.abs(), ns, lon.abs(), ew)
    }
}

#[cfg(feature = "serde")]
impl Serialize for GeoPoint {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("GeoPoint", 2)?;
        s.serialize_field("latitude", &self.latitude.value())?;
        s.serialize_field("longitude", &self.longitude.value())?;
        s.end()
    }
}
