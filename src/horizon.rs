// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Horizon definitions for rise/set events.

use crate::error::{Error, Result};
use qtty::Degrees;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Solar elevation that counts as "on the horizon".
///
/// The standard definition places the Sun's upper limb on the horizon after
/// refraction, i.e. the centre of the disc at −0.833°, which is a zenith
/// distance of 90.833°.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "HorizonRepr"))]
pub enum Horizon {
    /// Standard sunrise/sunset.
    #[default]
    SunriseSunset,
    /// Civil twilight (Sun 6° below the horizon).
    CivilTwilight,
    /// Nautical twilight (Sun 12° below the horizon).
    NauticalTwilight,
    /// Astronomical twilight (Sun 18° below the horizon).
    AstronomicalTwilight,
    /// Custom elevation angle in degrees, within −90..=+90.
    ///
    /// Build it with [`Horizon::custom`]; comparisons reject out-of-range
    /// values through [`Horizon::validated`].
    Custom(f64),
}

/// Unchecked wire form of [`Horizon`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
enum HorizonRepr {
    SunriseSunset,
    CivilTwilight,
    NauticalTwilight,
    AstronomicalTwilight,
    Custom(f64),
}

#[cfg(feature = "serde")]
impl TryFrom<HorizonRepr> for Horizon {
    type Error = Error;

    fn try_from(repr: HorizonRepr) -> Result<Self> {
        match repr {
            HorizonRepr::SunriseSunset => Ok(Self::SunriseSunset),
            HorizonRepr::CivilTwilight => Ok(Self::CivilTwilight),
            HorizonRepr::NauticalTwilight => Ok(Self::NauticalTwilight),
            HorizonRepr::AstronomicalTwilight => Ok(Self::AstronomicalTwilight),
            HorizonRepr::Custom(angle) => Self::custom(angle),
        }
    }
}

impl Horizon {
    /// Elevation angle in degrees; negative below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.833,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Zenith distance of the Sun at the event, `90° − elevation`.
    #[must_use]
    pub fn zenith(&self) -> Degrees {
        Degrees::new(90.0 - self.elevation_angle())
    }

    /// Creates a custom horizon.
    ///
    /// # Errors
    /// Returns [`Error::InvalidElevation`] if the elevation is outside
    /// −90..=+90 degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&elevation_degrees) {
            return Err(Error::InvalidElevation {
                value: elevation_degrees,
            });
        }
        Ok(Self::Custom(elevation_degrees))
    }

    /// Returns `self` if its elevation is within −90..=+90 degrees.
    ///
    /// # Errors
    /// Returns [`Error::InvalidElevation`] for an out-of-range
    /// [`Horizon::Custom`].
    pub fn validated(self) -> Result<Self> {
        match self {
            Self::Custom(angle) => Self::custom(angle),
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_zenith() {
        let zenith = Horizon::default().zenith();
        assert!((zenith.value() - 90.833).abs() < 1e-12);
    }

    #[test]
    fn test_twilight_elevations() {
        assert_eq!(Horizon::CivilTwilight.elevation_angle(), -6.0);
        assert_eq!(Horizon::NauticalTwilight.zenith(), Degrees::new(102.0));
        assert_eq!(Horizon::AstronomicalTwilight.zenith(), Degrees::new(108.0));
    }

    #[test]
    fn test_custom_validation() {
        assert_eq!(Horizon::custom(-3.0), Ok(Horizon::Custom(-3.0)));
        assert!(Horizon::custom(-90.1).is_err());
        assert!(Horizon::custom(f64::NAN).is_err());
    }

    #[test]
    fn test_validated_rejects_direct_custom() {
        assert_eq!(Horizon::CivilTwilight.validated(), Ok(Horizon::CivilTwilight));
        assert_eq!(Horizon::Custom(12.5).validated(), Ok(Horizon::Custom(12.5)));
        assert_eq!(
            Horizon::Custom(135.0).validated(),
            Err(Error::InvalidElevation { value: 135.0 })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_checks_custom_elevation() {
        let ok: Horizon = serde_json::from_str(r#"{"Custom":-3.0}"#).unwrap();
        assert_eq!(ok, Horizon::Custom(-3.0));
        let named: Horizon = serde_json::from_str(r#""CivilTwilight""#).unwrap();
        assert_eq!(named, Horizon::CivilTwilight);

        assert!(serde_json::from_str::<Horizon>(r#"{"Custom":135.0}"#).is_err());
        let json = serde_json::to_string(&Horizon::Custom(-3.0)).unwrap();
        assert_eq!(json, r#"{"Custom":-3.0}"#);
    }
}
