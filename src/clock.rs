// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Clock labels for segment boundaries.
//!
//! Pure formatting: UTC minutes to `"HH:MM"`, and UTC instants to local wall
//! clock through the IANA timezone database bundled by `chrono-tz`. Offsets
//! are read as signed seconds from the database, so zones such as
//! `Asia/Kolkata` (+5:30) or `Australia/Eucla` (+8:45) need no special care.

use crate::error::{Error, Result};
use crate::timeline::MINUTES_PER_DAY;
use chrono::{DateTime, NaiveDate, NaiveTime, Offset, TimeDelta, Utc};
use chrono_tz::Tz;

/// Formats a minute count as `"HH:MM"` after wrapping it into `[0, 1440)`.
///
/// # Examples
///
/// ```
/// use sunlap::minutes_to_clock;
///
/// assert_eq!(minutes_to_clock(88), "01:28");
/// assert_eq!(minutes_to_clock(1440), "00:00");
/// assert_eq!(minutes_to_clock(-189), "20:51");
/// ```
pub fn minutes_to_clock(minutes: i64) -> String {
    let m = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Formats a length in minutes as `"5h 26m"`.
pub fn format_duration(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Looks up an IANA timezone identifier such as `"Asia/Dubai"`.
///
/// # Errors
/// Returns [`Error::UnknownTimeZone`] if the identifier is not in the database.
pub fn parse_time_zone(id: &str) -> Result<Tz> {
    id.parse::<Tz>()
        .map_err(|_| Error::UnknownTimeZone { id: id.to_string() })
}

/// The UTC instant `minute` minutes after midnight UTC of `date`.
///
/// `minute` may be negative or beyond one day.
///
/// # Errors
/// Returns [`Error::InstantOutOfRange`] if the instant is not representable.
pub fn minute_to_instant(date: NaiveDate, minute: i64) -> Result<DateTime<Utc>> {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    TimeDelta::try_minutes(minute)
        .and_then(|delta| midnight.checked_add_signed(delta))
        .ok_or(Error::InstantOutOfRange { date, minute })
}

/// Local wall-clock `"HH:MM"` of `instant` in `tz`.
pub fn local_clock(instant: DateTime<Utc>, tz: &Tz) -> String {
    instant.with_timezone(tz).format("%H:%M").to_string()
}

/// Local wall-clock `"HH:MM"` of `instant` in the zone named `timezone_id`.
///
/// # Errors
/// Returns [`Error::UnknownTimeZone`] for an unknown identifier.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use sunlap::to_local_clock;
///
/// let instant = Utc.with_ymd_and_hms(2025, 6, 1, 1, 28, 0).unwrap();
/// assert_eq!(to_local_clock(instant, "Asia/Dubai").unwrap(), "05:28");
/// ```
pub fn to_local_clock(instant: DateTime<Utc>, timezone_id: &str) -> Result<String> {
    let tz = parse_time_zone(timezone_id)?;
    Ok(local_clock(instant, &tz))
}

/// Local wall-clock `"HH:MM"` of the instant `minute` minutes after UTC
/// midnight of `date`.
///
/// # Errors
/// Returns [`Error::UnknownTimeZone`] or [`Error::InstantOutOfRange`].
pub fn minute_to_local_clock(date: NaiveDate, minute: i64, timezone_id: &str) -> Result<String> {
    let tz = parse_time_zone(timezone_id)?;
    Ok(local_clock(minute_to_instant(date, minute)?, &tz))
}

/// Offset of `tz` from UTC at `instant`, in signed minutes east of UTC.
pub fn offset_minutes(instant: DateTime<Utc>, tz: &Tz) -> i32 {
    instant.with_timezone(tz).offset().fix().local_minus_utc() / 60
}

/// Offset of the zone named `timezone_id` from UTC at `instant`, in signed
/// minutes east of UTC. Daylight-saving rules in force at `instant` apply.
///
/// # Errors
/// Returns [`Error::UnknownTimeZone`] for an unknown identifier.
pub fn utc_offset_minutes(instant: DateTime<Utc>, timezone_id: &str) -> Result<i32> {
    let tz = parse_time_zone(timezone_id)?;
    Ok(offset_minutes(instant, &tz))
}
