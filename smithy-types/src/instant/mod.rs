/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::error::Error;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time, stored as whole seconds relative to the Unix epoch plus a sub-second
/// nanosecond component.
///
/// Resource metadata timestamps (`createdAt`, `lastUpdatedAt`) are sent as fractional epoch
/// seconds. Keeping the two parts apart means a value read from JSON formats back to the same
/// text.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// `fraction` must be in the range `[0, 1)`; it is truncated to nanosecond precision.
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let nanos = (fraction * NANOS_PER_SECOND as f64) as u32;
        Instant::from_secs_and_nanos(epoch_seconds, nanos.min(NANOS_PER_SECOND - 1))
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds as i64, epoch_seconds - seconds)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(after) => Instant::from_secs_and_nanos(after.as_secs() as i64, after.subsec_nanos()),
            Err(before) => {
                let before = before.duration();
                let (seconds, nanos) = (before.as_secs() as i64, before.subsec_nanos());
                if nanos == 0 {
                    Instant::from_epoch_seconds(-seconds)
                } else {
                    Instant::from_secs_and_nanos(-seconds - 1, NANOS_PER_SECOND - nanos)
                }
            }
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, ParseError> {
        match format {
            Format::DateTime => DateTime::parse_from_rfc3339(s)
                .map(|parsed| {
                    Instant::from_secs_and_nanos(parsed.timestamp(), parsed.timestamp_subsec_nanos())
                })
                .map_err(|_| ParseError::new(s, format)),
            Format::EpochSeconds => parse_epoch_seconds(s).ok_or_else(|| ParseError::new(s, format)),
        }
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Some(date_time) if self.has_nanos() => {
                    let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::Nanos, true);
                    let mut trimmed = rfc3339.trim_end_matches('Z').trim_end_matches('0').to_owned();
                    trimmed.push('Z');
                    trimmed
                }
                Some(date_time) => date_time.to_rfc3339_opts(SecondsFormat::Secs, true),
                // outside of chrono's representable range
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if !self.has_nanos() {
                    return format!("{}", self.seconds);
                }
                if self.seconds < 0 {
                    format!(
                        "-{}.{}",
                        -(self.seconds + 1),
                        fraction_digits(NANOS_PER_SECOND - self.subsecond_nanos)
                    )
                } else {
                    format!("{}.{}", self.seconds, fraction_digits(self.subsecond_nanos))
                }
            }
        }
    }

    fn to_chrono(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos).single()
    }
}

fn fraction_digits(nanos: u32) -> String {
    let padded = format!("{:0>9}", nanos);
    padded.trim_end_matches('0').to_owned()
}

fn parse_epoch_seconds(s: &str) -> Option<Instant> {
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || fraction.len() > 9 || !digits(whole) || !digits(fraction) {
        return None;
    }
    let whole: i64 = whole.parse().ok()?;
    let nanos: u32 = if fraction.is_empty() {
        0
    } else {
        format!("{:0<9}", fraction).parse().ok()?
    };
    Some(match (negative, nanos) {
        (false, _) => Instant::from_secs_and_nanos(whole, nanos),
        (true, 0) => Instant::from_epoch_seconds(-whole),
        (true, _) => Instant::from_secs_and_nanos(-whole - 1, NANOS_PER_SECOND - nanos),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC-3339 date-time, e.g. `2019-12-16T23:48:18.52Z`
    DateTime,
    /// Seconds since the Unix epoch with an optional fraction, e.g. `1576540098.52`
    EpochSeconds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    input: String,
    format: Format,
}

impl ParseError {
    fn new(input: &str, format: Format) -> Self {
        ParseError {
            input: input.to_owned(),
            format,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid {:?} timestamp", self.input, self.format)
    }
}

impl Error for ParseError {}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn mesh_created_at_formats() {
        let created_at = Instant::from_fractional_seconds(1580428800, 0.25);
        assert_eq!(created_at.fmt(Format::DateTime), "2020-01-31T00:00:00.25Z");
        assert_eq!(created_at.fmt(Format::EpochSeconds), "1580428800.25");

        let whole = Instant::from_epoch_seconds(1580428820);
        assert_eq!(whole.fmt(Format::DateTime), "2020-01-31T00:00:20Z");
        assert_eq!(whole.fmt(Format::EpochSeconds), "1580428820");
    }

    #[test]
    fn parse_epoch_seconds() {
        assert_eq!(
            Instant::from_str("1580428800.25", Format::EpochSeconds),
            Ok(Instant::from_secs_and_nanos(1580428800, 250_000_000))
        );
        assert_eq!(
            Instant::from_str("-1.5", Format::EpochSeconds),
            Ok(Instant::from_secs_and_nanos(-2, 500_000_000))
        );
        assert!(Instant::from_str("12.", Format::EpochSeconds).is_ok());
        assert!(Instant::from_str("1.0000000001", Format::EpochSeconds).is_err());
        assert!(Instant::from_str("abc", Format::EpochSeconds).is_err());
        assert!(Instant::from_str("", Format::EpochSeconds).is_err());
    }

    #[test]
    fn parse_date_time() {
        assert_eq!(
            Instant::from_str("2020-01-31T00:00:00.25Z", Format::DateTime),
            Ok(Instant::from_secs_and_nanos(1580428800, 250_000_000))
        );
        assert_eq!(
            Instant::from_str("2020-01-31T01:00:00+01:00", Format::DateTime),
            Ok(Instant::from_epoch_seconds(1580428800))
        );
        let err = Instant::from_str("yesterday", Format::DateTime).expect_err("not a date");
        assert_eq!(err.to_string(), "`yesterday` is not a valid DateTime timestamp");
    }

    #[test]
    fn negative_fractions() {
        let instant = Instant::from_secs_and_nanos(-2, 500_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds), "-1.5");
        assert_eq!(instant.epoch_fractional_seconds(), -1.5);
        let instant = Instant::from_secs_and_nanos(-1, 750_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds), "-0.25");
    }

    #[test]
    fn system_time_before_epoch() {
        let before = UNIX_EPOCH - Duration::from_millis(1500);
        assert_eq!(
            Instant::from_system_time(before),
            Instant::from_secs_and_nanos(-2, 500_000_000)
        );
        let after = UNIX_EPOCH + Duration::new(10, 5);
        assert_eq!(
            Instant::from_system_time(after),
            Instant::from_secs_and_nanos(10, 5)
        );
    }

    proptest! {
        #[test]
        fn epoch_seconds_round_trip(seconds in -1_000_000_000_000i64..1_000_000_000_000i64, nanos in 0u32..1_000_000_000u32) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::EpochSeconds);
            prop_assert_eq!(Instant::from_str(&formatted, Format::EpochSeconds), Ok(instant));
        }
    }
}
