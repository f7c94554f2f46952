/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `#[serde(with = "crate::instant_epoch")]` support for optional timestamp members.
//!
//! Timestamps travel as epoch seconds: an integer when there is no sub-second part, a float
//! otherwise.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use smithy_types::Instant;
use std::fmt;

pub fn serialize<S>(instant: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match instant {
        Some(instant) if instant.has_nanos() => {
            serializer.serialize_f64(instant.epoch_fractional_seconds())
        }
        Some(instant) => serializer.serialize_i64(instant.epoch_seconds()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(OptionalEpochVisitor)
}

struct OptionalEpochVisitor;

impl<'de> Visitor<'de> for OptionalEpochVisitor {
    type Value = Option<Instant>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("epoch seconds or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EpochVisitor).map(Some)
    }
}

struct EpochVisitor;

impl<'de> Visitor<'de> for EpochVisitor {
    type Value = Instant;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("epoch seconds")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Instant::from_epoch_seconds(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        if v > i64::MAX as u64 {
            return Err(E::invalid_value(de::Unexpected::Unsigned(v), &self));
        }
        Ok(Instant::from_epoch_seconds(v as i64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() {
            return Err(E::invalid_value(de::Unexpected::Float(v), &self));
        }
        Ok(Instant::from_f64(v))
    }
}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};
    use smithy_types::Instant;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Stamped {
        #[serde(default, with = "crate::instant_epoch")]
        #[serde(skip_serializing_if = "Option::is_none")]
        at: Option<Instant>,
    }

    #[test]
    fn whole_seconds_are_integers() {
        let stamped = Stamped {
            at: Some(Instant::from_epoch_seconds(1580428800)),
        };
        assert_eq!(
            serde_json::to_string(&stamped).unwrap(),
            r#"{"at":1580428800}"#
        );
    }

    #[test]
    fn fractions_are_floats() {
        let stamped = Stamped {
            at: Some(Instant::from_secs_and_nanos(1580428800, 500_000_000)),
        };
        assert_eq!(
            serde_json::to_string(&stamped).unwrap(),
            r#"{"at":1580428800.5}"#
        );
        let parsed: Stamped = serde_json::from_str(r#"{"at":1580428800.5}"#).unwrap();
        assert_eq!(parsed, stamped);
    }

    #[test]
    fn missing_and_null() {
        let parsed: Stamped = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.at, None);
        let parsed: Stamped = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert_eq!(parsed.at, None);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "{}");
    }

    #[test]
    fn strings_are_rejected() {
        assert!(serde_json::from_str::<Stamped>(r#"{"at":"2020-01-31T00:00:00Z"}"#).is_err());
    }
}
