/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Constraint checks for request shapes.
//!
//! Every input and every nested model shape implements [`Validate`]. Validation walks the value
//! in member order and stops at the first violation, reporting where it was found:
//!
//! ```rust
//! use appmesh::model::{PortMapping, PortProtocol};
//! use appmesh::validation::{ConstraintViolation, Validate};
//!
//! let mapping = PortMapping::builder()
//!     .port(70000)
//!     .protocol(PortProtocol::Http)
//!     .build();
//! let err = mapping.validate().unwrap_err();
//! assert_eq!(err.path(), "port");
//! assert!(matches!(err.violation(), ConstraintViolation::Range { actual: 70000, .. }));
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;
use thiserror::Error;

lazy_static! {
    pub(crate) static ref CLOUD_MAP_ATTRIBUTE_KEY: Regex =
        Regex::new(r"^[a-zA-Z0-9!-~]+$").expect("valid regex");
    pub(crate) static ref CLOUD_MAP_ATTRIBUTE_VALUE: Regex =
        Regex::new(r"^([a-zA-Z0-9!-~][ \ta-zA-Z0-9!-~]*){0,1}[a-zA-Z0-9!-~]{0,1}$")
            .expect("valid regex");
}

pub trait Validate {
    /// Checks `self`, reporting violations relative to `path`.
    fn validate_at(&self, path: &str) -> Result<(), ValidationError>;

    fn validate(&self) -> Result<(), ValidationError> {
        self.validate_at("")
    }
}

/// The first constraint a value broke, and where.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{path}` {violation}")]
pub struct ValidationError {
    path: String,
    violation: ConstraintViolation,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, violation: ConstraintViolation) -> Self {
        ValidationError {
            path: path.into(),
            violation,
        }
    }

    /// Member path of the offending value, eg. `spec.listeners[0].portMapping.port`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn violation(&self) -> &ConstraintViolation {
        &self.violation
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintViolation {
    #[error("is required")]
    Required,
    #[error("has length {actual}, expected {}", length_bounds(.min, .max))]
    Length {
        min: usize,
        max: Option<usize>,
        actual: usize,
    },
    #[error("is {actual}, expected {}", range_bounds(.min, .max))]
    Range {
        min: Option<i64>,
        max: Option<i64>,
        actual: i64,
    },
    #[error("does not match `{pattern}`")]
    Pattern { pattern: &'static str },
    #[error("`{value}` is not a known value")]
    UnknownVariant { value: String },
}

fn length_bounds(min: &usize, max: &Option<usize>) -> String {
    bounds(Some(min), max.as_ref())
}

fn range_bounds(min: &Option<i64>, max: &Option<i64>) -> String {
    bounds(min.as_ref(), max.as_ref())
}

fn bounds<T: Display>(min: Option<&T>, max: Option<&T>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{}..={}", min, max),
        (Some(min), None) => format!(">= {}", min),
        (None, Some(max)) => format!("<= {}", max),
        (None, None) => "any value".to_string(),
    }
}

/// Enumerations report values this version of the crate does not know about.
pub(crate) trait KnownVariant {
    fn unknown_value(&self) -> Option<&str>;
}

pub(crate) fn member(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

pub(crate) fn index(path: &str, idx: usize) -> String {
    format!("{}[{}]", path, idx)
}

pub(crate) fn required<'a, T>(
    value: Option<&'a T>,
    path: &str,
    name: &str,
) -> Result<&'a T, ValidationError> {
    value.ok_or_else(|| ValidationError::new(member(path, name), ConstraintViolation::Required))
}

/// String lengths count characters, not bytes.
pub(crate) fn length(
    value: &str,
    min: usize,
    max: Option<usize>,
    path: &str,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual < min || max.map(|max| actual > max).unwrap_or(false) {
        return Err(ValidationError::new(
            path,
            ConstraintViolation::Length { min, max, actual },
        ));
    }
    Ok(())
}

pub(crate) fn list_length(
    actual: usize,
    min: usize,
    max: Option<usize>,
    path: &str,
) -> Result<(), ValidationError> {
    if actual < min || max.map(|max| actual > max).unwrap_or(false) {
        return Err(ValidationError::new(
            path,
            ConstraintViolation::Length { min, max, actual },
        ));
    }
    Ok(())
}

pub(crate) fn range(
    actual: i64,
    min: Option<i64>,
    max: Option<i64>,
    path: &str,
) -> Result<(), ValidationError> {
    let too_small = min.map(|min| actual < min).unwrap_or(false);
    let too_large = max.map(|max| actual > max).unwrap_or(false);
    if too_small || too_large {
        return Err(ValidationError::new(
            path,
            ConstraintViolation::Range { min, max, actual },
        ));
    }
    Ok(())
}

pub(crate) fn pattern(value: &str, pattern: &'static Regex, path: &str) -> Result<(), ValidationError> {
    if !pattern.is_match(value) {
        return Err(ValidationError::new(
            path,
            ConstraintViolation::Pattern {
                pattern: pattern.as_str(),
            },
        ));
    }
    Ok(())
}

pub(crate) fn known_variant<T: KnownVariant>(value: &T, path: &str) -> Result<(), ValidationError> {
    match value.unknown_value() {
        Some(unknown) => Err(ValidationError::new(
            path,
            ConstraintViolation::UnknownVariant {
                value: unknown.to_string(),
            },
        )),
        None => Ok(()),
    }
}

/// Runs validation for an input builder when `config` asks for it.
pub(crate) fn check_input<T: Validate>(
    config: &crate::config::Config,
    operation: &'static str,
    input: &T,
) -> Result<(), crate::error::BuildError> {
    if !config.validate_inputs() {
        return Ok(());
    }
    input.validate().map_err(|err| {
        tracing::debug!(operation = operation, error = %err, "input failed validation");
        crate::error::BuildError::from(err)
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn member_paths() {
        assert_eq!(member("", "spec"), "spec");
        assert_eq!(member("spec", "listeners"), "spec.listeners");
        assert_eq!(
            member(&index("spec.listeners", 0), "portMapping"),
            "spec.listeners[0].portMapping"
        );
    }

    #[test]
    fn length_counts_characters() {
        assert!(length("ü", 1, Some(1), "name").is_ok());
        assert_eq!(
            length("", 1, Some(255), "meshName"),
            Err(ValidationError::new(
                "meshName",
                ConstraintViolation::Length {
                    min: 1,
                    max: Some(255),
                    actual: 0
                }
            ))
        );
        assert!(length(&"a".repeat(256), 1, Some(255), "meshName").is_err());
        assert!(length(&"a".repeat(4096), 0, None, "path").is_ok());
    }

    #[test]
    fn open_ranges() {
        assert!(range(i64::MAX, Some(0), None, "maxRetries").is_ok());
        let err = range(-1, Some(0), None, "maxRetries").unwrap_err();
        assert_eq!(err.to_string(), "`maxRetries` is -1, expected >= 0");
    }

    #[test]
    fn cloud_map_attribute_patterns() {
        assert!(pattern("stage", &CLOUD_MAP_ATTRIBUTE_KEY, "key").is_ok());
        assert!(pattern("has space", &CLOUD_MAP_ATTRIBUTE_KEY, "key").is_err());
        assert!(pattern("blue green", &CLOUD_MAP_ATTRIBUTE_VALUE, "value").is_ok());
        assert!(pattern(" leading", &CLOUD_MAP_ATTRIBUTE_VALUE, "value").is_err());
    }

    #[test]
    fn display() {
        let err = ValidationError::new(
            "spec.listeners[0].portMapping.port",
            ConstraintViolation::Range {
                min: Some(1),
                max: Some(65535),
                actual: 0,
            },
        );
        assert_eq!(
            err.to_string(),
            "`spec.listeners[0].portMapping.port` is 0, expected 1..=65535"
        );
        let err = ValidationError::new("spec", ConstraintViolation::Required);
        assert_eq!(err.to_string(), "`spec` is required");
    }

    proptest! {
        #[test]
        fn range_agrees_with_bounds(actual in any::<i64>(), min in -1000i64..1000, width in 0i64..1000) {
            let max = min + width;
            let result = range(actual, Some(min), Some(max), "value");
            prop_assert_eq!(result.is_ok(), actual >= min && actual <= max);
        }
    }
}
