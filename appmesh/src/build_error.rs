/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::validation::ValidationError;
use thiserror::Error;

/// Returned by input builders when the input cannot be constructed.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum BuildError {
    #[error("missing required field `{field}`: {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
}
