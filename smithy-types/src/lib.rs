/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Runtime types referenced by the generated App Mesh model crate.

pub mod instant;
pub mod retry;

mod error;

pub use crate::error::{Builder as ErrorBuilder, Error};
pub use crate::instant::Instant;
