/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Ties an operation marker such as [`CreateMesh`](crate::operation::CreateMesh) to its
/// input, output and error shapes.
pub trait OperationShape {
    /// The name of the operation.
    const NAME: &'static str;
    /// Whether the input carries a `clientToken` the service uses to recognize retries.
    const IDEMPOTENT: bool;

    /// The operation input.
    type Input: crate::validation::Validate;
    /// The operation output.
    type Output;
    /// The operation error.
    type Error: std::error::Error + smithy_types::retry::ProvideErrorKind;
}
