/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Classification of service errors for callers that implement their own retry loop.

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// A connection level failure such as a socket timeout. Not produced by modeled errors.
    TransientError,

    /// The service explicitly asked the caller to back off (HTTP 429).
    ThrottlingError,

    /// A server-side failure that is safe to retry (HTTP 500, 503).
    ServerError,

    /// The request itself was wrong. Retrying it unchanged will fail the same way.
    ClientError,
}

impl ErrorKind {
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ErrorKind::ClientError)
    }
}

pub trait ProvideErrorKind {
    /// Returns the `ErrorKind` when the error is modeled with one.
    ///
    /// Unmodeled errors return `None`; callers can fall back on [`code`](ProvideErrorKind::code).
    fn error_kind(&self) -> Option<ErrorKind>;

    /// Returns the error code for this error if one exists
    fn code(&self) -> Option<&str>;

    /// Returns `true` when [`error_kind`](ProvideErrorKind::error_kind) is known and retryable.
    fn is_retryable(&self) -> bool {
        self.error_kind()
            .map(|kind| kind.is_retryable())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod test {
    use super::{ErrorKind, ProvideErrorKind};

    struct Throttled;
    impl ProvideErrorKind for Throttled {
        fn error_kind(&self) -> Option<ErrorKind> {
            Some(ErrorKind::ThrottlingError)
        }

        fn code(&self) -> Option<&str> {
            Some("TooManyRequestsException")
        }
    }

    struct Unmodeled;
    impl ProvideErrorKind for Unmodeled {
        fn error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn retryable_kinds() {
        assert!(ErrorKind::ThrottlingError.is_retryable());
        assert!(ErrorKind::ServerError.is_retryable());
        assert!(ErrorKind::TransientError.is_retryable());
        assert!(!ErrorKind::ClientError.is_retryable());
        assert!(Throttled.is_retryable());
        assert!(!Unmodeled.is_retryable());
    }
}
