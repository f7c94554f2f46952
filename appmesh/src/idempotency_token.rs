/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::sync::Mutex;

/// Formats 122 bits of `input` as a version 4 UUID string.
pub(crate) fn uuid_v4(input: u128) -> String {
    let mut out = String::with_capacity(36);
    // u4-aligned index into [input]
    let mut rnd_idx: u8 = 0;
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    for str_idx in 0..36 {
        if str_idx == 8 || str_idx == 13 || str_idx == 18 || str_idx == 23 {
            out.push('-');
        // UUID version character
        } else if str_idx == 14 {
            out.push('4');
        } else {
            let mut dat: u8 = ((input >> (rnd_idx * 4)) & 0x0F) as u8;
            // UUID variant bits
            if str_idx == 19 {
                dat |= 0b00001000;
            }
            rnd_idx += 1;
            out.push(HEX_CHARS[dat as usize] as char);
        }
    }
    out
}

/// Source of `clientToken` values for Create and Update requests.
///
/// The service uses the token to recognize a retried request. Input builders call the configured
/// provider only when the caller did not set a token.
pub trait MakeIdempotencyToken: Send + Sync {
    fn make_idempotency_token(&self) -> String;
}

/// Random UUID v4 tokens, seeded from `fastrand`'s thread-local generator.
pub fn default_provider() -> impl MakeIdempotencyToken {
    Mutex::new(fastrand::Rng::new())
}

impl<T> MakeIdempotencyToken for T
where
    T: Fn() -> String + Send + Sync,
{
    fn make_idempotency_token(&self) -> String {
        self()
    }
}

impl MakeIdempotencyToken for Mutex<fastrand::Rng> {
    fn make_idempotency_token(&self) -> String {
        // a poisoned lock still holds a usable generator
        let rng = match self.lock() {
            Ok(rng) => rng,
            Err(poisoned) => poisoned.into_inner(),
        };
        uuid_v4(rng.u128(..))
    }
}

#[cfg(test)]
mod test {
    use super::{default_provider, uuid_v4, MakeIdempotencyToken};
    use proptest::prelude::*;
    use std::sync::Mutex;

    #[test]
    fn test_uuid() {
        assert_eq!(uuid_v4(0), "00000000-0000-4000-8000-000000000000");
        assert_eq!(uuid_v4(12341234), "2ff4cb00-0000-4000-8000-000000000000");
        assert_eq!(
            uuid_v4(u128::max_value()),
            "ffffffff-ffff-4fff-ffff-ffffffffffff"
        );
    }

    #[test]
    fn default_token_generator_smoke_test() {
        // smoke test to make sure the default token generator produces a token-like object
        assert_valid(default_provider().make_idempotency_token());
    }

    #[test]
    fn seeded_generators_agree() {
        let a = Mutex::new(fastrand::Rng::with_seed(123));
        let b = Mutex::new(fastrand::Rng::with_seed(123));
        assert_eq!(a.make_idempotency_token(), b.make_idempotency_token());
        assert_ne!(a.make_idempotency_token(), a.make_idempotency_token());
    }

    #[test]
    fn closures_are_providers() {
        let fixed = || "00000000-0000-4000-8000-000000000000".to_string();
        assert_eq!(
            fixed.make_idempotency_token(),
            "00000000-0000-4000-8000-000000000000"
        );
    }

    fn assert_valid(uuid: String) {
        assert_eq!(uuid.len(), 36);
        let bytes = uuid.as_bytes();
        let dashes: Vec<usize> = uuid
            .chars()
            .enumerate()
            .filter_map(|(idx, chr)| if chr == '-' { Some(idx) } else { None })
            .collect();
        assert_eq!(dashes, vec![8, 13, 18, 23]);
        // Check version
        assert_eq!(bytes[14] as char, '4');
        // Check variant
        assert!(bytes[19] as char >= '8');
    }

    proptest! {
        #[test]
        fn doesnt_crash_uuid(v in any::<u128>()) {
            let uuid = uuid_v4(v);
            assert_valid(uuid);
        }
    }
}
