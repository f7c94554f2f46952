/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::assert_json_eq_no_panic;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("body was not valid json: {reason}\n{found}")]
    InvalidBodyFormat { reason: String, found: String },
    #[error("body did not match:\n{comparison}")]
    BodyDidNotMatch { comparison: String },
    #[error("required member missing: `{expected}`")]
    RequiredMember { expected: String },
    #[error("forbidden member present: `{expected}` (found `{found}`)")]
    ForbiddenMember { expected: String, found: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        eprintln!("{}", e);
        panic!("Protocol test failed");
    }
}

fn parse(body: &str) -> Result<Value, ProtocolTestFailure> {
    serde_json::from_str(body).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
        reason: e.to_string(),
        found: body.to_owned(),
    })
}

/// Compares two JSON documents structurally: member order and whitespace are ignored.
pub fn validate_body(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let actual = parse(actual)?;
    let expected = parse(expected)?;
    assert_json_eq_no_panic(&actual, &expected)
        .map_err(|comparison| ProtocolTestFailure::BodyDidNotMatch { comparison })
}

/// Every entry of `members` is a JSON pointer (`/spec/listeners/0/portMapping`) that must
/// resolve in `body`.
pub fn require_members(body: &str, members: &[&str]) -> Result<(), ProtocolTestFailure> {
    let doc = parse(body)?;
    for member in members {
        if doc.pointer(member).is_none() {
            return Err(ProtocolTestFailure::RequiredMember {
                expected: member.to_string(),
            });
        }
    }
    Ok(())
}

/// Every entry of `members` is a JSON pointer that must not resolve in `body`. Unset optional
/// members are expected to be omitted rather than written as `null`.
pub fn forbid_members(body: &str, members: &[&str]) -> Result<(), ProtocolTestFailure> {
    let doc = parse(body)?;
    for member in members {
        if let Some(found) = doc.pointer(member) {
            return Err(ProtocolTestFailure::ForbiddenMember {
                expected: member.to_string(),
                found: found.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{forbid_members, require_members, validate_body, ProtocolTestFailure};
    use pretty_assertions::assert_eq;

    const MESH: &str = r#"{"meshName":"default","spec":{"egressFilter":{"type":"DROP_ALL"}}}"#;

    #[test]
    fn test_validate_body() {
        validate_body(
            MESH,
            r#"{
                "spec": { "egressFilter": { "type": "DROP_ALL" } },
                "meshName": "default"
            }"#,
        )
        .expect("member order and whitespace are ignored");
        validate_body(MESH, r#"{"meshName":"default"}"#).expect_err("spec is missing");
        validate_body(MESH, r#"{"meshName":"other","spec":{"egressFilter":{"type":"DROP_ALL"}}}"#)
            .expect_err("mesh names differ");
    }

    #[test]
    fn test_invalid_body() {
        match validate_body("{not json", "{}") {
            Err(ProtocolTestFailure::InvalidBodyFormat { found, .. }) => {
                assert_eq!(found, "{not json")
            }
            other => panic!("expected invalid body, got {:?}", other),
        }
    }

    #[test]
    fn test_require_members() {
        require_members(MESH, &["/meshName", "/spec/egressFilter/type"]).expect("present");
        assert_eq!(
            require_members(MESH, &["/clientToken"]),
            Err(ProtocolTestFailure::RequiredMember {
                expected: "/clientToken".to_owned()
            })
        );
    }

    #[test]
    fn test_forbid_members() {
        forbid_members(MESH, &["/tags", "/spec/egressFilter/mode"]).expect("absent");
        assert_eq!(
            forbid_members(MESH, &["/spec/egressFilter/type"]),
            Err(ProtocolTestFailure::ForbiddenMember {
                expected: "/spec/egressFilter/type".to_owned(),
                found: "\"DROP_ALL\"".to_owned()
            })
        );
    }
}
