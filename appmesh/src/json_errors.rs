/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Strips the decorations services add around a modeled error name.
///
/// `aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/` becomes `FooError`.
pub fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

#[cfg(test)]
mod test {
    use super::sanitize_error_code;

    #[test]
    fn error_code_sanitization() {
        assert_eq!(sanitize_error_code("NotFoundException"), "NotFoundException");
        assert_eq!(
            sanitize_error_code("com.amazonaws.appmesh#NotFoundException"),
            "NotFoundException"
        );
        assert_eq!(
            sanitize_error_code(
                "NotFoundException:http://internal.amazon.com/coral/com.amazonaws.appmesh/"
            ),
            "NotFoundException"
        );
        assert_eq!(
            sanitize_error_code(
                "com.amazonaws.appmesh#ConflictException:http://internal.amazon.com/coral/com.amazonaws.appmesh/"
            ),
            "ConflictException"
        );
        assert_eq!(sanitize_error_code(""), "");
    }
}
