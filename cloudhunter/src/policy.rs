/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::error::{self, Error};

/// Decode an IAM policy document into human readable JSON.
///
/// IAM returns inline policy documents URL-encoded (RFC 3986, with `+` standing in for a
/// space). The document is unescaped, parsed as JSON and re-serialized with two-space
/// indentation. Only the structure of the document is preserved: object keys come back
/// sorted and insignificant whitespace is normalized.
///
/// # Errors
///
/// Returns an error of kind [`DecodeError`](crate::error::ErrorKind::DecodeError) if the
/// input contains a malformed escape sequence, does not decode to UTF-8, or is not valid
/// JSON once decoded.
///
/// # Examples
///
/// ```
/// let raw = "%7B%22Version%22%3A%222012-10-17%22%2C%22Statement%22%3A%5B%5D%7D";
/// let decoded = cloudhunter::policy::decode_policy_document(raw).unwrap();
/// assert_eq!(decoded, "{\n  \"Statement\": [],\n  \"Version\": \"2012-10-17\"\n}");
/// ```
pub fn decode_policy_document(raw: &str) -> Result<String, Error> {
    let decoded = unescape(raw)?;
    let document: serde_json::Value =
        serde_json::from_str(&decoded).map_err(error::decode_failed)?;
    serde_json::to_string_pretty(&document).map_err(error::decode_failed)
}

/// Query-component unescaping: `+` becomes a space and every `%` must introduce two hex
/// digits.
fn unescape(raw: &str) -> Result<String, Error> {
    validate_escapes(raw)?;
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(error::decode_failed)
}

fn validate_escapes(raw: &str) -> Result<(), Error> {
    let bytes = raw.as_bytes();
    let mut offset = 0;
    while offset < bytes.len() {
        if bytes[offset] != b'%' {
            offset += 1;
            continue;
        }

        match bytes.get(offset + 1..offset + 3) {
            Some(&[hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => offset += 3,
            _ => {
                let end = (offset + 3).min(raw.len());
                let escape = String::from_utf8_lossy(&bytes[offset..end]);
                return Err(error::decode_failed(format!(
                    "invalid URL escape {escape:?} at offset {offset}"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::decode_policy_document;
    use crate::error::ErrorKind;

    const EMPTY_POLICY: &str = "%7B%22Version%22%3A%222012-10-17%22%2C%22Statement%22%3A%5B%5D%7D";

    #[test]
    fn test_decode_round_trip() {
        let decoded = decode_policy_document(EMPTY_POLICY).unwrap();
        let actual: serde_json::Value = serde_json::from_str(&decoded).unwrap();
        let expected = serde_json::json!({"Version": "2012-10-17", "Statement": []});
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_two_space_indentation() {
        let raw = "%7B%22Statement%22%3A%5B%7B%22Effect%22%3A%22Allow%22%7D%5D%7D";
        let decoded = decode_policy_document(raw).unwrap();
        let expected = r#"{
  "Statement": [
    {
      "Effect": "Allow"
    }
  ]
}"#;
        assert_eq!(expected, decoded);
    }

    #[test]
    fn test_plus_is_space_and_escaped_plus_is_kept() {
        let raw = "%7B%22Sid%22%3A%22read+only%2Bwrite%22%7D";
        let decoded = decode_policy_document(raw).unwrap();
        let actual: serde_json::Value = serde_json::from_str(&decoded).unwrap();
        assert_eq!("read only+write", actual["Sid"]);
    }

    #[test]
    fn test_already_decoded_document() {
        let decoded = decode_policy_document(r#"{"Version":"2012-10-17"}"#).unwrap();
        assert_eq!("{\n  \"Version\": \"2012-10-17\"\n}", decoded);
    }

    #[test]
    fn test_non_json_is_decode_error() {
        let err = decode_policy_document("not%20a%20policy").unwrap_err();
        assert_eq!(&ErrorKind::DecodeError, err.kind());
    }

    #[test]
    fn test_malformed_escapes_are_decode_errors() {
        for raw in ["%7B%zz%7D", "%7B%7D%", "%7B%7D%4", "%%7B%7D"] {
            let err = decode_policy_document(raw).unwrap_err();
            assert_eq!(&ErrorKind::DecodeError, err.kind(), "input {raw}");
        }
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let err = decode_policy_document("%22%FF%22").unwrap_err();
        assert_eq!(&ErrorKind::DecodeError, err.kind());
    }

    #[test]
    fn test_empty_document_is_decode_error() {
        let err = decode_policy_document("").unwrap_err();
        assert_eq!(&ErrorKind::DecodeError, err.kind());
    }
}
