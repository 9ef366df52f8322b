/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::types::{CommonPrefix, Object};
use aws_smithy_mocks_experimental::{mock, Rule};
use aws_smithy_runtime_api::client::http::{
    http_client_fn, HttpConnector, HttpConnectorFuture, SharedHttpClient, SharedHttpConnector,
};
use aws_smithy_runtime_api::client::orchestrator::{HttpRequest, HttpResponse};
use aws_smithy_runtime_api::http::StatusCode;
use aws_smithy_types::body::SdkBody;

#[derive(Debug)]
struct StubConnector;

impl HttpConnector for StubConnector {
    fn call(&self, _request: HttpRequest) -> HttpConnectorFuture {
        HttpConnectorFuture::ready(Ok(HttpResponse::new(
            StatusCode::try_from(200).unwrap(),
            SdkBody::empty(),
        )))
    }
}

/// HTTP client that never touches the network.
///
/// `then_http_response` mocks replace the response only after transmission, so mocked
/// clients need a transport that always succeeds.
pub fn stub_http_client() -> SharedHttpClient {
    http_client_fn(|_, _| SharedHttpConnector::new(StubConnector))
}

/// Create a `ListObjectsV2` output page
///
/// The page is truncated if and only if `next_token` is set.
pub fn list_page(
    next_token: Option<&str>,
    common_prefixes: &[&str],
    keys: &[&str],
) -> ListObjectsV2Output {
    let common_prefixes = common_prefixes
        .iter()
        .map(|p| CommonPrefix::builder().prefix(*p).build())
        .collect();

    let contents = keys
        .iter()
        .map(|k| Object::builder().key(*k).size(0).build())
        .collect();

    ListObjectsV2Output::builder()
        .is_truncated(next_token.is_some())
        .set_next_continuation_token(next_token.map(str::to_owned))
        .set_common_prefixes(Some(common_prefixes))
        .set_contents(Some(contents))
        .build()
}

fn status_of(code: &str) -> u16 {
    match code {
        "AccessDenied" | "AllAccessDisabled" => 403,
        "NoSuchBucket" | "NoSuchKey" | "NoSuchEntity" => 404,
        _ => 400,
    }
}

/// An S3 (REST XML) error response carrying the given error code.
///
/// The status code follows the code: 403 for denials, 404 for missing resources and 400
/// otherwise, so the SDK never retries it.
pub fn s3_error_response(code: &str) -> HttpResponse {
    let body = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>{code}</Code><Message>mocked {code}</Message><RequestId>test-request</RequestId></Error>"#
    );
    HttpResponse::new(
        StatusCode::try_from(status_of(code)).unwrap(),
        SdkBody::from(body),
    )
}

/// An IAM (AWS query) error response carrying the given error code
pub fn iam_error_response(code: &str) -> HttpResponse {
    let body = format!(
        r#"<ErrorResponse xmlns="https://iam.amazonaws.com/doc/2010-05-08/">
  <Error><Type>Sender</Type><Code>{code}</Code><Message>mocked {code}</Message></Error>
  <RequestId>test-request</RequestId>
</ErrorResponse>"#
    );
    HttpResponse::new(
        StatusCode::try_from(status_of(code)).unwrap(),
        SdkBody::from(body),
    )
}

/// Mock rule answering a single, non-paginated listing of `prefix` with the given
/// common prefixes and keys.
///
/// An empty `prefix` matches the listing of the bucket root.
pub fn list_prefix_rule(
    prefix: &'static str,
    common_prefixes: &'static [&'static str],
    keys: &'static [&'static str],
) -> Rule {
    mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(move |r| r.prefix().unwrap_or_default() == prefix)
        .then_output(move || list_page(None, common_prefixes, keys))
}

/// Mock rule failing the listing of `prefix` with the given error code
pub fn list_prefix_error_rule(prefix: &'static str, code: &'static str) -> Rule {
    mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(move |r| r.prefix().unwrap_or_default() == prefix)
        .then_http_response(move || s3_error_response(code))
}

/// Mock rule answering one page of a paginated listing of `prefix`.
///
/// `token` is the continuation token the request must carry (`None` for the first page)
/// and `next_token` the token handed back for the following page.
pub fn list_prefix_page_rule(
    prefix: &'static str,
    token: Option<&'static str>,
    next_token: Option<&'static str>,
    common_prefixes: &'static [&'static str],
    keys: &'static [&'static str],
) -> Rule {
    mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(move |r| {
            r.prefix().unwrap_or_default() == prefix && r.continuation_token() == token
        })
        .then_output(move || list_page(next_token, common_prefixes, keys))
}
