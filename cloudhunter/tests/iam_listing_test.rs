/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_iam::operation::list_access_keys::ListAccessKeysOutput;
use aws_sdk_iam::operation::list_user_policies::ListUserPoliciesOutput;
use aws_sdk_iam::operation::list_users::ListUsersOutput;
use aws_sdk_iam::primitives::DateTime;
use aws_sdk_iam::types::{AccessKeyMetadata, StatusType, User};
use aws_smithy_mocks_experimental::{mock, mock_client, Rule, RuleMode};
use cloudhunter::error::ErrorKind;
use test_common::iam_error_response;

const NO_RULES: &[&Rule] = &[];

fn client(rules: &[&Rule]) -> cloudhunter::Client {
    let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, NO_RULES);
    let iam = mock_client!(aws_sdk_iam, RuleMode::Sequential, rules, |c| c
        .http_client(test_common::stub_http_client()));
    let config = cloudhunter::Config::builder()
        .client(s3)
        .iam_client(iam)
        .build();
    cloudhunter::Client::new(config)
}

fn user(name: &str) -> User {
    User::builder()
        .path("/")
        .user_name(name)
        .user_id(format!("AIDA{}", name.to_uppercase()))
        .arn(format!("arn:aws:iam::123456789012:user/{name}"))
        .create_date(DateTime::from_secs(1_700_000_000))
        .build()
        .unwrap()
}

fn users_page(marker: Option<&str>, names: &[&str]) -> ListUsersOutput {
    ListUsersOutput::builder()
        .set_users(Some(names.iter().map(|n| user(n)).collect()))
        .is_truncated(marker.is_some())
        .set_marker(marker.map(str::to_owned))
        .build()
        .unwrap()
}

fn user_names(output: &cloudhunter::operation::list_users::ListUsersOutput) -> Vec<&str> {
    output.users().iter().map(User::user_name).collect()
}

#[tokio::test]
async fn test_list_users_follows_markers() {
    let page1 = mock!(aws_sdk_iam::Client::list_users)
        .match_requests(|r| r.marker().is_none())
        .then_output(|| users_page(Some("m1"), &["alice", "bob"]));
    let page2 = mock!(aws_sdk_iam::Client::list_users)
        .match_requests(|r| r.marker() == Some("m1"))
        .then_output(|| users_page(None, &["carol"]));
    let client = client(&[&page1, &page2]);

    let output = client.list_users().send().await.unwrap();

    assert_eq!(vec!["alice", "bob", "carol"], user_names(&output));
    assert!(!output.access_denied());
}

#[tokio::test]
async fn test_list_users_path_prefix_is_sent() {
    let filtered = mock!(aws_sdk_iam::Client::list_users)
        .match_requests(|r| r.path_prefix() == Some("/ops/"))
        .then_output(|| users_page(None, &["dave"]));
    let client = client(&[&filtered]);

    let output = client.list_users().path_prefix("/ops/").send().await.unwrap();
    assert_eq!(vec!["dave"], user_names(&output));
}

#[tokio::test]
async fn test_list_users_denied_page_returns_partial_list() {
    let page1 = mock!(aws_sdk_iam::Client::list_users)
        .then_output(|| users_page(Some("m1"), &["alice"]));
    let denied = mock!(aws_sdk_iam::Client::list_users)
        .then_http_response(|| iam_error_response("AccessDenied"));
    let client = client(&[&page1, &denied]);

    let output = client.list_users().send().await.unwrap();

    assert_eq!(vec!["alice"], user_names(&output));
    assert!(output.access_denied());
}

#[tokio::test]
async fn test_list_users_other_errors_are_returned() {
    let failed = mock!(aws_sdk_iam::Client::list_users)
        .then_http_response(|| iam_error_response("ServiceFailure"));
    let client = client(&[&failed]);

    let err = client.list_users().send().await.unwrap_err();
    assert_eq!(&ErrorKind::ServiceError, err.kind());
}

#[tokio::test]
async fn test_list_access_keys() {
    let keys = mock!(aws_sdk_iam::Client::list_access_keys)
        .match_requests(|r| r.user_name() == Some("alice"))
        .then_output(|| {
            let key = AccessKeyMetadata::builder()
                .user_name("alice")
                .access_key_id("AKIAEXAMPLE")
                .status(StatusType::Active)
                .build();
            ListAccessKeysOutput::builder()
                .access_key_metadata(key)
                .is_truncated(false)
                .build()
                .unwrap()
        });
    let client = client(&[&keys]);

    let output = client.list_access_keys().user_name("alice").send().await.unwrap();

    assert_eq!(1, output.access_keys().len());
    let key = &output.access_keys()[0];
    assert_eq!(Some("AKIAEXAMPLE"), key.access_key_id());
    assert_eq!(Some(&StatusType::Active), key.status());
    assert!(!output.access_denied());
}

#[tokio::test]
async fn test_list_access_keys_defaults_to_caller() {
    let keys = mock!(aws_sdk_iam::Client::list_access_keys)
        .match_requests(|r| r.user_name().is_none())
        .then_output(|| {
            ListAccessKeysOutput::builder()
                .set_access_key_metadata(Some(Vec::new()))
                .build()
                .unwrap()
        });
    let client = client(&[&keys]);

    let output = client.list_access_keys().send().await.unwrap();
    assert!(output.access_keys().is_empty());
}

#[tokio::test]
async fn test_list_access_keys_denied() {
    let denied = mock!(aws_sdk_iam::Client::list_access_keys)
        .then_http_response(|| iam_error_response("AccessDenied"));
    let client = client(&[&denied]);

    let output = client.list_access_keys().send().await.unwrap();
    assert!(output.access_keys().is_empty());
    assert!(output.access_denied());
}

#[tokio::test]
async fn test_list_user_policies_follows_markers() {
    let page1 = mock!(aws_sdk_iam::Client::list_user_policies)
        .match_requests(|r| r.user_name() == Some("alice") && r.marker().is_none())
        .then_output(|| {
            ListUserPoliciesOutput::builder()
                .policy_names("s3-read")
                .is_truncated(true)
                .marker("m1")
                .build()
                .unwrap()
        });
    let page2 = mock!(aws_sdk_iam::Client::list_user_policies)
        .match_requests(|r| r.user_name() == Some("alice") && r.marker() == Some("m1"))
        .then_output(|| {
            ListUserPoliciesOutput::builder()
                .policy_names("kms-decrypt")
                .is_truncated(false)
                .build()
                .unwrap()
        });
    let client = client(&[&page1, &page2]);

    let output = client
        .list_user_policies()
        .user_name("alice")
        .send()
        .await
        .unwrap();

    assert_eq!("alice", output.user_name());
    assert_eq!(vec!["s3-read", "kms-decrypt"], output.policy_names());
    assert!(!output.access_denied());
}

#[tokio::test]
async fn test_list_user_policies_missing_user() {
    let missing = mock!(aws_sdk_iam::Client::list_user_policies)
        .then_http_response(|| iam_error_response("NoSuchEntity"));
    let client = client(&[&missing]);

    let err = client
        .list_user_policies()
        .user_name("nobody")
        .send()
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::NotFound, err.kind());
}

#[tokio::test]
async fn test_list_user_policies_requires_user_name() {
    let client = client(NO_RULES);
    let err = client.list_user_policies().send().await.unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());
}

#[tokio::test]
async fn test_iam_client_required() {
    let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, NO_RULES);
    let client = cloudhunter::Client::new(cloudhunter::Config::builder().client(s3).build());

    let err = client.list_users().send().await.unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());

    let err = client.list_access_keys().send().await.unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());
}
