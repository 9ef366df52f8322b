/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_iam::operation::get_group_policy::GetGroupPolicyOutput;
use aws_sdk_iam::operation::get_role_policy::GetRolePolicyOutput;
use aws_sdk_iam::operation::get_user_policy::GetUserPolicyOutput;
use aws_smithy_mocks_experimental::{mock, mock_client, Rule, RuleMode};
use cloudhunter::error::ErrorKind;
use cloudhunter::types::PolicyPrincipal;
use test_common::iam_error_response;

const ENCODED: &str = "%7B%22Version%22%3A%222012-10-17%22%2C%22Statement%22%3A%5B%7B%22Effect%22%3A%22Allow%22%2C%22Action%22%3A%22s3%3AGetObject%22%2C%22Resource%22%3A%22*%22%7D%5D%7D";

const DECODED: &str = r#"{
  "Statement": [
    {
      "Action": "s3:GetObject",
      "Effect": "Allow",
      "Resource": "*"
    }
  ],
  "Version": "2012-10-17"
}"#;

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

#[tokio::test]
async fn test_user_policy_is_decoded() {
    let rule = mock!(aws_sdk_iam::Client::get_user_policy)
        .match_requests(|r| r.user_name() == Some("alice") && r.policy_name() == Some("s3-read"))
        .then_output(|| {
            GetUserPolicyOutput::builder()
                .user_name("alice")
                .policy_name("s3-read")
                .policy_document(ENCODED)
                .build()
                .unwrap()
        });
    let client = client(&[&rule]);

    let output = client
        .get_inline_policy()
        .principal(PolicyPrincipal::User("alice".into()))
        .policy_name("s3-read")
        .send()
        .await
        .unwrap();

    assert_eq!(DECODED, output.document());
    assert_eq!(ENCODED, output.raw_document());
    assert_eq!("s3-read", output.policy_name());
    assert_eq!(&PolicyPrincipal::User("alice".into()), output.principal());
}

#[tokio::test]
async fn test_group_and_role_policies() {
    let group = mock!(aws_sdk_iam::Client::get_group_policy)
        .match_requests(|r| r.group_name() == Some("admins"))
        .then_output(|| {
            GetGroupPolicyOutput::builder()
                .group_name("admins")
                .policy_name("all")
                .policy_document("%7B%22a%22%3A1%7D")
                .build()
                .unwrap()
        });
    let role = mock!(aws_sdk_iam::Client::get_role_policy)
        .match_requests(|r| r.role_name() == Some("lambda"))
        .then_output(|| {
            GetRolePolicyOutput::builder()
                .role_name("lambda")
                .policy_name("all")
                .policy_document("%7B%22b%22%3A2%7D")
                .build()
                .unwrap()
        });
    let client = client(&[&group, &role]);

    let output = client
        .get_inline_policy()
        .principal(PolicyPrincipal::Group("admins".into()))
        .policy_name("all")
        .send()
        .await
        .unwrap();
    assert_eq!("{\n  \"a\": 1\n}", output.document());

    let output = client
        .get_inline_policy()
        .principal(PolicyPrincipal::Role("lambda".into()))
        .policy_name("all")
        .send()
        .await
        .unwrap();
    assert_eq!("{\n  \"b\": 2\n}", output.document());
}

#[tokio::test]
async fn test_undecodable_document() {
    let rule = mock!(aws_sdk_iam::Client::get_user_policy).then_output(|| {
        GetUserPolicyOutput::builder()
            .user_name("alice")
            .policy_name("broken")
            .policy_document("%7B%22unterminated")
            .build()
            .unwrap()
    });
    let client = client(&[&rule]);

    let err = client
        .get_inline_policy()
        .principal(PolicyPrincipal::User("alice".into()))
        .policy_name("broken")
        .send()
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::DecodeError, err.kind());
}

#[tokio::test]
async fn test_service_errors_are_classified() {
    let missing = mock!(aws_sdk_iam::Client::get_user_policy)
        .then_http_response(|| iam_error_response("NoSuchEntity"));
    let denied = mock!(aws_sdk_iam::Client::get_user_policy)
        .then_http_response(|| iam_error_response("AccessDenied"));
    let client = client(&[&missing, &denied]);

    let send = || {
        client
            .get_inline_policy()
            .principal(PolicyPrincipal::User("alice".into()))
            .policy_name("s3-read")
            .send()
    };

    assert_eq!(&ErrorKind::NotFound, send().await.unwrap_err().kind());
    assert_eq!(&ErrorKind::PermissionDenied, send().await.unwrap_err().kind());
}

#[tokio::test]
async fn test_iam_client_required() {
    let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, NO_RULES);
    let client = cloudhunter::Client::new(cloudhunter::Config::builder().client(s3).build());

    let err = client
        .get_inline_policy()
        .principal(PolicyPrincipal::Role("lambda".into()))
        .policy_name("all")
        .send()
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());
}
