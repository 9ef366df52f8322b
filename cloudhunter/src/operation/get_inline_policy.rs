/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use tracing::Instrument;

/// Operation builders
pub mod builders;

mod input;
/// Input type for retrieving an inline policy
pub use input::{GetInlinePolicyInput, GetInlinePolicyInputBuilder};

mod output;
/// Output type for retrieving an inline policy
pub use output::{GetInlinePolicyOutput, GetInlinePolicyOutputBuilder};

use crate::error;
use crate::policy::decode_policy_document;
use crate::types::PolicyPrincipal;

/// Operation struct for retrieving an inline IAM policy
#[derive(Clone, Default, Debug)]
pub(crate) struct GetInlinePolicy;

impl GetInlinePolicy {
    /// Execute a single `GetInlinePolicy` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: GetInlinePolicyInput,
    ) -> Result<GetInlinePolicyOutput, error::Error> {
        let iam = handle.iam_client()?;
        let (principal, policy_name) = match (input.principal, input.policy_name) {
            (Some(principal), Some(policy_name)) => (principal, policy_name),
            _ => return Err(error::invalid_input("a principal and a policy name are required")),
        };

        let span = tracing::debug_span!(
            "get-inline-policy",
            principal = %principal,
            policy_name = policy_name.as_str()
        );
        let raw_document = fetch_document(iam, &principal, &policy_name)
            .instrument(span)
            .await?;
        let document = decode_policy_document(&raw_document)?;

        Ok(GetInlinePolicyOutput {
            principal,
            policy_name,
            raw_document,
            document,
        })
    }
}

/// Fetch the still percent-encoded policy document from the API matching the principal
async fn fetch_document(
    iam: &aws_sdk_iam::Client,
    principal: &PolicyPrincipal,
    policy_name: &str,
) -> Result<String, error::Error> {
    let document = match principal {
        PolicyPrincipal::User(name) => iam
            .get_user_policy()
            .user_name(name)
            .policy_name(policy_name)
            .send()
            .await?
            .policy_document,
        PolicyPrincipal::Group(name) => iam
            .get_group_policy()
            .group_name(name)
            .policy_name(policy_name)
            .send()
            .await?
            .policy_document,
        PolicyPrincipal::Role(name) => iam
            .get_role_policy()
            .role_name(name)
            .policy_name(policy_name)
            .send()
            .await?
            .policy_document,
    };

    Ok(document)
}
