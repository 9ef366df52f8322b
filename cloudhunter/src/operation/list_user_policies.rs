/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_iam::operation::list_user_policies::ListUserPoliciesInput as SdkListUserPoliciesInput;
use tracing::Instrument;

/// Operation builders
pub mod builders;

mod input;
/// Input type for listing the inline policies of a user
pub use input::{ListUserPoliciesInput, ListUserPoliciesInputBuilder};

mod output;
/// Output type for listing the inline policies of a user
pub use output::{ListUserPoliciesOutput, ListUserPoliciesOutputBuilder};

use crate::access::AccessClassification;
use crate::error;
use crate::operation::next_page_token;

/// Operation struct for listing the names of the inline policies embedded in a user
#[derive(Clone, Default, Debug)]
pub(crate) struct ListUserPolicies;

impl ListUserPolicies {
    /// Execute a single `ListUserPolicies` operation, following markers until the last page.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ListUserPoliciesInput,
    ) -> Result<ListUserPoliciesOutput, error::Error> {
        let iam = handle.iam_client()?;
        let user_name = input
            .user_name
            .ok_or_else(|| error::invalid_input("a user name is required"))?;
        let mut output = ListUserPoliciesOutput::builder().user_name(user_name.as_str());
        let mut marker: Option<String> = None;

        let span = tracing::debug_span!("send-list-user-policies", user_name = user_name.as_str());
        loop {
            let result = SdkListUserPoliciesInput::builder()
                .user_name(user_name.as_str())
                .set_marker(marker.clone())
                .send_with(iam)
                .instrument(span.clone())
                .await;

            let page = match result {
                Ok(page) => page,
                Err(err) => match AccessClassification::of(&err) {
                    AccessClassification::PermissionDenied => {
                        tracing::warn!("listing policies of {user_name:?} was denied, returning the names found so far: {err}");
                        return Ok(output.access_denied(true).build());
                    }
                    AccessClassification::Fatal => return Err(err.into()),
                },
            };

            let next = next_page_token(page.is_truncated(), page.marker(), marker.as_deref());
            output = output.set_policy_names(Some(page.policy_names));

            match next {
                Some(next) => marker = Some(next),
                None => break,
            }
        }

        Ok(output.build())
    }
}
