/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_iam::operation::list_users::ListUsersInput as SdkListUsersInput;
use tracing::Instrument;

/// Operation builders
pub mod builders;

mod input;
/// Input type for listing IAM users
pub use input::{ListUsersInput, ListUsersInputBuilder};

mod output;
/// Output type for listing IAM users
pub use output::{ListUsersOutput, ListUsersOutputBuilder};

use crate::access::AccessClassification;
use crate::error;
use crate::operation::next_page_token;

/// Operation struct for listing the IAM users of the account
#[derive(Clone, Default, Debug)]
pub(crate) struct ListUsers;

impl ListUsers {
    /// Execute a single `ListUsers` operation, following markers until the last page.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ListUsersInput,
    ) -> Result<ListUsersOutput, error::Error> {
        let iam = handle.iam_client()?;
        let mut output = ListUsersOutput::builder();
        let mut marker: Option<String> = None;

        loop {
            let result = SdkListUsersInput::builder()
                .set_path_prefix(input.path_prefix.clone())
                .set_marker(marker.clone())
                .send_with(iam)
                .instrument(tracing::debug_span!("send-list-users"))
                .await;

            let page = match result {
                Ok(page) => page,
                Err(err) => match AccessClassification::of(&err) {
                    AccessClassification::PermissionDenied => {
                        tracing::warn!("listing users was denied, returning the users found so far: {err}");
                        return Ok(output.access_denied(true).build());
                    }
                    AccessClassification::Fatal => return Err(err.into()),
                },
            };

            let next = next_page_token(page.is_truncated(), page.marker(), marker.as_deref());
            output = output.set_users(Some(page.users));

            match next {
                Some(next) => marker = Some(next),
                None => break,
            }
        }

        Ok(output.build())
    }
}
