/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_iam::operation::list_access_keys::ListAccessKeysInput as SdkListAccessKeysInput;
use tracing::Instrument;

/// Operation builders
pub mod builders;

mod input;
/// Input type for listing access keys
pub use input::{ListAccessKeysInput, ListAccessKeysInputBuilder};

mod output;
/// Output type for listing access keys
pub use output::{ListAccessKeysOutput, ListAccessKeysOutputBuilder};

use crate::access::AccessClassification;
use crate::error;
use crate::operation::next_page_token;

/// Operation struct for listing the access keys of an IAM user
#[derive(Clone, Default, Debug)]
pub(crate) struct ListAccessKeys;

impl ListAccessKeys {
    /// Execute a single `ListAccessKeys` operation, following markers until the last page.
    ///
    /// Without a user name IAM answers for the user the request is signed as.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ListAccessKeysInput,
    ) -> Result<ListAccessKeysOutput, error::Error> {
        let iam = handle.iam_client()?;
        let mut output = ListAccessKeysOutput::builder();
        let mut marker: Option<String> = None;

        let span = tracing::debug_span!(
            "send-list-access-keys",
            user_name = input.user_name().unwrap_or_default()
        );
        loop {
            let result = SdkListAccessKeysInput::builder()
                .set_user_name(input.user_name.clone())
                .set_marker(marker.clone())
                .send_with(iam)
                .instrument(span.clone())
                .await;

            let page = match result {
                Ok(page) => page,
                Err(err) => match AccessClassification::of(&err) {
                    AccessClassification::PermissionDenied => {
                        tracing::warn!("listing access keys was denied, returning the keys found so far: {err}");
                        return Ok(output.access_denied(true).build());
                    }
                    AccessClassification::Fatal => return Err(err.into()),
                },
            };

            let next = next_page_token(page.is_truncated(), page.marker(), marker.as_deref());
            output = output.set_access_keys(Some(page.access_key_metadata));

            match next {
                Some(next) => marker = Some(next),
                None => break,
            }
        }

        Ok(output.build())
    }
}
