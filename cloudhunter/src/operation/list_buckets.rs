/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::operation::list_buckets::ListBucketsInput as SdkListBucketsInput;
use tracing::Instrument;

/// Operation builders
pub mod builders;

mod input;
/// Input type for listing buckets
pub use input::{ListBucketsInput, ListBucketsInputBuilder};

mod output;
/// Output type for listing buckets
pub use output::{ListBucketsOutput, ListBucketsOutputBuilder};

use crate::access::AccessClassification;
use crate::error;
use crate::operation::next_page_token;

/// Operation struct for listing the buckets visible to the caller
#[derive(Clone, Default, Debug)]
pub(crate) struct ListBuckets;

impl ListBuckets {
    /// Execute a single `ListBuckets` operation, following continuation tokens until the
    /// service reports the last page.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ListBucketsInput,
    ) -> Result<ListBucketsOutput, error::Error> {
        let client = handle.config.client();
        let mut output = ListBucketsOutput::builder();
        let mut continuation_token: Option<String> = None;

        loop {
            let result = SdkListBucketsInput::builder()
                .set_prefix(input.prefix.clone())
                .set_continuation_token(continuation_token.clone())
                .send_with(client)
                .instrument(tracing::debug_span!("send-list-buckets"))
                .await;

            let page = match result {
                Ok(page) => page,
                Err(err) => match AccessClassification::of(&err) {
                    AccessClassification::PermissionDenied => {
                        tracing::warn!("listing buckets was denied, returning the buckets found so far: {err}");
                        return Ok(output.access_denied(true).build());
                    }
                    AccessClassification::Fatal => return Err(err.into()),
                },
            };

            // ListBuckets has no truncation flag, a token alone means there is more
            let next_token = next_page_token(
                true,
                page.continuation_token(),
                continuation_token.as_deref(),
            );
            output = output.set_buckets(page.buckets);

            match next_token {
                Some(token) => continuation_token = Some(token),
                None => break,
            }
        }

        Ok(output.build())
    }
}
