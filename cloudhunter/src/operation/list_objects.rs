/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::{
    error::SdkError,
    operation::list_objects_v2::{ListObjectsV2Error, ListObjectsV2Input, ListObjectsV2Output},
    types::Object,
};
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use tracing::Instrument;

/// One page of a `ListObjectsV2` response.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct ListPage {
    /// Virtual sub-folders directly under the listed prefix, in service order
    pub(crate) common_prefixes: Vec<String>,
    /// Objects directly under the listed prefix, in service order
    pub(crate) objects: Vec<Object>,
}

impl From<ListObjectsV2Output> for ListPage {
    fn from(mut output: ListObjectsV2Output) -> Self {
        let common_prefixes = output
            .common_prefixes
            .take()
            .unwrap_or_default()
            .into_iter()
            .filter_map(|prefix| prefix.prefix)
            .collect();

        ListPage {
            common_prefixes,
            objects: output.contents.take().unwrap_or_default(),
        }
    }
}

/// Paginator for the `ListObjectsV2` operation over a single prefix.
///
/// Unlike the SDK paginator this never recurses into `CommonPrefixes`; callers decide which
/// sub-prefixes to descend into. A failed page ends the pagination, there are no retries.
#[derive(Debug)]
pub(crate) struct ListObjectsPaginator {
    client: aws_sdk_s3::Client,
    bucket: String,
    prefix: Option<String>,
    delimiter: Option<String>,
    state: State,
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Paginating {
        // continuation token for the next request
        next_token: Option<String>,
    },
    Done,
}

impl State {
    fn next_state(self, output: &ListObjectsV2Output) -> State {
        let is_truncated =
            output.is_truncated().unwrap_or(false) && output.next_continuation_token().is_some();

        match self {
            State::Paginating { next_token }
                if is_truncated && next_token.as_deref() == output.next_continuation_token() =>
            {
                tracing::warn!(
                    "service returned the same continuation token twice, ending pagination"
                );
                State::Done
            }
            State::Paginating { .. } if is_truncated => State::Paginating {
                next_token: output.next_continuation_token.to_owned(),
            },
            _ => State::Done,
        }
    }
}

impl ListObjectsPaginator {
    /// Create a paginator for `prefix` in `bucket`. Empty prefixes and delimiters are not
    /// sent.
    pub(crate) fn new(
        client: aws_sdk_s3::Client,
        bucket: impl Into<String>,
        prefix: Option<&str>,
        delimiter: Option<&str>,
    ) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            prefix: prefix.filter(|p| !p.is_empty()).map(str::to_owned),
            delimiter: delimiter.filter(|d| !d.is_empty()).map(str::to_owned),
            state: State::Paginating { next_token: None },
        }
    }

    /// Fetch the next page, or `None` once the service reports no further pages.
    pub(crate) async fn next_page(
        &mut self,
    ) -> Option<Result<ListPage, SdkError<ListObjectsV2Error, HttpResponse>>> {
        let request = match &self.state {
            State::Done => return None,
            State::Paginating { next_token } => ListObjectsV2Input::builder()
                .bucket(self.bucket.clone())
                .set_prefix(self.prefix.clone())
                .set_continuation_token(next_token.clone())
                .set_delimiter(self.delimiter.clone()),
        };

        let list_result = request
            .send_with(&self.client)
            .instrument(tracing::debug_span!(
                "send-list-objects-v2",
                prefix = self.prefix.as_deref().unwrap_or_default()
            ))
            .await;

        match list_result {
            Ok(output) => {
                let prev_state = std::mem::replace(&mut self.state, State::Done);
                self.state = prev_state.next_state(&output);
                Some(Ok(ListPage::from(output)))
            }
            Err(err) => {
                self.state = State::Done;
                Some(Err(err))
            }
        }
    }
}
