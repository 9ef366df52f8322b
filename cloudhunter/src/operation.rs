/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

/// Types for rebuilding the folder hierarchy of a bucket
pub mod enumerate_bucket;

/// Types for listing buckets
pub mod list_buckets;

/// Types for downloading the contents of a bucket
pub mod dump_bucket;

/// Types for retrieving inline IAM policies
pub mod get_inline_policy;

/// Types for listing IAM users
pub mod list_users;

/// Types for listing IAM access keys
pub mod list_access_keys;

/// Types for listing the inline policies of an IAM user
pub mod list_user_policies;

pub(crate) mod list_objects;

/// Container for maintaining context required to carry out a single operation.
///
/// `State` is whatever additional operation specific state is required for the operation.
#[derive(Debug)]
pub(crate) struct OperationContext<State> {
    handle: Arc<crate::client::Handle>,
    state: Arc<State>,
}

impl<State> OperationContext<State> {
    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.handle.config.client()
    }

    /// The client configuration
    pub(crate) fn config(&self) -> &crate::Config {
        &self.handle.config
    }

    /// Operation specific state
    pub(crate) fn state(&self) -> &State {
        &self.state
    }
}

impl<State> Clone for OperationContext<State> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            state: self.state.clone(),
        }
    }
}

/// The token to request the following page with, if any.
///
/// `previous` is the token the current page was requested with. A page handing back the
/// same token again ends pagination.
pub(crate) fn next_page_token(
    is_truncated: bool,
    token: Option<&str>,
    previous: Option<&str>,
) -> Option<String> {
    match token {
        Some(token) if is_truncated && !token.is_empty() => {
            if previous == Some(token) {
                tracing::warn!("service repeated pagination token {token:?}, ending pagination");
                None
            } else {
                Some(token.to_owned())
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::next_page_token;

    #[test]
    fn test_next_page_token() {
        assert_eq!(Some("m2".to_owned()), next_page_token(true, Some("m2"), Some("m1")));
        assert_eq!(Some("m1".to_owned()), next_page_token(true, Some("m1"), None));
        assert_eq!(None, next_page_token(false, Some("m2"), Some("m1")));
        assert_eq!(None, next_page_token(true, None, Some("m1")));
        assert_eq!(None, next_page_token(true, Some(""), None));
    }

    #[test]
    fn test_repeated_token_ends_pagination() {
        assert_eq!(None, next_page_token(true, Some("m1"), Some("m1")));
    }
}
