/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::{ConcurrencySetting, NodeOrdering, PermissionDeniedPolicy};
use crate::DEFAULT_DELIMITER;

/// Config loader
pub mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    delimiter: String,
    permission_denied_policy: PermissionDeniedPolicy,
    node_ordering: NodeOrdering,
    max_depth: Option<usize>,
    concurrency: ConcurrencySetting,
    client: aws_sdk_s3::Client,
    iam_client: Option<aws_sdk_iam::Client>,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The delimiter used to group keys into folders
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// What bucket enumeration does when a sub-prefix cannot be listed
    pub fn permission_denied_policy(&self) -> PermissionDeniedPolicy {
        self.permission_denied_policy
    }

    /// Ordering applied to enumerated trees
    pub fn node_ordering(&self) -> NodeOrdering {
        self.node_ordering
    }

    /// Maximum folder nesting that bucket enumeration will expand, if any
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Returns the concurrency setting to use for operations that fan out work.
    pub fn concurrency(&self) -> &ConcurrencySetting {
        &self.concurrency
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }

    /// The IAM client instance used to retrieve identity information, if one was configured.
    pub fn iam_client(&self) -> Option<&aws_sdk_iam::Client> {
        self.iam_client.as_ref()
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    delimiter: Option<String>,
    permission_denied_policy: PermissionDeniedPolicy,
    node_ordering: NodeOrdering,
    max_depth: Option<usize>,
    concurrency: ConcurrencySetting,
    client: Option<aws_sdk_s3::Client>,
    iam_client: Option<aws_sdk_iam::Client>,
}

impl Builder {
    /// Character(s) used to group keys into folders.
    ///
    /// Default is `/`.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Set what bucket enumeration does when listing a sub-prefix is denied.
    ///
    /// Default is [PermissionDeniedPolicy::SkipSubtree].
    pub fn permission_denied_policy(mut self, policy: PermissionDeniedPolicy) -> Self {
        self.permission_denied_policy = policy;
        self
    }

    /// Set the ordering applied to enumerated trees.
    ///
    /// Default is [NodeOrdering::Arrival].
    pub fn node_ordering(mut self, ordering: NodeOrdering) -> Self {
        self.node_ordering = ordering;
        self
    }

    /// Limit how deep bucket enumeration descends into nested folders.
    ///
    /// Folders at the limit are still reported but their contents are not listed. A limit of
    /// `0` only lists the starting prefix. Default is no limit.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Set the concurrency level this component is allowed to use.
    ///
    /// This sets the maximum number of concurrent in-flight requests.
    /// Default is [ConcurrencySetting::Auto].
    pub fn concurrency(mut self, concurrency: ConcurrencySetting) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set an explicit IAM client to use.
    pub fn iam_client(mut self, client: aws_sdk_iam::Client) -> Self {
        self.iam_client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    ///
    /// # Panics
    ///
    /// Panics if no S3 client was set.
    pub fn build(self) -> Config {
        Config {
            delimiter: self
                .delimiter
                .unwrap_or_else(|| DEFAULT_DELIMITER.to_owned()),
            permission_denied_policy: self.permission_denied_policy,
            node_ordering: self.node_ordering,
            max_depth: self.max_depth,
            concurrency: self.concurrency,
            client: self.client.expect("client set"),
            iam_client: self.iam_client,
        }
    }
}
