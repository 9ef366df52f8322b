/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for listing buckets
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListBucketsInput {
    /// Only return buckets whose name starts with this prefix
    pub prefix: Option<String>,
}

impl ListBucketsInput {
    /// Creates a new builder-style object to manufacture [`ListBucketsInput`](crate::operation::list_buckets::ListBucketsInput).
    pub fn builder() -> ListBucketsInputBuilder {
        ListBucketsInputBuilder::default()
    }

    /// Only return buckets whose name starts with this prefix
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

/// A builder for [`ListBucketsInput`](crate::operation::list_buckets::ListBucketsInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct ListBucketsInputBuilder {
    pub(crate) prefix: Option<String>,
}

impl ListBucketsInputBuilder {
    /// Only return buckets whose name starts with this prefix
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.prefix = Some(input.into());
        self
    }

    /// Only return buckets whose name starts with this prefix
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.prefix = input;
        self
    }

    /// Only return buckets whose name starts with this prefix
    pub fn get_prefix(&self) -> &Option<String> {
        &self.prefix
    }

    /// Consumes the builder and constructs a [`ListBucketsInput`](crate::operation::list_buckets::ListBucketsInput).
    pub fn build(self) -> Result<ListBucketsInput, BuildError> {
        Ok(ListBucketsInput {
            prefix: self.prefix,
        })
    }
}
