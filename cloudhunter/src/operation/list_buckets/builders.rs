/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{ListBucketsInputBuilder, ListBucketsOutput};
use crate::error::Error;

/// Fluent builder for listing buckets
#[derive(Debug)]
pub struct ListBucketsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ListBucketsInputBuilder,
}

impl ListBucketsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// List the buckets, following every continuation token.
    pub async fn send(self) -> Result<ListBucketsOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::list_buckets::ListBuckets::orchestrate(self.handle, input).await
    }

    /// Only return buckets whose name starts with this prefix
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.prefix(input);
        self
    }

    /// Only return buckets whose name starts with this prefix
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_prefix(input);
        self
    }

    /// Only return buckets whose name starts with this prefix
    pub fn get_prefix(&self) -> &Option<String> {
        self.inner.get_prefix()
    }
}
