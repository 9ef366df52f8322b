/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{EnumerateBucketHandle, EnumerateBucketInputBuilder};
use crate::error::Error;

/// Fluent builder for constructing a bucket enumeration
#[derive(Debug)]
pub struct EnumerateBucketFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: EnumerateBucketInputBuilder,
}

impl EnumerateBucketFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Start enumerating the bucket.
    ///
    /// The traversal runs in the background; use the returned handle to wait for the tree
    /// or to cancel it.
    pub async fn send(self) -> Result<EnumerateBucketHandle, Error> {
        let input = self.inner.build()?;
        crate::operation::enumerate_bucket::EnumerateBucket::orchestrate(self.handle, input)
    }

    /// Set the bucket to enumerate.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket to enumerate.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to enumerate.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Set the prefix to start from. Defaults to the bucket root.
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.prefix(input);
        self
    }

    /// Set the prefix to start from. Defaults to the bucket root.
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_prefix(input);
        self
    }

    /// The prefix to start from.
    pub fn get_prefix(&self) -> &Option<String> {
        self.inner.get_prefix()
    }

    /// Character(s) used to group keys into folders
    pub fn delimiter(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.delimiter(input);
        self
    }

    /// Character(s) used to group keys into folders
    pub fn set_delimiter(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_delimiter(input);
        self
    }

    /// Character(s) used to group keys into folders
    pub fn get_delimiter(&self) -> &Option<String> {
        self.inner.get_delimiter()
    }
}

impl crate::operation::enumerate_bucket::input::EnumerateBucketInputBuilder {
    /// Start enumerating a bucket with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<EnumerateBucketHandle, Error> {
        let mut fluent_builder = client.enumerate_bucket();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
