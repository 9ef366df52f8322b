/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{DumpBucketHandle, DumpBucketInputBuilder};
use crate::error::Error;
use crate::types::FailedTransferPolicy;

/// Fluent builder for downloading the contents of a bucket
#[derive(Debug)]
pub struct DumpBucketFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DumpBucketInputBuilder,
}

impl DumpBucketFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Start downloading the bucket.
    ///
    /// Returns once the destination exists and the workers are running; use the returned
    /// handle to wait for the dump to finish.
    pub async fn send(self) -> Result<DumpBucketHandle, Error> {
        let input = self.inner.build()?;
        crate::operation::dump_bucket::DumpBucket::orchestrate(self.handle, input).await
    }

    /// Set the bucket to download.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket to download.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to download.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Set the local directory to write objects to.
    pub fn destination(mut self, input: impl AsRef<Path>) -> Self {
        self.inner = self.inner.destination(input);
        self
    }

    /// Set the local directory to write objects to.
    pub fn set_destination(mut self, input: Option<PathBuf>) -> Self {
        self.inner = self.inner.set_destination(input);
        self
    }

    /// The local directory to write objects to.
    pub fn get_destination(&self) -> &Option<PathBuf> {
        self.inner.get_destination()
    }

    /// Only download keys that begin with the given prefix
    pub fn key_prefix(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key_prefix(input);
        self
    }

    /// Only download keys that begin with the given prefix
    pub fn set_key_prefix(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key_prefix(input);
        self
    }

    /// Only download keys that begin with the given prefix
    pub fn get_key_prefix(&self) -> &Option<String> {
        self.inner.get_key_prefix()
    }

    /// The failure policy to use when any individual object download fails.
    pub fn failure_policy(mut self, input: FailedTransferPolicy) -> Self {
        self.inner = self.inner.failure_policy(input);
        self
    }

    /// The failure policy to use when any individual object download fails.
    pub fn set_failure_policy(mut self, input: Option<FailedTransferPolicy>) -> Self {
        self.inner = self.inner.set_failure_policy(input);
        self
    }

    /// The failure policy to use when any individual object download fails.
    pub fn get_failure_policy(&self) -> &Option<FailedTransferPolicy> {
        self.inner.get_failure_policy()
    }
}
