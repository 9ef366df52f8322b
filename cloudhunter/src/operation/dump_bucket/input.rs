/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

use aws_smithy_types::error::operation::BuildError;

use crate::types::FailedTransferPolicy;

/// Input type for dumping a bucket
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct DumpBucketInput {
    /// The bucket to download.
    pub bucket: Option<String>,

    /// The local directory objects are written to. Created if missing.
    pub destination: Option<PathBuf>,

    /// Only download keys that begin with the given prefix
    pub key_prefix: Option<String>,

    /// The failure policy to use when any individual object download fails.
    pub failure_policy: FailedTransferPolicy,
}

impl DumpBucketInput {
    /// Creates a new builder-style object to manufacture [`DumpBucketInput`](crate::operation::dump_bucket::DumpBucketInput).
    pub fn builder() -> DumpBucketInputBuilder {
        DumpBucketInputBuilder::default()
    }

    /// The bucket to download.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The local directory objects are written to
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    /// Only download keys that begin with the given prefix
    pub fn key_prefix(&self) -> Option<&str> {
        self.key_prefix.as_deref()
    }

    /// The failure policy to use when any individual object download fails.
    pub fn failure_policy(&self) -> &FailedTransferPolicy {
        &self.failure_policy
    }
}

/// A builder for [`DumpBucketInput`](crate::operation::dump_bucket::DumpBucketInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct DumpBucketInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) destination: Option<PathBuf>,
    pub(crate) key_prefix: Option<String>,
    pub(crate) failure_policy: Option<FailedTransferPolicy>,
}

impl DumpBucketInputBuilder {
    /// Set the bucket to download.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket to download.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to download.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the local directory to write objects to.
    ///
    /// NOTE: A destination is required.
    pub fn destination(mut self, input: impl AsRef<Path>) -> Self {
        self.destination = Some(input.as_ref().to_path_buf());
        self
    }

    /// Set the local directory to write objects to.
    pub fn set_destination(mut self, input: Option<PathBuf>) -> Self {
        self.destination = input;
        self
    }

    /// The local directory to write objects to.
    pub fn get_destination(&self) -> &Option<PathBuf> {
        &self.destination
    }

    /// Only download keys that begin with the given prefix
    pub fn key_prefix(mut self, input: impl Into<String>) -> Self {
        self.key_prefix = Some(input.into());
        self
    }

    /// Only download keys that begin with the given prefix
    pub fn set_key_prefix(mut self, input: Option<String>) -> Self {
        self.key_prefix = input;
        self
    }

    /// Only download keys that begin with the given prefix
    pub fn get_key_prefix(&self) -> &Option<String> {
        &self.key_prefix
    }

    /// The failure policy to use when any individual object download fails.
    ///
    /// Defaults to [`FailedTransferPolicy::Abort`]
    pub fn failure_policy(mut self, input: FailedTransferPolicy) -> Self {
        self.failure_policy = Some(input);
        self
    }

    /// The failure policy to use when any individual object download fails.
    pub fn set_failure_policy(mut self, input: Option<FailedTransferPolicy>) -> Self {
        self.failure_policy = input;
        self
    }

    /// The failure policy to use when any individual object download fails.
    pub fn get_failure_policy(&self) -> &Option<FailedTransferPolicy> {
        &self.failure_policy
    }

    /// Consumes the builder and constructs a [`DumpBucketInput`](crate::operation::dump_bucket::DumpBucketInput).
    pub fn build(self) -> Result<DumpBucketInput, BuildError> {
        match self.bucket.as_deref() {
            None | Some("") => {
                return Err(BuildError::missing_field("bucket", "A bucket is required"));
            }
            _ => {}
        }

        if self.destination.is_none() {
            return Err(BuildError::missing_field(
                "destination",
                "A destination directory is required",
            ));
        }

        Ok(DumpBucketInput {
            bucket: self.bucket,
            destination: self.destination,
            key_prefix: self.key_prefix,
            failure_policy: self.failure_policy.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DumpBucketInput;
    use crate::types::FailedTransferPolicy;

    #[test]
    fn test_destination_required() {
        let err = DumpBucketInput::builder()
            .bucket("test-bucket")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("A destination directory is required"));
    }

    #[test]
    fn test_default_failure_policy() {
        let input = DumpBucketInput::builder()
            .bucket("test-bucket")
            .destination("/tmp/dump")
            .build()
            .unwrap();
        assert_eq!(&FailedTransferPolicy::Abort, input.failure_policy());
    }
}
