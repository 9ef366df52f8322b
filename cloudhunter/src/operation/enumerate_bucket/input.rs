/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for enumerating a bucket
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct EnumerateBucketInput {
    /// The bucket to enumerate.
    pub bucket: Option<String>,

    /// The prefix to start from. Node names are relative to it.
    pub prefix: Option<String>,

    /// Character(s) used to group keys into folders. Overrides the client default.
    pub delimiter: Option<String>,
}

impl EnumerateBucketInput {
    /// Creates a new builder-style object to manufacture [`EnumerateBucketInput`](crate::operation::enumerate_bucket::EnumerateBucketInput).
    pub fn builder() -> EnumerateBucketInputBuilder {
        EnumerateBucketInputBuilder::default()
    }

    /// The bucket to enumerate.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The prefix to start from. Node names are relative to it.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Character(s) used to group keys into folders.
    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }
}

/// A builder for [`EnumerateBucketInput`](crate::operation::enumerate_bucket::EnumerateBucketInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct EnumerateBucketInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) prefix: Option<String>,
    pub(crate) delimiter: Option<String>,
}

impl EnumerateBucketInputBuilder {
    /// Set the bucket to enumerate.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket to enumerate.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to enumerate.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the prefix to start from. Defaults to the bucket root.
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.prefix = Some(input.into());
        self
    }

    /// Set the prefix to start from. Defaults to the bucket root.
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.prefix = input;
        self
    }

    /// The prefix to start from.
    pub fn get_prefix(&self) -> &Option<String> {
        &self.prefix
    }

    /// Character(s) used to group keys into folders
    pub fn delimiter(mut self, input: impl Into<String>) -> Self {
        self.delimiter = Some(input.into());
        self
    }

    /// Character(s) used to group keys into folders
    pub fn set_delimiter(mut self, input: Option<String>) -> Self {
        self.delimiter = input;
        self
    }

    /// Character(s) used to group keys into folders
    pub fn get_delimiter(&self) -> &Option<String> {
        &self.delimiter
    }

    /// Consumes the builder and constructs a [`EnumerateBucketInput`](crate::operation::enumerate_bucket::EnumerateBucketInput).
    pub fn build(self) -> Result<EnumerateBucketInput, BuildError> {
        match self.bucket.as_deref() {
            None | Some("") => {
                return Err(BuildError::missing_field("bucket", "A bucket is required"));
            }
            _ => {}
        }

        if self.delimiter.as_deref() == Some("") {
            return Err(BuildError::invalid_field(
                "delimiter",
                "The delimiter must not be empty",
            ));
        }

        Ok(EnumerateBucketInput {
            bucket: self.bucket,
            prefix: self.prefix,
            delimiter: self.delimiter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::EnumerateBucketInput;

    #[test]
    fn test_no_bucket_error() {
        let err = EnumerateBucketInput::builder()
            .prefix("logs/")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("A bucket is required"));
    }

    #[test]
    fn test_empty_bucket_error() {
        let err = EnumerateBucketInput::builder()
            .bucket("")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("A bucket is required"));
    }

    #[test]
    fn test_empty_delimiter_error() {
        let err = EnumerateBucketInput::builder()
            .bucket("test-bucket")
            .delimiter("")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
