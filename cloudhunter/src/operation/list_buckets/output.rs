/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::Bucket;

/// Output type for listing buckets
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListBucketsOutput {
    /// Buckets visible to the caller, in service order
    pub buckets: Option<Vec<Bucket>>,

    /// True if listing stopped early because a page was denied
    pub access_denied: bool,
}

impl ListBucketsOutput {
    /// Creates a new builder-style object to manufacture [`ListBucketsOutput`](crate::operation::list_buckets::ListBucketsOutput).
    pub fn builder() -> ListBucketsOutputBuilder {
        ListBucketsOutputBuilder::default()
    }

    /// Buckets visible to the caller, in service order
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was
    /// set, use `.buckets.is_none()`
    pub fn buckets(&self) -> &[Bucket] {
        self.buckets.as_deref().unwrap_or_default()
    }

    /// True if the listing is partial because the caller was denied part way through.
    pub fn access_denied(&self) -> bool {
        self.access_denied
    }
}

/// A builder for [`ListBucketsOutput`](crate::operation::list_buckets::ListBucketsOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct ListBucketsOutputBuilder {
    pub(crate) buckets: Option<Vec<Bucket>>,
    pub(crate) access_denied: bool,
}

impl ListBucketsOutputBuilder {
    /// Append a bucket.
    ///
    /// To append many buckets at once use [`set_buckets`](Self::set_buckets)
    pub fn buckets(mut self, input: Bucket) -> Self {
        self.buckets.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Append the given buckets. `None` leaves the collected buckets untouched.
    pub fn set_buckets(mut self, input: Option<Vec<Bucket>>) -> Self {
        if let Some(buckets) = input {
            self.buckets.get_or_insert_with(Vec::new).extend(buckets);
        }
        self
    }

    /// The buckets collected so far
    pub fn get_buckets(&self) -> &Option<Vec<Bucket>> {
        &self.buckets
    }

    /// Flag the listing as partial
    pub fn access_denied(mut self, input: bool) -> Self {
        self.access_denied = input;
        self
    }

    /// Consumes the builder and constructs a [`ListBucketsOutput`](crate::operation::list_buckets::ListBucketsOutput).
    pub fn build(self) -> ListBucketsOutput {
        ListBucketsOutput {
            buckets: self.buckets,
            access_denied: self.access_denied,
        }
    }
}
