/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::atomic::Ordering;

use super::DumpBucketState;
use crate::types::FailedDownload;

/// Output type for dumping a bucket
#[non_exhaustive]
#[derive(Debug)]
pub struct DumpBucketOutput {
    /// The number of objects that were successfully downloaded
    pub objects_downloaded: u64,

    /// A list of failed object downloads
    pub failed_transfers: Option<Vec<FailedDownload>>,

    /// Total number of bytes written to disk
    pub total_bytes_transferred: u64,
}

impl DumpBucketOutput {
    /// Creates a new builder-style object to manufacture [`DumpBucketOutput`](crate::operation::dump_bucket::DumpBucketOutput).
    pub fn builder() -> DumpBucketOutputBuilder {
        DumpBucketOutputBuilder::default()
    }

    /// The number of objects that were successfully downloaded
    pub fn objects_downloaded(&self) -> u64 {
        self.objects_downloaded
    }

    /// A slice of failed object downloads
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was
    /// set, use `.failed_transfers.is_none()`
    pub fn failed_transfers(&self) -> &[FailedDownload] {
        self.failed_transfers.as_deref().unwrap_or_default()
    }

    /// Total number of bytes written to disk
    pub fn total_bytes_transferred(&self) -> u64 {
        self.total_bytes_transferred
    }
}

impl From<&DumpBucketState> for DumpBucketOutput {
    fn from(state: &DumpBucketState) -> Self {
        let failed_transfers = state
            .failed_downloads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();

        DumpBucketOutput {
            objects_downloaded: state.successful_downloads.load(Ordering::SeqCst),
            failed_transfers,
            total_bytes_transferred: state.total_bytes_transferred.load(Ordering::SeqCst),
        }
    }
}

/// A builder for [`DumpBucketOutput`](crate::operation::dump_bucket::DumpBucketOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct DumpBucketOutputBuilder {
    pub(crate) objects_downloaded: u64,
    pub(crate) failed_transfers: Option<Vec<FailedDownload>>,
    pub(crate) total_bytes_transferred: u64,
}

impl DumpBucketOutputBuilder {
    /// The number of objects that were successfully downloaded
    pub fn objects_downloaded(mut self, input: u64) -> Self {
        self.objects_downloaded = input;
        self
    }

    /// Append a failed download.
    ///
    /// To override the contents of this collection use
    /// [`set_failed_transfers`](Self::set_failed_transfers)
    pub fn failed_transfers(mut self, input: FailedDownload) -> Self {
        self.failed_transfers
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// A list of failed object downloads
    pub fn set_failed_transfers(mut self, input: Option<Vec<FailedDownload>>) -> Self {
        self.failed_transfers = input;
        self
    }

    /// Total number of bytes written to disk
    pub fn total_bytes_transferred(mut self, input: u64) -> Self {
        self.total_bytes_transferred = input;
        self
    }

    /// Consumes the builder and constructs a [`DumpBucketOutput`](crate::operation::dump_bucket::DumpBucketOutput).
    pub fn build(self) -> DumpBucketOutput {
        DumpBucketOutput {
            objects_downloaded: self.objects_downloaded,
            failed_transfers: self.failed_transfers,
            total_bytes_transferred: self.total_bytes_transferred,
        }
    }
}
