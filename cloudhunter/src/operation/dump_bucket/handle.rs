/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use tokio::task;

use super::{DumpBucketContext, DumpBucketOutput};
use crate::error::{self, ErrorKind};

/// Handle for `DumpBucket` operation
///
/// # Cancellation
///
/// Dropping the handle stops every task at its current await point, which may leave a
/// partially written file behind. [`Self::abort`] lets downloads in progress finish and
/// stops the workers from picking up new objects.
#[derive(Debug)]
#[non_exhaustive]
pub struct DumpBucketHandle {
    /// All child tasks spawned for this dump
    pub(crate) tasks: task::JoinSet<Result<(), crate::error::Error>>,
    pub(crate) ctx: DumpBucketContext,
}

impl DumpBucketHandle {
    /// Consume the handle and wait for the dump to complete
    ///
    /// With [`FailedTransferPolicy::Abort`](crate::types::FailedTransferPolicy::Abort) the first error encountered is returned. Tasks
    /// cancelled as a consequence are not reported.
    ///
    /// With [`FailedTransferPolicy::Continue`](crate::types::FailedTransferPolicy::Continue) failed objects are listed in
    /// [`DumpBucketOutput::failed_transfers`]. Listing failures are still returned as errors.
    ///
    /// A dump stopped through [`Self::abort`] reports [`ErrorKind::OperationCancelled`].
    #[tracing::instrument(skip_all, level = "debug", name = "join-dump-bucket")]
    pub async fn join(mut self) -> Result<DumpBucketOutput, crate::error::Error> {
        let mut first_error_to_report = None;
        while let Some(join_result) = self.tasks.join_next().await {
            if let Err(e) = join_result? {
                if first_error_to_report.is_none() && e.kind() != &ErrorKind::OperationCancelled {
                    first_error_to_report = Some(e);
                } else {
                    tracing::debug!("dismissed error after the first failure: {e}");
                }
            }
        }

        match first_error_to_report {
            Some(e) => Err(e),
            None if *self.ctx.state().cancel_rx.borrow() => Err(error::operation_cancelled()),
            None => Ok(DumpBucketOutput::from(self.ctx.state())),
        }
    }

    /// Aborts all tasks owned by the handle.
    ///
    /// Downloads already in progress complete, no new object is started and discovery
    /// stops listing.
    pub async fn abort(&mut self) -> Result<(), crate::error::Error> {
        if self.ctx.state().cancel_tx.send(true).is_err() {
            tracing::warn!(
                "all receiver ends have been dropped, unable to send a cancellation signal"
            );
        }
        while (self.tasks.join_next().await).is_some() {}

        Ok(())
    }
}
