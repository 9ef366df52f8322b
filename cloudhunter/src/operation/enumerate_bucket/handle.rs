/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use tokio::task;

use super::{EnumerateBucketContext, EnumerateBucketOutput};
use crate::error::{self, ErrorKind};

/// Handle for `EnumerateBucket` operation
///
/// # Cancellation
///
/// Dropping the handle cancels the traversal at whatever request it is waiting on.
/// [`Self::abort`] signals the traversal to stop before the next page is requested and
/// waits for it to wind down.
#[derive(Debug)]
#[non_exhaustive]
pub struct EnumerateBucketHandle {
    /// The traversal task
    pub(crate) tasks: task::JoinSet<Result<EnumerateBucketOutput, crate::error::Error>>,
    pub(crate) ctx: EnumerateBucketContext,
}

impl EnumerateBucketHandle {
    /// Consume the handle and wait for the enumeration to complete.
    ///
    /// Returns the full tree, or the first error that was not a tolerated permission denial.
    /// An enumeration stopped through [`Self::abort`] reports
    /// [`ErrorKind::OperationCancelled`].
    #[tracing::instrument(skip_all, level = "debug", name = "join-enumerate-bucket")]
    pub async fn join(mut self) -> Result<EnumerateBucketOutput, crate::error::Error> {
        let mut output = None;
        while let Some(join_result) = self.tasks.join_next().await {
            output = Some(join_result??);
        }

        match output {
            Some(output) => Ok(output),
            None if self.ctx.is_cancelled() => Err(error::operation_cancelled()),
            None => Err(error::Error::new(
                ErrorKind::RuntimeError,
                "enumeration finished without producing a tree",
            )),
        }
    }

    /// Aborts the enumeration.
    ///
    /// Requests that are already in flight complete but no further pages are fetched.
    pub async fn abort(&mut self) -> Result<(), crate::error::Error> {
        if self.ctx.state().cancel_tx.send(true).is_err() {
            tracing::warn!("all receiver ends have been dropped, unable to send a cancellation signal");
        }
        while let Some(join_result) = self.tasks.join_next().await {
            match join_result? {
                Err(e) if e.kind() != &ErrorKind::OperationCancelled => {
                    tracing::debug!("enumeration ended with an error while aborting: {e}");
                }
                _ => {}
            }
        }

        Ok(())
    }
}
