/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use tokio::{sync::watch, task::JoinSet};
use tracing::Instrument;

/// Operation builders
pub mod builders;

mod input;
/// Input type for enumerating a bucket
pub use input::{EnumerateBucketInput, EnumerateBucketInputBuilder};

mod output;
/// Output type for enumerating a bucket
pub use output::{EnumerateBucketOutput, EnumerateBucketOutputBuilder};

mod handle;
pub use handle::EnumerateBucketHandle;

mod tree;

use super::OperationContext;
use crate::error;

/// Operation struct for rebuilding the folder hierarchy of a bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct EnumerateBucket;

impl EnumerateBucket {
    /// Execute a single `EnumerateBucket` operation
    pub(crate) fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: EnumerateBucketInput,
    ) -> Result<EnumerateBucketHandle, error::Error> {
        let ctx = EnumerateBucketContext::new(handle, input);

        // the JoinSet owns the traversal so dropping the handle cancels it
        let mut tasks = JoinSet::new();
        let span = tracing::debug_span!(
            "enumerate-bucket",
            bucket = ctx.state().input.bucket().unwrap_or_default()
        );
        tasks.spawn(tree::enumerate(ctx.clone()).instrument(span));

        Ok(EnumerateBucketHandle { tasks, ctx })
    }
}

/// EnumerateBucket operation specific state
#[derive(Debug)]
pub(crate) struct EnumerateBucketState {
    input: EnumerateBucketInput,
    cancel_tx: watch::Sender<bool>,
    cancel_rx: watch::Receiver<bool>,
}

type EnumerateBucketContext = OperationContext<EnumerateBucketState>;

impl EnumerateBucketContext {
    fn new(handle: Arc<crate::client::Handle>, input: EnumerateBucketInput) -> Self {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let state = EnumerateBucketState {
            input,
            cancel_tx,
            cancel_rx,
        };
        OperationContext {
            handle,
            state: Arc::new(state),
        }
    }

    /// The delimiter for this enumeration, falling back to the client default
    fn delimiter(&self) -> &str {
        self.state()
            .input
            .delimiter()
            .unwrap_or_else(|| self.config().delimiter())
    }

    fn is_cancelled(&self) -> bool {
        *self.state().cancel_rx.borrow()
    }

    fn ensure_not_cancelled(&self) -> Result<(), error::Error> {
        if self.is_cancelled() {
            tracing::debug!("received cancellation signal, not listing any more prefixes");
            return Err(error::operation_cancelled());
        }
        Ok(())
    }
}
