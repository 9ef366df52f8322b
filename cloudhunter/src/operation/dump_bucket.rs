/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::{atomic::AtomicU64, Arc, Mutex};

use tokio::{fs, sync::watch, task::JoinSet};
use tracing::Instrument;

/// Operation builders
pub mod builders;

mod input;
/// Input type for dumping a bucket
pub use input::{DumpBucketInput, DumpBucketInputBuilder};

mod output;
/// Output type for dumping a bucket
pub use output::{DumpBucketOutput, DumpBucketOutputBuilder};

mod handle;
pub use handle::DumpBucketHandle;

mod worker;

use super::OperationContext;
use crate::error;
use crate::types::FailedDownload;

/// Operation struct for downloading the whole contents of a bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct DumpBucket;

impl DumpBucket {
    /// Execute a single `DumpBucket` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DumpBucketInput,
    ) -> Result<DumpBucketHandle, error::Error> {
        let destination = input.destination().ok_or_else(|| {
            error::invalid_input("a destination directory is required to dump a bucket")
        })?;
        fs::create_dir_all(destination).await?;

        let concurrency = handle.num_workers();
        let ctx = DumpBucketContext::new(handle, input);

        // spawn all work into the same JoinSet such that when the set is dropped all tasks are cancelled.
        let mut tasks = JoinSet::new();
        let (work_tx, work_rx) = async_channel::bounded(concurrency);

        tasks.spawn(
            worker::discover_objects(ctx.clone(), work_tx)
                .instrument(tracing::debug_span!("object-discovery")),
        );

        for i in 0..concurrency {
            let worker = worker::download_objects(ctx.clone(), work_rx.clone())
                .instrument(tracing::debug_span!("object-downloader", worker = i));
            tasks.spawn(worker);
        }

        Ok(DumpBucketHandle { tasks, ctx })
    }
}

/// Input describing a single object download, reported back for failed downloads.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadObjectInput {
    /// The bucket the object lives in
    pub bucket: String,
    /// The key of the object
    pub key: String,
}

impl DownloadObjectInput {
    /// The bucket the object lives in
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key of the object
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// DumpBucket operation specific state
#[derive(Debug)]
pub(crate) struct DumpBucketState {
    input: DumpBucketInput,
    failed_downloads: Mutex<Option<Vec<FailedDownload>>>,
    successful_downloads: AtomicU64,
    total_bytes_transferred: AtomicU64,
    cancel_tx: watch::Sender<bool>,
    cancel_rx: watch::Receiver<bool>,
}

type DumpBucketContext = OperationContext<DumpBucketState>;

impl DumpBucketContext {
    fn new(handle: Arc<crate::client::Handle>, input: DumpBucketInput) -> Self {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let state = DumpBucketState {
            input,
            failed_downloads: Mutex::new(None),
            successful_downloads: AtomicU64::default(),
            total_bytes_transferred: AtomicU64::default(),
            cancel_tx,
            cancel_rx,
        };
        OperationContext {
            handle,
            state: Arc::new(state),
        }
    }
}
