/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;

use async_channel::{Receiver, Sender};
use path_clean::PathClean;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::Instrument;

use crate::error::{self, ErrorKind};
use crate::operation::list_objects::ListObjectsPaginator;
use crate::types::{FailedDownload, FailedTransferPolicy};

use super::{DownloadObjectInput, DumpBucketContext};

#[derive(Debug)]
pub(super) struct DownloadObjectJob {
    object: aws_sdk_s3::types::Object,
}

impl DownloadObjectJob {
    fn key(&self) -> &str {
        self.object.key().unwrap_or_default()
    }

    /// Get the input used to download this object
    fn input(&self, ctx: &DumpBucketContext) -> DownloadObjectInput {
        DownloadObjectInput {
            bucket: ctx.state().input.bucket().unwrap_or_default().to_owned(),
            key: self.key().to_owned(),
        }
    }
}

// worker to list every object of the bucket, without grouping by delimiter
pub(super) async fn discover_objects(
    ctx: DumpBucketContext,
    work_tx: Sender<DownloadObjectJob>,
) -> Result<(), error::Error> {
    let input = &ctx.state().input;
    let mut paginator = ListObjectsPaginator::new(
        ctx.client().clone(),
        input.bucket().unwrap_or_default(),
        input.key_prefix(),
        None,
    );

    let mut cancel_rx = ctx.state().cancel_rx.clone();

    loop {
        let page = tokio::select! {
            _ = cancel_rx.changed() => {
                tracing::debug!("received cancellation signal, exiting and not listing new objects");
                return Err(error::operation_cancelled());
            }
            page = paginator.next_page() => page,
        };

        let Some(page) = page else {
            break;
        };

        for object in page?.objects {
            match object.key() {
                None => continue,
                Some(key) if is_folder_placeholder(key) => {
                    tracing::debug!("skipping folder placeholder {key:?}");
                    continue;
                }
                Some(_) => {}
            }

            if work_tx.send(DownloadObjectJob { object }).await.is_err() {
                tracing::error!("all receiver ends have been dropped, unable to send a job!");
                return Ok(());
            }
        }
    }

    Ok(())
}

// worker to download objects
pub(super) async fn download_objects(
    ctx: DumpBucketContext,
    work_rx: Receiver<DownloadObjectJob>,
) -> Result<(), error::Error> {
    let mut cancel_rx = ctx.state().cancel_rx.clone();
    loop {
        let job = tokio::select! {
            _ = cancel_rx.changed() => {
                tracing::debug!("received cancellation signal, exiting and not downloading a new object");
                return Err(error::operation_cancelled());
            }
            job = work_rx.recv() => job,
        };

        let Ok(job) = job else {
            break;
        };

        tracing::debug!(
            "worker recv'd request for key {:?} ({:?} bytes)",
            job.key(),
            job.object.size()
        );

        match download_single_obj(&ctx, &job).await {
            Ok(bytes_written) => {
                ctx.state()
                    .successful_downloads
                    .fetch_add(1, Ordering::SeqCst);
                ctx.state()
                    .total_bytes_transferred
                    .fetch_add(bytes_written, Ordering::SeqCst);
                tracing::debug!("worker finished downloading key {:?}", job.key());
            }
            Err(err) => {
                tracing::debug!("worker failed to download key {:?}: {}", job.key(), err);
                match ctx.state().input.failure_policy() {
                    FailedTransferPolicy::Abort => {
                        if err.kind() != &ErrorKind::OperationCancelled
                            && ctx.state().cancel_tx.send(true).is_err()
                        {
                            tracing::warn!(
                                "all receiver ends have been dropped, unable to send a cancellation signal"
                            );
                        }
                        return Err(err);
                    }
                    FailedTransferPolicy::Continue => {
                        tracing::warn!("failed to download key {:?}, continuing: {}", job.key(), err);
                        let failed_transfer = FailedDownload {
                            input: job.input(&ctx),
                            error: err,
                        };
                        ctx.state()
                            .failed_downloads
                            .lock()
                            .unwrap_or_else(|poisoned| poisoned.into_inner())
                            .get_or_insert_with(Vec::new)
                            .push(failed_transfer);
                    }
                }
            }
        }
    }

    tracing::trace!("req channel closed, worker finished");
    Ok(())
}

/// Download one object, returning the number of bytes written
async fn download_single_obj(
    ctx: &DumpBucketContext,
    job: &DownloadObjectJob,
) -> Result<u64, error::Error> {
    let input = job.input(ctx);
    let root_dir = ctx
        .state()
        .input
        .destination()
        .ok_or_else(|| error::invalid_input("destination directory not set"))?;
    let key_path = local_key_path(root_dir, &input.key)?;

    if ctx.state().cancel_rx.has_changed().unwrap_or(true) {
        return Err(error::operation_cancelled());
    }

    let output = ctx
        .client()
        .get_object()
        .bucket(input.bucket.as_str())
        .key(input.key.as_str())
        .send()
        .instrument(tracing::debug_span!("send-get-object", key = input.key.as_str()))
        .await?;

    if let Some(parent_dir) = key_path.parent() {
        fs::create_dir_all(parent_dir).await?;
    }
    let mut dest = fs::File::create(&key_path).await?;

    let mut body = output.body;
    let mut bytes_written = 0u64;
    while let Some(chunk) = body.try_next().await? {
        dest.write_all(&chunk).await?;
        bytes_written += chunk.len() as u64;
    }
    dest.flush().await?;

    Ok(bytes_written)
}

/// Keys ending in `/` stand for folders and have no content to download
fn is_folder_placeholder(key: &str) -> bool {
    key.ends_with('/')
}

/// Derive the local path for a given S3 key
fn local_key_path(root_dir: &Path, key: &str) -> Result<PathBuf, error::Error> {
    let root_dir = root_dir.to_path_buf().clean();
    let relative_path = if std::path::MAIN_SEPARATOR_STR == "/" {
        key.to_owned()
    } else {
        key.replace('/', std::path::MAIN_SEPARATOR_STR)
    };

    let local_path = root_dir.join(relative_path).clean();
    validate_path(&root_dir, &local_path, key)?;

    Ok(local_path)
}

fn validate_path(root_dir: &Path, local_path: &Path, key: &str) -> Result<(), error::Error> {
    // the resolved path must not escape the destination directory
    if !local_path.starts_with(root_dir) || local_path == root_dir {
        let err = error::Error::new(
            ErrorKind::InputInvalid,
            format!("Unable to download key: '{key}', its relative path resolves outside the target destination directory"),
        );
        return Err(err);
    }

    Ok(())
}
