/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */

//! CloudHunter
//!
//! Maps the storage and identity surface of an AWS account using whatever credentials the
//! caller holds. The centrepiece is bucket enumeration: the key space of an S3 bucket is
//! rebuilt into a tree of [`TreeNode`](types::TreeNode)s, tolerating prefixes the caller is
//! not authorized to list.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example() -> Result<(), cloudhunter::error::Error> {
//! let config = cloudhunter::from_env().region("eu-west-1").load().await?;
//! let client = cloudhunter::Client::new(config);
//!
//! let output = client
//!     .enumerate_bucket()
//!     .bucket("target-bucket")
//!     .send()
//!     .await?
//!     .join()
//!     .await?;
//!
//! for prefix in output.skipped_prefixes() {
//!     println!("skipped {}", prefix.prefix());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

pub(crate) const DEFAULT_CONCURRENCY: usize = 8;

pub(crate) const DEFAULT_DELIMITER: &str = "/";

/// Error types emitted by `cloudhunter`
pub mod error;

/// Classification of remote failures
pub mod access;

/// Common types used by `cloudhunter`
pub mod types;

/// Inline policy document decoding
pub mod policy;

/// CloudHunter client
pub mod client;

/// CloudHunter operations
pub mod operation;

/// Configuration and loaders
pub mod config;

pub use self::client::Client;
pub use self::config::Config;

use self::config::loader::ConfigLoader;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
