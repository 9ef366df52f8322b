/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_types::region::Region;

use crate::config::Builder;
use crate::error::{self, Error};
use crate::types::{ConcurrencySetting, NodeOrdering, PermissionDeniedPolicy};
use crate::Config;

/// Regions an explicit `region` setting is checked against.
pub const VALID_REGIONS: &[&str] = &[
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-southeast-1",
    "ap-southeast-2",
    "ca-central-1",
    "eu-central-1",
    "eu-north-1",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
];

/// Load [`Config`] from the environment.
///
/// Credentials, region and profile resolution are delegated to `aws-config`; the explicit
/// settings given here take precedence over the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    region: Option<String>,
    profile: Option<String>,
    anonymous: bool,
}

impl ConfigLoader {
    /// Use an explicit AWS region. It must be one of [`VALID_REGIONS`].
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Use a named profile from the shared config and credentials files.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Send unsigned requests. Useful to inspect buckets that allow public access.
    ///
    /// Default is `false`.
    pub fn anonymous(mut self, anonymous: bool) -> Self {
        self.anonymous = anonymous;
        self
    }

    /// Character(s) used to group keys into folders.
    ///
    /// Default is `/`.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.builder = self.builder.delimiter(delimiter);
        self
    }

    /// Set what bucket enumeration does when listing a sub-prefix is denied.
    pub fn permission_denied_policy(mut self, policy: PermissionDeniedPolicy) -> Self {
        self.builder = self.builder.permission_denied_policy(policy);
        self
    }

    /// Set the ordering applied to enumerated trees.
    pub fn node_ordering(mut self, ordering: NodeOrdering) -> Self {
        self.builder = self.builder.node_ordering(ordering);
        self
    }

    /// Limit how deep bucket enumeration descends into nested folders.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.builder = self.builder.max_depth(max_depth);
        self
    }

    /// Set the concurrency level this component is allowed to use.
    pub fn concurrency(mut self, concurrency: ConcurrencySetting) -> Self {
        self.builder = self.builder.concurrency(concurrency);
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Result<Config, Error> {
        if let Some(region) = &self.region {
            validate_region(region)?;
        }

        let mut loader = aws_config::from_env();
        if let Some(region) = self.region {
            loader = loader.region(Region::new(region));
        }
        if let Some(profile) = self.profile {
            loader = loader.profile_name(profile);
        }
        if self.anonymous {
            loader = loader.no_credentials();
        }

        let shared_config = loader.load().await;
        tracing::debug!(
            region = ?shared_config.region(),
            anonymous = self.anonymous,
            "loaded shared AWS configuration"
        );

        let builder = self
            .builder
            .client(aws_sdk_s3::Client::new(&shared_config))
            .iam_client(aws_sdk_iam::Client::new(&shared_config));
        Ok(builder.build())
    }
}

fn validate_region(region: &str) -> Result<(), Error> {
    if VALID_REGIONS.contains(&region) {
        Ok(())
    } else {
        Err(error::invalid_input(format!("invalid AWS region: {region}")))
    }
}
