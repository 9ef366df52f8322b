/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::ConcurrencySetting;
use crate::Config;
use crate::DEFAULT_CONCURRENCY;
use std::sync::Arc;

/// CloudHunter client for mapping an AWS account's storage and identity surface.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, clients, settings.
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    /// Get the concrete number of workers to use based on the concurrency setting.
    pub(crate) fn num_workers(&self) -> usize {
        match self.config.concurrency() {
            ConcurrencySetting::Explicit(concurrency) => (*concurrency).max(1),
            ConcurrencySetting::Auto => DEFAULT_CONCURRENCY,
        }
    }

    /// The IAM client, required by every IAM operation
    pub(crate) fn iam_client(&self) -> Result<&aws_sdk_iam::Client, crate::error::Error> {
        self.config.iam_client().ok_or_else(|| {
            crate::error::invalid_input("an IAM client must be configured for IAM operations")
        })
    }
}

impl Client {
    /// Creates a new client from a config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Rebuild the folder hierarchy of a bucket.
    ///
    /// The key space under the starting prefix is listed level by level and returned as a
    /// tree of [`TreeNode`](crate::types::TreeNode)s. Sub-prefixes the caller is not
    /// authorized to list are reported as empty folders (see
    /// [`PermissionDeniedPolicy`](crate::types::PermissionDeniedPolicy)); any other failure
    /// aborts the whole enumeration.
    ///
    /// Constructs a fluent builder for the
    /// [`EnumerateBucket`](crate::operation::enumerate_bucket::builders::EnumerateBucketFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cloudhunter::types::TreeNode;
    ///
    /// fn print(nodes: &[TreeNode], depth: usize) {
    ///     for node in nodes {
    ///         println!("{}{}", "  ".repeat(depth), node.name());
    ///         print(node.children(), depth + 1);
    ///     }
    /// }
    ///
    /// async fn show_bucket(client: &cloudhunter::Client) -> Result<(), cloudhunter::error::Error> {
    ///     let handle = client
    ///         .enumerate_bucket()
    ///         .bucket("my-bucket")
    ///         .prefix("logs/")
    ///         .send()
    ///         .await?;
    ///
    ///     // send() returns before the enumeration is complete.
    ///     // Call `join()` on the returned handle to drive it to completion.
    ///     let output = handle.join().await?;
    ///     print(output.nodes(), 0);
    ///     Ok(())
    /// }
    /// ```
    pub fn enumerate_bucket(
        &self,
    ) -> crate::operation::enumerate_bucket::builders::EnumerateBucketFluentBuilder {
        crate::operation::enumerate_bucket::builders::EnumerateBucketFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// List the buckets visible to the caller.
    ///
    /// If the caller is denied part way through, the buckets collected so far are returned
    /// and the output is flagged with [`access_denied`](crate::operation::list_buckets::ListBucketsOutput::access_denied).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn buckets(client: &cloudhunter::Client) -> Result<(), cloudhunter::error::Error> {
    ///     let output = client.list_buckets().send().await?;
    ///     for bucket in output.buckets() {
    ///         println!("{:?}", bucket.name());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_buckets(&self) -> crate::operation::list_buckets::builders::ListBucketsFluentBuilder {
        crate::operation::list_buckets::builders::ListBucketsFluentBuilder::new(self.handle.clone())
    }

    /// Download every object of a bucket into a local directory.
    ///
    /// Constructs a fluent builder for the
    /// [`DumpBucket`](crate::operation::dump_bucket::builders::DumpBucketFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    ///
    /// async fn dump(
    ///     client: &cloudhunter::Client,
    ///     dest: &Path,
    /// ) -> Result<(), cloudhunter::error::Error> {
    ///     let handle = client
    ///         .dump_bucket()
    ///         .bucket("my-bucket")
    ///         .destination(dest)
    ///         .send()
    ///         .await?;
    ///
    ///     let output = handle.join().await?;
    ///     println!("downloaded {} objects", output.objects_downloaded());
    ///     Ok(())
    /// }
    /// ```
    pub fn dump_bucket(&self) -> crate::operation::dump_bucket::builders::DumpBucketFluentBuilder {
        crate::operation::dump_bucket::builders::DumpBucketFluentBuilder::new(self.handle.clone())
    }

    /// Retrieve and decode an inline policy embedded in an IAM user, group or role.
    ///
    /// Requires an IAM client to be configured.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cloudhunter::types::PolicyPrincipal;
    ///
    /// async fn policy(client: &cloudhunter::Client) -> Result<(), cloudhunter::error::Error> {
    ///     let output = client
    ///         .get_inline_policy()
    ///         .principal(PolicyPrincipal::User("alice".into()))
    ///         .policy_name("s3-access")
    ///         .send()
    ///         .await?;
    ///     println!("{}", output.document());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_inline_policy(
        &self,
    ) -> crate::operation::get_inline_policy::builders::GetInlinePolicyFluentBuilder {
        crate::operation::get_inline_policy::builders::GetInlinePolicyFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// List the IAM users of the account.
    ///
    /// If the caller is denied part way through, the users collected so far are returned
    /// and the output is flagged with [`access_denied`](crate::operation::list_users::ListUsersOutput::access_denied).
    /// Requires an IAM client to be configured.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn users(client: &cloudhunter::Client) -> Result<(), cloudhunter::error::Error> {
    ///     let output = client.list_users().send().await?;
    ///     for user in output.users() {
    ///         println!("{} ({})", user.user_name(), user.arn());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_users(&self) -> crate::operation::list_users::builders::ListUsersFluentBuilder {
        crate::operation::list_users::builders::ListUsersFluentBuilder::new(self.handle.clone())
    }

    /// List the access key metadata of an IAM user, or of the calling user when no user
    /// name is given.
    ///
    /// Partial results on denial are handled as in [`list_users`](Self::list_users).
    pub fn list_access_keys(
        &self,
    ) -> crate::operation::list_access_keys::builders::ListAccessKeysFluentBuilder {
        crate::operation::list_access_keys::builders::ListAccessKeysFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// List the names of the inline policies embedded in an IAM user.
    ///
    /// The names can be fed to [`get_inline_policy`](Self::get_inline_policy).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cloudhunter::types::PolicyPrincipal;
    ///
    /// async fn dump_policies(client: &cloudhunter::Client) -> Result<(), cloudhunter::error::Error> {
    ///     let output = client.list_user_policies().user_name("alice").send().await?;
    ///     for name in output.policy_names() {
    ///         let policy = client
    ///             .get_inline_policy()
    ///             .principal(PolicyPrincipal::User(output.user_name().to_owned()))
    ///             .policy_name(name)
    ///             .send()
    ///             .await?;
    ///         println!("{name}: {}", policy.document());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_user_policies(
        &self,
    ) -> crate::operation::list_user_policies::builders::ListUserPoliciesFluentBuilder {
        crate::operation::list_user_policies::builders::ListUserPoliciesFluentBuilder::new(
            self.handle.clone(),
        )
    }
}
