/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::{SkippedPrefix, TreeNode};

/// Output type for enumerating a bucket
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct EnumerateBucketOutput {
    /// Top-level nodes directly under the starting prefix
    pub nodes: Vec<TreeNode>,

    /// Folders that appear in the tree but whose contents were not listed
    pub skipped_prefixes: Option<Vec<SkippedPrefix>>,

    /// Number of `ListObjectsV2` pages fetched
    pub pages_listed: u64,
}

impl EnumerateBucketOutput {
    /// Creates a new builder-style object to manufacture [`EnumerateBucketOutput`](crate::operation::enumerate_bucket::EnumerateBucketOutput).
    pub fn builder() -> EnumerateBucketOutputBuilder {
        EnumerateBucketOutputBuilder::default()
    }

    /// Top-level nodes directly under the starting prefix
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Consume the output, returning the top-level nodes
    pub fn into_nodes(self) -> Vec<TreeNode> {
        self.nodes
    }

    /// Folders that appear in the tree but whose contents were not listed.
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was
    /// set, use `.skipped_prefixes.is_none()`
    pub fn skipped_prefixes(&self) -> &[SkippedPrefix] {
        self.skipped_prefixes.as_deref().unwrap_or_default()
    }

    /// Number of `ListObjectsV2` pages fetched
    pub fn pages_listed(&self) -> u64 {
        self.pages_listed
    }
}

/// A builder for [`EnumerateBucketOutput`](crate::operation::enumerate_bucket::EnumerateBucketOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct EnumerateBucketOutputBuilder {
    pub(crate) nodes: Vec<TreeNode>,
    pub(crate) skipped_prefixes: Option<Vec<SkippedPrefix>>,
    pub(crate) pages_listed: u64,
}

impl EnumerateBucketOutputBuilder {
    /// Set the top-level nodes
    pub fn nodes(mut self, input: Vec<TreeNode>) -> Self {
        self.nodes = input;
        self
    }

    /// Append a skipped prefix.
    ///
    /// To override the contents of this collection use
    /// [`set_skipped_prefixes`](Self::set_skipped_prefixes)
    pub fn skipped_prefixes(mut self, input: SkippedPrefix) -> Self {
        self.skipped_prefixes
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Set the list of skipped prefixes
    pub fn set_skipped_prefixes(mut self, input: Option<Vec<SkippedPrefix>>) -> Self {
        self.skipped_prefixes = input;
        self
    }

    /// The list of skipped prefixes
    pub fn get_skipped_prefixes(&self) -> &Option<Vec<SkippedPrefix>> {
        &self.skipped_prefixes
    }

    /// Set the number of pages fetched
    pub fn pages_listed(mut self, input: u64) -> Self {
        self.pages_listed = input;
        self
    }

    /// Consumes the builder and constructs a [`EnumerateBucketOutput`](crate::operation::enumerate_bucket::EnumerateBucketOutput).
    pub fn build(self) -> EnumerateBucketOutput {
        EnumerateBucketOutput {
            nodes: self.nodes,
            skipped_prefixes: self.skipped_prefixes,
            pages_listed: self.pages_listed,
        }
    }
}
