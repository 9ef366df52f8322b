/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use crate::operation::dump_bucket::DownloadObjectInput;

/// One entry observed under a bucket prefix.
///
/// A node is either a folder (a common prefix) or an object. Object nodes never have
/// children. Folder nodes own their children exclusively; a folder whose contents could
/// not be listed (or that is empty) has no children.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeNode {
    name: String,
    is_folder: bool,
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a folder node with the given children
    pub fn folder(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            is_folder: true,
            children,
        }
    }

    /// Create an object (leaf) node
    pub fn object(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_folder: false,
            children: Vec::new(),
        }
    }

    /// The path segment relative to the parent's prefix.
    ///
    /// Folder names keep their trailing delimiter (e.g. `logs/`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if this node was discovered as a common prefix
    pub fn is_folder(&self) -> bool {
        self.is_folder
    }

    /// The contents of this folder, in the order they were discovered.
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Sort this node's descendants by name, recursively.
    pub(crate) fn sort_by_name(&mut self) {
        sort_nodes(&mut self.children);
    }
}

/// Sort a list of sibling nodes by name, recursing into every folder.
pub(crate) fn sort_nodes(nodes: &mut [TreeNode]) {
    nodes.sort_by(|a, b| a.name.cmp(&b.name));
    for node in nodes.iter_mut() {
        node.sort_by_name();
    }
}

/// What bucket enumeration does when listing a sub-prefix is denied.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum PermissionDeniedPolicy {
    /// Emit the folder without children, record it as skipped and keep going with its
    /// siblings.
    #[default]
    SkipSubtree,

    /// Treat the denial like any other failure and abort the enumeration.
    Abort,
}

/// Ordering applied to the enumerated tree before it is returned.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum NodeOrdering {
    /// The order the service returned entries in. Pages are kept in order and, within a
    /// page, folders come before objects.
    #[default]
    Arrival,

    /// Siblings sorted by name (byte-wise), at every level of the tree.
    Lexicographic,
}

/// Why a folder was emitted without being expanded.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[non_exhaustive]
pub enum SkipReason {
    /// Listing the prefix was denied.
    PermissionDenied,
    /// The prefix is nested deeper than the configured maximum depth.
    DepthLimit,
}

/// A prefix that is present in the enumerated tree but whose contents were not listed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SkippedPrefix {
    pub(crate) prefix: String,
    pub(crate) reason: SkipReason,
}

impl SkippedPrefix {
    /// The full prefix (from the bucket root) that was skipped
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Why the prefix was skipped
    pub fn reason(&self) -> SkipReason {
        self.reason
    }
}

/// The concurrency settings to use for operations that fan out work.
#[derive(Debug, Clone, Default)]
pub enum ConcurrencySetting {
    /// Automatically configure an optimal concurrency setting based on the execution environment.
    #[default]
    Auto,

    /// Explicitly configured concurrency setting.
    Explicit(usize),
}

/// Policy for how to handle a failed object download while dumping a bucket
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum FailedTransferPolicy {
    /// Abort the dump on any individual failure to download an object
    #[default]
    Abort,
    /// Continue the dump. Any failure will be logged and the details of all failed
    /// objects will be available in the output after the dump completes.
    Continue,
}

/// Detailed information about a failed object download
#[non_exhaustive]
#[derive(Debug)]
pub struct FailedDownload {
    pub(crate) input: DownloadObjectInput,
    pub(crate) error: crate::error::Error,
}

impl FailedDownload {
    /// The input for the download object operation that failed
    pub fn input(&self) -> &DownloadObjectInput {
        &self.input
    }

    /// The error encountered downloading the object
    pub fn error(&self) -> &crate::error::Error {
        &self.error
    }
}

/// The IAM identity an inline policy is embedded in.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PolicyPrincipal {
    /// An IAM user, by user name
    User(String),
    /// An IAM group, by group name
    Group(String),
    /// An IAM role, by role name
    Role(String),
}

impl PolicyPrincipal {
    /// The name of the user, group or role
    pub fn name(&self) -> &str {
        match self {
            PolicyPrincipal::User(name)
            | PolicyPrincipal::Group(name)
            | PolicyPrincipal::Role(name) => name,
        }
    }
}

impl fmt::Display for PolicyPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyPrincipal::User(name) => write!(f, "user/{name}"),
            PolicyPrincipal::Group(name) => write!(f, "group/{name}"),
            PolicyPrincipal::Role(name) => write!(f, "role/{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{sort_nodes, TreeNode};

    #[test]
    fn test_object_has_no_children() {
        let node = TreeNode::object("readme.txt");
        assert!(!node.is_folder());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_sort_nodes_recursive() {
        let mut nodes = vec![
            TreeNode::object("zeta.txt"),
            TreeNode::folder(
                "logs/",
                vec![TreeNode::object("b.log"), TreeNode::object("a.log")],
            ),
            TreeNode::object("alpha.txt"),
        ];

        sort_nodes(&mut nodes);

        let expected = vec![
            TreeNode::object("alpha.txt"),
            TreeNode::folder(
                "logs/",
                vec![TreeNode::object("a.log"), TreeNode::object("b.log")],
            ),
            TreeNode::object("zeta.txt"),
        ];
        assert_eq!(expected, nodes);
    }
}
