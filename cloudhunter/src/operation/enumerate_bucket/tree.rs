/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashSet;

use super::{EnumerateBucketContext, EnumerateBucketOutput};
use crate::error::{self, Error};
use crate::operation::list_objects::{ListObjectsPaginator, ListPage};
use crate::types::{
    sort_nodes, NodeOrdering, PermissionDeniedPolicy, SkipReason, SkippedPrefix, TreeNode,
};

/// An entry discovered while listing one level, before it becomes a node.
#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Folder { prefix: String, name: String },
    Object { name: String },
}

/// A folder whose listing is done but whose sub-folders are still being expanded.
#[derive(Debug)]
struct Frame {
    name: String,
    depth: usize,
    pending: std::vec::IntoIter<Entry>,
    nodes: Vec<TreeNode>,
}

impl Frame {
    fn new(name: String, depth: usize, entries: Vec<Entry>) -> Self {
        Self {
            name,
            depth,
            pending: entries.into_iter(),
            nodes: Vec::new(),
        }
    }
}

/// Rebuild the hierarchy under the input prefix.
///
/// Depth-first, one listing in flight at a time. Every level is drained across all of its
/// pages before any of its sub-folders is listed. The work stack holds one [`Frame`] per
/// open folder, so deep key spaces never grow the call stack.
pub(super) async fn enumerate(ctx: EnumerateBucketContext) -> Result<EnumerateBucketOutput, Error> {
    let root_prefix = ctx.state().input.prefix().unwrap_or_default().to_owned();
    let permission_denied_policy = ctx.config().permission_denied_policy();
    let max_depth = ctx.config().max_depth();

    let mut pages_listed = 0u64;
    let mut skipped = Vec::new();

    // the starting prefix is never skipped, a denial here fails the enumeration
    let root_entries = list_level(&ctx, &root_prefix, &mut pages_listed).await?;
    let mut stack = vec![Frame::new(String::new(), 0, root_entries)];

    let mut nodes = loop {
        let (next, depth) = match stack.last_mut() {
            Some(frame) => (frame.pending.next(), frame.depth + 1),
            None => break Vec::new(),
        };

        match next {
            Some(Entry::Object { name }) => push_node(&mut stack, TreeNode::object(name)),
            Some(Entry::Folder { prefix, name }) => {
                if max_depth.is_some_and(|max| depth >= max.max(1)) {
                    tracing::debug!(prefix = %prefix, "not descending past the maximum depth");
                    skipped.push(SkippedPrefix {
                        prefix,
                        reason: SkipReason::DepthLimit,
                    });
                    push_node(&mut stack, TreeNode::folder(name, Vec::new()));
                    continue;
                }

                ctx.ensure_not_cancelled()?;
                match list_level(&ctx, &prefix, &mut pages_listed).await {
                    Ok(entries) => stack.push(Frame::new(name, depth, entries)),
                    Err(err)
                        if err.classification().is_permission_denied()
                            && permission_denied_policy == PermissionDeniedPolicy::SkipSubtree =>
                    {
                        tracing::warn!(prefix = %prefix, "skipping folder that cannot be listed: {err}");
                        skipped.push(SkippedPrefix {
                            prefix,
                            reason: SkipReason::PermissionDenied,
                        });
                        push_node(&mut stack, TreeNode::folder(name, Vec::new()));
                    }
                    Err(err) => return Err(err),
                }
            }
            None => match stack.pop() {
                Some(done) if stack.is_empty() => break done.nodes,
                Some(done) => push_node(&mut stack, TreeNode::folder(done.name, done.nodes)),
                None => break Vec::new(),
            },
        }
    };

    if ctx.config().node_ordering() == NodeOrdering::Lexicographic {
        sort_nodes(&mut nodes);
    }

    tracing::debug!(
        pages_listed,
        skipped = skipped.len(),
        "finished enumerating bucket"
    );

    Ok(EnumerateBucketOutput::builder()
        .nodes(nodes)
        .set_skipped_prefixes(Some(skipped))
        .pages_listed(pages_listed)
        .build())
}

fn push_node(stack: &mut [Frame], node: TreeNode) {
    if let Some(frame) = stack.last_mut() {
        frame.nodes.push(node);
    }
}

/// List every page of a single level and collect its entries in arrival order.
///
/// Stops (without returning a partial level) if the enumeration is cancelled.
async fn list_level(
    ctx: &EnumerateBucketContext,
    prefix: &str,
    pages_listed: &mut u64,
) -> Result<Vec<Entry>, Error> {
    let bucket = ctx.state().input.bucket().unwrap_or_default();
    let mut paginator = ListObjectsPaginator::new(
        ctx.client().clone(),
        bucket,
        Some(prefix),
        Some(ctx.delimiter()),
    );
    let mut cancel_rx = ctx.state().cancel_rx.clone();

    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    loop {
        ctx.ensure_not_cancelled()?;
        let page = tokio::select! {
            page = paginator.next_page() => page,
            _ = cancel_rx.changed() => return Err(error::operation_cancelled()),
        };

        match page {
            None => break,
            Some(page) => {
                *pages_listed += 1;
                collect_entries(prefix, page?, &mut seen, &mut entries);
            }
        }
    }

    Ok(entries)
}

/// Turn one page into entries relative to `prefix`.
///
/// Folders come before objects within a page. The placeholder object whose key equals
/// `prefix` is dropped, as is any name already seen at this level.
fn collect_entries(
    prefix: &str,
    page: ListPage,
    seen: &mut HashSet<String>,
    entries: &mut Vec<Entry>,
) {
    for common_prefix in page.common_prefixes {
        let name = relative_name(prefix, &common_prefix).to_owned();
        if name.is_empty() || !seen.insert(name.clone()) {
            continue;
        }
        entries.push(Entry::Folder {
            prefix: common_prefix,
            name,
        });
    }

    for object in page.objects {
        let Some(key) = object.key() else {
            continue;
        };
        if key == prefix {
            continue;
        }
        let name = relative_name(prefix, key);
        if name.is_empty() || !seen.insert(name.to_owned()) {
            continue;
        }
        entries.push(Entry::Object {
            name: name.to_owned(),
        });
    }
}

fn relative_name<'a>(prefix: &str, full: &'a str) -> &'a str {
    full.strip_prefix(prefix).unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use aws_sdk_s3::types::Object;

    use super::{collect_entries, relative_name, Entry};
    use crate::operation::list_objects::ListPage;

    fn page(common_prefixes: &[&str], keys: &[&str]) -> ListPage {
        ListPage {
            common_prefixes: common_prefixes.iter().map(|p| p.to_string()).collect(),
            objects: keys
                .iter()
                .map(|k| Object::builder().key(*k).build())
                .collect(),
        }
    }

    fn folder(prefix: &str, name: &str) -> Entry {
        Entry::Folder {
            prefix: prefix.to_owned(),
            name: name.to_owned(),
        }
    }

    fn object(name: &str) -> Entry {
        Entry::Object {
            name: name.to_owned(),
        }
    }

    #[test]
    fn test_relative_name() {
        assert_eq!("app.log", relative_name("logs/", "logs/app.log"));
        assert_eq!("2024/", relative_name("logs/", "logs/2024/"));
        assert_eq!("other/key", relative_name("logs/", "other/key"));
        assert_eq!("readme.txt", relative_name("", "readme.txt"));
    }

    #[test]
    fn test_folders_before_objects_within_page() {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        collect_entries(
            "",
            page(&["logs/", "data/"], &["readme.txt"]),
            &mut seen,
            &mut entries,
        );
        assert_eq!(
            vec![
                folder("logs/", "logs/"),
                folder("data/", "data/"),
                object("readme.txt")
            ],
            entries
        );
    }

    #[test]
    fn test_placeholder_object_is_dropped() {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        collect_entries(
            "photos/",
            page(&[], &["photos/", "photos/cat.jpg"]),
            &mut seen,
            &mut entries,
        );
        assert_eq!(vec![object("cat.jpg")], entries);
    }

    #[test]
    fn test_names_are_deduplicated_across_pages() {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        collect_entries("d/", page(&["d/a/"], &["d/k1"]), &mut seen, &mut entries);
        collect_entries("d/", page(&["d/a/"], &["d/k1", "d/k2"]), &mut seen, &mut entries);
        assert_eq!(
            vec![folder("d/a/", "a/"), object("k1"), object("k2")],
            entries
        );
    }
}
