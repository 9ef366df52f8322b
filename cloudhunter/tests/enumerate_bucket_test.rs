/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use aws_smithy_mocks_experimental::{mock, mock_client, Rule, RuleMode};
use cloudhunter::error::ErrorKind;
use cloudhunter::types::{NodeOrdering, PermissionDeniedPolicy, SkipReason, TreeNode};
use test_common::{list_page, list_prefix_error_rule, list_prefix_page_rule, list_prefix_rule};

fn client_with(rules: &[Rule], configure: impl FnOnce(cloudhunter::config::Builder) -> cloudhunter::config::Builder) -> cloudhunter::Client {
    let s3 = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules, |c| c
        .http_client(test_common::stub_http_client()));
    let config = configure(cloudhunter::Config::builder().client(s3)).build();
    cloudhunter::Client::new(config)
}

fn default_client(rules: &[Rule]) -> cloudhunter::Client {
    client_with(rules, |builder| builder)
}

async fn enumerate(
    client: &cloudhunter::Client,
    prefix: &str,
) -> Result<cloudhunter::operation::enumerate_bucket::EnumerateBucketOutput, cloudhunter::error::Error>
{
    client
        .enumerate_bucket()
        .bucket("test-bucket")
        .prefix(prefix)
        .send()
        .await?
        .join()
        .await
}

#[tokio::test]
async fn test_folders_and_objects() {
    let client = default_client(&[
        list_prefix_rule("", &["logs/"], &["readme.txt"]),
        list_prefix_rule("logs/", &[], &["logs/app.log"]),
    ]);

    let output = enumerate(&client, "").await.unwrap();

    let expected = vec![
        TreeNode::folder("logs/", vec![TreeNode::object("app.log")]),
        TreeNode::object("readme.txt"),
    ];
    assert_eq!(expected, output.nodes());
    assert!(output.skipped_prefixes().is_empty());
    assert_eq!(2, output.pages_listed());
}

#[tokio::test]
async fn test_names_relative_to_starting_prefix() {
    let client = default_client(&[
        list_prefix_rule("logs/", &["logs/2024/"], &["logs/app.log"]),
        list_prefix_rule("logs/2024/", &[], &["logs/2024/jan.log"]),
    ]);

    let output = enumerate(&client, "logs/").await.unwrap();

    let expected = vec![
        TreeNode::folder("2024/", vec![TreeNode::object("jan.log")]),
        TreeNode::object("app.log"),
    ];
    assert_eq!(expected, output.nodes());
}

#[tokio::test]
async fn test_folder_placeholder_is_not_a_leaf() {
    let client = default_client(&[
        list_prefix_rule("", &["photos/"], &[]),
        list_prefix_rule("photos/", &[], &["photos/", "photos/cat.jpg"]),
    ]);

    let output = enumerate(&client, "").await.unwrap();

    let expected = vec![TreeNode::folder(
        "photos/",
        vec![TreeNode::object("cat.jpg")],
    )];
    assert_eq!(expected, output.nodes());
}

#[tokio::test]
async fn test_denied_subfolder_is_contained() {
    let client = default_client(&[
        list_prefix_rule("", &["A/", "B/", "C/"], &[]),
        list_prefix_rule("A/", &[], &["A/a.txt"]),
        list_prefix_error_rule("B/", "AccessDenied"),
        list_prefix_rule("C/", &[], &["C/c.txt"]),
    ]);

    let output = enumerate(&client, "").await.unwrap();

    let expected = vec![
        TreeNode::folder("A/", vec![TreeNode::object("a.txt")]),
        TreeNode::folder("B/", vec![]),
        TreeNode::folder("C/", vec![TreeNode::object("c.txt")]),
    ];
    assert_eq!(expected, output.nodes());

    let skipped = output.skipped_prefixes();
    assert_eq!(1, skipped.len());
    assert_eq!("B/", skipped[0].prefix());
    assert_eq!(SkipReason::PermissionDenied, skipped[0].reason());
}

#[tokio::test]
async fn test_fatal_subfolder_error_aborts() {
    let client = default_client(&[
        list_prefix_rule("", &["A/", "B/", "C/"], &[]),
        list_prefix_rule("A/", &[], &["A/a.txt"]),
        list_prefix_error_rule("B/", "InternalError"),
        list_prefix_rule("C/", &[], &["C/c.txt"]),
    ]);

    let err = enumerate(&client, "").await.unwrap_err();
    assert_eq!(&ErrorKind::ServiceError, err.kind());
}

#[tokio::test]
async fn test_denied_starting_prefix_fails() {
    let client = default_client(&[list_prefix_error_rule("secret/", "AccessDenied")]);

    let err = enumerate(&client, "secret/").await.unwrap_err();
    assert_eq!(&ErrorKind::PermissionDenied, err.kind());
}

#[tokio::test]
async fn test_missing_bucket_is_not_found() {
    let client = default_client(&[list_prefix_error_rule("", "NoSuchBucket")]);

    let err = enumerate(&client, "").await.unwrap_err();
    assert_eq!(&ErrorKind::NotFound, err.kind());
}

#[tokio::test]
async fn test_abort_policy_fails_on_denied_subfolder() {
    let client = client_with(
        &[
            list_prefix_rule("", &["A/", "B/"], &[]),
            list_prefix_rule("A/", &[], &["A/a.txt"]),
            list_prefix_error_rule("B/", "AccessDenied"),
        ],
        |builder| builder.permission_denied_policy(PermissionDeniedPolicy::Abort),
    );

    let err = enumerate(&client, "").await.unwrap_err();
    assert_eq!(&ErrorKind::PermissionDenied, err.kind());
}

#[tokio::test]
async fn test_every_page_is_collected() {
    let client = default_client(&[
        list_prefix_page_rule("", None, Some("token1"), &["a/"], &["k1"]),
        list_prefix_page_rule("", Some("token1"), Some("token2"), &["b/"], &["k2"]),
        list_prefix_page_rule("", Some("token2"), None, &[], &["k3"]),
        list_prefix_rule("a/", &[], &["a/x"]),
        list_prefix_rule("b/", &[], &[]),
    ]);

    let output = enumerate(&client, "").await.unwrap();

    let expected = vec![
        TreeNode::folder("a/", vec![TreeNode::object("x")]),
        TreeNode::object("k1"),
        TreeNode::folder("b/", vec![]),
        TreeNode::object("k2"),
        TreeNode::object("k3"),
    ];
    assert_eq!(expected, output.nodes());
    assert_eq!(5, output.pages_listed());
}

#[tokio::test]
async fn test_repeated_entries_across_pages_are_merged() {
    let client = default_client(&[
        list_prefix_page_rule("", None, Some("token1"), &["a/"], &["k1"]),
        list_prefix_page_rule("", Some("token1"), None, &["a/"], &["k1", "k2"]),
        list_prefix_rule("a/", &[], &[]),
    ]);

    let output = enumerate(&client, "").await.unwrap();

    let names: Vec<&str> = output.nodes().iter().map(TreeNode::name).collect();
    assert_eq!(vec!["a/", "k1", "k2"], names);
}

#[tokio::test]
async fn test_lexicographic_ordering() {
    let client = client_with(
        &[
            list_prefix_rule("", &["zeta/"], &["beta.txt", "alpha.txt"]),
            list_prefix_rule("zeta/", &[], &["zeta/2.txt", "zeta/1.txt"]),
        ],
        |builder| builder.node_ordering(NodeOrdering::Lexicographic),
    );

    let output = enumerate(&client, "").await.unwrap();

    let expected = vec![
        TreeNode::object("alpha.txt"),
        TreeNode::object("beta.txt"),
        TreeNode::folder(
            "zeta/",
            vec![TreeNode::object("1.txt"), TreeNode::object("2.txt")],
        ),
    ];
    assert_eq!(expected, output.nodes());
}

#[tokio::test]
async fn test_max_depth_stops_descent() {
    let client = client_with(
        &[
            list_prefix_rule("", &["logs/"], &["readme.txt"]),
            list_prefix_rule("logs/", &["logs/2024/"], &["logs/app.log"]),
        ],
        |builder| builder.max_depth(2),
    );

    let output = enumerate(&client, "").await.unwrap();

    let expected = vec![
        TreeNode::folder(
            "logs/",
            vec![TreeNode::folder("2024/", vec![]), TreeNode::object("app.log")],
        ),
        TreeNode::object("readme.txt"),
    ];
    assert_eq!(expected, output.nodes());

    let skipped = output.skipped_prefixes();
    assert_eq!(1, skipped.len());
    assert_eq!("logs/2024/", skipped[0].prefix());
    assert_eq!(SkipReason::DepthLimit, skipped[0].reason());
}

#[tokio::test]
async fn test_custom_delimiter_is_sent() {
    let root = mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| r.prefix().is_none() && r.delimiter() == Some("|"))
        .then_output(|| list_page(None, &["a|"], &[]));
    let nested = mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| r.prefix() == Some("a|") && r.delimiter() == Some("|"))
        .then_output(|| list_page(None, &[], &["a|b"]));
    let client = default_client(&[root, nested]);

    let output = client
        .enumerate_bucket()
        .bucket("test-bucket")
        .delimiter("|")
        .send()
        .await
        .unwrap()
        .join()
        .await
        .unwrap();

    let expected = vec![TreeNode::folder("a|", vec![TreeNode::object("b")])];
    assert_eq!(expected, output.nodes());
}

#[tokio::test]
async fn test_deep_hierarchy() {
    const DEPTH: usize = 300;

    let prefixes: Vec<String> = (0..=DEPTH).map(|i| "d/".repeat(i)).collect();
    let rules: Vec<Rule> = prefixes
        .iter()
        .enumerate()
        .map(|(i, prefix)| {
            let matched = prefix.clone();
            let child = prefixes.get(i + 1).cloned();
            let leaf = format!("{prefix}leaf");
            mock!(aws_sdk_s3::Client::list_objects_v2)
                .match_requests(move |r| r.prefix().unwrap_or_default() == matched)
                .then_output(move || match &child {
                    Some(child) => list_page(None, &[child.as_str()], &[]),
                    None => list_page(None, &[], &[leaf.as_str()]),
                })
        })
        .collect();
    let client = default_client(&rules);

    let output = enumerate(&client, "").await.unwrap();
    assert_eq!(DEPTH as u64 + 1, output.pages_listed());

    let mut level = output.nodes();
    for _ in 0..DEPTH {
        assert_eq!(1, level.len());
        assert_eq!("d/", level[0].name());
        assert!(level[0].is_folder());
        level = level[0].children();
    }
    assert_eq!(vec![TreeNode::object("leaf")], level);
}

#[tokio::test]
async fn test_bucket_required() {
    let client = default_client(&[]);
    let err = client.enumerate_bucket().send().await.unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_abort_while_listing_subfolder() {
    let (release_tx, release_rx) = tokio::sync::watch::channel(());
    let listing_a = Arc::new(tokio::sync::Notify::new());
    let b_listings = Arc::new(AtomicUsize::new(0));

    let root = list_prefix_rule("", &["a/", "b/"], &[]);
    let a = mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| r.prefix() == Some("a/"))
        .then_output({
            let listing_a = listing_a.clone();
            move || {
                listing_a.notify_one();
                // hold the request in flight until the test lets it go
                while !release_rx.has_changed().unwrap_or(true) {}
                list_page(None, &[], &["a/x"])
            }
        });
    let b = mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| r.prefix() == Some("b/"))
        .then_output({
            let b_listings = b_listings.clone();
            move || {
                b_listings.fetch_add(1, Ordering::SeqCst);
                list_page(None, &[], &["b/y"])
            }
        });
    let client = default_client(&[root, a, b]);

    let mut handle = client
        .enumerate_bucket()
        .bucket("test-bucket")
        .send()
        .await
        .unwrap();

    listing_a.notified().await;
    // the cancellation signal goes out before the pending listing is released
    let (aborted, _) = tokio::join!(handle.abort(), async {
        release_tx.send(()).unwrap();
    });
    aborted.unwrap();

    assert_eq!(0, b_listings.load(Ordering::SeqCst));
    let err = handle.join().await.unwrap_err();
    assert_eq!(&ErrorKind::OperationCancelled, err.kind());
}

#[tokio::test]
async fn test_abort_before_first_page() {
    let client = default_client(&[list_prefix_rule("", &["a/"], &["k1"])]);

    let mut handle = client
        .enumerate_bucket()
        .bucket("test-bucket")
        .send()
        .await
        .unwrap();
    handle.abort().await.unwrap();

    let err = handle.join().await.unwrap_err();
    assert_eq!(&ErrorKind::OperationCancelled, err.kind());
}
