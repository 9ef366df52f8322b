/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time;

use aws_sdk_s3::error::DisplayErrorContext;
use clap::{Parser, Subcommand};
use cloudhunter::types::{
    ConcurrencySetting, FailedTransferPolicy, NodeOrdering, PolicyPrincipal, TreeNode,
};

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "cloudhunter")]
#[command(about = "Maps the S3 and IAM surface reachable with a set of AWS credentials.")]
pub struct Args {
    /// AWS region to use
    #[arg(long, global = true)]
    region: Option<String>,

    /// Named profile from the shared AWS config
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Send unsigned requests
    #[arg(long, global = true, default_value_t = false, action = clap::ArgAction::SetTrue)]
    anonymous: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// S3 operations
    #[command(subcommand)]
    S3(S3Command),

    /// IAM operations
    #[command(subcommand)]
    Iam(IamCommand),
}

#[derive(Debug, Clone, Subcommand)]
enum S3Command {
    /// Print the folder hierarchy of a bucket
    List {
        /// Bucket to enumerate
        bucket: String,

        /// Prefix to start from
        #[arg(long, default_value = "")]
        prefix: String,

        /// Do not descend more than this many levels
        #[arg(long)]
        max_depth: Option<usize>,

        /// Sort siblings by name
        #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
        sorted: bool,
    },

    /// List the buckets visible to the caller
    Buckets,

    /// Download every object of a bucket
    Dump {
        /// Bucket to download
        bucket: String,

        /// Local directory to write to
        destination: PathBuf,

        /// Only download keys under this prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Number of concurrent downloads
        #[arg(long, default_value_t = 8)]
        concurrency: usize,

        /// Keep going when an object fails to download
        #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
        keep_going: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
enum IamCommand {
    /// List the IAM users of the account
    Users {
        /// Only list users whose path starts with this prefix
        #[arg(long)]
        path_prefix: Option<String>,
    },

    /// List access keys, for the calling user unless --user is given
    AccessKeys {
        /// User whose keys to list
        #[arg(long)]
        user: Option<String>,
    },

    /// List the names of the inline policies embedded in a user
    UserPolicies {
        /// User to inspect
        user: String,
    },

    /// Print an inline policy, decoded
    Policy {
        /// Policy name
        policy_name: String,

        /// User the policy is attached to
        #[arg(long, group = "principal")]
        user: Option<String>,

        /// Group the policy is attached to
        #[arg(long, group = "principal")]
        group: Option<String>,

        /// Role the policy is attached to
        #[arg(long, group = "principal")]
        role: Option<String>,
    },
}

fn render(nodes: &[TreeNode], depth: usize, out: &mut String) {
    // an explicit stack keeps very deep trees off the call stack
    let mut stack: Vec<(usize, &TreeNode)> = nodes.iter().rev().map(|n| (depth, n)).collect();
    while let Some((depth, node)) = stack.pop() {
        out.push_str(&"  ".repeat(depth));
        out.push_str(if node.is_folder() { "+ " } else { "- " });
        out.push_str(node.name());
        out.push('\n');
        stack.extend(node.children().iter().rev().map(|child| (depth + 1, child)));
    }
}

async fn do_list(
    args: &Args,
    bucket: &str,
    prefix: &str,
    max_depth: Option<usize>,
    sorted: bool,
) -> Result<(), BoxError> {
    let mut loader = loader(args);
    if let Some(max_depth) = max_depth {
        loader = loader.max_depth(max_depth);
    }
    if sorted {
        loader = loader.node_ordering(NodeOrdering::Lexicographic);
    }
    let client = cloudhunter::Client::new(loader.load().await?);

    let output = client
        .enumerate_bucket()
        .bucket(bucket)
        .prefix(prefix)
        .send()
        .await?
        .join()
        .await?;

    let mut out = String::new();
    render(output.nodes(), 0, &mut out);
    print!("{out}");

    for skipped in output.skipped_prefixes() {
        tracing::warn!("not listed ({:?}): {}", skipped.reason(), skipped.prefix());
    }
    tracing::info!("listed {} pages", output.pages_listed());
    Ok(())
}

async fn do_buckets(args: &Args) -> Result<(), BoxError> {
    let client = cloudhunter::Client::new(loader(args).load().await?);
    let output = client.list_buckets().send().await?;

    for bucket in output.buckets() {
        println!("{}", bucket.name().unwrap_or_default());
    }
    if output.access_denied() {
        tracing::warn!("access denied while listing buckets, the list is incomplete");
    }
    Ok(())
}

async fn do_dump(
    args: &Args,
    bucket: &str,
    destination: &Path,
    prefix: Option<&str>,
    concurrency: usize,
    keep_going: bool,
) -> Result<(), BoxError> {
    let loader = loader(args).concurrency(ConcurrencySetting::Explicit(concurrency));
    let client = cloudhunter::Client::new(loader.load().await?);

    let policy = if keep_going {
        FailedTransferPolicy::Continue
    } else {
        FailedTransferPolicy::Abort
    };

    let start = time::Instant::now();
    let output = client
        .dump_bucket()
        .bucket(bucket)
        .set_key_prefix(prefix.map(str::to_owned))
        .destination(destination)
        .failure_policy(policy)
        .send()
        .await?
        .join()
        .await?;

    for failed in output.failed_transfers() {
        tracing::error!(
            "failed to download {}: {}",
            failed.input().key(),
            DisplayErrorContext(failed.error())
        );
    }
    println!(
        "downloaded {} objects ({} bytes) in {:?}",
        output.objects_downloaded(),
        output.total_bytes_transferred(),
        start.elapsed()
    );
    Ok(())
}

async fn do_policy(args: &Args, policy_name: &str, principal: PolicyPrincipal) -> Result<(), BoxError> {
    let client = cloudhunter::Client::new(loader(args).load().await?);
    let output = client
        .get_inline_policy()
        .principal(principal)
        .policy_name(policy_name)
        .send()
        .await?;

    println!("{}", output.document());
    Ok(())
}

async fn do_users(args: &Args, path_prefix: Option<&str>) -> Result<(), BoxError> {
    let client = cloudhunter::Client::new(loader(args).load().await?);
    let output = client
        .list_users()
        .set_path_prefix(path_prefix.map(str::to_owned))
        .send()
        .await?;

    for user in output.users() {
        println!("{}\t{}\t{}", user.user_name(), user.arn(), user.create_date());
    }
    if output.access_denied() {
        tracing::warn!("access denied while listing users, the list is incomplete");
    }
    Ok(())
}

async fn do_access_keys(args: &Args, user: Option<&str>) -> Result<(), BoxError> {
    let client = cloudhunter::Client::new(loader(args).load().await?);
    let output = client
        .list_access_keys()
        .set_user_name(user.map(str::to_owned))
        .send()
        .await?;

    for key in output.access_keys() {
        println!(
            "{}\t{}\t{}",
            key.access_key_id().unwrap_or_default(),
            key.user_name().unwrap_or_default(),
            key.status().map(|s| s.as_str()).unwrap_or_default()
        );
    }
    if output.access_denied() {
        tracing::warn!("access denied while listing access keys, the list is incomplete");
    }
    Ok(())
}

async fn do_user_policies(args: &Args, user: &str) -> Result<(), BoxError> {
    let client = cloudhunter::Client::new(loader(args).load().await?);
    let output = client.list_user_policies().user_name(user).send().await?;

    for name in output.policy_names() {
        println!("{name}");
    }
    if output.access_denied() {
        tracing::warn!("access denied while listing policies of {user}, the list is incomplete");
    }
    Ok(())
}

fn loader(args: &Args) -> cloudhunter::config::loader::ConfigLoader {
    let mut loader = cloudhunter::from_env().anonymous(args.anonymous);
    if let Some(region) = &args.region {
        loader = loader.region(region);
    }
    if let Some(profile) = &args.profile {
        loader = loader.profile(profile);
    }
    loader
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = match &args.command {
        Command::S3(S3Command::List {
            bucket,
            prefix,
            max_depth,
            sorted,
        }) => do_list(&args, bucket, prefix, *max_depth, *sorted).await,
        Command::S3(S3Command::Buckets) => do_buckets(&args).await,
        Command::S3(S3Command::Dump {
            bucket,
            destination,
            prefix,
            concurrency,
            keep_going,
        }) => {
            do_dump(
                &args,
                bucket,
                destination,
                prefix.as_deref(),
                *concurrency,
                *keep_going,
            )
            .await
        }
        Command::Iam(IamCommand::Users { path_prefix }) => {
            do_users(&args, path_prefix.as_deref()).await
        }
        Command::Iam(IamCommand::AccessKeys { user }) => {
            do_access_keys(&args, user.as_deref()).await
        }
        Command::Iam(IamCommand::UserPolicies { user }) => do_user_policies(&args, user).await,
        Command::Iam(IamCommand::Policy {
            policy_name,
            user,
            group,
            role,
        }) => {
            let principal = match (user, group, role) {
                (Some(user), _, _) => PolicyPrincipal::User(user.clone()),
                (_, Some(group), _) => PolicyPrincipal::Group(group.clone()),
                (_, _, Some(role)) => PolicyPrincipal::Role(role.clone()),
                _ => return Err("one of --user, --group or --role is required".into()),
            };
            do_policy(&args, policy_name, principal).await
        }
    };

    if let Err(ref err) = result {
        tracing::error!("command failed: {}", DisplayErrorContext(err.as_ref()));
    }

    result
}
