/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;

/// Error codes the remote uses to say the caller is not authorized for a specific
/// bucket, prefix or object.
const PERMISSION_DENIED_CODES: &[&str] = &["AccessDenied", "AllAccessDisabled"];

const HTTP_FORBIDDEN: u16 = 403;

/// Outcome of inspecting a failed remote call.
///
/// Authorization gaps are expected while mapping an account with borrowed credentials, so
/// they are kept apart from every other kind of failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessClassification {
    /// The caller lacks authorization for this specific resource. Work on sibling
    /// resources can continue.
    PermissionDenied,

    /// Anything else: transport failures, malformed requests, throttling, unknown error
    /// codes. The surrounding operation must stop.
    Fatal,
}

impl AccessClassification {
    /// Classify an SDK error returned by any S3 or IAM operation.
    ///
    /// A response is `PermissionDenied` when the service reports an access-denied error
    /// code, or when it answered with HTTP 403 without a parseable error body (e.g. `HEAD`
    /// requests). Everything else is `Fatal`.
    pub fn of<E>(err: &SdkError<E, HttpResponse>) -> Self
    where
        E: ProvideErrorMetadata,
    {
        match err {
            SdkError::ServiceError(context) => {
                match context.err().code() {
                    Some(code) if PERMISSION_DENIED_CODES.contains(&code) => {
                        AccessClassification::PermissionDenied
                    }
                    Some(_) => AccessClassification::Fatal,
                    None if context.raw().status().as_u16() == HTTP_FORBIDDEN => {
                        AccessClassification::PermissionDenied
                    }
                    None => AccessClassification::Fatal,
                }
            }
            _ => AccessClassification::Fatal,
        }
    }

    /// Returns true if the failure only affects the resource that was being accessed.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, AccessClassification::PermissionDenied)
    }
}
