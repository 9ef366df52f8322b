/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;

use crate::access::AccessClassification;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// I/O errors
    IOError,

    /// Some kind of internal runtime issue (e.g. a background task failed)
    RuntimeError,

    /// The caller lacks authorization for a specific bucket, prefix or object
    PermissionDenied,

    /// Resource not found (e.g. bucket, key, policy not found)
    NotFound,

    /// Any other failure reported by (or while talking to) the remote service
    ServiceError,

    /// A policy document was not valid percent-encoded JSON
    DecodeError,

    /// The operation was cancelled through its handle, or a child task failed
    /// with the abort policy.
    OperationCancelled,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Whether this error is a resumable authorization gap or something that must abort
    /// the surrounding operation.
    pub fn classification(&self) -> AccessClassification {
        match self.kind {
            ErrorKind::PermissionDenied => AccessClassification::PermissionDenied,
            _ => AccessClassification::Fatal,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::IOError => write!(f, "I/O error"),
            ErrorKind::RuntimeError => write!(f, "runtime error"),
            ErrorKind::PermissionDenied => write!(f, "permission denied"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::ServiceError => write!(f, "service error"),
            ErrorKind::DecodeError => write!(f, "policy document could not be decoded"),
            ErrorKind::OperationCancelled => write!(f, "operation cancelled"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::new(ErrorKind::RuntimeError, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl From<aws_smithy_types::byte_stream::error::Error> for Error {
    fn from(value: aws_smithy_types::byte_stream::error::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl<E> From<aws_sdk_s3::error::SdkError<E, HttpResponse>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
{
    fn from(value: aws_sdk_s3::error::SdkError<E, HttpResponse>) -> Self {
        let kind = match AccessClassification::of(&value) {
            AccessClassification::PermissionDenied => ErrorKind::PermissionDenied,
            AccessClassification::Fatal => match value.code() {
                Some(
                    "NotFound" | "NoSuchKey" | "NoSuchBucket" | "NoSuchEntity"
                    | "NoSuchBucketPolicy",
                ) => ErrorKind::NotFound,
                _ => ErrorKind::ServiceError,
            },
        };

        Error::new(kind, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn decode_failed<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::DecodeError, err)
}

static CANCELLATION_ERROR: &str =
    "the operation has been aborted, cancelling all ongoing requests";

pub(crate) fn operation_cancelled() -> Error {
    Error::new(ErrorKind::OperationCancelled, CANCELLATION_ERROR)
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::error::{ErrorMetadata, SdkError};
    use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
    use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
    use aws_smithy_runtime_api::http::StatusCode;
    use aws_smithy_types::body::SdkBody;

    use super::{Error, ErrorKind};
    use crate::access::AccessClassification;

    fn service_error(code: &str, status: u16) -> SdkError<ListObjectsV2Error, HttpResponse> {
        let err = ListObjectsV2Error::generic(ErrorMetadata::builder().code(code).build());
        let raw = HttpResponse::new(StatusCode::try_from(status).unwrap(), SdkBody::empty());
        SdkError::service_error(err, raw)
    }

    #[test]
    fn test_access_denied_maps_to_permission_denied() {
        let err = Error::from(service_error("AccessDenied", 403));
        assert_eq!(&ErrorKind::PermissionDenied, err.kind());
        assert_eq!(
            AccessClassification::PermissionDenied,
            err.classification()
        );
    }

    #[test]
    fn test_missing_bucket_maps_to_not_found() {
        let err = Error::from(service_error("NoSuchBucket", 404));
        assert_eq!(&ErrorKind::NotFound, err.kind());
        assert_eq!(AccessClassification::Fatal, err.classification());
    }

    #[test]
    fn test_throttling_is_fatal() {
        let err = Error::from(service_error("SlowDown", 503));
        assert_eq!(&ErrorKind::ServiceError, err.kind());
        assert_eq!(AccessClassification::Fatal, err.classification());
    }
}
