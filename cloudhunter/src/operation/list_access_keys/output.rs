/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_iam::types::AccessKeyMetadata;

/// Output type for listing access keys
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListAccessKeysOutput {
    /// Key metadata in service order. Secrets are never returned.
    pub access_keys: Option<Vec<AccessKeyMetadata>>,

    /// True if listing stopped early because a page was denied
    pub access_denied: bool,
}

impl ListAccessKeysOutput {
    /// Creates a new builder-style object to manufacture [`ListAccessKeysOutput`](crate::operation::list_access_keys::ListAccessKeysOutput).
    pub fn builder() -> ListAccessKeysOutputBuilder {
        ListAccessKeysOutputBuilder::default()
    }

    /// Key metadata in service order
    pub fn access_keys(&self) -> &[AccessKeyMetadata] {
        self.access_keys.as_deref().unwrap_or_default()
    }

    /// True if the listing is partial because the caller was denied part way through.
    pub fn access_denied(&self) -> bool {
        self.access_denied
    }
}

/// A builder for [`ListAccessKeysOutput`](crate::operation::list_access_keys::ListAccessKeysOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct ListAccessKeysOutputBuilder {
    pub(crate) access_keys: Option<Vec<AccessKeyMetadata>>,
    pub(crate) access_denied: bool,
}

impl ListAccessKeysOutputBuilder {
    /// Append the metadata of one key
    pub fn access_keys(mut self, input: AccessKeyMetadata) -> Self {
        self.access_keys.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Append the given key metadata. `None` leaves the collected keys untouched.
    pub fn set_access_keys(mut self, input: Option<Vec<AccessKeyMetadata>>) -> Self {
        if let Some(keys) = input {
            self.access_keys.get_or_insert_with(Vec::new).extend(keys);
        }
        self
    }

    /// The key metadata collected so far
    pub fn get_access_keys(&self) -> &Option<Vec<AccessKeyMetadata>> {
        &self.access_keys
    }

    /// Flag the listing as partial
    pub fn access_denied(mut self, input: bool) -> Self {
        self.access_denied = input;
        self
    }

    /// Consumes the builder and constructs a [`ListAccessKeysOutput`](crate::operation::list_access_keys::ListAccessKeysOutput).
    pub fn build(self) -> ListAccessKeysOutput {
        ListAccessKeysOutput {
            access_keys: self.access_keys,
            access_denied: self.access_denied,
        }
    }
}
