/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for listing access keys
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListAccessKeysInput {
    /// The user whose keys to list. `None` lists the keys of the calling user.
    pub user_name: Option<String>,
}

impl ListAccessKeysInput {
    /// Creates a new builder-style object to manufacture [`ListAccessKeysInput`](crate::operation::list_access_keys::ListAccessKeysInput).
    pub fn builder() -> ListAccessKeysInputBuilder {
        ListAccessKeysInputBuilder::default()
    }

    /// The user whose keys to list
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }
}

/// A builder for [`ListAccessKeysInput`](crate::operation::list_access_keys::ListAccessKeysInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct ListAccessKeysInputBuilder {
    pub(crate) user_name: Option<String>,
}

impl ListAccessKeysInputBuilder {
    /// Set the user whose keys to list
    pub fn user_name(mut self, input: impl Into<String>) -> Self {
        self.user_name = Some(input.into());
        self
    }

    /// Set the user whose keys to list
    pub fn set_user_name(mut self, input: Option<String>) -> Self {
        self.user_name = input;
        self
    }

    /// The user whose keys to list
    pub fn get_user_name(&self) -> &Option<String> {
        &self.user_name
    }

    /// Consumes the builder and constructs a [`ListAccessKeysInput`](crate::operation::list_access_keys::ListAccessKeysInput).
    pub fn build(self) -> Result<ListAccessKeysInput, BuildError> {
        Ok(ListAccessKeysInput {
            user_name: self.user_name.filter(|name| !name.is_empty()),
        })
    }
}
