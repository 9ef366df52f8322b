/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for listing IAM users
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListUsersInput {
    /// Only return users whose path starts with this prefix, e.g. `/division_abc/`
    pub path_prefix: Option<String>,
}

impl ListUsersInput {
    /// Creates a new builder-style object to manufacture [`ListUsersInput`](crate::operation::list_users::ListUsersInput).
    pub fn builder() -> ListUsersInputBuilder {
        ListUsersInputBuilder::default()
    }

    /// Only return users whose path starts with this prefix
    pub fn path_prefix(&self) -> Option<&str> {
        self.path_prefix.as_deref()
    }
}

/// A builder for [`ListUsersInput`](crate::operation::list_users::ListUsersInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct ListUsersInputBuilder {
    pub(crate) path_prefix: Option<String>,
}

impl ListUsersInputBuilder {
    /// Only return users whose path starts with this prefix
    pub fn path_prefix(mut self, input: impl Into<String>) -> Self {
        self.path_prefix = Some(input.into());
        self
    }

    /// Only return users whose path starts with this prefix
    pub fn set_path_prefix(mut self, input: Option<String>) -> Self {
        self.path_prefix = input;
        self
    }

    /// Only return users whose path starts with this prefix
    pub fn get_path_prefix(&self) -> &Option<String> {
        &self.path_prefix
    }

    /// Consumes the builder and constructs a [`ListUsersInput`](crate::operation::list_users::ListUsersInput).
    pub fn build(self) -> Result<ListUsersInput, BuildError> {
        Ok(ListUsersInput {
            path_prefix: self.path_prefix,
        })
    }
}
