/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{ListUsersInputBuilder, ListUsersOutput};
use crate::error::Error;

/// Fluent builder for listing IAM users
#[derive(Debug)]
pub struct ListUsersFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ListUsersInputBuilder,
}

impl ListUsersFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// List the users, following every marker.
    pub async fn send(self) -> Result<ListUsersOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::list_users::ListUsers::orchestrate(self.handle, input).await
    }

    /// Only return users whose path starts with this prefix
    pub fn path_prefix(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.path_prefix(input);
        self
    }

    /// Only return users whose path starts with this prefix
    pub fn set_path_prefix(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_path_prefix(input);
        self
    }

    /// Only return users whose path starts with this prefix
    pub fn get_path_prefix(&self) -> &Option<String> {
        self.inner.get_path_prefix()
    }
}
