/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{ListAccessKeysInputBuilder, ListAccessKeysOutput};
use crate::error::Error;

/// Fluent builder for listing access keys
#[derive(Debug)]
pub struct ListAccessKeysFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ListAccessKeysInputBuilder,
}

impl ListAccessKeysFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// List the access keys, following every marker.
    pub async fn send(self) -> Result<ListAccessKeysOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::list_access_keys::ListAccessKeys::orchestrate(self.handle, input).await
    }

    /// Set the user whose keys to list. Defaults to the calling user.
    pub fn user_name(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.user_name(input);
        self
    }

    /// Set the user whose keys to list. Defaults to the calling user.
    pub fn set_user_name(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_user_name(input);
        self
    }

    /// The user whose keys to list
    pub fn get_user_name(&self) -> &Option<String> {
        self.inner.get_user_name()
    }
}
