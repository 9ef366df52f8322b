/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{ListUserPoliciesInputBuilder, ListUserPoliciesOutput};
use crate::error::Error;

/// Fluent builder for listing the inline policies of a user
#[derive(Debug)]
pub struct ListUserPoliciesFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ListUserPoliciesInputBuilder,
}

impl ListUserPoliciesFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// List the policy names, following every marker.
    pub async fn send(self) -> Result<ListUserPoliciesOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::list_user_policies::ListUserPolicies::orchestrate(self.handle, input)
            .await
    }

    /// Set the user the policies are embedded in.
    ///
    /// NOTE: A user name is required.
    pub fn user_name(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.user_name(input);
        self
    }

    /// Set the user the policies are embedded in.
    pub fn set_user_name(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_user_name(input);
        self
    }

    /// The user the policies are embedded in.
    pub fn get_user_name(&self) -> &Option<String> {
        self.inner.get_user_name()
    }
}
