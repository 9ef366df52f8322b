/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{GetInlinePolicyInputBuilder, GetInlinePolicyOutput};
use crate::error::Error;
use crate::types::PolicyPrincipal;

/// Fluent builder for retrieving an inline IAM policy
#[derive(Debug)]
pub struct GetInlinePolicyFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: GetInlinePolicyInputBuilder,
}

impl GetInlinePolicyFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Fetch and decode the policy document.
    pub async fn send(self) -> Result<GetInlinePolicyOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::get_inline_policy::GetInlinePolicy::orchestrate(self.handle, input).await
    }

    /// Set the user, group or role the policy is embedded in.
    pub fn principal(mut self, input: PolicyPrincipal) -> Self {
        self.inner = self.inner.principal(input);
        self
    }

    /// Set the user, group or role the policy is embedded in.
    pub fn set_principal(mut self, input: Option<PolicyPrincipal>) -> Self {
        self.inner = self.inner.set_principal(input);
        self
    }

    /// The user, group or role the policy is embedded in.
    pub fn get_principal(&self) -> &Option<PolicyPrincipal> {
        self.inner.get_principal()
    }

    /// Set the name of the inline policy.
    pub fn policy_name(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.policy_name(input);
        self
    }

    /// Set the name of the inline policy.
    pub fn set_policy_name(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_policy_name(input);
        self
    }

    /// The name of the inline policy.
    pub fn get_policy_name(&self) -> &Option<String> {
        self.inner.get_policy_name()
    }
}
