/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::PolicyPrincipal;

/// Output type for retrieving an inline policy
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct GetInlinePolicyOutput {
    /// The user, group or role the policy is embedded in
    pub principal: PolicyPrincipal,

    /// The name of the inline policy
    pub policy_name: String,

    /// The document exactly as returned by IAM (percent-encoded)
    pub raw_document: String,

    /// The decoded document, pretty printed with two-space indentation
    pub document: String,
}

impl GetInlinePolicyOutput {
    /// Creates a new builder-style object to manufacture [`GetInlinePolicyOutput`](crate::operation::get_inline_policy::GetInlinePolicyOutput).
    pub fn builder() -> GetInlinePolicyOutputBuilder {
        GetInlinePolicyOutputBuilder::default()
    }

    /// The user, group or role the policy is embedded in
    pub fn principal(&self) -> &PolicyPrincipal {
        &self.principal
    }

    /// The name of the inline policy
    pub fn policy_name(&self) -> &str {
        &self.policy_name
    }

    /// The document exactly as returned by IAM
    pub fn raw_document(&self) -> &str {
        &self.raw_document
    }

    /// The decoded, pretty printed document
    pub fn document(&self) -> &str {
        &self.document
    }
}

/// A builder for [`GetInlinePolicyOutput`](crate::operation::get_inline_policy::GetInlinePolicyOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct GetInlinePolicyOutputBuilder {
    pub(crate) principal: Option<PolicyPrincipal>,
    pub(crate) policy_name: Option<String>,
    pub(crate) raw_document: Option<String>,
    pub(crate) document: Option<String>,
}

impl GetInlinePolicyOutputBuilder {
    /// The user, group or role the policy is embedded in
    pub fn principal(mut self, input: PolicyPrincipal) -> Self {
        self.principal = Some(input);
        self
    }

    /// The name of the inline policy
    pub fn policy_name(mut self, input: impl Into<String>) -> Self {
        self.policy_name = Some(input.into());
        self
    }

    /// The document exactly as returned by IAM
    pub fn raw_document(mut self, input: impl Into<String>) -> Self {
        self.raw_document = Some(input.into());
        self
    }

    /// The decoded, pretty printed document
    pub fn document(mut self, input: impl Into<String>) -> Self {
        self.document = Some(input.into());
        self
    }

    /// Consumes the builder and constructs a [`GetInlinePolicyOutput`](crate::operation::get_inline_policy::GetInlinePolicyOutput).
    pub fn build(self) -> Result<GetInlinePolicyOutput, BuildError> {
        Ok(GetInlinePolicyOutput {
            principal: self
                .principal
                .ok_or_else(|| BuildError::missing_field("principal", "principal is required"))?,
            policy_name: self.policy_name.ok_or_else(|| {
                BuildError::missing_field("policy_name", "policy_name is required")
            })?,
            raw_document: self.raw_document.unwrap_or_default(),
            document: self.document.unwrap_or_default(),
        })
    }
}
