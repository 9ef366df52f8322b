/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::PolicyPrincipal;

/// Input type for retrieving an inline policy
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct GetInlinePolicyInput {
    /// The user, group or role the policy is embedded in
    pub principal: Option<PolicyPrincipal>,

    /// The name of the inline policy
    pub policy_name: Option<String>,
}

impl GetInlinePolicyInput {
    /// Creates a new builder-style object to manufacture [`GetInlinePolicyInput`](crate::operation::get_inline_policy::GetInlinePolicyInput).
    pub fn builder() -> GetInlinePolicyInputBuilder {
        GetInlinePolicyInputBuilder::default()
    }

    /// The user, group or role the policy is embedded in
    pub fn principal(&self) -> Option<&PolicyPrincipal> {
        self.principal.as_ref()
    }

    /// The name of the inline policy
    pub fn policy_name(&self) -> Option<&str> {
        self.policy_name.as_deref()
    }
}

/// A builder for [`GetInlinePolicyInput`](crate::operation::get_inline_policy::GetInlinePolicyInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct GetInlinePolicyInputBuilder {
    pub(crate) principal: Option<PolicyPrincipal>,
    pub(crate) policy_name: Option<String>,
}

impl GetInlinePolicyInputBuilder {
    /// Set the user, group or role the policy is embedded in.
    ///
    /// NOTE: A principal is required.
    pub fn principal(mut self, input: PolicyPrincipal) -> Self {
        self.principal = Some(input);
        self
    }

    /// Set the user, group or role the policy is embedded in.
    pub fn set_principal(mut self, input: Option<PolicyPrincipal>) -> Self {
        self.principal = input;
        self
    }

    /// The user, group or role the policy is embedded in.
    pub fn get_principal(&self) -> &Option<PolicyPrincipal> {
        &self.principal
    }

    /// Set the name of the inline policy.
    ///
    /// NOTE: A policy name is required.
    pub fn policy_name(mut self, input: impl Into<String>) -> Self {
        self.policy_name = Some(input.into());
        self
    }

    /// Set the name of the inline policy.
    pub fn set_policy_name(mut self, input: Option<String>) -> Self {
        self.policy_name = input;
        self
    }

    /// The name of the inline policy.
    pub fn get_policy_name(&self) -> &Option<String> {
        &self.policy_name
    }

    /// Consumes the builder and constructs a [`GetInlinePolicyInput`](crate::operation::get_inline_policy::GetInlinePolicyInput).
    pub fn build(self) -> Result<GetInlinePolicyInput, BuildError> {
        match self.principal.as_ref().map(PolicyPrincipal::name) {
            None | Some("") => {
                return Err(BuildError::missing_field(
                    "principal",
                    "A user, group or role name is required",
                ));
            }
            _ => {}
        }

        match self.policy_name.as_deref() {
            None | Some("") => {
                return Err(BuildError::missing_field(
                    "policy_name",
                    "A policy name is required",
                ));
            }
            _ => {}
        }

        Ok(GetInlinePolicyInput {
            principal: self.principal,
            policy_name: self.policy_name,
        })
    }
}
