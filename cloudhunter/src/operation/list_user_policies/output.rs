/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for listing the inline policies of a user
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListUserPoliciesOutput {
    /// The user the policies are embedded in
    pub user_name: String,

    /// Names of the inline policies, usable with
    /// [`get_inline_policy`](crate::Client::get_inline_policy)
    pub policy_names: Option<Vec<String>>,

    /// True if listing stopped early because a page was denied
    pub access_denied: bool,
}

impl ListUserPoliciesOutput {
    /// Creates a new builder-style object to manufacture [`ListUserPoliciesOutput`](crate::operation::list_user_policies::ListUserPoliciesOutput).
    pub fn builder() -> ListUserPoliciesOutputBuilder {
        ListUserPoliciesOutputBuilder::default()
    }

    /// The user the policies are embedded in
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Names of the inline policies, in service order
    pub fn policy_names(&self) -> &[String] {
        self.policy_names.as_deref().unwrap_or_default()
    }

    /// True if the listing is partial because the caller was denied part way through.
    pub fn access_denied(&self) -> bool {
        self.access_denied
    }
}

/// A builder for [`ListUserPoliciesOutput`](crate::operation::list_user_policies::ListUserPoliciesOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct ListUserPoliciesOutputBuilder {
    pub(crate) user_name: String,
    pub(crate) policy_names: Option<Vec<String>>,
    pub(crate) access_denied: bool,
}

impl ListUserPoliciesOutputBuilder {
    /// The user the policies are embedded in
    pub fn user_name(mut self, input: impl Into<String>) -> Self {
        self.user_name = input.into();
        self
    }

    /// Append a policy name
    pub fn policy_names(mut self, input: impl Into<String>) -> Self {
        self.policy_names
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Append the given policy names. `None` leaves the collected names untouched.
    pub fn set_policy_names(mut self, input: Option<Vec<String>>) -> Self {
        if let Some(names) = input {
            self.policy_names.get_or_insert_with(Vec::new).extend(names);
        }
        self
    }

    /// The policy names collected so far
    pub fn get_policy_names(&self) -> &Option<Vec<String>> {
        &self.policy_names
    }

    /// Flag the listing as partial
    pub fn access_denied(mut self, input: bool) -> Self {
        self.access_denied = input;
        self
    }

    /// Consumes the builder and constructs a [`ListUserPoliciesOutput`](crate::operation::list_user_policies::ListUserPoliciesOutput).
    pub fn build(self) -> ListUserPoliciesOutput {
        ListUserPoliciesOutput {
            user_name: self.user_name,
            policy_names: self.policy_names,
            access_denied: self.access_denied,
        }
    }
}
