/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for listing the inline policies of a user
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ListUserPoliciesInput {
    /// The user the policies are embedded in
    pub user_name: Option<String>,
}

impl ListUserPoliciesInput {
    /// Creates a new builder-style object to manufacture [`ListUserPoliciesInput`](crate::operation::list_user_policies::ListUserPoliciesInput).
    pub fn builder() -> ListUserPoliciesInputBuilder {
        ListUserPoliciesInputBuilder::default()
    }

    /// The user the policies are embedded in
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }
}

/// A builder for [`ListUserPoliciesInput`](crate::operation::list_user_policies::ListUserPoliciesInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct ListUserPoliciesInputBuilder {
    pub(crate) user_name: Option<String>,
}

impl ListUserPoliciesInputBuilder {
    /// Set the user the policies are embedded in.
    ///
    /// NOTE: A user name is required.
    pub fn user_name(mut self, input: impl Into<String>) -> Self {
        self.user_name = Some(input.into());
        self
    }

    /// Set the user the policies are embedded in.
    pub fn set_user_name(mut self, input: Option<String>) -> Self {
        self.user_name = input;
        self
    }

    /// The user the policies are embedded in.
    pub fn get_user_name(&self) -> &Option<String> {
        &self.user_name
    }

    /// Consumes the builder and constructs a [`ListUserPoliciesInput`](crate::operation::list_user_policies::ListUserPoliciesInput).
    pub fn build(self) -> Result<ListUserPoliciesInput, BuildError> {
        match self.user_name.as_deref() {
            None | Some("") => Err(BuildError::missing_field(
                "user_name",
                "A user name is required",
            )),
            _ => Ok(ListUserPoliciesInput {
                user_name: self.user_name,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ListUserPoliciesInput;

    #[test]
    fn test_user_name_required() {
        let err = ListUserPoliciesInput::builder().build().unwrap_err();
        assert!(err.to_string().contains("A user name is required"));

        let err = ListUserPoliciesInput::builder()
            .user_name("")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("A user name is required"));
    }
}
