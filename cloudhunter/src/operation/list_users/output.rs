/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_iam::types::User;

/// Output type for listing IAM users
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListUsersOutput {
    /// Users visible to the caller, in service order
    pub users: Option<Vec<User>>,

    /// True if listing stopped early because a page was denied
    pub access_denied: bool,
}

impl ListUsersOutput {
    /// Creates a new builder-style object to manufacture [`ListUsersOutput`](crate::operation::list_users::ListUsersOutput).
    pub fn builder() -> ListUsersOutputBuilder {
        ListUsersOutputBuilder::default()
    }

    /// Users visible to the caller, in service order
    pub fn users(&self) -> &[User] {
        self.users.as_deref().unwrap_or_default()
    }

    /// True if the listing is partial because the caller was denied part way through.
    pub fn access_denied(&self) -> bool {
        self.access_denied
    }
}

/// A builder for [`ListUsersOutput`](crate::operation::list_users::ListUsersOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct ListUsersOutputBuilder {
    pub(crate) users: Option<Vec<User>>,
    pub(crate) access_denied: bool,
}

impl ListUsersOutputBuilder {
    /// Append a user.
    ///
    /// To append many users at once use [`set_users`](Self::set_users)
    pub fn users(mut self, input: User) -> Self {
        self.users.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Append the given users. `None` leaves the collected users untouched.
    pub fn set_users(mut self, input: Option<Vec<User>>) -> Self {
        if let Some(users) = input {
            self.users.get_or_insert_with(Vec::new).extend(users);
        }
        self
    }

    /// The users collected so far
    pub fn get_users(&self) -> &Option<Vec<User>> {
        &self.users
    }

    /// Flag the listing as partial
    pub fn access_denied(mut self, input: bool) -> Self {
        self.access_denied = input;
        self
    }

    /// Consumes the builder and constructs a [`ListUsersOutput`](crate::operation::list_users::ListUsersOutput).
    pub fn build(self) -> ListUsersOutput {
        ListUsersOutput {
            users: self.users,
            access_denied: self.access_denied,
        }
    }
}
