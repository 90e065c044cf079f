//! Identities and the user profile read model.
//!
//! Accounts are owned by the authentication collaborator. The booking and
//! review services only see the resolved `(user id, role)` pair of the caller
//! and, when rendering records, a few display fields of other users.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::UserId;

/// Closed set of roles a caller may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular traveller account.
    #[default]
    User,
    /// Back-office operator with authority over every record.
    Admin,
}

impl Role {
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(ParseRoleError(other.to_owned())),
        }
    }
}

/// Authenticated caller as resolved by the session layer.
///
/// # Examples
/// ```
/// use tourbook::domain::{Requester, Role, UserId};
///
/// let admin = Requester::new(UserId::random(), Role::Admin);
/// assert!(admin.is_admin());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    user_id: UserId,
    role: Role,
}

impl Requester {
    /// Pair a user id with its role.
    pub const fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Shorthand for a regular user.
    pub const fn user(user_id: UserId) -> Self {
        Self::new(user_id, Role::User)
    }

    /// Shorthand for an administrator.
    pub const fn admin(user_id: UserId) -> Self {
        Self::new(user_id, Role::Admin)
    }

    /// Caller's user id.
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Caller's role.
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Whether the caller holds the admin role.
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Display-relevant fields of a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Account identifier.
    pub id: UserId,
    /// Full name shown next to bookings and reviews.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone, if the user supplied one.
    pub phone: Option<String>,
    /// Role held by the account.
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user", Role::User)]
    #[case("admin", Role::Admin)]
    fn parses_known_roles(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(raw.parse::<Role>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("Admin")]
    #[case("root")]
    #[case("")]
    fn rejects_unknown_roles(#[case] raw: &str) {
        assert!(raw.parse::<Role>().is_err());
    }

    #[rstest]
    fn requester_shorthands_set_role() {
        let id = UserId::random();
        assert!(!Requester::user(id).is_admin());
        assert!(Requester::admin(id).is_admin());
        assert_eq!(Requester::user(id).user_id(), id);
    }
}
