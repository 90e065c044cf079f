//! Authorisation predicates for bookings and reviews.
//!
//! Every permission check is a pure function of the caller and, where
//! relevant, the owner of the record being touched. Services turn a
//! [`AccessDecision::Deny`] into a forbidden error carrying the reason so
//! callers (and tests) can tell which rule refused the request.

use serde::Serialize;
use serde_json::json;

use super::{Error, Requester, UserId};

/// Why access was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// The operation is reserved for administrators.
    AdminRequired,
    /// The caller neither owns the record nor is an administrator.
    NotOwner,
}

impl DenyReason {
    /// Stable code used in error details.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AdminRequired => "admin_required",
            Self::NotOwner => "not_owner",
        }
    }
}

/// Outcome of a permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The caller may proceed.
    Allow,
    /// The caller is refused for the given reason.
    Deny(DenyReason),
}

impl AccessDecision {
    /// Whether the decision allows the operation.
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Convert into a domain result, mapping denials to `forbidden`.
    pub fn into_result(self) -> Result<(), Error> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(reason) => Err(forbidden(reason)),
        }
    }
}

fn forbidden(reason: DenyReason) -> Error {
    let message = match reason {
        DenyReason::AdminRequired => "admin role required",
        DenyReason::NotOwner => "not authorized to access this record",
    };
    Error::forbidden(message).with_details(json!({ "code": reason.as_str() }))
}

/// Operations that only administrators may perform.
pub fn require_admin(requester: &Requester) -> AccessDecision {
    if requester.is_admin() {
        AccessDecision::Allow
    } else {
        AccessDecision::Deny(DenyReason::AdminRequired)
    }
}

/// Operations open to the record owner and to administrators.
pub fn require_owner_or_admin(requester: &Requester, owner: &UserId) -> AccessDecision {
    if requester.user_id() == *owner || requester.is_admin() {
        AccessDecision::Allow
    } else {
        AccessDecision::Deny(DenyReason::NotOwner)
    }
}
