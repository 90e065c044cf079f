//! Port for resolving user display fields.
//!
//! Accounts belong to the authentication side; bookings and reviews only
//! need names and contact details for rendering.

use async_trait::async_trait;

use crate::domain::{UserId, UserProfile};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user directory adapters.
    pub enum UserDirectoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "user directory connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "user directory query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, UserDirectoryError>;

    /// Fetch several profiles at once. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<UserProfile>, UserDirectoryError>;
}

/// Directory that knows no users.
///
/// Rendering falls back to records without owner or author details.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserDirectory;

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn find_by_id(&self, _id: &UserId) -> Result<Option<UserProfile>, UserDirectoryError> {
        Ok(None)
    }

    async fn find_by_ids(&self, _ids: &[UserId]) -> Result<Vec<UserProfile>, UserDirectoryError> {
        Ok(Vec::new())
    }
}
