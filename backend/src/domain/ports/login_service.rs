//! Driving port for credential checks.
//!
//! Password storage and hashing live with the account service; handlers only
//! need the resolved `(user id, role)` pair to put into the session.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Requester, UserId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the caller identity.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Requester, Error>;
}

pub const FIXTURE_ADMIN_EMAIL: &str = "admin@tourbook.test";
pub const FIXTURE_ADMIN_ID: &str = "123e4567-e89b-12d3-a456-426614174000";
pub const FIXTURE_TRAVELLER_EMAIL: &str = "traveller@tourbook.test";
pub const FIXTURE_TRAVELLER_ID: &str = "9f1c2d3e-4b5a-4c6d-8e7f-0a1b2c3d4e5f";
const FIXTURE_PASSWORD: &str = "password";

/// Development authenticator with two built-in accounts.
///
/// `admin@tourbook.test` signs in as an administrator and
/// `traveller@tourbook.test` as a regular user, both with `password`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Requester, Error> {
        if credentials.password() != FIXTURE_PASSWORD {
            return Err(Error::unauthorized("invalid credentials"));
        }
        let (raw_id, admin) = match credentials.email() {
            FIXTURE_ADMIN_EMAIL => (FIXTURE_ADMIN_ID, true),
            FIXTURE_TRAVELLER_EMAIL => (FIXTURE_TRAVELLER_ID, false),
            _ => return Err(Error::unauthorized("invalid credentials")),
        };
        let id = UserId::new(raw_id)
            .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))?;
        Ok(if admin {
            Requester::admin(id)
        } else {
            Requester::user(id)
        })
    }
}
