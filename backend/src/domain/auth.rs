//! Login credentials accepted by the session layer.
//!
//! Accounts sign in with an email address and a password. Handlers build a
//! [`LoginCredentials`] value before talking to the
//! [`LoginService`](crate::domain::ports::LoginService) port so the port never
//! sees blank input.

use thiserror::Error;
use zeroize::Zeroizing;

/// Reasons a login payload is rejected before authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email did not contain a local part and a domain.
    #[error("email must contain a single '@' with text on both sides")]
    MalformedEmail,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials.
///
/// The email is trimmed and lower-cased; the password keeps caller-provided
/// whitespace and is wiped from memory on drop.
///
/// # Examples
/// ```
/// use tourbook::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" Admin@Tourbook.test ", "password")
///     .expect("valid credentials");
/// assert_eq!(creds.email(), "admin@tourbook.test");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = email.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        match normalized.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
            _ => return Err(LoginValidationError::MalformedEmail),
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: normalized,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Normalised email used for account lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as supplied.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
