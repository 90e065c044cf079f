//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! The session cookie carries the authenticated identity as two entries,
//! `user_id` and `role`. Handlers only see a [`Requester`].

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, Requester, Role, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const ROLE_KEY: &str = "role";

/// Newtype wrapper that exposes identity-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the authenticated identity, replacing any previous one.
    pub fn persist_requester(&self, requester: &Requester) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, requester.user_id().to_string())
            .and_then(|()| self.0.insert(ROLE_KEY, requester.role().as_str()))
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Drop the identity and invalidate the cookie.
    pub fn clear(&self) {
        self.0.purge();
    }

    /// Current identity, if the cookie carries a well-formed one.
    ///
    /// A tampered or partial identity is treated as absent.
    pub fn requester(&self) -> Result<Option<Requester>, Error> {
        let read = |key: &str| {
            self.0
                .get::<String>(key)
                .map_err(|error| Error::internal(format!("failed to read session: {error}")))
        };
        let (Some(raw_id), Some(raw_role)) = (read(USER_ID_KEY)?, read(ROLE_KEY)?) else {
            return Ok(None);
        };

        let user_id = match UserId::new(&raw_id) {
            Ok(id) => id,
            Err(error) => {
                warn!(%error, "invalid user id in session cookie");
                return Ok(None);
            }
        };
        let role = match raw_role.parse::<Role>() {
            Ok(role) => role,
            Err(error) => {
                warn!(%error, "invalid role in session cookie");
                return Ok(None);
            }
        };
        Ok(Some(Requester::new(user_id, role)))
    }

    /// Require an authenticated identity or fail with `401 Unauthorized`.
    pub fn require_requester(&self) -> Result<Requester, Error> {
        self.requester()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
