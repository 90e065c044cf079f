//! Shared Diesel error classification for the repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Coarse failure class of a Diesel error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    Connection,
    UniqueViolation,
    ForeignKeyViolation,
    Query,
}

/// Log the raw error at debug level and classify it.
pub(crate) fn classify_diesel_error(error: &DieselError) -> DieselFailure {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DieselFailure::UniqueViolation
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            DieselFailure::ForeignKeyViolation
        }
        _ => DieselFailure::Query,
    }
}

/// Fold a pool error into a repository connection error.
pub(crate) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    connection(error.message().to_owned())
}

/// Map a Diesel error for repositories with no constraint-specific variants.
///
/// Constraint violations are reported as query failures here; repositories
/// that care about them classify the error themselves.
pub(crate) fn map_basic_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: FnOnce(&'static str) -> E,
    C: FnOnce(&'static str) -> E,
{
    match classify_diesel_error(&error) {
        DieselFailure::Connection => connection("database connection error"),
        DieselFailure::UniqueViolation
        | DieselFailure::ForeignKeyViolation
        | DieselFailure::Query => query("database error"),
    }
}

#[cfg(test)]
pub(crate) fn fake_database_error(kind: DatabaseErrorKind) -> DieselError {
    DieselError::DatabaseError(kind, Box::new("constraint detail".to_owned()))
}
