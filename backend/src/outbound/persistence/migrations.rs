//! Embedded Diesel migrations for the booking schema.
//!
//! The SQL under `backend/migrations` is compiled into the binary so the
//! server and the `migrate` tool apply exactly the schema that
//! [`super::schema`] describes.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations from the `backend/migrations` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failure while applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to connect for migrations: {message}")]
    Connect { message: String },
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
}

/// Apply every pending migration and return the versions that ran.
///
/// This opens a blocking connection; call it before the async runtime
/// starts serving or from `spawn_blocking`.
pub fn run_pending_migrations(database_url: &str) -> Result<Vec<String>, MigrationError> {
    let mut conn = PgConnection::establish(database_url).map_err(|err| MigrationError::Connect {
        message: err.to_string(),
    })?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?
        .into_iter()
        .map(|version| version.to_string())
        .collect::<Vec<_>>();

    info!(count = applied.len(), "database migrations applied");
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::migration::MigrationSource;
    use diesel::pg::Pg;
    use rstest::rstest;

    #[rstest]
    fn embedded_migrations_include_booking_schema() {
        let migrations =
            MigrationSource::<Pg>::migrations(&MIGRATIONS).expect("embedded migrations load");
        let names: Vec<String> = migrations
            .iter()
            .map(|migration| migration.name().to_string())
            .collect();

        assert!(
            names.iter().any(|name| name.contains("create_booking_schema")),
            "missing booking schema migration in {names:?}"
        );
    }

    #[rstest]
    fn unreachable_database_is_a_connect_error() {
        let err = run_pending_migrations("postgres://tourbook@127.0.0.1:1/none")
            .expect_err("nothing listens on port 1");
        assert!(matches!(err, MigrationError::Connect { .. }));
    }
}
