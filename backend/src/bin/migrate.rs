//! Apply pending database migrations and exit.
//!
//! Deployments run this before rolling out new servers. The connection string
//! comes from `--database-url` or `TOURBOOK_DATABASE_URL`.

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use tourbook::outbound::persistence::run_pending_migrations;

/// `migrate` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "migrate",
    about = "Apply pending Tourbook database migrations",
    version
)]
struct CliArgs {
    /// PostgreSQL connection URL.
    #[arg(long = "database-url", value_name = "url", env = "TOURBOOK_DATABASE_URL")]
    database_url: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let database_url = args
        .database_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| eyre!("pass --database-url or set TOURBOOK_DATABASE_URL"))?;

    let applied =
        run_pending_migrations(&database_url).context("failed to apply migrations")?;
    if applied.is_empty() {
        println!("schema is up to date");
    } else {
        for version in applied {
            println!("applied {version}");
        }
    }
    Ok(())
}
