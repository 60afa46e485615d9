use anyhow::anyhow;
use diesel::{pg::PgConnection, Connection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use scribe_utils::error::ScribeResult;
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Runs all pending migrations. Diesel only supports sync connections here,
/// so this briefly opens one outside the async pool.
pub fn run(db_url: &str) -> ScribeResult<()> {
  let mut conn = PgConnection::establish(db_url)?;
  info!("Running database migrations (this may take a while)...");
  conn
    .run_pending_migrations(MIGRATIONS)
    .map_err(|e| anyhow!("Couldn't run db migrations: {e}"))?;
  info!("Database migrations complete");
  Ok(())
}
