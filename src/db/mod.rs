//! Connection pool, schema migrations and first-run seeding for the SQLite store.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::repository::{RepositoryError, RepositoryResult};

pub mod seed;

pub use seed::SeedReport;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Applies per-connection SQLite settings every time the pool opens a connection.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        // Foreign keys are off by default in SQLite and must be enabled per connection.
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build an r2d2 pool for the SQLite database at `database_url`.
///
/// The file is created if it does not exist yet.
pub fn establish_connection_pool(database_url: &str) -> RepositoryResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)?;
    Ok(pool)
}

/// Apply pending migrations and return the number of migrations run.
pub fn run_migrations(conn: &mut SqliteConnection) -> RepositoryResult<usize> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| RepositoryError::Database(err.to_string()))?;
    Ok(applied.len())
}

/// Bring the database to a usable state: create missing tables, then seed empty ones.
///
/// Safe to call on every start; populated tables are left untouched.
pub fn init_database(pool: &DbPool) -> RepositoryResult<SeedReport> {
    let mut conn = pool.get()?;

    let applied = run_migrations(&mut conn)?;
    if applied > 0 {
        log::info!("Applied {applied} database migration(s)");
    }

    let report = seed::seed_empty_tables(&mut conn)?;
    if report.is_empty() {
        log::info!("All tables already populated, skipping sample data");
    } else {
        log::info!("Seeded sample data into: {}", report.tables.join(", "));
    }

    Ok(report)
}
