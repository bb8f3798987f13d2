//! Helpers for integration tests.
#![allow(dead_code)]

use tempfile::TempDir;

use restorify::db::{DbPool, establish_connection_pool, init_database, run_migrations};

/// Temporary database used in integration tests.
///
/// The file lives in its own temporary directory, removed together with
/// the SQLite side files when the value is dropped.
pub struct TestDb {
    _dir: TempDir,
    path: String,
    pool: DbPool,
}

impl TestDb {
    /// Empty database with the schema applied.
    pub fn new(filename: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename).to_string_lossy().into_owned();

        let pool = establish_connection_pool(&path).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        run_migrations(&mut conn).expect("Migrations failed");

        TestDb {
            _dir: dir,
            path,
            pool,
        }
    }

    /// Database initialised the way the server does it on start-up.
    pub fn seeded(filename: &str) -> Self {
        let test_db = Self::new(filename);
        init_database(&test_db.pool).expect("Failed to seed the database.");
        test_db
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
