//! Database test utilities

use sqlx::SqlitePool;
use tempfile::TempDir;

use crate::database::{self, Db};

/// A migrated `SQLite` database in its own temporary directory.
///
/// Every test gets a fresh file, removed again when the `TestDb` is dropped.
#[derive(Debug)]
pub struct TestDb {
    db: Db,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        let url = format!("sqlite://{}", dir.path().join("foodwheels.db").display());

        let pool = database::connect(&url)
            .await
            .expect("Failed to open test database");

        database::migrate(&pool)
            .await
            .expect("Failed to run migrations on test database");

        Self {
            db: Db::new(pool),
            _dir: dir,
        }
    }

    pub fn db(&self) -> Db {
        self.db.clone()
    }

    pub fn pool(&self) -> &SqlitePool {
        self.db.pool()
    }
}
