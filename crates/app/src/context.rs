//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        accounts::{AccountsService, SqliteAccountsService},
        bookings::{BookingsService, SqliteBookingsService},
        carts::{CartsService, SessionCartsService},
        catalog::{CatalogService, SqliteCatalogService},
        orders::{OrdersService, SqliteOrdersService},
        seed::{SeedService, SqliteSeedService},
        sessions::SessionStore,
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply migrations")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub accounts: Arc<dyn AccountsService>,
    pub sessions: Arc<dyn SessionStore>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub bookings: Arc<dyn BookingsService>,
    pub seed: Arc<dyn SeedService>,
}

impl AppContext {
    /// Build application context from a database URL, applying pending
    /// migrations first. Sessions are kept in `sessions`.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(
        url: &str,
        sessions: Arc<dyn SessionStore>,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        Ok(Self::from_db(&Db::new(pool), sessions))
    }

    /// Wire every service to `db` and `sessions`.
    #[must_use]
    pub fn from_db(db: &Db, sessions: Arc<dyn SessionStore>) -> Self {
        let catalog: Arc<dyn CatalogService> = Arc::new(SqliteCatalogService::new(db.clone()));
        let carts: Arc<dyn CartsService> =
            Arc::new(SessionCartsService::new(catalog.clone(), sessions.clone()));

        Self {
            accounts: Arc::new(SqliteAccountsService::new(db.clone())),
            orders: Arc::new(SqliteOrdersService::new(db.clone(), carts.clone())),
            bookings: Arc::new(SqliteBookingsService::new(db.clone())),
            seed: Arc::new(SqliteSeedService::new(db.clone())),
            catalog,
            sessions,
            carts,
        }
    }
}
