//! Seed service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::query;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        accounts::{
            hash_password,
            repository::{SqliteAccountsRepository, UserInsert},
        },
        catalog::{models::NewCatalogItem, repository::SqliteCatalogRepository},
        seed::{
            errors::SeedError,
            models::{SeedData, SeedReport},
        },
    },
};

/// Deletes run children first so foreign keys hold at every step.
const RESET_STATEMENTS: [&str; 7] = [
    "DELETE FROM order_items",
    "DELETE FROM orders",
    "DELETE FROM bookings",
    "DELETE FROM restaurants",
    "DELETE FROM catalog_items",
    "DELETE FROM users",
    "DELETE FROM sqlite_sequence \
     WHERE name IN ('order_items', 'orders', 'bookings', 'restaurants', 'catalog_items', 'users')",
];

#[derive(Debug, Clone)]
pub struct SqliteSeedService {
    db: Db,
    accounts_repository: SqliteAccountsRepository,
    catalog_repository: SqliteCatalogRepository,
}

impl SqliteSeedService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            accounts_repository: SqliteAccountsRepository::new(),
            catalog_repository: SqliteCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl SeedService for SqliteSeedService {
    async fn reset_and_seed(&self, seed: SeedData) -> Result<SeedReport, SeedError> {
        let items = seed
            .items
            .into_iter()
            .map(|item| {
                let name = item.name.clone();

                NewCatalogItem::try_from(item).map_err(|source| SeedError::Price { name, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let password_hash = hash_password(seed.admin.password().expose());

        let mut tx = self.db.begin().await?;

        for statement in RESET_STATEMENTS {
            query(statement).execute(&mut *tx).await?;
        }

        self.accounts_repository
            .create_user(
                &mut tx,
                UserInsert {
                    email: seed.admin.email.trim(),
                    password_hash: &password_hash,
                    first_name: seed.admin.first_name.as_deref(),
                    last_name: seed.admin.last_name.as_deref(),
                    country: seed.admin.country.as_deref(),
                    is_admin: true,
                    created_at: Timestamp::now(),
                },
            )
            .await?;

        let mut report = SeedReport {
            users: 1,
            ..SeedReport::default()
        };

        for restaurant in seed.restaurants {
            self.catalog_repository
                .create_restaurant(&mut tx, restaurant.into())
                .await?;

            report.restaurants += 1;
        }

        for item in items {
            let price = i64::try_from(item.price)?;

            self.catalog_repository
                .create_item(&mut tx, item, price)
                .await?;

            report.items += 1;
        }

        tx.commit().await?;

        info!(
            users = report.users,
            restaurants = report.restaurants,
            items = report.items,
            "database reset and seeded"
        );

        Ok(report)
    }
}

#[automock]
#[async_trait]
pub trait SeedService: Send + Sync {
    /// Delete all data and load `seed`, all or nothing.
    async fn reset_and_seed(&self, seed: SeedData) -> Result<SeedReport, SeedError>;
}
