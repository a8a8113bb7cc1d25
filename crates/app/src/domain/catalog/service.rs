//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::query;
use tracing::info;

use crate::{
    database::Db,
    domain::catalog::{
        errors::CatalogServiceError,
        models::{
            CATEGORY_TAG, CUISINE_SUB_TAG, CatalogItem, CatalogItemId, DESSERT_SUB_TAG,
            HomeListing, ItemFilter, NewCatalogItem, Restaurant, RestaurantId,
        },
        repository::SqliteCatalogRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteCatalogService {
    db: Db,
    repository: SqliteCatalogRepository,
}

impl SqliteCatalogService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl CatalogService for SqliteCatalogService {
    async fn home_listing(&self) -> Result<HomeListing, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let cuisines = self
            .repository
            .list_items(
                &mut tx,
                &ItemFilter::tag(CATEGORY_TAG).with_sub_tag(CUISINE_SUB_TAG),
            )
            .await?;

        let desserts = self
            .repository
            .list_items(
                &mut tx,
                &ItemFilter::tag(CATEGORY_TAG).with_sub_tag(DESSERT_SUB_TAG),
            )
            .await?;

        let restaurants = self.repository.list_restaurants(&mut tx).await?;

        tx.commit().await?;

        Ok(HomeListing {
            cuisines,
            desserts,
            restaurants,
        })
    }

    async fn list_items(&self, filter: ItemFilter) -> Result<Vec<CatalogItem>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.repository.list_items(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn list_all_items(&self) -> Result<Vec<CatalogItem>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.repository.list_all_items(&mut tx).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn search_items(&self, query: &str) -> Result<Vec<CatalogItem>, CatalogServiceError> {
        let needle = query.trim();

        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.db.begin().await?;

        let items = self.repository.search_items(&mut tx, needle).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn get_item(&self, item: CatalogItemId) -> Result<CatalogItem, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let item = self.repository.get_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn create_item(&self, item: NewCatalogItem) -> Result<CatalogItem, CatalogServiceError> {
        let price = i64::try_from(item.price)?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_item(&mut tx, item, price).await?;

        tx.commit().await?;

        info!(item = %created.id, name = %created.name, "catalog item created");

        Ok(created)
    }

    async fn delete_item(&self, item: CatalogItemId) -> Result<(), CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_item(&mut tx, item).await?;

        if rows_affected == 0 {
            return Err(CatalogServiceError::NotFound);
        }

        tx.commit().await?;

        info!(item = %item, "catalog item deleted");

        Ok(())
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let restaurants = self.repository.list_restaurants(&mut tx).await?;

        tx.commit().await?;

        Ok(restaurants)
    }

    async fn get_restaurant(
        &self,
        restaurant: RestaurantId,
    ) -> Result<Restaurant, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let restaurant = self.repository.get_restaurant(&mut tx, restaurant).await?;

        tx.commit().await?;

        Ok(restaurant)
    }

    async fn ping(&self) -> Result<(), CatalogServiceError> {
        query("SELECT 1").execute(self.db.pool()).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Category tiles and restaurants for the landing page.
    async fn home_listing(&self) -> Result<HomeListing, CatalogServiceError>;

    /// Items carrying the filter's tag (and sub-tag, when given).
    async fn list_items(&self, filter: ItemFilter) -> Result<Vec<CatalogItem>, CatalogServiceError>;

    /// Every item in the catalog.
    async fn list_all_items(&self) -> Result<Vec<CatalogItem>, CatalogServiceError>;

    /// Case-insensitive substring search on item names. A blank query matches nothing.
    async fn search_items(&self, query: &str) -> Result<Vec<CatalogItem>, CatalogServiceError>;

    /// Retrieve a single item.
    async fn get_item(&self, item: CatalogItemId) -> Result<CatalogItem, CatalogServiceError>;

    /// Adds an item to the catalog.
    async fn create_item(&self, item: NewCatalogItem) -> Result<CatalogItem, CatalogServiceError>;

    /// Removes an item from the catalog. Carts and placed orders are untouched.
    async fn delete_item(&self, item: CatalogItemId) -> Result<(), CatalogServiceError>;

    /// Every restaurant.
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, CatalogServiceError>;

    /// Retrieve a single restaurant.
    async fn get_restaurant(
        &self,
        restaurant: RestaurantId,
    ) -> Result<Restaurant, CatalogServiceError>;

    /// Round-trip to the store backing the catalog.
    async fn ping(&self) -> Result<(), CatalogServiceError>;
}
