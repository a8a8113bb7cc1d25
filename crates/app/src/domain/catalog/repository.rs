//! Catalog Repository

use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};

use crate::{
    columns::try_get_amount,
    domain::catalog::models::{
        CatalogItem, CatalogItemId, ItemFilter, NewCatalogItem, NewRestaurant, Restaurant,
        RestaurantId,
    },
};

const LIST_ITEMS_SQL: &str = include_str!("sql/list_items.sql");
const LIST_ALL_ITEMS_SQL: &str = include_str!("sql/list_all_items.sql");
const SEARCH_ITEMS_SQL: &str = include_str!("sql/search_items.sql");
const GET_ITEM_SQL: &str = include_str!("sql/get_item.sql");
const CREATE_ITEM_SQL: &str = include_str!("sql/create_item.sql");
const DELETE_ITEM_SQL: &str = include_str!("sql/delete_item.sql");
const LIST_RESTAURANTS_SQL: &str = include_str!("sql/list_restaurants.sql");
const GET_RESTAURANT_SQL: &str = include_str!("sql/get_restaurant.sql");
const CREATE_RESTAURANT_SQL: &str = include_str!("sql/create_restaurant.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteCatalogRepository;

impl SqliteCatalogRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_items(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        filter: &ItemFilter,
    ) -> Result<Vec<CatalogItem>, sqlx::Error> {
        query_as::<Sqlite, CatalogItem>(LIST_ITEMS_SQL)
            .bind(filter.tag.as_str())
            .bind(filter.sub_tag.as_deref())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_all_items(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<CatalogItem>, sqlx::Error> {
        query_as::<Sqlite, CatalogItem>(LIST_ALL_ITEMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn search_items(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        needle: &str,
    ) -> Result<Vec<CatalogItem>, sqlx::Error> {
        query_as::<Sqlite, CatalogItem>(SEARCH_ITEMS_SQL)
            .bind(needle)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_item(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        item: CatalogItemId,
    ) -> Result<CatalogItem, sqlx::Error> {
        query_as::<Sqlite, CatalogItem>(GET_ITEM_SQL)
            .bind(item.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    /// Like [`Self::get_item`], but a missing row is `None` rather than an error.
    pub(crate) async fn find_item(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        item: CatalogItemId,
    ) -> Result<Option<CatalogItem>, sqlx::Error> {
        query_as::<Sqlite, CatalogItem>(GET_ITEM_SQL)
            .bind(item.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_item(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        item: NewCatalogItem,
        price: i64,
    ) -> Result<CatalogItem, sqlx::Error> {
        query_as::<Sqlite, CatalogItem>(CREATE_ITEM_SQL)
            .bind(item.name)
            .bind(item.tag)
            .bind(item.sub_tag)
            .bind(price)
            .bind(item.image_file)
            .bind(item.description)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_item(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        item: CatalogItemId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ITEM_SQL)
            .bind(item.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn list_restaurants(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<Restaurant>, sqlx::Error> {
        query_as::<Sqlite, Restaurant>(LIST_RESTAURANTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_restaurant(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        restaurant: RestaurantId,
    ) -> Result<Restaurant, sqlx::Error> {
        query_as::<Sqlite, Restaurant>(GET_RESTAURANT_SQL)
            .bind(restaurant.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_restaurant(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        restaurant: NewRestaurant,
    ) -> Result<Restaurant, sqlx::Error> {
        query_as::<Sqlite, Restaurant>(CREATE_RESTAURANT_SQL)
            .bind(restaurant.name)
            .bind(restaurant.description)
            .bind(restaurant.image_file)
            .bind(restaurant.location)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, SqliteRow> for CatalogItem {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CatalogItemId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            tag: row.try_get("tag")?,
            sub_tag: row.try_get("sub_tag")?,
            price: try_get_amount(row, "price")?,
            image_file: row.try_get("image_file")?,
            description: row.try_get("description")?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Restaurant {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: RestaurantId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            image_file: row.try_get("image_file")?,
            location: row.try_get("location")?,
        })
    }
}
