//! Order Items Repository

use sqlx::{FromRow, Row, Sqlite, Transaction, query_as, sqlite::SqliteRow};

use crate::{
    columns::try_get_amount,
    domain::{
        carts::models::Quantity,
        catalog::models::CatalogItemId,
        orders::models::{OrderId, OrderLineItem, OrderLineItemId},
    },
};

const CREATE_ORDER_ITEM_SQL: &str = include_str!("../sql/create_order_item.sql");
const GET_ORDER_ITEMS_SQL: &str = include_str!("../sql/get_order_items.sql");

#[derive(Debug)]
pub(crate) struct NewOrderLineItem<'a> {
    pub catalog_item_id: CatalogItemId,
    pub item_name: &'a str,
    pub quantity: Quantity,
    pub price_per_item: i64,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteOrderItemsRepository;

impl SqliteOrderItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order_item(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        order: OrderId,
        item: NewOrderLineItem<'_>,
    ) -> Result<OrderLineItem, sqlx::Error> {
        query_as::<Sqlite, OrderLineItem>(CREATE_ORDER_ITEM_SQL)
            .bind(order.into_i64())
            .bind(item.catalog_item_id.into_i64())
            .bind(item.item_name)
            .bind(i64::from(item.quantity.get()))
            .bind(item.price_per_item)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order_items(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        order: OrderId,
    ) -> Result<Vec<OrderLineItem>, sqlx::Error> {
        query_as::<Sqlite, OrderLineItem>(GET_ORDER_ITEMS_SQL)
            .bind(order.into_i64())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, SqliteRow> for OrderLineItem {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let quantity = Quantity::from_i64(row.try_get("quantity")?).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "quantity".to_string(),
                source: Box::new(e),
            }
        })?;

        Ok(Self {
            id: OrderLineItemId::from_i64(row.try_get("id")?),
            order_id: OrderId::from_i64(row.try_get("order_id")?),
            catalog_item_id: CatalogItemId::from_i64(row.try_get("catalog_item_id")?),
            item_name: row.try_get("item_name")?,
            quantity,
            price_per_item: try_get_amount(row, "price_per_item")?,
        })
    }
}
