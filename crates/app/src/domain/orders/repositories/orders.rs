//! Orders Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query_as, sqlite::SqliteRow};

use crate::{
    columns::{timestamp_to_column, try_get_amount, try_get_timestamp},
    domain::{
        accounts::models::UserId,
        orders::models::{Order, OrderId, ShippingInfo},
    },
};

const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("../sql/list_orders.sql");

#[derive(Debug)]
pub(crate) struct NewOrder<'a> {
    pub user_id: UserId,
    pub placed_at: Timestamp,
    pub total_price: i64,
    pub shipping: &'a ShippingInfo,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteOrdersRepository;

impl SqliteOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        order: NewOrder<'_>,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Sqlite, Order>(CREATE_ORDER_SQL)
            .bind(order.user_id.into_i64())
            .bind(timestamp_to_column(order.placed_at))
            .bind(order.total_price)
            .bind(order.shipping.name.as_str())
            .bind(order.shipping.email.as_str())
            .bind(order.shipping.address.as_str())
            .bind(order.shipping.city.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        user: UserId,
        order: OrderId,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Sqlite, Order>(GET_ORDER_SQL)
            .bind(order.into_i64())
            .bind(user.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        user: UserId,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Sqlite, Order>(LIST_ORDERS_SQL)
            .bind(user.into_i64())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, SqliteRow> for Order {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: OrderId::from_i64(row.try_get("id")?),
            user_id: UserId::from_i64(row.try_get("user_id")?),
            placed_at: try_get_timestamp(row, "placed_at")?,
            total_price: try_get_amount(row, "total_price")?,
            shipping: ShippingInfo {
                name: row.try_get("name")?,
                email: row.try_get("email")?,
                address: row.try_get("address")?,
                city: row.try_get("city")?,
            },
            items: Vec::new(),
        })
    }
}
