//! Orders service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{error, info, warn};

use crate::{
    database::Db,
    domain::{
        accounts::models::UserId,
        carts::CartsService,
        catalog::repository::SqliteCatalogRepository,
        orders::{
            errors::OrdersServiceError,
            models::{CheckoutSummary, Order, OrderId, ShippingInfo},
            repositories::{
                NewOrder, NewOrderLineItem, SqliteOrderItemsRepository, SqliteOrdersRepository,
            },
        },
        sessions::models::SessionId,
    },
    prices::SERVICE_FEE,
};

#[derive(Clone)]
pub struct SqliteOrdersService {
    db: Db,
    carts: Arc<dyn CartsService>,
    orders_repository: SqliteOrdersRepository,
    items_repository: SqliteOrderItemsRepository,
    catalog_repository: SqliteCatalogRepository,
}

impl SqliteOrdersService {
    #[must_use]
    pub fn new(db: Db, carts: Arc<dyn CartsService>) -> Self {
        Self {
            db,
            carts,
            orders_repository: SqliteOrdersRepository::new(),
            items_repository: SqliteOrderItemsRepository::new(),
            catalog_repository: SqliteCatalogRepository::new(),
        }
    }
}

impl Debug for SqliteOrdersService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SqliteOrdersService")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl OrdersService for SqliteOrdersService {
    async fn checkout_summary(
        &self,
        session: SessionId,
    ) -> Result<CheckoutSummary, OrdersServiceError> {
        let cart = self.carts.get_cart(session).await?;

        if cart.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let subtotal = cart.total();

        Ok(CheckoutSummary {
            cart,
            subtotal,
            service_fee: SERVICE_FEE,
            total: subtotal.saturating_add(SERVICE_FEE),
        })
    }

    async fn place_order(
        &self,
        session: SessionId,
        user: UserId,
        shipping: ShippingInfo,
    ) -> Result<Order, OrdersServiceError> {
        let cart = self.carts.get_cart(session).await?;

        if cart.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let total_price = i64::try_from(cart.total().saturating_add(SERVICE_FEE))?;

        let mut tx = self.db.begin().await?;

        for (item, _) in cart.lines() {
            if self
                .catalog_repository
                .find_item(&mut tx, item)
                .await?
                .is_none()
            {
                warn!(item = %item, "checkout rejected, item no longer in catalog");

                return Err(OrdersServiceError::ItemUnavailable(item));
            }
        }

        let mut order = self
            .orders_repository
            .create_order(
                &mut tx,
                NewOrder {
                    user_id: user,
                    placed_at: Timestamp::now(),
                    total_price,
                    shipping: &shipping,
                },
            )
            .await?;

        for (item, line) in cart.lines() {
            let created = self
                .items_repository
                .create_order_item(
                    &mut tx,
                    order.id,
                    NewOrderLineItem {
                        catalog_item_id: item,
                        item_name: &line.name,
                        quantity: line.quantity,
                        price_per_item: i64::try_from(line.price)?,
                    },
                )
                .await?;

            order.items.push(created);
        }

        tx.commit().await?;

        info!(
            order = %order.id,
            user = %user,
            total = order.total_price,
            items = order.items.len(),
            "order placed"
        );

        if let Err(err) = self.carts.clear(session).await {
            error!(order = %order.id, error = %err, "failed to clear cart after checkout");
        }

        Ok(order)
    }

    async fn get_order(&self, user: UserId, order: OrderId) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self
            .orders_repository
            .get_order(&mut tx, user, order)
            .await?;

        order.items = self
            .items_repository
            .get_order_items(&mut tx, order.id)
            .await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn list_orders(&self, user: UserId) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut orders = self.orders_repository.list_orders(&mut tx, user).await?;

        for order in &mut orders {
            order.items = self
                .items_repository
                .get_order_items(&mut tx, order.id)
                .await?;
        }

        tx.commit().await?;

        Ok(orders)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Price breakdown of the session's cart ahead of checkout.
    async fn checkout_summary(
        &self,
        session: SessionId,
    ) -> Result<CheckoutSummary, OrdersServiceError>;

    /// Turn the session's cart into an order owned by `user`.
    ///
    /// The order row is written before its line items, all in one
    /// transaction. The cart is cleared only once that transaction commits.
    /// Once committed, the order is returned even if clearing the cart fails;
    /// that failure is logged at error level and the stale cart stays in the
    /// session.
    async fn place_order(
        &self,
        session: SessionId,
        user: UserId,
        shipping: ShippingInfo,
    ) -> Result<Order, OrdersServiceError>;

    /// Retrieve one of the user's orders with its line items.
    async fn get_order(&self, user: UserId, order: OrderId) -> Result<Order, OrdersServiceError>;

    /// All of the user's orders, newest first.
    async fn list_orders(&self, user: UserId) -> Result<Vec<Order>, OrdersServiceError>;
}
