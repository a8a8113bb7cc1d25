//! Order Models

use jiff::Timestamp;

use crate::{
    domain::{
        accounts::models::UserId,
        carts::models::{Cart, Quantity},
        catalog::models::CatalogItemId,
    },
    ids::TypedId,
};

/// Order Id
pub type OrderId = TypedId<Order>;

/// Order Line Item Id
pub type OrderLineItemId = TypedId<OrderLineItem>;

/// Delivery details supplied at checkout. Accepted as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShippingInfo {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
}

/// Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub placed_at: Timestamp,
    /// Line totals plus the service fee, in cents.
    pub total_price: u64,
    pub shipping: ShippingInfo,
    pub items: Vec<OrderLineItem>,
}

/// Order Line Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineItem {
    pub id: OrderLineItemId,
    pub order_id: OrderId,
    pub catalog_item_id: CatalogItemId,
    pub item_name: String,
    pub quantity: Quantity,
    /// Price the customer saw in their cart, in cents.
    pub price_per_item: u64,
}

impl OrderLineItem {
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.price_per_item
            .saturating_mul(u64::from(self.quantity.get()))
    }
}

/// What the customer is about to pay for.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary {
    pub cart: Cart,
    pub subtotal: u64,
    pub service_fee: u64,
    pub total: u64,
}
