//! Order request and response bodies

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use foodwheels_app::domain::orders::models::{
    CheckoutSummary, Order, OrderLineItem, ShippingInfo,
};

use crate::carts::models::CartResponse;

/// Shipping details entered at checkout.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShippingRequest {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
}

/// Shipping details are free-form; only surrounding whitespace is dropped.
impl From<ShippingRequest> for ShippingInfo {
    fn from(request: ShippingRequest) -> Self {
        ShippingInfo {
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            address: request.address.trim().to_string(),
            city: request.city.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShippingResponse {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
}

impl From<ShippingInfo> for ShippingResponse {
    fn from(shipping: ShippingInfo) -> Self {
        ShippingResponse {
            name: shipping.name,
            email: shipping.email,
            address: shipping.address,
            city: shipping.city,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutSummaryResponse {
    pub cart: CartResponse,

    /// Cart total in cents
    pub subtotal: u64,

    /// Flat fee in cents
    pub service_fee: u64,

    /// Amount charged in cents
    pub total: u64,
}

impl From<CheckoutSummary> for CheckoutSummaryResponse {
    fn from(summary: CheckoutSummary) -> Self {
        CheckoutSummaryResponse {
            cart: summary.cart.into(),
            subtotal: summary.subtotal,
            service_fee: summary.service_fee,
            total: summary.total,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    pub item: i64,
    pub name: String,
    pub quantity: u32,

    /// Unit price in cents at the time of purchase
    pub price_per_item: u64,

    pub line_total: u64,
}

impl From<OrderLineItem> for OrderItemResponse {
    fn from(line: OrderLineItem) -> Self {
        OrderItemResponse {
            item: line.catalog_item_id.into_i64(),
            line_total: line.line_total(),
            name: line.item_name,
            quantity: line.quantity.get(),
            price_per_item: line.price_per_item,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub id: i64,

    /// When the order was placed
    pub placed_at: String,

    /// Items plus service fee, in cents
    pub total_price: u64,

    pub shipping: ShippingResponse,
    pub items: Vec<OrderItemResponse>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id.into_i64(),
            placed_at: order.placed_at.to_string(),
            total_price: order.total_price,
            shipping: order.shipping.into(),
            items: order
                .items
                .into_iter()
                .map(OrderItemResponse::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(city: &str) -> ShippingRequest {
        ShippingRequest {
            name: " Ada Lovelace ".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 St James's Square".to_string(),
            city: city.to_string(),
        }
    }

    #[test]
    fn shipping_is_trimmed() {
        let shipping = ShippingInfo::from(request("London"));

        assert_eq!(shipping.name, "Ada Lovelace");
        assert_eq!(shipping.city, "London");
    }

    #[test]
    fn blank_shipping_field_is_accepted() {
        let shipping = ShippingInfo::from(request("   "));

        assert_eq!(shipping.city, "");
        assert_eq!(shipping.email, "ada@example.com");
    }
}
