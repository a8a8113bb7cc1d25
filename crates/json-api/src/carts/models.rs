//! Cart request and response bodies

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use foodwheels_app::domain::carts::models::{Cart, Quantity};

use crate::extensions::*;

/// Item selection sent when adding to the cart or ordering straight away.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemRequest {
    /// Catalog item id
    pub item: i64,

    /// Number of units; defaults to 1
    pub quantity: Option<i64>,
}

impl CartItemRequest {
    pub(crate) fn quantity(&self) -> Result<Quantity, StatusError> {
        self.quantity
            .map(Quantity::from_i64)
            .transpose()
            .or_400("invalid quantity")
            .map(Option::unwrap_or_default)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    pub item: i64,
    pub name: String,

    /// Unit price in cents, as it was when the item was added
    pub price: u64,

    pub quantity: u32,
    pub image_file: String,

    /// `price * quantity` in cents
    pub line_total: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    pub lines: Vec<CartLineResponse>,

    /// Sum of line totals in cents
    pub total: u64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let lines = cart
            .lines()
            .map(|(item, line)| CartLineResponse {
                item: item.into_i64(),
                name: line.name.clone(),
                price: line.price,
                quantity: line.quantity.get(),
                image_file: line.image_file.clone(),
                line_total: line.line_total(),
            })
            .collect();

        CartResponse {
            lines,
            total: cart.total(),
        }
    }
}
