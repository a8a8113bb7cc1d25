//! Add To Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use foodwheels_app::domain::catalog::models::CatalogItemId;

use crate::{
    carts::{
        errors::into_status_error,
        models::{CartItemRequest, CartResponse},
    },
    extensions::*,
    state::State,
};

/// Add To Cart Handler
///
/// Adding an item already in the cart increases its quantity; the price
/// recorded when it was first added is kept.
#[endpoint(
    tags("cart"),
    summary = "Add Item To Cart",
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity"),
        (status_code = StatusCode::NOT_FOUND, description = "No such catalog item"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id_or_500()?;

    let request = json.into_inner();
    let quantity = request.quantity()?;

    let cart = state
        .app
        .carts
        .add_item(session, CatalogItemId::from_i64(request.item), quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
