//! Remove From Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use foodwheels_app::domain::catalog::models::CatalogItemId;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Remove From Cart Handler
///
/// Removing an item that is not in the cart leaves the cart unchanged. An id
/// that is not a number can never be in the cart.
#[endpoint(tags("cart"), summary = "Remove Item From Cart")]
pub(crate) async fn handler(
    item: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id_or_500()?;

    let cart = match item.into_inner().parse::<CatalogItemId>() {
        Ok(item) => state.app.carts.remove_item(session, item).await,
        Err(_) => state.app.carts.get_cart(session).await,
    }
    .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
