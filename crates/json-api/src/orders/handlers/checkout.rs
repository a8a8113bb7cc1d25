//! Checkout Summary Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::CheckoutSummaryResponse},
    state::State,
};

/// Checkout Summary Handler
///
/// Shows the cart with its subtotal, the service fee and the amount that
/// placing the order would charge.
#[endpoint(
    tags("orders"),
    summary = "Checkout Summary",
    responses(
        (status_code = StatusCode::OK, description = "Price breakdown"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Login required"),
        (status_code = StatusCode::CONFLICT, description = "Cart is empty"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<CheckoutSummaryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id_or_500()?;

    depot.user_id_or_401()?;

    let summary = state
        .app
        .orders
        .checkout_summary(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(summary.into()))
}
