//! Get Catalog Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use foodwheels_app::domain::catalog::models::CatalogItemId;

use crate::{
    catalog::{errors::into_status_error, models::ItemResponse},
    extensions::*,
    state::State,
};

/// Get Catalog Item Handler
#[endpoint(
    tags("catalog"),
    summary = "Get Catalog Item",
    responses(
        (status_code = StatusCode::OK, description = "Item found"),
        (status_code = StatusCode::NOT_FOUND, description = "No such item"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .catalog
        .get_item(CatalogItemId::from_i64(item.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(item.into()))
}
