//! Restaurant Handlers

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use foodwheels_app::domain::catalog::models::RestaurantId;

use crate::{
    catalog::{
        errors::into_status_error,
        models::{self, RestaurantResponse},
    },
    extensions::*,
    state::State,
};

/// List Restaurants Handler
#[endpoint(tags("restaurants"), summary = "List Restaurants")]
pub(crate) async fn index(depot: &mut Depot) -> Result<Json<Vec<RestaurantResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let restaurants = state
        .app
        .catalog
        .list_restaurants()
        .await
        .map_err(into_status_error)?;

    Ok(Json(models::restaurants(restaurants)))
}

/// Get Restaurant Handler
#[endpoint(
    tags("restaurants"),
    summary = "Get Restaurant",
    responses(
        (status_code = StatusCode::OK, description = "Restaurant found"),
        (status_code = StatusCode::NOT_FOUND, description = "No such restaurant"),
    ),
)]
pub(crate) async fn get(
    restaurant: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<RestaurantResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let restaurant = state
        .app
        .catalog
        .get_restaurant(RestaurantId::from_i64(restaurant.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(restaurant.into()))
}
