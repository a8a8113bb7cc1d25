//! Home Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use foodwheels_app::domain::catalog::models::HomeListing;

use crate::{
    catalog::{
        errors::into_status_error,
        models::{self, ItemResponse, RestaurantResponse},
    },
    extensions::*,
    state::State,
};

/// Home page listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HomeResponse {
    /// Cuisine category tiles
    pub cuisines: Vec<ItemResponse>,

    /// Dessert category tiles
    pub desserts: Vec<ItemResponse>,

    pub restaurants: Vec<RestaurantResponse>,
}

impl From<HomeListing> for HomeResponse {
    fn from(listing: HomeListing) -> Self {
        HomeResponse {
            cuisines: models::items(listing.cuisines),
            desserts: models::items(listing.desserts),
            restaurants: models::restaurants(listing.restaurants),
        }
    }
}

/// Home Handler
///
/// Returns the category tiles and restaurants shown on the landing page.
#[endpoint(tags("catalog"), summary = "Home Listing")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HomeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let listing = state
        .app
        .catalog
        .home_listing()
        .await
        .map_err(into_status_error)?;

    Ok(Json(listing.into()))
}
