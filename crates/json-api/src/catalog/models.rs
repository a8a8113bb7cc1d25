//! Catalog response bodies

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use foodwheels_app::domain::catalog::models::{CatalogItem, Restaurant};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub tag: String,
    pub sub_tag: Option<String>,

    /// Price in cents
    pub price: u64,

    pub image_file: String,
    pub description: Option<String>,
}

impl From<CatalogItem> for ItemResponse {
    fn from(item: CatalogItem) -> Self {
        ItemResponse {
            id: item.id.into_i64(),
            name: item.name,
            tag: item.tag,
            sub_tag: item.sub_tag,
            price: item.price,
            image_file: item.image_file,
            description: item.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RestaurantResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_file: String,
    pub location: Option<String>,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        RestaurantResponse {
            id: restaurant.id.into_i64(),
            name: restaurant.name,
            description: restaurant.description,
            image_file: restaurant.image_file,
            location: restaurant.location,
        }
    }
}

pub(crate) fn items(items: Vec<CatalogItem>) -> Vec<ItemResponse> {
    items.into_iter().map(ItemResponse::from).collect()
}

pub(crate) fn restaurants(restaurants: Vec<Restaurant>) -> Vec<RestaurantResponse> {
    restaurants
        .into_iter()
        .map(RestaurantResponse::from)
        .collect()
}
