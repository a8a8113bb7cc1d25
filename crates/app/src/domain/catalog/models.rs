//! Catalog Models

use crate::ids::TypedId;

/// Tag shared by the home page category tiles.
pub const CATEGORY_TAG: &str = "Category";

/// Sub-tag of the cuisine tiles on the home page.
pub const CUISINE_SUB_TAG: &str = "Cuisine";

/// Sub-tag of the dessert tiles on the home page.
pub const DESSERT_SUB_TAG: &str = "Dessert";

/// Catalog Item Id
pub type CatalogItemId = TypedId<CatalogItem>;

/// Catalog Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub name: String,
    pub tag: String,
    pub sub_tag: Option<String>,
    /// Unit price in cents.
    pub price: u64,
    pub image_file: String,
    pub description: Option<String>,
}

/// New Catalog Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCatalogItem {
    pub name: String,
    pub tag: String,
    pub sub_tag: Option<String>,
    pub price: u64,
    pub image_file: String,
    pub description: Option<String>,
}

/// Item listing filter: a tag, optionally narrowed to one sub-tag.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFilter {
    pub tag: String,
    pub sub_tag: Option<String>,
}

impl ItemFilter {
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            sub_tag: None,
        }
    }

    #[must_use]
    pub fn with_sub_tag(mut self, sub_tag: impl Into<String>) -> Self {
        self.sub_tag = Some(sub_tag.into());
        self
    }
}

/// Restaurant Id
pub type RestaurantId = TypedId<Restaurant>;

/// Restaurant Model
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub description: Option<String>,
    pub image_file: String,
    pub location: Option<String>,
}

/// New Restaurant Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurant {
    pub name: String,
    pub description: Option<String>,
    pub image_file: String,
    pub location: Option<String>,
}

/// Everything the landing page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeListing {
    pub cuisines: Vec<CatalogItem>,
    pub desserts: Vec<CatalogItem>,
    pub restaurants: Vec<Restaurant>,
}
