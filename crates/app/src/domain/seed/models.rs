//! Seed Models

use serde::Deserialize;

use crate::{
    domain::{
        accounts::models::Password,
        catalog::models::{NewCatalogItem, NewRestaurant},
    },
    prices::{PriceError, parse_price},
};

/// Demo data shipped with the application.
pub const DEFAULT_SEED: &str = include_str!("seed.yaml");

/// A seed document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedData {
    pub admin: SeedAdmin,
    #[serde(default)]
    pub restaurants: Vec<SeedRestaurant>,
    #[serde(default)]
    pub items: Vec<SeedItem>,
}

impl SeedData {
    /// Parse a YAML seed document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not match the seed layout.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_norway::Error> {
        serde_norway::from_str(yaml)
    }

    /// The bundled demo data.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled document fails to parse.
    pub fn bundled() -> Result<Self, serde_norway::Error> {
        Self::from_yaml(DEFAULT_SEED)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedAdmin {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
}

impl SeedAdmin {
    #[must_use]
    pub fn password(&self) -> Password {
        Password::new(self.password.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedRestaurant {
    pub name: String,
    pub description: Option<String>,
    pub image_file: String,
    pub location: Option<String>,
}

impl From<SeedRestaurant> for NewRestaurant {
    fn from(restaurant: SeedRestaurant) -> Self {
        Self {
            name: restaurant.name,
            description: restaurant.description,
            image_file: restaurant.image_file,
            location: restaurant.location,
        }
    }
}

/// Catalog entry; the price is a decimal string such as `"14.99"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedItem {
    pub name: String,
    pub tag: String,
    pub sub_tag: Option<String>,
    pub price: String,
    pub image_file: String,
    pub description: Option<String>,
}

impl TryFrom<SeedItem> for NewCatalogItem {
    type Error = PriceError;

    fn try_from(item: SeedItem) -> Result<Self, Self::Error> {
        Ok(Self {
            price: parse_price(&item.price)?,
            name: item.name,
            tag: item.tag,
            sub_tag: item.sub_tag,
            image_file: item.image_file,
            description: item.description,
        })
    }
}

/// Row counts written by a seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub restaurants: usize,
    pub items: usize,
}
