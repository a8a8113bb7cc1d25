//! Admin request bodies

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use foodwheels_app::{domain::catalog::models::NewCatalogItem, prices::parse_price};

use crate::extensions::*;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NewItemRequest {
    pub name: String,
    pub tag: String,
    pub sub_tag: Option<String>,

    /// Decimal price, e.g. `"14.99"`
    pub price: String,

    pub image_file: String,
    pub description: Option<String>,
}

impl TryFrom<NewItemRequest> for NewCatalogItem {
    type Error = StatusError;

    fn try_from(request: NewItemRequest) -> Result<Self, Self::Error> {
        let price = parse_price(&request.price).or_400("invalid price")?;

        let name = request.name.trim().to_string();
        let tag = request.tag.trim().to_string();

        if name.is_empty() || tag.is_empty() {
            return Err(StatusError::bad_request().brief("Name and tag are required"));
        }

        Ok(NewCatalogItem {
            name,
            tag,
            sub_tag: request.sub_tag.filter(|sub_tag| !sub_tag.trim().is_empty()),
            price,
            image_file: request.image_file,
            description: request.description,
        })
    }
}
