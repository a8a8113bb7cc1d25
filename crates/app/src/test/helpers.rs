//! Test Helpers

use sqlx::{query, query_scalar};

use crate::{
    domain::{
        accounts::{
            AccountsService, AccountsServiceError,
            models::{NewUser, Password, User},
        },
        catalog::{
            CatalogService, CatalogServiceError,
            models::{CatalogItem, CatalogItemId, NewCatalogItem, NewRestaurant, Restaurant},
            repository::SqliteCatalogRepository,
        },
        orders::models::ShippingInfo,
    },
    test::TestContext,
};

pub(crate) fn new_item(name: &str, tag: &str, price: u64) -> NewCatalogItem {
    NewCatalogItem {
        name: name.to_string(),
        tag: tag.to_string(),
        sub_tag: None,
        price,
        image_file: format!("{}.jpg", name.to_lowercase().replace(' ', "-")),
        description: None,
    }
}

/// Create a plain menu item.
pub(crate) async fn create_item(
    ctx: &TestContext,
    name: &str,
    price: u64,
) -> Result<CatalogItem, CatalogServiceError> {
    ctx.catalog.create_item(new_item(name, "Menu", price)).await
}

pub(crate) async fn create_restaurant(
    ctx: &TestContext,
    name: &str,
) -> Result<Restaurant, sqlx::Error> {
    let mut tx = ctx.db.db().begin().await?;

    let restaurant = SqliteCatalogRepository::new()
        .create_restaurant(
            &mut tx,
            NewRestaurant {
                name: name.to_string(),
                description: Some(format!("{name} description")),
                image_file: "restaurant.jpg".to_string(),
                location: Some("Downtown".to_string()),
            },
        )
        .await?;

    tx.commit().await?;

    Ok(restaurant)
}

/// Change a catalog price behind the services' backs.
pub(crate) async fn set_item_price(
    ctx: &TestContext,
    item: CatalogItemId,
    price: i64,
) -> Result<(), sqlx::Error> {
    query("UPDATE catalog_items SET price = ?1 WHERE id = ?2")
        .bind(price)
        .bind(item.into_i64())
        .execute(ctx.db.pool())
        .await?;

    Ok(())
}

pub(crate) fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password: Password::new("password"),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        country: Some("UK".to_string()),
        is_admin: false,
    }
}

pub(crate) async fn create_user(ctx: &TestContext, email: &str) -> Result<User, AccountsServiceError> {
    ctx.accounts.sign_up(new_user(email)).await
}

pub(crate) fn shipping() -> ShippingInfo {
    ShippingInfo {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        address: "12 Analytical Row".to_string(),
        city: "London".to_string(),
    }
}

pub(crate) async fn count_rows(ctx: &TestContext, table: &str) -> Result<i64, sqlx::Error> {
    query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(ctx.db.pool())
        .await
}
