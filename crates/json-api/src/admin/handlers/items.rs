//! Admin Catalog Item Handlers

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use foodwheels_app::domain::catalog::models::{CatalogItemId, NewCatalogItem};

use crate::{
    admin::models::NewItemRequest,
    catalog::{
        errors::into_status_error,
        models::{self, ItemResponse},
    },
    extensions::*,
    state::State,
};

/// List All Items Handler
#[endpoint(
    tags("admin"),
    summary = "List All Catalog Items",
    responses(
        (status_code = StatusCode::OK, description = "Every catalog item"),
        (status_code = StatusCode::FORBIDDEN, description = "Administrator access required"),
    ),
)]
pub(crate) async fn index(depot: &mut Depot) -> Result<Json<Vec<ItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .catalog
        .list_all_items()
        .await
        .map_err(into_status_error)?;

    Ok(Json(models::items(items)))
}

/// Add Catalog Item Handler
#[endpoint(
    tags("admin"),
    summary = "Add Catalog Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid item"),
        (status_code = StatusCode::FORBIDDEN, description = "Administrator access required"),
    ),
)]
pub(crate) async fn create(
    json: JsonBody<NewItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = NewCatalogItem::try_from(json.into_inner())?;

    let item = state
        .app
        .catalog
        .create_item(item)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/items/{}", item.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(item.into()))
}

/// Delete Catalog Item Handler
///
/// Carts and past orders keep their own copies of the item's details.
#[endpoint(
    tags("admin"),
    summary = "Delete Catalog Item",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Item deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "No such item"),
        (status_code = StatusCode::FORBIDDEN, description = "Administrator access required"),
    ),
)]
pub(crate) async fn delete(
    item: PathParam<i64>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .catalog
        .delete_item(CatalogItemId::from_i64(item.into_inner()))
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}

#[cfg(test)]
mod tests {
    use foodwheels_app::domain::{
        accounts::models::User,
        catalog::{CatalogServiceError, models::CatalogItem},
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        auth::middleware::require_admin,
        test_helpers::{Mocks, TEST_USER_ID, make_item, make_user},
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("admin/items")
            .hoop(require_admin)
            .get(index)
            .post(create)
            .push(Router::with_path("{item}").delete(delete))
    }

    fn admin_mocks() -> Mocks {
        let mut mocks = Mocks::new();

        mocks
            .accounts
            .expect_get_user()
            .withf(|user| *user == TEST_USER_ID)
            .returning(|user| {
                Ok(User {
                    is_admin: true,
                    ..make_user(user)
                })
            });

        mocks
    }

    #[tokio::test]
    async fn test_list_all_items() -> TestResult {
        let mut mocks = admin_mocks();

        mocks.catalog.expect_list_all_items().once().return_once(|| {
            Ok(vec![
                make_item(1, "Pad Thai", 10_00),
                make_item(2, "Spring Rolls", 5_00),
            ])
        });

        let mut res = TestClient::get("http://example.com/admin/items")
            .send(&mocks.user_service(route()))
            .await;

        let body: Vec<ItemResponse> = res.take_json().await?;

        assert_eq!(body.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_parses_decimal_price() -> TestResult {
        let mut mocks = admin_mocks();

        mocks
            .catalog
            .expect_create_item()
            .once()
            .withf(|item| item.name == "Tom Yum" && item.price == 9_50 && item.tag == "Menu")
            .return_once(|item| {
                Ok(CatalogItem {
                    id: CatalogItemId::from_i64(21),
                    name: item.name,
                    tag: item.tag,
                    sub_tag: item.sub_tag,
                    price: item.price,
                    image_file: item.image_file,
                    description: item.description,
                })
            });

        let mut res = TestClient::post("http://example.com/admin/items")
            .json(&json!({
                "name": "Tom Yum",
                "tag": "Menu",
                "sub_tag": "Thai",
                "price": "9.50",
                "image_file": "tom-yum.jpg",
            }))
            .send(&mocks.user_service(route()))
            .await;

        let body: ItemResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/items/21"));
        assert_eq!(body.price, 9_50);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_malformed_price_returns_400() {
        let res = TestClient::post("http://example.com/admin/items")
            .json(&json!({
                "name": "Tom Yum",
                "tag": "Menu",
                "price": "cheap",
                "image_file": "tom-yum.jpg",
            }))
            .send(&admin_mocks().user_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_delete_item() {
        let mut mocks = admin_mocks();

        mocks
            .catalog
            .expect_delete_item()
            .once()
            .withf(|item| *item == CatalogItemId::from_i64(4))
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/admin/items/4")
            .send(&mocks.user_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
    }

    #[tokio::test]
    async fn test_delete_unknown_item_returns_404() {
        let mut mocks = admin_mocks();

        mocks
            .catalog
            .expect_delete_item()
            .once()
            .return_once(|_| Err(CatalogServiceError::NotFound));

        let res = TestClient::delete("http://example.com/admin/items/404")
            .send(&mocks.user_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_non_admin_cannot_delete() {
        let mut mocks = Mocks::new();

        mocks
            .accounts
            .expect_get_user()
            .once()
            .return_once(|user| Ok(make_user(user)));

        let res = TestClient::delete("http://example.com/admin/items/4")
            .send(&mocks.user_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));
    }
}
