//! List Catalog Items Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use foodwheels_app::domain::catalog::models::ItemFilter;

use crate::{
    catalog::{
        errors::into_status_error,
        models::{self, ItemResponse},
    },
    extensions::*,
    state::State,
};

/// List Catalog Items Handler
///
/// Returns the items carrying `tag`, optionally narrowed to `sub_tag`.
#[endpoint(
    tags("catalog"),
    summary = "List Catalog Items",
    responses(
        (status_code = StatusCode::OK, description = "Matching items"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing tag"),
    ),
)]
pub(crate) async fn handler(
    tag: QueryParam<String, true>,
    sub_tag: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let mut filter = ItemFilter::tag(tag.into_inner());

    if let Some(sub_tag) = sub_tag.into_inner() {
        filter = filter.with_sub_tag(sub_tag);
    }

    let items = state
        .app
        .catalog
        .list_items(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(models::items(items)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, make_item};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.visitor_service(Router::with_path("items").get(handler))
    }

    #[tokio::test]
    async fn test_list_items_by_tag_and_sub_tag() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .catalog
            .expect_list_items()
            .once()
            .withf(|filter| *filter == ItemFilter::tag("Menu").with_sub_tag("Thai"))
            .return_once(|_| Ok(vec![make_item(1, "Pad Thai", 10_00)]));

        let mut res = TestClient::get("http://example.com/items?tag=Menu&sub_tag=Thai")
            .send(&make_service(mocks))
            .await;

        let body: Vec<ItemResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.len(), 1);
        assert_eq!(body.first().map(|item| item.price), Some(10_00));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_items_without_sub_tag() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .catalog
            .expect_list_items()
            .once()
            .withf(|filter| filter.tag == "Menu" && filter.sub_tag.is_none())
            .return_once(|_| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/items?tag=Menu")
            .send(&make_service(mocks))
            .await;

        let body: Vec<ItemResponse> = res.take_json().await?;

        assert!(body.is_empty(), "expected no items");

        Ok(())
    }

    #[tokio::test]
    async fn test_list_items_requires_tag() {
        let res = TestClient::get("http://example.com/items")
            .send(&make_service(Mocks::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
