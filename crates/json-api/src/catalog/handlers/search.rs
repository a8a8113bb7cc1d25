//! Search Catalog Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    catalog::{
        errors::into_status_error,
        models::{self, ItemResponse},
    },
    extensions::*,
    state::State,
};

/// Search Catalog Handler
///
/// Case-insensitive substring match on item names. A blank or missing query
/// matches nothing.
#[endpoint(tags("catalog"), summary = "Search Catalog")]
pub(crate) async fn handler(
    query: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let query = query.into_inner().unwrap_or_default();

    let items = state
        .app
        .catalog
        .search_items(&query)
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
        mocks.visitor_service(Router::with_path("search").get(handler))
    }

    #[tokio::test]
    async fn test_search_passes_query_through() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .catalog
            .expect_search_items()
            .once()
            .withf(|query| query == "curry")
            .return_once(|_| Ok(vec![make_item(4, "Green Curry", 12_50)]));

        let mut res = TestClient::get("http://example.com/search?query=curry")
            .send(&make_service(mocks))
            .await;

        let body: Vec<ItemResponse> = res.take_json().await?;

        assert_eq!(body.first().map(|item| item.name.as_str()), Some("Green Curry"));

        Ok(())
    }

    #[tokio::test]
    async fn test_search_without_query_is_blank() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .catalog
            .expect_search_items()
            .once()
            .withf(|query| query.is_empty())
            .return_once(|_| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/search")
            .send(&make_service(mocks))
            .await;

        let body: Vec<ItemResponse> = res.take_json().await?;

        assert!(body.is_empty(), "blank search should match nothing");

        Ok(())
    }
}
