//! Place Order Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use foodwheels_app::domain::orders::{
    OrdersServiceError,
    models::{Order, ShippingInfo},
};

use crate::{
    extensions::*,
    observability::{self, CheckoutOutcome},
    orders::{
        errors::into_status_error,
        models::{OrderResponse, ShippingRequest},
    },
    state::State,
};

/// Place Order Handler
///
/// Turns the session's cart into an order charged at cart total plus the
/// service fee, then empties the cart.
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed request body"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Login required"),
        (status_code = StatusCode::NOT_FOUND, description = "A cart item is no longer sold"),
        (status_code = StatusCode::CONFLICT, description = "Cart is empty"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ShippingRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id_or_500()?;
    let user = depot.user_id_or_401()?;

    let shipping = ShippingInfo::from(json.into_inner());

    let placed = state.app.orders.place_order(session, user, shipping).await;

    observability::record_checkout(checkout_outcome(&placed));

    let order = placed.map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", order.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}

fn checkout_outcome(placed: &Result<Order, OrdersServiceError>) -> CheckoutOutcome {
    match placed {
        Ok(_) => CheckoutOutcome::Placed,
        Err(OrdersServiceError::EmptyCart) => CheckoutOutcome::EmptyCart,
        Err(OrdersServiceError::ItemUnavailable(_)) => CheckoutOutcome::ItemUnavailable,
        Err(_) => CheckoutOutcome::Failed,
    }
}

#[cfg(test)]
mod tests {
    use foodwheels_app::domain::catalog::models::CatalogItemId;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use crate::test_helpers::{
        Mocks, TEST_SESSION_ID, TEST_USER_ID, make_order, make_shipping, storage_error,
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("orders").post(handler)
    }

    fn shipping_json() -> Value {
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "address": "12 St James's Square",
            "city": "London",
        })
    }

    #[tokio::test]
    async fn test_place_order_success() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .orders
            .expect_place_order()
            .once()
            .withf(|session, user, shipping| {
                *session == TEST_SESSION_ID
                    && *user == TEST_USER_ID
                    && *shipping == make_shipping()
            })
            .return_once(|_, _, _| Ok(make_order(7)));

        let mut res = TestClient::post("http://example.com/orders")
            .json(&shipping_json())
            .send(&mocks.user_service(route()))
            .await;

        let body: OrderResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/orders/7"));
        assert_eq!(body.id, 7);
        assert_eq!(body.total_price, 40_00);
        assert_eq!(body.shipping.city, "London");

        Ok(())
    }

    #[tokio::test]
    async fn test_place_order_empty_cart_returns_409() {
        let mut mocks = Mocks::new();

        mocks
            .orders
            .expect_place_order()
            .once()
            .return_once(|_, _, _| Err(OrdersServiceError::EmptyCart));

        let res = TestClient::post("http://example.com/orders")
            .json(&shipping_json())
            .send(&mocks.user_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn test_place_order_vanished_item_returns_404() {
        let mut mocks = Mocks::new();

        mocks.orders.expect_place_order().once().return_once(|_, _, _| {
            Err(OrdersServiceError::ItemUnavailable(CatalogItemId::from_i64(3)))
        });

        let res = TestClient::post("http://example.com/orders")
            .json(&shipping_json())
            .send(&mocks.user_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_place_order_storage_failure_returns_500() {
        let mut mocks = Mocks::new();

        mocks
            .orders
            .expect_place_order()
            .once()
            .return_once(|_, _, _| Err(OrdersServiceError::Sql(storage_error())));

        let res = TestClient::post("http://example.com/orders")
            .json(&shipping_json())
            .send(&mocks.user_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_place_order_blank_shipping_reaches_empty_cart_check() {
        let mut mocks = Mocks::new();

        mocks
            .orders
            .expect_place_order()
            .withf(|_, _, shipping| shipping.email.is_empty() && shipping.city.is_empty())
            .once()
            .return_once(|_, _, _| Err(OrdersServiceError::EmptyCart));

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({ "name": "Ada", "email": "", "address": "1 Way", "city": " " }))
            .send(&mocks.user_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn test_place_order_requires_login() {
        let res = TestClient::post("http://example.com/orders")
            .json(&shipping_json())
            .send(&Mocks::new().visitor_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn checkout_outcomes_follow_service_result() {
        assert_eq!(checkout_outcome(&Ok(make_order(1))), CheckoutOutcome::Placed);
        assert_eq!(
            checkout_outcome(&Err(OrdersServiceError::EmptyCart)),
            CheckoutOutcome::EmptyCart
        );
        assert_eq!(
            checkout_outcome(&Err(OrdersServiceError::ItemUnavailable(
                CatalogItemId::from_i64(3)
            ))),
            CheckoutOutcome::ItemUnavailable
        );
        assert_eq!(
            checkout_outcome(&Err(OrdersServiceError::Sql(storage_error()))),
            CheckoutOutcome::Failed
        );
    }

    #[test]
    fn shipping_fixture_matches_request() -> TestResult {
        let request: ShippingRequest = serde_json::from_value(shipping_json())?;

        assert_eq!(ShippingInfo::from(request), make_shipping());

        Ok(())
    }
}
