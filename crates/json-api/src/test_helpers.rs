//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use testresult::TestResult;
use uuid::Uuid;

use foodwheels_app::{
    context::AppContext,
    domain::{
        accounts::{
            MockAccountsService,
            models::{DEFAULT_IMAGE_FILE, User, UserId},
        },
        bookings::{
            MockBookingsService,
            models::{Booking, BookingId, BookingStatus, PartySize},
        },
        carts::{
            MockCartsService,
            models::{Cart, Quantity},
        },
        catalog::{
            MockCatalogService,
            models::{CatalogItem, CatalogItemId, Restaurant, RestaurantId},
        },
        orders::{
            MockOrdersService,
            models::{Order, OrderId, OrderLineItem, OrderLineItemId, ShippingInfo},
        },
        seed::MockSeedService,
        sessions::{MemorySessionStore, models::SessionId},
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_SESSION_COOKIE: &str = "test_session";
pub(crate) const TEST_SESSION_ID: SessionId = SessionId::from_uuid(Uuid::nil());
pub(crate) const TEST_USER_ID: UserId = UserId::from_i64(1);

#[salvo::handler]
pub(crate) async fn inject_session(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_session_id(TEST_SESSION_ID);
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_id(TEST_USER_ID);
    ctrl.call_next(req, depot, res).await;
}

/// Service doubles for one test. Mocks start without expectations, so any
/// call a test did not set up fails it.
pub(crate) struct Mocks {
    pub(crate) catalog: MockCatalogService,
    pub(crate) accounts: MockAccountsService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) bookings: MockBookingsService,
    pub(crate) seed: MockSeedService,
    pub(crate) sessions: Arc<MemorySessionStore>,
}

impl Mocks {
    pub(crate) fn new() -> Self {
        Self {
            catalog: MockCatalogService::new(),
            accounts: MockAccountsService::new(),
            carts: MockCartsService::new(),
            orders: MockOrdersService::new(),
            bookings: MockBookingsService::new(),
            seed: MockSeedService::new(),
            sessions: Arc::new(MemorySessionStore::default()),
        }
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(
            AppContext {
                catalog: Arc::new(self.catalog),
                accounts: Arc::new(self.accounts),
                sessions: self.sessions,
                carts: Arc::new(self.carts),
                orders: Arc::new(self.orders),
                bookings: Arc::new(self.bookings),
                seed: Arc::new(self.seed),
            },
            TEST_SESSION_COOKIE,
        )
    }

    /// Serve `route` to an anonymous visitor holding [`TEST_SESSION_ID`].
    pub(crate) fn visitor_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_session)
                .push(route),
        )
    }

    /// Serve `route` to [`TEST_USER_ID`], logged in on [`TEST_SESSION_ID`].
    pub(crate) fn user_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_session)
                .hoop(inject_user)
                .push(route),
        )
    }
}

/// A storage failure as the services would surface it.
pub(crate) fn storage_error() -> sqlx::Error {
    sqlx::Error::PoolClosed
}

pub(crate) fn make_user(id: UserId) -> User {
    User {
        id,
        email: "ada@example.com".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        country: Some("UK".to_string()),
        image_file: DEFAULT_IMAGE_FILE.to_string(),
        is_admin: false,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_item(id: i64, name: &str, price: u64) -> CatalogItem {
    CatalogItem {
        id: CatalogItemId::from_i64(id),
        name: name.to_string(),
        tag: "Menu".to_string(),
        sub_tag: Some("Thai".to_string()),
        price,
        image_file: format!("item-{id}.jpg"),
        description: None,
    }
}

pub(crate) fn make_restaurant(id: i64, name: &str) -> Restaurant {
    Restaurant {
        id: RestaurantId::from_i64(id),
        name: name.to_string(),
        description: Some("Family run".to_string()),
        image_file: format!("restaurant-{id}.jpg"),
        location: Some("Leeds".to_string()),
    }
}

/// A cart holding two of item 1 at 10.00 and three of item 2 at 5.00.
pub(crate) fn make_cart() -> TestResult<Cart> {
    let mut cart = Cart::default();

    cart.add(&make_item(1, "Pad Thai", 10_00), Quantity::new(2)?)?;
    cart.add(&make_item(2, "Spring Rolls", 5_00), Quantity::new(3)?)?;

    Ok(cart)
}

pub(crate) fn make_shipping() -> ShippingInfo {
    ShippingInfo {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        address: "12 St James's Square".to_string(),
        city: "London".to_string(),
    }
}

pub(crate) fn make_order(id: i64) -> Order {
    let order_id = OrderId::from_i64(id);

    Order {
        id: order_id,
        user_id: TEST_USER_ID,
        placed_at: Timestamp::UNIX_EPOCH,
        total_price: 40_00,
        shipping: make_shipping(),
        items: vec![OrderLineItem {
            id: OrderLineItemId::from_i64(1),
            order_id,
            catalog_item_id: CatalogItemId::from_i64(1),
            item_name: "Pad Thai".to_string(),
            quantity: Quantity::ONE,
            price_per_item: 35_00,
        }],
    }
}

pub(crate) fn make_booking(id: i64) -> Booking {
    Booking {
        id: BookingId::from_i64(id),
        user_id: TEST_USER_ID,
        restaurant_id: RestaurantId::from_i64(3),
        restaurant_name: "Thai Garden".to_string(),
        date: "2026-11-01".to_string(),
        time: "19:30".to_string(),
        party_size: PartySize::default(),
        status: BookingStatus::Confirmed,
        created_at: Timestamp::UNIX_EPOCH,
    }
}
