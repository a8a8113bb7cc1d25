//! App Router

use salvo::Router;

use crate::{accounts, admin, auth, bookings, carts, catalog, orders};

pub fn app_router() -> Router {
    Router::new()
        .push(public_router())
        .push(
            Router::new()
                .hoop(auth::middleware::require_user)
                .push(member_router()),
        )
        .push(
            Router::with_path("admin")
                .hoop(auth::middleware::require_admin)
                .push(admin_router()),
        )
}

/// Browsing, cart removal and account entry points.
fn public_router() -> Router {
    Router::new()
        .get(catalog::home::handler)
        .push(
            Router::with_path("items")
                .get(catalog::index::handler)
                .push(Router::with_path("{item}").get(catalog::get::handler)),
        )
        .push(Router::with_path("search").get(catalog::search::handler))
        .push(
            Router::with_path("restaurants")
                .get(catalog::restaurants::index)
                .push(Router::with_path("{restaurant}").get(catalog::restaurants::get)),
        )
        .push(Router::with_path("cart/items/{item}").delete(carts::remove::handler))
        .push(Router::with_path("signup").post(accounts::signup::handler))
        .push(Router::with_path("login").post(accounts::login::handler))
        .push(Router::with_path("logout").post(accounts::logout::handler))
}

/// Everything that needs a signed-in customer.
fn member_router() -> Router {
    Router::new()
        .push(
            Router::with_path("cart")
                .get(carts::get::handler)
                .push(Router::with_path("items").post(carts::add::handler))
                .push(Router::with_path("order-now").post(carts::order_now::handler)),
        )
        .push(Router::with_path("checkout").get(orders::checkout::handler))
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(Router::with_path("{order}").get(orders::get::handler)),
        )
        .push(
            Router::with_path("restaurants/{restaurant}/bookings").post(bookings::create::handler),
        )
        .push(
            Router::with_path("bookings")
                .get(bookings::index::handler)
                .push(Router::with_path("{booking}").get(bookings::get::handler)),
        )
        .push(
            Router::with_path("profile")
                .get(accounts::profile::get)
                .put(accounts::profile::update),
        )
}

fn admin_router() -> Router {
    Router::with_path("items")
        .get(admin::items::index)
        .post(admin::items::create)
        .push(Router::with_path("{item}").delete(admin::items::delete))
}
