//! Browser sessions

use salvo::http::cookie::{Cookie, SameSite};

use foodwheels_app::domain::sessions::models::SessionId;

pub(crate) mod middleware;
pub(crate) mod sweeper;

/// Build the cookie that carries `session` to the browser.
pub(crate) fn session_cookie(name: &str, session: SessionId) -> Cookie<'static> {
    Cookie::build((name.to_owned(), session.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Build a cookie that tells the browser to forget its session.
pub(crate) fn expired_session_cookie(name: &str) -> Cookie<'static> {
    let mut cookie = Cookie::build((name.to_owned(), String::new()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    cookie.make_removal();

    cookie
}
