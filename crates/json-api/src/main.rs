//! Foodwheels JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use foodwheels_app::{context::AppContext, domain::sessions::MemorySessionStore};

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod accounts;
mod admin;
mod auth;
mod bookings;
mod carts;
mod catalog;
mod config;
mod extensions;
mod healthcheck;
mod observability;
mod orders;
mod router;
mod sessions;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Foodwheels JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "tracing failed to initialise, must use eprintln"
        )]
        {
            eprintln!("Observability error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let session_store = Arc::new(MemorySessionStore::new(config.session.ttl()));

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        session_store.clone(),
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    tokio::spawn(sessions::sweeper::sweep(
        Arc::downgrade(&session_store),
        sessions::sweeper::SWEEP_INTERVAL,
    ));

    let mut router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(
            app,
            config.session.session_cookie_name.clone(),
        )))
        .hoop(observability::request_logging)
        .push(Router::with_path("healthcheck").get(healthcheck::handler));

    if observability::metrics_enabled() {
        router = router.push(Router::with_path("metrics").get(observability::metrics_handler));
    }

    let router = router.push(
        Router::new()
            .hoop(sessions::middleware::handler)
            .push(router::app_router()),
    );

    let doc = OpenApi::new("Foodwheels API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(
                config.session.session_cookie_name,
            ))),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();
    let grace = config.server.shutdown_grace();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;

    info!("server stopped");
}
