//! Carts service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        models::{Cart, Quantity},
    },
    catalog::{CatalogService, models::CatalogItemId},
    sessions::{
        SessionStore,
        models::{CART_KEY, SessionData, SessionId},
    },
};

/// Carts kept in the session store, one per session.
#[derive(Clone)]
pub struct SessionCartsService {
    catalog: Arc<dyn CatalogService>,
    sessions: Arc<dyn SessionStore>,
}

impl SessionCartsService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogService>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { catalog, sessions }
    }

    async fn load(&self, session: SessionId) -> Result<(SessionData, Cart), CartsServiceError> {
        let data = self.sessions.load(session).await?;
        let cart = data.get::<Cart>(CART_KEY)?.unwrap_or_default();

        Ok((data, cart))
    }

    async fn store(
        &self,
        session: SessionId,
        mut data: SessionData,
        cart: &Cart,
    ) -> Result<(), CartsServiceError> {
        if cart.is_empty() {
            data.remove(CART_KEY);
        } else {
            data.insert(CART_KEY, cart)?;
        }

        self.sessions.save(session, data).await?;

        Ok(())
    }
}

impl Debug for SessionCartsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SessionCartsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl CartsService for SessionCartsService {
    async fn get_cart(&self, session: SessionId) -> Result<Cart, CartsServiceError> {
        let (_, cart) = self.load(session).await?;

        Ok(cart)
    }

    async fn add_item(
        &self,
        session: SessionId,
        item: CatalogItemId,
        quantity: Quantity,
    ) -> Result<Cart, CartsServiceError> {
        let item = self.catalog.get_item(item).await?;
        let (data, mut cart) = self.load(session).await?;

        cart.add(&item, quantity)?;

        self.store(session, data, &cart).await?;

        debug!(item = %item.id, quantity = quantity.get(), "item added to cart");

        Ok(cart)
    }

    async fn order_now(
        &self,
        session: SessionId,
        item: CatalogItemId,
        quantity: Quantity,
    ) -> Result<Cart, CartsServiceError> {
        let item = self.catalog.get_item(item).await?;
        let (data, mut cart) = self.load(session).await?;

        cart.replace(&item, quantity);

        self.store(session, data, &cart).await?;

        debug!(item = %item.id, quantity = quantity.get(), "cart replaced");

        Ok(cart)
    }

    async fn remove_item(
        &self,
        session: SessionId,
        item: CatalogItemId,
    ) -> Result<Cart, CartsServiceError> {
        let (data, mut cart) = self.load(session).await?;

        if cart.remove(item).is_some() {
            self.store(session, data, &cart).await?;
        }

        Ok(cart)
    }

    async fn clear(&self, session: SessionId) -> Result<(), CartsServiceError> {
        let (data, mut cart) = self.load(session).await?;

        if !cart.is_empty() {
            cart.clear();

            self.store(session, data, &cart).await?;

            info!("cart cleared");
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// The session's cart; empty if nothing was added yet.
    async fn get_cart(&self, session: SessionId) -> Result<Cart, CartsServiceError>;

    /// Add an item, accumulating onto any existing quantity.
    async fn add_item(
        &self,
        session: SessionId,
        item: CatalogItemId,
        quantity: Quantity,
    ) -> Result<Cart, CartsServiceError>;

    /// Replace the whole cart with a single item.
    async fn order_now(
        &self,
        session: SessionId,
        item: CatalogItemId,
        quantity: Quantity,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove an item. Removing an absent item is not an error.
    async fn remove_item(
        &self,
        session: SessionId,
        item: CatalogItemId,
    ) -> Result<Cart, CartsServiceError>;

    /// Empty the cart.
    async fn clear(&self, session: SessionId) -> Result<(), CartsServiceError>;
}
