//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use foodwheels_app::domain::{accounts::models::UserId, sessions::models::SessionId};

const SESSION_ID_DEPOT_KEY: &str = "session_id";
const USER_ID_DEPOT_KEY: &str = "user_id";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_session_id(&mut self, session: SessionId);

    fn session_id_or_500(&self) -> Result<SessionId, StatusError>;

    fn insert_user_id(&mut self, user: UserId);

    fn user_id(&self) -> Option<UserId>;

    /// The logged-in user, or `401 Unauthorized`.
    fn user_id_or_401(&self) -> Result<UserId, StatusError> {
        self.user_id()
            .ok_or_else(|| StatusError::unauthorized().brief("Login required"))
    }
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_session_id(&mut self, session: SessionId) {
        self.insert(SESSION_ID_DEPOT_KEY, session);
    }

    fn session_id_or_500(&self) -> Result<SessionId, StatusError> {
        self.get::<SessionId>(SESSION_ID_DEPOT_KEY)
            .copied()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user_id(&mut self, user: UserId) {
        self.insert(USER_ID_DEPOT_KEY, user);
    }

    fn user_id(&self) -> Option<UserId> {
        self.get::<UserId>(USER_ID_DEPOT_KEY).ok().copied()
    }
}
