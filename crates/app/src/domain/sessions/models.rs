//! Session Models

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::{accounts::models::UserId, sessions::errors::SessionStoreError};

/// Session key holding the logged-in user's id.
pub const USER_KEY: &str = "user";

/// Session key holding the shopping cart.
pub const CART_KEY: &str = "cart";

/// Opaque session identifier handed to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh, unguessable session id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0.simple(), f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s).map(Self)
    }
}

/// Everything stored against one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionData {
    values: BTreeMap<String, Value>,
}

impl SessionData {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Decode the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is present but does not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SessionStoreError> {
        self.values
            .get(key)
            .cloned()
            .map(serde_json::from_value)
            .transpose()
            .map_err(|source| SessionStoreError::Decode {
                key: key.to_string(),
                source,
            })
    }

    /// Store `value` under `key`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be encoded.
    pub fn insert<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), SessionStoreError> {
        let value = serde_json::to_value(value).map_err(|source| SessionStoreError::Encode {
            key: key.to_string(),
            source,
        })?;

        self.values.insert(key.to_string(), value);

        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// The logged-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored user id is not a valid id.
    pub fn user(&self) -> Result<Option<UserId>, SessionStoreError> {
        self.get(USER_KEY)
    }

    /// Record `user` as logged in.
    ///
    /// # Errors
    ///
    /// Returns an error if the id cannot be encoded.
    pub fn set_user(&mut self, user: UserId) -> Result<(), SessionStoreError> {
        self.insert(USER_KEY, &user)
    }
}
