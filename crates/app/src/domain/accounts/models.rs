//! Account Models

use std::fmt::{Debug, Formatter, Result as FmtResult};

use jiff::Timestamp;
use zeroize::Zeroizing;

use crate::ids::TypedId;

/// Profile picture given to new accounts.
pub const DEFAULT_IMAGE_FILE: &str = "default.jpg";

/// User Id
pub type UserId = TypedId<User>;

/// User Model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub image_file: String,
    pub is_admin: bool,
    pub created_at: Timestamp,
}

/// Plain-text password, wiped from memory on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn new(password: impl Into<String>) -> Self {
        Self(Zeroizing::new(password.into()))
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Password(**)")
    }
}

/// New User Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password: Password,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub is_admin: bool,
}

/// Profile Update Model
///
/// Name and country are overwritten as given. The password and picture only
/// change when a non-empty value is supplied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub password: Option<Password>,
    pub image_file: Option<String>,
}

/// Login Credentials
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: Password,
}
