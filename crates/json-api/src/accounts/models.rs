//! Account request and response bodies

use std::fmt::{Debug, Formatter, Result as FmtResult};

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use foodwheels_app::domain::accounts::models::{
    Credentials, NewUser, Password, ProfileUpdate, User,
};

#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
}

impl Debug for SignUpRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SignUpRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl From<SignUpRequest> for NewUser {
    fn from(request: SignUpRequest) -> Self {
        NewUser {
            email: request.email,
            password: Password::new(request.password),
            first_name: request.first_name,
            last_name: request.last_name,
            country: request.country,
            is_admin: false,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Debug for LoginRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl From<LoginRequest> for Credentials {
    fn from(request: LoginRequest) -> Self {
        Credentials {
            email: request.email,
            password: Password::new(request.password),
        }
    }
}

/// Profile changes. A missing or empty password keeps the current one; a
/// missing image keeps the current picture.
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct ProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub password: Option<String>,

    /// Reference to an already uploaded picture
    pub image_file: Option<String>,
}

impl Debug for ProfileRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ProfileRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("country", &self.country)
            .field("image_file", &self.image_file)
            .finish_non_exhaustive()
    }
}

impl From<ProfileRequest> for ProfileUpdate {
    fn from(request: ProfileRequest) -> Self {
        ProfileUpdate {
            first_name: request.first_name,
            last_name: request.last_name,
            country: request.country,
            password: request.password.map(Password::new),
            image_file: request.image_file,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub image_file: String,
    pub is_admin: bool,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.into_i64(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            country: user.country,
            image_file: user.image_file,
            is_admin: user.is_admin,
            created_at: user.created_at.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_debug_output_hides_password() {
        let request = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };

        let rendered = format!("{request:?}");

        assert!(rendered.contains("ada@example.com"), "email should be shown");
        assert!(!rendered.contains("hunter2"), "password must not be shown");
    }

    #[test]
    fn empty_profile_request_changes_nothing() {
        let request = ProfileRequest {
            first_name: None,
            last_name: None,
            country: None,
            password: None,
            image_file: None,
        };

        assert_eq!(ProfileUpdate::from(request), ProfileUpdate::default());
    }
}
