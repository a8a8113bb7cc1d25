//! Profile Handlers

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    accounts::{
        errors::into_status_error,
        models::{ProfileRequest, UserResponse},
    },
    extensions::*,
    state::State,
};

/// Get Profile Handler
#[endpoint(
    tags("accounts"),
    summary = "Get Profile",
    responses(
        (status_code = StatusCode::OK, description = "Current user"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Login required"),
    ),
)]
pub(crate) async fn get(depot: &mut Depot) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;

    let user = state
        .app
        .accounts
        .get_user(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}

/// Update Profile Handler
///
/// Leaving the password empty keeps the current one.
#[endpoint(
    tags("accounts"),
    summary = "Update Profile",
    responses(
        (status_code = StatusCode::OK, description = "Updated user"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Login required"),
    ),
)]
pub(crate) async fn update(
    json: JsonBody<ProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;

    let user = state
        .app
        .accounts
        .update_profile(user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
