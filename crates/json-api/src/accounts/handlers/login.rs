//! Login Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use tracing::info;

use foodwheels_app::domain::sessions::models::SessionId;

use crate::{
    accounts::{
        errors::into_status_error,
        models::{LoginRequest, UserResponse},
    },
    extensions::*,
    sessions::session_cookie,
    state::State,
};

/// Login Handler
///
/// Verifies the credentials and records the user in the session. The session
/// moves to a fresh id, carrying its cart along.
#[endpoint(
    tags("accounts"),
    summary = "Log In",
    responses(
        (status_code = StatusCode::OK, description = "Logged in"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid email or password"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let previous = depot.session_id_or_500()?;

    let user = state
        .app
        .accounts
        .authenticate(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    let sessions = &state.app.sessions;

    let mut data = sessions
        .load(previous)
        .await
        .or_500("failed to load session")?;

    data.set_user(user.id)
        .or_500("failed to record user in session")?;

    let session = SessionId::generate();

    sessions
        .save(session, data)
        .await
        .or_500("failed to save session")?;

    sessions
        .destroy(previous)
        .await
        .or_500("failed to discard previous session")?;

    res.add_cookie(session_cookie(&state.session_cookie, session));

    info!(user = %user.id, "user logged in");

    Ok(Json(user.into()))
}
