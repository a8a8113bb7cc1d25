//! Logout Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{extensions::*, sessions::expired_session_cookie, state::State};

/// Logout Handler
///
/// Ends the session. The cart is discarded along with it.
#[endpoint(
    tags("accounts"),
    summary = "Log Out",
    responses((status_code = StatusCode::NO_CONTENT, description = "Session ended")),
)]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id_or_500()?;

    state
        .app
        .sessions
        .destroy(session)
        .await
        .or_500("failed to destroy session")?;

    if let Some(user) = depot.user_id() {
        info!(user = %user, "user logged out");
    }

    res.add_cookie(expired_session_cookie(&state.session_cookie));
    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
