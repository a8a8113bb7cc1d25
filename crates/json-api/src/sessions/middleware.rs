//! Session middleware.
//!
//! Resolves the session id from the request cookie, issuing a fresh one when
//! the cookie is missing or unreadable, and records the logged-in user (if
//! any) in the depot for downstream handlers.

use std::sync::Arc;

use salvo::prelude::*;
use tracing::{debug, error};

use foodwheels_app::domain::sessions::models::SessionId;

use crate::{extensions::*, sessions::session_cookie, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => Arc::clone(state),
        Err(error) => {
            res.render(error);

            return;
        }
    };

    let existing = req
        .cookie(&state.session_cookie)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok());

    let session = if let Some(session) = existing {
        session
    } else {
        let session = SessionId::generate();

        debug!("issuing new session");

        res.add_cookie(session_cookie(&state.session_cookie, session));

        session
    };

    let user = state
        .app
        .sessions
        .load(session)
        .await
        .and_then(|data| data.user());

    match user {
        Ok(Some(user)) => depot.insert_user_id(user),
        Ok(None) => {}
        Err(source) => {
            error!("failed to load session: {source}");

            res.render(StatusError::internal_server_error());

            return;
        }
    }

    depot.insert_session_id(session);

    ctrl.call_next(req, depot, res).await;
}
