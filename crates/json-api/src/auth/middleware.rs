//! Auth middleware.

use std::sync::Arc;

use foodwheels_app::domain::accounts::AccountsServiceError;
use salvo::prelude::*;
use tracing::{error, warn};

use crate::{extensions::*, state::State};

/// Reject anonymous sessions with `401 Unauthorized`.
#[salvo::handler]
pub(crate) async fn require_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if let Err(error) = depot.user_id_or_401() {
        res.render(error);

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

/// Only let administrators through; everyone else gets `403 Forbidden`.
#[salvo::handler]
pub(crate) async fn require_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let user = match depot.user_id_or_401() {
        Ok(user) => user,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    match state.app.accounts.get_user(user).await {
        Ok(account) if account.is_admin => {}
        Ok(_) => {
            warn!(user = %user, "non-admin attempted admin operation");

            res.render(StatusError::forbidden().brief("Administrator access required"));

            return;
        }
        Err(AccountsServiceError::NotFound) => {
            res.render(StatusError::unauthorized().brief("Login required"));

            return;
        }
        Err(source) => {
            error!("failed to load user for admin check: {source}");

            res.render(StatusError::internal_server_error());

            return;
        }
    }

    ctrl.call_next(req, depot, res).await;
}
