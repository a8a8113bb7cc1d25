//! State

use std::sync::Arc;

use foodwheels_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) session_cookie: String,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, session_cookie: impl Into<String>) -> Self {
        Self {
            app,
            session_cookie: session_cookie.into(),
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, session_cookie: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(app, session_cookie))
    }
}
