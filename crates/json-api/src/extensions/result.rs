//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{error, warn};

/// Map errors onto HTTP status errors.
pub(crate) trait ResultExt<T> {
    /// Log the error and answer `500 Internal Server Error`.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Reject the request with `400 Bad Request`, echoing the error.
    fn or_400(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            warn!("{context}: {error}");

            StatusError::bad_request().brief(format!("{context}: {error}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn or_400_keeps_context_in_brief() {
        let result: Result<(), &str> = Err("not a number");

        let error = result.or_400("invalid price").err();

        assert_eq!(error.as_ref().map(|e| e.code), Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            error.map(|e| e.brief),
            Some("invalid price: not a number".to_string())
        );
    }

    #[test]
    fn or_500_hides_detail() {
        let result: Result<(), &str> = Err("disk on fire");

        let error = result.or_500("failed to render").err();

        assert_eq!(error.map(|e| e.code), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
