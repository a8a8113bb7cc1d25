//! Session store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("failed to encode session value {key:?}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode session value {key:?}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
