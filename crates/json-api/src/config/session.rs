//! Session Config

use std::time::Duration;

use clap::Args;

/// Browser session settings.
#[derive(Debug, Args)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session id
    #[arg(long, env = "SESSION_COOKIE_NAME", default_value = "foodwheels_session")]
    pub session_cookie_name: String,

    /// Idle lifetime of a session in seconds
    #[arg(long, env = "SESSION_TTL_SECONDS", default_value_t = 86_400_u64)]
    pub session_ttl_seconds: u64,
}

impl SessionConfig {
    #[must_use]
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_seconds)
    }
}
