//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// JWT verification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret shared with the token-issuing service.
    pub jwt_secret: String,
    /// Access token TTL in minutes (used when issuing tokens locally,
    /// e.g. in development and tests).
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
}

fn default_access_ttl() -> u64 {
    60
}
