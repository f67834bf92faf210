//! Gateway connection configuration

use serde::{Deserialize, Serialize};

/// Connection settings for the remote data gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the chat service, e.g. `https://chat.example.org`.
    pub base_url: String,

    /// Stable device identifier sent with session requests.
    ///
    /// The service scopes session lists per device/user and reads this
    /// from a `device-id` header.
    pub device_id: String,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            device_id: device_id.into(),
        }
    }
}
