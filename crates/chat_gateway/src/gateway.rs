//! Gateway trait consumed by the workspace core

use async_trait::async_trait;
use chat_model::{
    ModelCatalog, PluginCatalog, Session, SessionId, SharedSnapshot, UserProfile, UserSettings,
};

use crate::error::Result;

/// Remote operations the workspace depends on.
///
/// All calls are cheap, idempotent requests; no implementation retries on
/// its own, failures are surfaced as-is for the caller to report.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Fetch the ordered session list for the current device/user context.
    async fn list_sessions(&self) -> Result<Vec<Session>>;

    /// Create a new session; the server assigns its id.
    async fn create_session(&self) -> Result<Session>;

    /// Delete a session. Deleting an id the server no longer knows is a
    /// successful no-op.
    async fn delete_session(&self, id: SessionId) -> Result<()>;

    /// Fetch the read-only snapshot behind a share token.
    async fn fetch_shared_session(&self, token: &str) -> Result<SharedSnapshot>;

    /// Fetch the signed-in user's profile. An absent profile is
    /// [`GatewayError::NotFound`](crate::GatewayError::NotFound), not a
    /// generic failure.
    async fn fetch_user_profile(&self) -> Result<UserProfile>;

    /// Fetch the server-held settings record.
    async fn fetch_settings(&self) -> Result<UserSettings>;

    /// Fetch the model catalog.
    async fn fetch_model_list(&self) -> Result<ModelCatalog>;

    /// Fetch the plugin and quick-command catalog.
    async fn fetch_plugin_list(&self) -> Result<PluginCatalog>;
}
