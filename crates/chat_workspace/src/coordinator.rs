//! Workspace Coordinator - composition root of the workspace state
//!
//! Owns one instance of each component and expresses every cross-component
//! effect as an explicit reaction here (selecting a session forces the
//! chat panel, and so on). The presentation boundary reads a single
//! consistent view-model and drains non-blocking notices; it never mutates
//! component state directly.

use std::collections::HashSet;
use std::sync::Arc;

use chat_gateway::{ChatGateway, GatewayError, Result};
use chat_model::{
    ModelCatalog, PluginCatalog, Session, SessionId, SharedSnapshot, UserProfile, UserSettings,
};
use serde_json::{Map, Value};
use tracing::warn;

use crate::navigation::NavigationLocation;
use crate::panel::{PanelSelector, PanelTag};
use crate::plugins::PluginSelection;
use crate::registry::SessionRegistry;
use crate::shared::SharedSessionImporter;

/// Severity of a non-blocking notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A non-blocking notification for the presentation layer to show and
/// discard. Nothing in the workspace is fatal; failures degrade to one of
/// these plus last-known-good state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// Whether an empty session list should create a session at startup.
///
/// Ships switched off; kept as a named policy with `Disabled` as the
/// default so the choice is explicit rather than implicit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AutoCreatePolicy {
    #[default]
    Disabled,
    OnEmptyList,
}

/// Read-model handed to the presentation boundary.
pub struct WorkspaceView<'a> {
    pub sessions: &'a [Session],
    pub selected_session: Option<&'a Session>,
    pub panel: PanelTag,
    /// Whether a session is selected; the boundary renders nothing for
    /// `PanelTag::Chat` when this is false.
    pub has_selection: bool,
    pub plugin_selection: &'a HashSet<String>,
    pub shared_view_open: bool,
    pub shared_snapshot: Option<&'a SharedSnapshot>,
    pub user_profile: Option<&'a UserProfile>,
    pub settings: Option<&'a UserSettings>,
    pub model_catalog: Option<&'a ModelCatalog>,
    pub plugin_catalog: Option<&'a PluginCatalog>,
}

pub struct WorkspaceCoordinator {
    gateway: Arc<dyn ChatGateway>,
    registry: SessionRegistry,
    panel: PanelSelector,
    plugins: PluginSelection,
    shared: SharedSessionImporter,
    auto_create: AutoCreatePolicy,
    user_profile: Option<UserProfile>,
    settings: Option<UserSettings>,
    model_catalog: Option<ModelCatalog>,
    plugin_catalog: Option<PluginCatalog>,
    notices: Vec<Notice>,
}

impl WorkspaceCoordinator {
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        Self {
            registry: SessionRegistry::new(Arc::clone(&gateway)),
            gateway,
            panel: PanelSelector::new(),
            plugins: PluginSelection::new(),
            shared: SharedSessionImporter::new(),
            auto_create: AutoCreatePolicy::default(),
            user_profile: None,
            settings: None,
            model_catalog: None,
            plugin_catalog: None,
            notices: Vec::new(),
        }
    }

    pub fn set_auto_create_policy(&mut self, policy: AutoCreatePolicy) {
        self.auto_create = policy;
    }

    /// Run the workspace startup sequence: the one-shot profile, settings,
    /// model and plugin fetches, the initial session-list load, and a
    /// single navigation inspection for an inbound share token.
    ///
    /// Every failure degrades to a notice; state keeps its last-known-good
    /// value (which at startup means "absent").
    pub async fn start(&mut self, nav: &mut dyn NavigationLocation) {
        match self.gateway.fetch_user_profile().await {
            Ok(profile) => self.user_profile = Some(profile),
            Err(GatewayError::NotFound { .. }) => {
                self.notices.push(Notice::warning("User profile not found"));
            }
            Err(err) => self.notify_fetch_error("user profile", &err),
        }

        match self.gateway.fetch_settings().await {
            Ok(settings) => self.settings = Some(settings),
            Err(err) => self.notify_fetch_error("settings", &err),
        }

        match self.gateway.fetch_model_list().await {
            Ok(catalog) => self.model_catalog = Some(catalog),
            Err(err) => self.notify_fetch_error("model list", &err),
        }

        match self.gateway.fetch_plugin_list().await {
            Ok(catalog) => self.plugin_catalog = Some(catalog),
            Err(err) => self.notify_fetch_error("plugin list", &err),
        }

        if let Err(err) = self.registry.load().await {
            self.notify_fetch_error("session list", &err);
        }

        if self.auto_create == AutoCreatePolicy::OnEmptyList && self.registry.sessions().is_empty()
        {
            if let Err(err) = self.create_session().await {
                self.notices.push(Notice::error(err.user_message()));
            }
        }

        self.inspect_navigation(nav).await;
    }

    /// Reload the session list from the gateway. Whichever response lands
    /// last wins for the sequence contents; a created-and-selected session
    /// missing from a stale list survives (see
    /// [`SessionRegistry::load`]).
    pub async fn reload_sessions(&mut self) {
        if let Err(err) = self.registry.load().await {
            self.notify_fetch_error("session list", &err);
        }
    }

    /// Inspect the navigation location for a share token and import the
    /// shared snapshot if one is present. Safe to call on every location
    /// change: the token is consumed on first sight, so nothing is fetched
    /// twice.
    pub async fn inspect_navigation(&mut self, nav: &mut dyn NavigationLocation) {
        if let Err(err) = self.shared.import(nav, self.gateway.as_ref()).await {
            self.notices.push(Notice::error(err.user_message()));
        }
    }

    /// Make a session current and surface the chat view.
    ///
    /// Returns `false` when the id matches no registry entry; nothing
    /// changes in that case.
    pub fn select_session(&mut self, id: SessionId) -> bool {
        if self.registry.select(id) {
            self.panel.set(PanelTag::Chat);
            true
        } else {
            false
        }
    }

    /// Create a session; on success it is appended, focused, and the chat
    /// panel surfaced. Failures go back to the caller untouched.
    pub async fn create_session(&mut self) -> Result<SessionId> {
        let id = self.registry.create().await?;
        self.panel.set(PanelTag::Chat);
        Ok(id)
    }

    /// Delete a session. Selection moves per the registry policy; the
    /// right side switches to the chat view either way, mirroring the
    /// select reaction (with nothing rendered if no session remains).
    /// Failures go back to the caller untouched.
    pub async fn delete_session(&mut self, id: SessionId) -> Result<()> {
        self.registry.delete(id).await?;
        self.panel.set(PanelTag::Chat);
        Ok(())
    }

    /// Merge partial fields into a session record (rename and friends).
    pub fn patch_session(&mut self, id: SessionId, fields: &Map<String, Value>) {
        self.registry.patch(id, fields);
    }

    pub fn set_panel(&mut self, tag: PanelTag) {
        self.panel.set(tag);
    }

    pub fn toggle_plugin(&mut self, plugin_id: &str) {
        self.plugins.toggle(plugin_id);
    }

    pub fn close_shared_view(&mut self) {
        self.shared.close();
    }

    /// Drain accumulated notices for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// The consistent snapshot the presentation layer renders from.
    pub fn view(&self) -> WorkspaceView<'_> {
        WorkspaceView {
            sessions: self.registry.sessions(),
            selected_session: self.registry.selected(),
            panel: self.panel.current(),
            has_selection: self.registry.selected().is_some(),
            plugin_selection: self.plugins.ids(),
            shared_view_open: self.shared.view_open(),
            shared_snapshot: self.shared.snapshot(),
            user_profile: self.user_profile.as_ref(),
            settings: self.settings.as_ref(),
            model_catalog: self.model_catalog.as_ref(),
            plugin_catalog: self.plugin_catalog.as_ref(),
        }
    }

    fn notify_fetch_error(&mut self, what: &str, err: &GatewayError) {
        warn!("failed to fetch {}: {}", what, err);
        self.notices
            .push(Notice::error(format!("Failed to fetch {}", what)));
    }
}
