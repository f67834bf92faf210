//! chat_workspace - Coordination core of the chat workspace
//!
//! Owns the state the presentation layer renders: which sessions exist and
//! which one is active, which right-hand panel is visible, which plugins
//! are toggled on, and whether a shared-session snapshot is being viewed.
//! Each concern lives in its own component; [`WorkspaceCoordinator`]
//! composes them and exposes a single read-model, so no component ever
//! reaches into another's state.

pub mod coordinator;
pub mod navigation;
pub mod panel;
pub mod plugins;
pub mod registry;
pub mod shared;

// Re-export commonly used types
pub use coordinator::{
    AutoCreatePolicy, Notice, NoticeLevel, WorkspaceCoordinator, WorkspaceView,
};
pub use navigation::{NavigationLocation, UrlLocation};
pub use panel::{PanelSelector, PanelTag};
pub use plugins::PluginSelection;
pub use registry::SessionRegistry;
pub use shared::SharedSessionImporter;
