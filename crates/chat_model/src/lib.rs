//! chat_model - Shared data model for the chat workspace
//!
//! This crate provides the types exchanged between the remote gateway and
//! the workspace coordination layer:
//! - `session` - Session records and their opaque server-assigned ids
//! - `shared` - Read-only snapshots of sessions imported via share tokens
//! - `catalog` - User profile, settings, model and plugin catalogs
//! - `config` - Gateway connection configuration

pub mod catalog;
pub mod config;
pub mod session;
pub mod shared;

// Re-export commonly used types
pub use catalog::{ModelCatalog, ModelInfo, PluginCatalog, PluginInfo, QuickCommand, UserProfile, UserSettings};
pub use config::GatewayConfig;
pub use session::{Session, SessionId};
pub use shared::SharedSnapshot;
