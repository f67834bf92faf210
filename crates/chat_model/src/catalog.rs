//! User profile, settings and catalog records
//!
//! These are one-shot fetches performed at workspace start. The workspace
//! treats them as mostly-opaque server records: a small typed core plus a
//! flattened passthrough map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Server-held user settings record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One entry of the model catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The list of models the service offers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelCatalog {
    pub models: Vec<ModelInfo>,
}

/// A plugin the user can toggle on for composing requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInfo {
    pub id: String,
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A quick command offered alongside the plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickCommand {
    pub command: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Combined plugin/quick-command catalog.
///
/// The wire format uses the service's historical field names: `fc` for
/// plugins (function-call tools) and `qcmd` for quick commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginCatalog {
    #[serde(rename = "fc", default)]
    pub plugins: Vec<PluginInfo>,

    #[serde(rename = "qcmd", default)]
    pub quick_commands: Vec<QuickCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plugin_catalog_wire_names() {
        let catalog: PluginCatalog = serde_json::from_value(json!({
            "fc": [{"id": "search", "name": "Web Search"}],
            "qcmd": [{"command": "/clear", "description": "wipe context"}]
        }))
        .unwrap();

        assert_eq!(catalog.plugins.len(), 1);
        assert_eq!(catalog.plugins[0].id, "search");
        assert_eq!(catalog.quick_commands[0].command, "/clear");
    }

    #[test]
    fn test_plugin_catalog_missing_sections_default_empty() {
        let catalog: PluginCatalog = serde_json::from_value(json!({})).unwrap();
        assert!(catalog.plugins.is_empty());
        assert!(catalog.quick_commands.is_empty());
    }
}
