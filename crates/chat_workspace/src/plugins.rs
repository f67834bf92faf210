//! Plugin Selection Set - plugins toggled on for composing requests

use std::collections::HashSet;

/// The set of plugin ids currently toggled on.
///
/// Pure set membership: no ordering, no persistence beyond the workspace's
/// lifetime, no error conditions.
#[derive(Debug, Clone, Default)]
pub struct PluginSelection {
    selected: HashSet<String>,
}

impl PluginSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership: present is removed, absent is added.
    pub fn toggle(&mut self, plugin_id: &str) {
        if !self.selected.remove(plugin_id) {
            self.selected.insert(plugin_id.to_string());
        }
    }

    pub fn is_selected(&self, plugin_id: &str) -> bool {
        self.selected.contains(plugin_id)
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.selected
    }
}
