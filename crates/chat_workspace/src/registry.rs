//! Session Registry - owns the session list and the current selection

use std::sync::Arc;

use chat_gateway::{ChatGateway, Result};
use chat_model::{Session, SessionId};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Ordered session sequence plus the currently selected session.
///
/// The selection is held as a cached copy of the registry entry so a patch
/// can refresh both in lockstep; entry and copy must never diverge.
pub struct SessionRegistry {
    gateway: Arc<dyn ChatGateway>,
    sessions: Vec<Session>,
    selected: Option<Session>,
}

impl SessionRegistry {
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        Self {
            gateway,
            sessions: Vec::new(),
            selected: None,
        }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn selected(&self) -> Option<&Session> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<SessionId> {
        self.selected.as_ref().map(|s| s.id)
    }

    /// Select the session with the given id. Returns `false` (leaving the
    /// current selection untouched) when no such entry exists.
    pub fn select(&mut self, id: SessionId) -> bool {
        match self.sessions.iter().find(|s| s.id == id) {
            Some(session) => {
                self.selected = Some(session.clone());
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Replace the sequence with the server's list. The selection is never
    /// altered here; on failure the sequence degrades to empty and the
    /// error is returned for upstream reporting.
    pub async fn load(&mut self) -> Result<()> {
        match self.gateway.list_sessions().await {
            Ok(list) => {
                self.sessions = list;
                // A create() that resolved while this list was in flight is
                // missing from the server's snapshot; keep it, and keep it
                // selected.
                if let Some(selected) = &self.selected {
                    if !self.sessions.iter().any(|s| s.id == selected.id) {
                        self.sessions.push(selected.clone());
                    }
                }
                debug!(count = self.sessions.len(), "session list loaded");
                Ok(())
            }
            Err(err) => {
                warn!("failed to load session list: {}", err);
                self.sessions.clear();
                Err(err)
            }
        }
    }

    /// Create a session on the server, append it and focus it.
    pub async fn create(&mut self) -> Result<SessionId> {
        let session = self.gateway.create_session().await?;
        debug!(id = %session.id, "session created");
        let id = session.id;
        self.selected = Some(session.clone());
        self.sessions.push(session);
        Ok(id)
    }

    /// Delete a session and reassign the selection: the entry after the
    /// deleted one if any, else the entry before it, else nothing.
    ///
    /// Deleting an id that is no longer present (confirmed gone by the
    /// gateway, or already removed by a concurrent delete) leaves both the
    /// sequence and the selection untouched.
    pub async fn delete(&mut self, id: SessionId) -> Result<()> {
        self.gateway.delete_session(id).await?;

        let Some(index) = self.sessions.iter().position(|s| s.id == id) else {
            return Ok(());
        };
        self.sessions.remove(index);
        debug!(id = %id, "session deleted");

        // After the removal, `index` addresses the old successor.
        self.selected = if index < self.sessions.len() {
            Some(self.sessions[index].clone())
        } else if index > 0 {
            Some(self.sessions[index - 1].clone())
        } else {
            None
        };
        Ok(())
    }

    /// Merge partial fields into the matching entry; a selected entry's
    /// cached copy is refreshed identically.
    pub fn patch(&mut self, id: SessionId, fields: &Map<String, Value>) {
        if let Some(entry) = self.sessions.iter_mut().find(|s| s.id == id) {
            entry.merge_fields(fields);
        }
        if let Some(selected) = &mut self.selected {
            if selected.id == id {
                selected.merge_fields(fields);
            }
        }
    }
}
