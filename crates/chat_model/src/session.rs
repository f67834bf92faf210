//! Session records

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque server-assigned session identifier.
///
/// The remote service hands these out on creation; the client never mints
/// its own. Identity comparisons across the workspace go through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub i64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for SessionId {
    fn from(raw: i64) -> Self {
        SessionId(raw)
    }
}

/// A conversational thread record.
///
/// Only `id` and `name` are interpreted by the workspace; every other
/// server-defined field rides along opaquely in `extra` and is replaced
/// wholesale on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub name: String,

    /// Server-defined passthrough fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    pub fn new(id: impl Into<SessionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Merge a partial update into this record.
    ///
    /// A `"name"` key updates the display name; any other key lands in
    /// `extra`, overwriting a previous value for the same key.
    pub fn merge_fields(&mut self, patch: &Map<String, Value>) {
        for (key, value) in patch {
            if key == "name" {
                if let Some(name) = value.as_str() {
                    self.name = name.to_string();
                }
            } else if key == "id" {
                // Identity is immutable.
            } else {
                self.extra.insert(key.clone(), value.clone());
            }
        }
    }
}
