//! Shared-session snapshots

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A read-only snapshot of someone else's session, fetched via a share
/// token.
///
/// Immutable once fetched and entirely independent of the session registry;
/// it lives only while its viewer surface is open. The `share_token` is
/// annotated by the importer after the fetch, it is not part of the wire
/// payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedSnapshot {
    pub name: String,

    /// Display name of the session's owner (wire field `username`).
    #[serde(rename = "username")]
    pub owner_display_name: String,

    /// The token this snapshot was fetched with.
    #[serde(skip)]
    pub share_token: String,

    /// Server-defined passthrough fields (messages, timestamps, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SharedSnapshot {
    /// Attach the share token the snapshot was fetched with.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.share_token = token.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_and_annotate_token() {
        let snapshot: SharedSnapshot = serde_json::from_value(json!({
            "name": "Holiday plans",
            "username": "alice",
            "messages": [{"role": "user", "content": "hi"}]
        }))
        .unwrap();
        let snapshot = snapshot.with_token("abc123");

        assert_eq!(snapshot.owner_display_name, "alice");
        assert_eq!(snapshot.share_token, "abc123");
        assert!(snapshot.extra.contains_key("messages"));
    }
}
