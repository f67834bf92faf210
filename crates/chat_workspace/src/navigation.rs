//! Navigation-location boundary
//!
//! The workspace reads exactly one thing from the ambient navigation
//! context: the `share_id` query parameter. Reading it consumes it, and
//! the rewrite replaces the visible location rather than pushing a history
//! entry, so a reload never re-triggers the import.

use url::Url;

const SHARE_PARAM: &str = "share_id";

/// Host-provided view of the current navigation location.
pub trait NavigationLocation {
    /// Read the share token and strip it from the location in one step.
    ///
    /// Implementations must rewrite in place (replace, not push). Returns
    /// `None` when no token is present, which is also the state after any
    /// previous call returned one.
    fn take_share_token(&mut self) -> Option<String>;
}

/// [`NavigationLocation`] over a plain URL string, for hosts that expose
/// the location that way.
#[derive(Debug, Clone)]
pub struct UrlLocation {
    url: Url,
}

impl UrlLocation {
    pub fn parse(location: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(location)?,
        })
    }

    /// The rewritten location to hand back to the host.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl NavigationLocation for UrlLocation {
    fn take_share_token(&mut self) -> Option<String> {
        let token = self
            .url
            .query_pairs()
            .find(|(key, _)| key == SHARE_PARAM)
            .map(|(_, value)| value.into_owned())?;

        let remaining: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(key, _)| key != SHARE_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        if remaining.is_empty() {
            self.url.set_query(None);
        } else {
            self.url
                .query_pairs_mut()
                .clear()
                .extend_pairs(remaining.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Some(token)
    }
}
