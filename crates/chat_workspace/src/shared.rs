//! Shared-Session Importer
//!
//! Detects an inbound share token, fetches the shared snapshot and opens
//! the read-only viewer surface. Entirely decoupled from the session
//! registry and the panel selector: viewing a shared session never touches
//! either.

use chat_gateway::{ChatGateway, Result};
use chat_model::SharedSnapshot;
use tracing::{debug, warn};

use crate::navigation::NavigationLocation;

/// Holds the imported snapshot and the viewer-open flag.
#[derive(Default)]
pub struct SharedSessionImporter {
    snapshot: Option<SharedSnapshot>,
    view_open: bool,
}

impl SharedSessionImporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot inspect-and-consume of the navigation location.
    ///
    /// The token is stripped before the fetch, so a repeated inspection
    /// finds nothing and issues no second request. Returns `Ok(true)` when
    /// a snapshot was imported and the viewer opened; a gateway failure
    /// leaves the viewer closed and is returned for the caller to report.
    /// There is no automatic retry.
    pub async fn import(
        &mut self,
        nav: &mut dyn NavigationLocation,
        gateway: &dyn ChatGateway,
    ) -> Result<bool> {
        let Some(token) = nav.take_share_token() else {
            return Ok(false);
        };
        debug!("importing shared session");

        match gateway.fetch_shared_session(&token).await {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.view_open = true;
                Ok(true)
            }
            Err(err) => {
                warn!("failed to fetch shared session: {}", err);
                Err(err)
            }
        }
    }

    pub fn view_open(&self) -> bool {
        self.view_open
    }

    pub fn snapshot(&self) -> Option<&SharedSnapshot> {
        self.snapshot.as_ref()
    }

    /// Close the viewer and drop the snapshot.
    pub fn close(&mut self) {
        self.view_open = false;
        self.snapshot = None;
    }
}
