//! Panel Selector - which single right-hand view is visible

use serde::{Deserialize, Serialize};

/// The closed set of right-hand panels. Exactly one is active at a time.
///
/// `Chat` is only rendered when a session is actually selected; the
/// coordinator exposes `has_selection` alongside the tag so the
/// presentation boundary can enforce that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelTag {
    #[default]
    None,
    Chat,
    About,
    Disclaimers,
    Help,
    Plugins,
    Settings,
    Wallet,
}

/// Single-active-state machine over [`PanelTag`].
///
/// Every transition is unconditional: any tag may follow any other.
#[derive(Debug, Clone, Default)]
pub struct PanelSelector {
    current: PanelTag,
}

impl PanelSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> PanelTag {
        self.current
    }

    pub fn set(&mut self, tag: PanelTag) {
        self.current = tag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tag_is_none() {
        assert_eq!(PanelSelector::new().current(), PanelTag::None);
    }

    #[test]
    fn test_any_tag_may_follow_any_other() {
        let mut selector = PanelSelector::new();
        selector.set(PanelTag::Wallet);
        assert_eq!(selector.current(), PanelTag::Wallet);
        selector.set(PanelTag::Chat);
        assert_eq!(selector.current(), PanelTag::Chat);
        selector.set(PanelTag::None);
        assert_eq!(selector.current(), PanelTag::None);
    }
}
