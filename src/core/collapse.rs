// PortalNav - core/collapse.rs
//
// Per-group open/closed state for collapsible menu sections.
// Only groups configured as collapsible are tracked; everything else is
// permanently expanded.

use crate::core::model::MenuGroup;
use std::collections::BTreeMap;

/// Open (`true`) / closed (`false`) state for each collapsible group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupCollapseState {
    open: BTreeMap<String, bool>,
}

impl GroupCollapseState {
    /// Every collapsible group starts open; other groups are not tracked.
    pub fn new(groups: &[MenuGroup]) -> Self {
        Self {
            open: groups
                .iter()
                .filter(|g| g.collapsible)
                .map(|g| (g.group.clone(), true))
                .collect(),
        }
    }

    /// Flip the state of `group`. Returns the new state, or `None` when the
    /// group is not collapsible (no transition happens).
    pub fn toggle(&mut self, group: &str) -> Option<bool> {
        match self.open.get_mut(group) {
            Some(open) => {
                *open = !*open;
                tracing::debug!(group, open = *open, "Menu group toggled");
                Some(*open)
            }
            None => {
                tracing::debug!(group, "Toggle ignored for non-collapsible group");
                None
            }
        }
    }

    /// Whether the group's entries are currently shown.
    pub fn is_open(&self, group: &str) -> bool {
        self.open.get(group).copied().unwrap_or(true)
    }

    /// Tracked state, `None` for untracked groups.
    pub fn state(&self, group: &str) -> Option<bool> {
        self.open.get(group).copied()
    }

    pub fn is_collapsible(&self, group: &str) -> bool {
        self.open.contains_key(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::default_groups;

    #[test]
    fn test_initial_state() {
        let state = GroupCollapseState::new(&default_groups());
        assert_eq!(state.state("Tools"), Some(true));
        assert_eq!(state.state("Operator"), Some(true));
        assert_eq!(state.state("common"), None);
        assert_eq!(state.state("License"), None);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = GroupCollapseState::new(&default_groups());
        assert_eq!(state.toggle("Tools"), Some(false));
        assert!(!state.is_open("Tools"));
        assert_eq!(state.toggle("Tools"), Some(true));
        assert_eq!(state, GroupCollapseState::new(&default_groups()));
    }

    #[test]
    fn test_toggle_is_per_group() {
        let mut state = GroupCollapseState::new(&default_groups());
        state.toggle("Operator");
        assert!(state.is_open("Tools"));
        assert!(!state.is_open("Operator"));
    }

    #[test]
    fn test_untracked_group_is_noop() {
        let mut state = GroupCollapseState::new(&default_groups());
        let before = state.clone();
        assert_eq!(state.toggle("common"), None);
        assert_eq!(state.toggle("Nonexistent"), None);
        assert_eq!(state, before);
        assert!(state.is_open("common"));
    }
}
