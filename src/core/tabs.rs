// PortalNav - core/tabs.rs
//
// Logs page tab selection. Two tabs: Error Logs (always available) and
// Audit Logs (requires the log-search feature). The feature gate is enforced
// here, not only by disabling the control, so a stale UI or a programmatic
// caller cannot reach the Audit Logs view without the feature.

use crate::core::model::FeatureSet;

/// Tabs on the logs page, by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogsTab {
    #[default]
    ErrorLogs = 0,
    AuditLogs = 1,
}

impl LogsTab {
    pub fn all() -> &'static [LogsTab] {
        &[LogsTab::ErrorLogs, LogsTab::AuditLogs]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::ErrorLogs),
            1 => Some(Self::AuditLogs),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ErrorLogs => "Error Logs",
            Self::AuditLogs => "Audit Logs",
        }
    }
}

/// Current tab plus the feature gate snapshot it was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabState {
    current: LogsTab,
    log_search_enabled: bool,
}

impl TabState {
    pub fn new(features: &FeatureSet) -> Self {
        Self {
            current: LogsTab::ErrorLogs,
            log_search_enabled: features.log_search_enabled(),
        }
    }

    pub fn current(&self) -> LogsTab {
        self.current
    }

    pub fn log_search_enabled(&self) -> bool {
        self.log_search_enabled
    }

    /// Whether the tab control should be interactive.
    pub fn is_selectable(&self, tab: LogsTab) -> bool {
        match tab {
            LogsTab::ErrorLogs => true,
            LogsTab::AuditLogs => self.log_search_enabled,
        }
    }

    /// Switch to `tab`. Returns false (state unchanged) when the tab is gated off.
    pub fn select(&mut self, tab: LogsTab) -> bool {
        if !self.is_selectable(tab) {
            tracing::debug!(tab = tab.label(), "Tab selection refused: feature disabled");
            return false;
        }
        self.current = tab;
        true
    }

    /// Index-based selection; out-of-range indices are refused.
    pub fn select_index(&mut self, index: usize) -> bool {
        LogsTab::from_index(index).is_some_and(|tab| self.select(tab))
    }

    /// Back to the first tab (page mount).
    pub fn reset(&mut self) {
        self.current = LogsTab::ErrorLogs;
    }

    /// The view to render, re-checking the feature gate for Audit Logs.
    pub fn visible_view(&self) -> Option<LogsTab> {
        match self.current {
            LogsTab::ErrorLogs => Some(LogsTab::ErrorLogs),
            LogsTab::AuditLogs if self.log_search_enabled => Some(LogsTab::AuditLogs),
            LogsTab::AuditLogs => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_log_search() -> FeatureSet {
        FeatureSet::new(Some(vec!["log-search".to_string()]))
    }

    #[test]
    fn test_initial_tab_is_error_logs() {
        let state = TabState::new(&with_log_search());
        assert_eq!(state.current(), LogsTab::ErrorLogs);
        assert_eq!(state.visible_view(), Some(LogsTab::ErrorLogs));
    }

    #[test]
    fn test_audit_refused_without_flag() {
        let mut state = TabState::new(&FeatureSet::default());
        assert!(!state.select(LogsTab::AuditLogs));
        assert_eq!(state.current(), LogsTab::ErrorLogs);
        assert!(!state.is_selectable(LogsTab::AuditLogs));
    }

    #[test]
    fn test_audit_selected_with_flag() {
        let mut state = TabState::new(&with_log_search());
        assert!(state.select(LogsTab::AuditLogs));
        assert_eq!(state.current(), LogsTab::AuditLogs);
        assert_eq!(state.visible_view(), Some(LogsTab::AuditLogs));
        assert!(state.select(LogsTab::ErrorLogs));
        assert_eq!(state.visible_view(), Some(LogsTab::ErrorLogs));
    }

    #[test]
    fn test_select_index() {
        let mut state = TabState::new(&with_log_search());
        assert!(state.select_index(1));
        assert!(!state.select_index(2));
        assert_eq!(state.current(), LogsTab::AuditLogs);
    }

    #[test]
    fn test_reset_returns_to_first_tab() {
        let mut state = TabState::new(&with_log_search());
        state.select(LogsTab::AuditLogs);
        state.reset();
        assert_eq!(state.current(), LogsTab::ErrorLogs);
    }

    #[test]
    fn test_render_guard_rechecks_flag() {
        // A state that holds AuditLogs while the gate is off renders nothing.
        let state = TabState {
            current: LogsTab::AuditLogs,
            log_search_enabled: false,
        };
        assert_eq!(state.visible_view(), None);
    }
}
