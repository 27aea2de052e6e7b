// PortalNav - app/state.rs
//
// Application state management. Holds the menu model, the permission and
// feature snapshots, the per-group collapse state, the current route, and
// the injected session store.
// Owned by the eframe::App implementation.

use crate::app::logout::Navigator;
use crate::app::session::SessionStore;
use crate::core::collapse::GroupCollapseState;
use crate::core::menu;
use crate::core::model::{AllowedRoutes, FeatureSet, MenuEntry, MenuGroup, MenuSection};
use crate::core::tabs::{LogsTab, TabState};
use crate::util::constants::{self, HOME_ROUTE, LOGGED_IN_KEY, LOGS_ROUTE};

/// Session-derived inputs the shell is started with.
#[derive(Debug, Clone, Default)]
pub struct SessionInputs {
    /// Route paths the session may reach.
    pub pages: Vec<String>,

    /// Enabled feature names. `None` = no feature list supplied.
    pub features: Option<Vec<String>>,

    /// Operator (multi-tenant) deployment rather than a single console.
    pub operator_mode: bool,

    /// Deployment gate for the Heal entry; see `MenuEntry::fs_hidden`.
    pub distributed_setup: Option<bool>,
}

/// Current route plus the per-page state that resets on mount.
#[derive(Debug, Clone)]
pub struct Router {
    current: String,
    /// Logs page tab state; reset whenever the logs page is entered.
    pub logs_tabs: TabState,
}

impl Router {
    pub fn new(start: &str, features: &FeatureSet) -> Self {
        Self {
            current: start.to_string(),
            logs_tabs: TabState::new(features),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }
}

impl Navigator for Router {
    fn push(&mut self, route: &str) {
        if route == self.current {
            return;
        }
        if route == LOGS_ROUTE {
            self.logs_tabs.reset();
        }
        tracing::debug!(from = %self.current, to = route, "Navigate");
        self.current = route.to_string();
    }
}

/// Top-level application state.
pub struct AppState {
    /// Canonical menu group order and collapsibility.
    pub groups: Vec<MenuGroup>,

    /// Menu entries after augmentation; fixed for the session.
    pub entries: Vec<MenuEntry>,

    pub allowed: AllowedRoutes,

    pub features: FeatureSet,

    pub operator_mode: bool,

    pub collapse: GroupCollapseState,

    pub router: Router,

    /// Local session store (logged-in flag, credential, key-value pairs).
    pub session: Box<dyn SessionStore>,

    /// Backend base URL for the logout request.
    pub server_url: String,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings accumulated at startup (config problems etc.).
    pub warnings: Vec<String>,

    /// Set by the menu's Logout entry; consumed by the app loop.
    pub request_logout: bool,

    /// Set by an entry with an external URL; consumed by the app loop.
    pub pending_external_url: Option<String>,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Build the shell state and mark the session as logged in.
    pub fn new(
        inputs: SessionInputs,
        mut session: Box<dyn SessionStore>,
        server_url: String,
        debug_mode: bool,
    ) -> Self {
        let allowed = AllowedRoutes::new(inputs.pages);
        let features = FeatureSet::new(inputs.features);
        let groups = menu::default_groups();
        let entries = menu::augment_entries(
            menu::default_entries(inputs.distributed_setup),
            &allowed,
            inputs.operator_mode,
        );

        let mut warnings = Vec::new();
        for result in [
            session.set_logged_in(true),
            session.set(LOGGED_IN_KEY, "true"),
        ] {
            if let Err(e) = result {
                tracing::warn!(error = %e, "Cannot persist session state");
                warnings.push(e.to_string());
            }
        }

        tracing::info!(
            allowed = allowed.len(),
            operator_mode = inputs.operator_mode,
            log_search = features.log_search_enabled(),
            "Shell state initialised"
        );

        Self {
            collapse: GroupCollapseState::new(&groups),
            router: Router::new(HOME_ROUTE, &features),
            groups,
            entries,
            allowed,
            features,
            operator_mode: inputs.operator_mode,
            session,
            server_url,
            status_message: "Ready.".to_string(),
            warnings,
            request_logout: false,
            pending_external_url: None,
            debug_mode,
        }
    }

    /// Sections to render, in canonical order.
    pub fn visible_menu(&self) -> Vec<MenuSection> {
        menu::compute_visible_menu(&self.entries, &self.allowed, &self.groups)
    }

    /// Header configuration of a group, if it is part of the canonical order.
    pub fn group(&self, name: &str) -> Option<&MenuGroup> {
        self.groups.iter().find(|g| g.group == name)
    }

    pub fn toggle_group(&mut self, group: &str) {
        self.collapse.toggle(group);
    }

    /// Follow a menu entry: external entries open a URL, items navigate.
    pub fn activate_entry(&mut self, entry: &MenuEntry) {
        if let Some(ref url) = entry.external_url {
            tracing::info!(url = %url, "Opening external link");
            self.pending_external_url = Some(url.clone());
            return;
        }
        if let Some(ref route) = entry.route {
            self.router.push(route);
            self.status_message = format!("{} opened.", entry.label);
        }
    }

    /// Whether `route` is the current route (highlighted in the menu).
    pub fn is_active(&self, route: &str) -> bool {
        self.router.current() == route
    }

    /// Switch the logs page tab; a refused switch is reported on the status bar.
    pub fn select_logs_tab(&mut self, tab: LogsTab) -> bool {
        let selected = self.router.logs_tabs.select(tab);
        if !selected {
            self.status_message = format!(
                "{} requires the '{}' feature.",
                tab.label(),
                constants::LOG_SEARCH_FEATURE
            );
        }
        selected
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::MemorySessionStore;

    fn state(pages: &[&str], features: Option<Vec<String>>) -> AppState {
        AppState::new(
            SessionInputs {
                pages: pages.iter().map(|p| p.to_string()).collect(),
                features,
                operator_mode: false,
                distributed_setup: None,
            },
            Box::new(MemorySessionStore::new()),
            constants::DEFAULT_SERVER_URL.to_string(),
            false,
        )
    }

    #[test]
    fn test_new_marks_session_logged_in() {
        let s = state(&["/buckets"], None);
        assert!(s.is_logged_in());
        assert_eq!(s.session.get(LOGGED_IN_KEY).as_deref(), Some("true"));
        assert_eq!(s.router.current(), HOME_ROUTE);
    }

    #[test]
    fn test_visible_menu_reflects_allowed_pages() {
        let s = state(&["/buckets", "/logs"], None);
        let groups: Vec<_> = s.visible_menu().into_iter().map(|g| g.group).collect();
        assert_eq!(groups, vec!["common", "Tools", "License"]);
    }

    #[test]
    fn test_external_entry_does_not_navigate() {
        let mut s = state(&[], None);
        let docs = s
            .entries
            .iter()
            .find(|e| e.key() == "/documentation")
            .cloned()
            .unwrap();
        s.activate_entry(&docs);
        assert_eq!(s.router.current(), HOME_ROUTE);
        assert_eq!(
            s.pending_external_url.as_deref(),
            Some("https://docs.min.io/?ref=con")
        );
    }

    #[test]
    fn test_entering_logs_page_resets_tab() {
        let mut s = state(&["/logs", "/buckets"], Some(vec!["log-search".to_string()]));
        s.router.push("/logs");
        assert!(s.select_logs_tab(LogsTab::AuditLogs));
        s.router.push("/buckets");
        s.router.push("/logs");
        assert_eq!(s.router.logs_tabs.current(), LogsTab::ErrorLogs);
    }

    #[test]
    fn test_refused_tab_sets_status() {
        let mut s = state(&["/logs"], None);
        assert!(!s.select_logs_tab(LogsTab::AuditLogs));
        assert!(s.status_message.contains("log-search"));
    }
}
