// PortalNav - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// Menu entries
// =============================================================================

/// Whether a menu entry is a navigable link or a section sub-title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Item,
    Title,
}

/// One navigation link or sub-title in the side menu.
///
/// Entries are built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Name of the group (menu section) this entry belongs to.
    pub group: String,

    pub kind: EntryKind,

    /// Route path. Always set for items; titles have none.
    pub route: Option<String>,

    /// Display label.
    pub label: String,

    /// Deployment gate with three-valued semantics: `None` and `Some(true)`
    /// leave the entry visible, only an explicit `Some(false)` suppresses it.
    #[serde(default)]
    pub fs_hidden: Option<bool>,

    /// Display the entry even when its route is not in the allowed set.
    #[serde(default)]
    pub force_display: bool,

    /// When set, activating the entry opens this URL in the system browser
    /// instead of navigating inside the shell.
    #[serde(default)]
    pub external_url: Option<String>,
}

impl MenuEntry {
    /// A navigable link.
    pub fn item(group: &str, route: &str, label: &str) -> Self {
        Self {
            group: group.to_string(),
            kind: EntryKind::Item,
            route: Some(route.to_string()),
            label: label.to_string(),
            fs_hidden: None,
            force_display: false,
            external_url: None,
        }
    }

    /// A non-navigable section sub-title.
    pub fn title(group: &str, label: &str) -> Self {
        Self {
            group: group.to_string(),
            kind: EntryKind::Title,
            route: None,
            label: label.to_string(),
            fs_hidden: None,
            force_display: false,
            external_url: None,
        }
    }

    pub fn with_fs_hidden(mut self, fs_hidden: Option<bool>) -> Self {
        self.fs_hidden = fs_hidden;
        self
    }

    pub fn with_force_display(mut self) -> Self {
        self.force_display = true;
        self
    }

    pub fn with_external_url(mut self, url: String) -> Self {
        self.external_url = Some(url);
        self
    }

    /// Identity of the entry: the route for items, the label for titles.
    pub fn key(&self) -> &str {
        match self.kind {
            EntryKind::Item => self.route.as_deref().unwrap_or(&self.label),
            EntryKind::Title => &self.label,
        }
    }

    pub fn is_item(&self) -> bool {
        self.kind == EntryKind::Item
    }

    /// True only for an explicit `Some(false)` deployment gate.
    pub fn is_suppressed(&self) -> bool {
        self.fs_hidden == Some(false)
    }
}

// =============================================================================
// Menu groups
// =============================================================================

/// Configuration of one menu section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuGroup {
    /// Group name matched against `MenuEntry::group`.
    pub group: String,

    /// Header label shown above the section. `None` = no header.
    #[serde(default)]
    pub label: Option<String>,

    /// Whether the section can be collapsed by clicking its header.
    #[serde(default)]
    pub collapsible: bool,
}

impl MenuGroup {
    pub fn new(group: &str, label: Option<&str>, collapsible: bool) -> Self {
        Self {
            group: group.to_string(),
            label: label.map(str::to_string),
            collapsible,
        }
    }
}

/// One rendered section of the side menu: a group and its displayable entries
/// in their input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub group: String,
    pub entries: Vec<MenuEntry>,
}

impl MenuSection {
    /// Number of item-kind entries (titles do not count).
    pub fn item_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_item()).count()
    }
}

// =============================================================================
// Session-derived inputs
// =============================================================================

/// Route paths the current session may navigate to.
///
/// Treated as a read-only snapshot once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedRoutes(HashSet<String>);

impl AllowedRoutes {
    pub fn new<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(routes.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, route: &str) -> bool {
        self.0.contains(route)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Enabled feature names. `None` models an absent feature list, which
/// behaves exactly like an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet(Option<Vec<String>>);

impl FeatureSet {
    pub fn new(features: Option<Vec<String>>) -> Self {
        Self(features)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0
            .as_ref()
            .is_some_and(|features| features.iter().any(|f| f == name))
    }

    /// Whether the Audit Logs (log search) view is enabled.
    pub fn log_search_enabled(&self) -> bool {
        self.contains(constants::LOG_SEARCH_FEATURE)
    }
}
