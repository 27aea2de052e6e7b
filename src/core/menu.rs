// PortalNav - core/menu.rs
//
// Side-menu visibility and grouping.
//
// Pipeline: default_entries -> augment_entries -> compute_visible_menu.
// augment_entries is the only step that branches on session data; the
// filter/group step is a pure function of its three inputs.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{AllowedRoutes, MenuEntry, MenuGroup, MenuSection};
use crate::util::constants::{
    DOCUMENTATION_ROUTE, DOCUMENTATION_URL_BASE, GROUP_COMMON, GROUP_LICENSE, GROUP_OPERATOR,
    GROUP_TOOLS, LICENSE_ROUTE, PRIVILEGED_ROUTE,
};

/// Canonical display order of the menu sections.
pub fn default_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup::new(GROUP_COMMON, None, false),
        MenuGroup::new(GROUP_TOOLS, Some("Tools"), true),
        MenuGroup::new(GROUP_OPERATOR, Some("Operator"), true),
        MenuGroup::new(GROUP_LICENSE, None, false),
    ]
}

/// The static console menu, in display order within each group.
///
/// `distributed_setup` is attached to the Heal entry as its deployment gate:
/// the entry disappears only when the value is explicitly `Some(false)`.
pub fn default_entries(distributed_setup: Option<bool>) -> Vec<MenuEntry> {
    vec![
        MenuEntry::item(GROUP_COMMON, "/dashboard", "Dashboard"),
        MenuEntry::item(GROUP_COMMON, "/buckets", "Buckets"),
        MenuEntry::item(GROUP_COMMON, "/users", "Users"),
        MenuEntry::item(GROUP_COMMON, "/groups", "Groups"),
        MenuEntry::item(GROUP_COMMON, "/account", "Service Accounts"),
        MenuEntry::item(GROUP_COMMON, "/policies", "IAM Policies"),
        MenuEntry::item(GROUP_COMMON, "/settings", "Settings"),
        MenuEntry::item(GROUP_TOOLS, "/logs", "Logs"),
        MenuEntry::item(GROUP_TOOLS, "/watch", "Watch"),
        MenuEntry::item(GROUP_TOOLS, "/trace", "Trace"),
        MenuEntry::item(GROUP_TOOLS, "/heal", "Heal").with_fs_hidden(distributed_setup),
        MenuEntry::item(GROUP_TOOLS, "/health-info", "Diagnostic"),
        MenuEntry::item(GROUP_OPERATOR, "/tenants", "Tenants"),
        MenuEntry::item(GROUP_OPERATOR, "/storage", "Storage"),
    ]
}

/// External documentation link, tagged with the mode it was opened from.
pub fn documentation_url(operator_mode: bool) -> String {
    let reference = if operator_mode { "op" } else { "con" };
    format!("{DOCUMENTATION_URL_BASE}?ref={reference}")
}

/// Append the License and Documentation entries.
///
/// Both land in the Operator group when the session may reach the privileged
/// route, otherwise in the License group. Exactly one variant is appended,
/// so the result never holds duplicate routes unless the input already did.
pub fn augment_entries(
    mut entries: Vec<MenuEntry>,
    allowed: &AllowedRoutes,
    operator_mode: bool,
) -> Vec<MenuEntry> {
    let group = if allowed.contains(PRIVILEGED_ROUTE) {
        GROUP_OPERATOR
    } else {
        GROUP_LICENSE
    };

    tracing::debug!(group, operator_mode, "Attaching license and documentation entries");

    entries.push(MenuEntry::item(group, LICENSE_ROUTE, "License"));
    entries.push(
        MenuEntry::item(group, DOCUMENTATION_ROUTE, "Documentation")
            .with_force_display()
            .with_external_url(documentation_url(operator_mode)),
    );
    entries
}

/// Whether a single entry passes the visibility filter.
///
/// Non-item entries pass the permission half of the check unconditionally;
/// every entry is still subject to its deployment gate.
pub fn is_displayable(entry: &MenuEntry, allowed: &AllowedRoutes) -> bool {
    let permitted = !entry.is_item()
        || entry.force_display
        || entry.route.as_deref().is_some_and(|r| allowed.contains(r));
    permitted && !entry.is_suppressed()
}

/// Filter, partition, and order the menu.
///
/// Output sections follow `group_order`; groups missing from `group_order`
/// are dropped, and groups with no displayable item are omitted entirely
/// (titles alone do not keep a section alive).
pub fn compute_visible_menu(
    entries: &[MenuEntry],
    allowed: &AllowedRoutes,
    group_order: &[MenuGroup],
) -> Vec<MenuSection> {
    let visible: Vec<&MenuEntry> = entries
        .iter()
        .filter(|e| is_displayable(e, allowed))
        .collect();

    group_order
        .iter()
        .filter_map(|g| {
            let section = MenuSection {
                group: g.group.clone(),
                entries: visible
                    .iter()
                    .filter(|e| e.group == g.group)
                    .map(|e| (*e).clone())
                    .collect(),
            };
            if section.item_count() == 0 {
                None
            } else {
                Some(section)
            }
        })
        .collect()
}
