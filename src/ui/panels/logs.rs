// PortalNav - ui/panels/logs.rs
//
// Logs page: a tab list on the left, the selected view on the right.
// The Audit Logs tab is disabled without the log-search feature, and its
// view is only drawn when `TabState::visible_view` agrees.

use crate::app::state::AppState;
use crate::core::tabs::LogsTab;
use crate::ui::theme;
use egui::RichText;

/// Render the logs page into the central panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Logs");
    ui.separator();

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(theme::LOGS_TAB_WIDTH);
            for &tab in LogsTab::all() {
                let tabs = &state.router.logs_tabs;
                let selected = tabs.current() == tab;
                let enabled = tabs.is_selectable(tab);
                let text = if enabled {
                    RichText::new(tab.label())
                } else {
                    RichText::new(tab.label()).color(theme::TAB_DISABLED)
                };
                let response = ui
                    .add_enabled(enabled, egui::SelectableLabel::new(selected, text))
                    .on_disabled_hover_text("Log search is not enabled for this deployment.");
                if response.clicked() {
                    state.select_logs_tab(tab);
                }
            }
        });

        ui.separator();

        ui.vertical(|ui| match state.router.logs_tabs.visible_view() {
            Some(LogsTab::ErrorLogs) => {
                ui.heading(LogsTab::ErrorLogs.label());
                ui.label("Live error log stream from the storage backend.");
                ui.label(
                    RichText::new("The error log view is served by the console backend.")
                        .weak(),
                );
            }
            Some(LogsTab::AuditLogs) => {
                ui.heading(LogsTab::AuditLogs.label());
                ui.label("Search the audit log by time range, bucket, object, and API.");
                ui.label(
                    RichText::new("The audit log search is served by the console backend.")
                        .weak(),
                );
            }
            None => {}
        });
    });
}
