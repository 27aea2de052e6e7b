// PortalNav - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the side menu, the route pages, and the logout lifecycle.

use crate::app::logout::{HttpLogoutClient, LogoutManager};
use crate::app::state::AppState;
use crate::ui;
use crate::util::constants::{LOGOUT_POLL_INTERVAL_MS, LOGS_ROUTE};

/// The PortalNav application.
pub struct PortalNavApp {
    pub state: AppState,
    pub logout_manager: LogoutManager,
}

impl PortalNavApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            logout_manager: LogoutManager::new(),
        }
    }
}

impl eframe::App for PortalNavApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Handle flags set by panels ----
        // request_logout: the menu's Logout entry was clicked.
        if self.state.request_logout {
            self.state.request_logout = false;
            let client = HttpLogoutClient::new(&self.state.server_url)
                .with_token(self.state.session.token());
            if self.logout_manager.start(Box::new(client)) {
                self.state.status_message = "Logging out\u{2026}".to_string();
            }
        }

        // Either outcome of the request ends the local session.
        if self
            .logout_manager
            .complete(self.state.session.as_mut(), &mut self.state.router)
        {
            self.state.status_message = "Logged out.".to_string();
        }
        if self.logout_manager.in_flight() {
            ctx.request_repaint_after(std::time::Duration::from_millis(
                LOGOUT_POLL_INTERVAL_MS,
            ));
        }

        // pending_external_url: an entry such as Documentation opens externally.
        if let Some(url) = self.state.pending_external_url.take() {
            ctx.open_url(egui::OpenUrl::new_tab(url));
        }

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.state.debug_mode {
                        ui.label(egui::RichText::new("DEBUG").weak());
                    }
                    if !self.state.warnings.is_empty() {
                        ui.label(format!("{} warning(s)", self.state.warnings.len()))
                            .on_hover_text(self.state.warnings.join("\n"));
                    }
                });
            });
        });

        // Side menu, only while the session is live.
        if self.state.is_logged_in() {
            let in_flight = self.logout_manager.in_flight();
            egui::SidePanel::left("side_menu")
                .default_width(ui::theme::SIDEBAR_WIDTH)
                .resizable(false)
                .frame(
                    egui::Frame::default()
                        .fill(ui::theme::MENU_BG)
                        .inner_margin(egui::Margin::same(12)),
                )
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("side_menu_scroll")
                        .auto_shrink([false; 2])
                        .show(ui, |ui| {
                            ui::panels::menu::render(ui, &mut self.state, in_flight);
                        });
                });
        }

        // Central panel: current route
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.router.current() == LOGS_ROUTE {
                ui::panels::logs::render(ui, &mut self.state);
            } else {
                ui::panels::page::render(ui, ctx, &self.state);
            }
        });
    }
}
