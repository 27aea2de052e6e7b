// PortalNav - ui/panels/page.rs
//
// Central panel for every route other than the logs page: the login screen
// shown after logout, and a placeholder for backend-served pages.

use crate::app::state::AppState;
use crate::util::constants::{APP_NAME, LOGIN_ROUTE};

/// Render the page for the current route.
pub fn render(ui: &mut egui::Ui, ctx: &egui::Context, state: &AppState) {
    let route = state.router.current();

    if route == LOGIN_ROUTE {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading(format!("{APP_NAME}: signed out"));
            ui.add_space(8.0);
            ui.label("Your session has ended.");
            ui.label(format!("Sign in again through the console at {}.", state.server_url));
            ui.add_space(16.0);
            if ui.button("Exit").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
        return;
    }

    let title = state
        .entries
        .iter()
        .find(|e| e.route.as_deref() == Some(route))
        .map(|e| e.label.as_str())
        .unwrap_or(route);

    ui.heading(title);
    ui.separator();
    ui.label(egui::RichText::new(format!("{}{route}", state.server_url)).monospace());
    if !state.allowed.contains(route) {
        ui.colored_label(
            egui::Color32::from_rgb(217, 119, 6), // Amber 600
            "This page is not in the session's allowed pages.",
        );
    }
}
