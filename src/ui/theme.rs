// PortalNav - ui/theme.rs
//
// Side menu colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Side menu background.
pub const MENU_BG: Color32 = Color32::from_rgb(8, 28, 66);

/// Divider drawn above each menu section.
pub const MENU_DIVIDER: Color32 = Color32::from_rgb(28, 59, 100);

/// Inactive entry text (white at 80 %).
pub const MENU_TEXT: Color32 = Color32::from_rgba_premultiplied(204, 204, 204, 204);

/// Active entry and section header text.
pub const MENU_TEXT_ACTIVE: Color32 = Color32::WHITE;

/// Collapse arrow next to a collapsible section header.
pub const MENU_ARROW: Color32 = Color32::from_rgba_premultiplied(74, 74, 74, 74);

/// Disabled tab text on the logs page.
pub const TAB_DISABLED: Color32 = Color32::from_rgb(107, 114, 128); // Gray 500

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 250.0;
pub const MENU_ITEM_HEIGHT: f32 = 32.0;
pub const MENU_HEADER_SIZE: f32 = 10.0;
pub const MENU_SUBTITLE_SIZE: f32 = 13.0;
pub const MENU_ITEM_SIZE: f32 = 15.0;
pub const LOGO_SIZE: f32 = 22.0;
pub const LOGS_TAB_WIDTH: f32 = 160.0;

/// Apply the configured theme and body font size to the egui context.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        if let Some(body) = style.text_styles.get_mut(&egui::TextStyle::Body) {
            body.size = font_size;
        }
        if let Some(button) = style.text_styles.get_mut(&egui::TextStyle::Button) {
            button.size = font_size;
        }
    });
}
