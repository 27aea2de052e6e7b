// PortalNav - ui/panels/menu.rs
//
// Side menu: logo, permission-filtered sections separated by dividers,
// collapsible section headers, and the Logout entry.

use crate::app::state::AppState;
use crate::core::model::{EntryKind, MenuEntry};
use crate::ui::theme;
use egui::{RichText, Sense, Stroke};

/// Render the side menu.
///
/// `logout_in_flight` disables the Logout entry while a request is running.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, logout_in_flight: bool) {
    ui.add_space(20.0);
    let logo = if state.operator_mode {
        "OPERATOR"
    } else {
        "CONSOLE"
    };
    ui.label(
        RichText::new(logo)
            .size(theme::LOGO_SIZE)
            .strong()
            .color(theme::MENU_TEXT_ACTIVE),
    );
    ui.add_space(24.0);

    // Clicks are collected and applied after the loop so the sections
    // snapshot is not held across mutations of `state`.
    let mut activated: Option<MenuEntry> = None;
    let mut toggled: Option<String> = None;

    for section in state.visible_menu() {
        divider(ui);

        if let Some(group) = state.group(&section.group) {
            if let Some(ref label) = group.label {
                let open = state.collapse.is_open(&group.group);
                if section_header(ui, label, group.collapsible.then_some(open)) {
                    toggled = Some(group.group.clone());
                }
            }
        }

        if !state.collapse.is_open(&section.group) {
            continue;
        }

        for entry in &section.entries {
            match entry.kind {
                EntryKind::Item => {
                    let active = entry.route.as_deref().is_some_and(|r| state.is_active(r));
                    if menu_item(ui, entry, active) {
                        activated = Some(entry.clone());
                    }
                }
                EntryKind::Title => {
                    ui.label(
                        RichText::new(&entry.label)
                            .size(theme::MENU_SUBTITLE_SIZE)
                            .strong()
                            .color(theme::MENU_TEXT_ACTIVE),
                    );
                }
            }
        }
    }

    divider(ui);
    let logout = egui::Button::new(RichText::new("Logout").size(theme::MENU_ITEM_SIZE))
        .frame(false)
        .min_size(egui::vec2(ui.available_width(), theme::MENU_ITEM_HEIGHT));
    if ui.add_enabled(!logout_in_flight, logout).clicked() {
        state.request_logout = true;
    }

    if let Some(group) = toggled {
        state.toggle_group(&group);
    }
    if let Some(entry) = activated {
        state.activate_entry(&entry);
    }
}

fn divider(ui: &mut egui::Ui) {
    ui.scope(|ui| {
        ui.visuals_mut().widgets.noninteractive.bg_stroke = Stroke::new(1.0, theme::MENU_DIVIDER);
        ui.separator();
    });
}

/// Section header. `open` is `None` for non-collapsible groups.
/// Returns true when a collapsible header was clicked.
fn section_header(ui: &mut egui::Ui, label: &str, open: Option<bool>) -> bool {
    let header = |s: String| {
        RichText::new(s)
            .size(theme::MENU_HEADER_SIZE)
            .strong()
            .color(theme::MENU_TEXT_ACTIVE)
    };
    match open {
        Some(open) => {
            let arrow = if open { "\u{25be}" } else { "\u{25b8}" };
            ui.horizontal(|ui| {
                let clicked = ui
                    .add(egui::Label::new(header(label.to_uppercase())).sense(Sense::click()))
                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                    .clicked();
                let arrow_clicked = ui
                    .add(
                        egui::Label::new(RichText::new(arrow).color(theme::MENU_ARROW))
                            .sense(Sense::click()),
                    )
                    .clicked();
                clicked || arrow_clicked
            })
            .inner
        }
        None => {
            ui.label(header(label.to_uppercase()));
            false
        }
    }
}

/// A navigable entry. External links carry a trailing arrow.
fn menu_item(ui: &mut egui::Ui, entry: &MenuEntry, active: bool) -> bool {
    let label = if entry.external_url.is_some() {
        format!("{}  \u{2197}", entry.label)
    } else {
        entry.label.clone()
    };
    let colour = if active {
        theme::MENU_TEXT_ACTIVE
    } else {
        theme::MENU_TEXT
    };
    let mut text = RichText::new(label).size(theme::MENU_ITEM_SIZE).color(colour);
    if active {
        text = text.strong();
    }
    let button = egui::Button::new(text)
        .selected(active)
        .frame(active)
        .min_size(egui::vec2(ui.available_width(), theme::MENU_ITEM_HEIGHT));
    ui.add(button).clicked()
}
