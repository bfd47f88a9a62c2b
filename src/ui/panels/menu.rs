// Vizboard - ui/panels/menu.rs
//
// Launcher bar: app title, the menu toggle, and (when expanded) the
// centred strip of view icon buttons. Opening a view while another is
// open replaces it; the strip itself stays as it was.

use crate::app::state::{AppState, ViewKind};
use crate::ui::theme;
use crate::util::constants::{APP_NAME, APP_VERSION};

/// Icon glyph for a view's launcher button.
fn icon(kind: ViewKind) -> &'static str {
    match kind {
        ViewKind::Chart => "\u{1f4ca}",
        ViewKind::Heatmap => "\u{1f525}",
        ViewKind::Table => "\u{1f4cb}",
        ViewKind::Grid => "\u{1f4e6}",
    }
}

/// Render the launcher bar inside the top panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let arrow = if state.menu_open {
            "\u{25b2}"
        } else {
            "\u{25bc}"
        };
        let toggle = ui
            .add(egui::Button::new(egui::RichText::new(arrow).size(16.0)).frame(false))
            .on_hover_text(if state.menu_open {
                "Hide views"
            } else {
                "Show views"
            });
        if toggle.clicked() {
            state.toggle_menu();
        }

        ui.label(egui::RichText::new(APP_NAME).size(17.0).strong());
        ui.label(
            egui::RichText::new(format!("v{APP_VERSION}"))
                .small()
                .weak(),
        );
    });

    if state.menu_open {
        ui.add_space(6.0);
        let count = ViewKind::all().len() as f32;
        let strip_width =
            count * theme::MENU_BUTTON_SIZE + (count - 1.0) * theme::MENU_BUTTON_GAP;
        ui.horizontal(|ui| {
            let pad = ((ui.available_width() - strip_width) / 2.0).max(0.0);
            ui.add_space(pad);
            ui.spacing_mut().item_spacing.x = theme::MENU_BUTTON_GAP;
            for kind in ViewKind::all() {
                let button = egui::Button::new(egui::RichText::new(icon(*kind)).size(32.0))
                    .min_size(egui::vec2(theme::MENU_BUTTON_SIZE, theme::MENU_BUTTON_SIZE));
                if ui.add(button).on_hover_text(kind.label()).clicked() {
                    state.open_view(*kind);
                }
            }
        });
        ui.add_space(8.0);
    } else {
        ui.add_space(4.0);
    }
}
