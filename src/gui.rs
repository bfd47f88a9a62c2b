// Vizboard - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the launcher bar, the view dialogs, and the status bar.

use crate::app::state::AppState;
use crate::ui;
use crate::util::constants::{APP_NAME, APP_VERSION};

/// The Vizboard application.
pub struct VizboardApp {
    pub state: AppState,
}

impl VizboardApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for VizboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Escape closes the open view, same as the dialog close button.
        // While a text box has focus, Escape only releases that focus.
        let escape_pressed = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        let widget_focused = ctx.memory(|m| m.focused().is_some());
        if escape_pressed && !widget_focused && self.state.active.is_some() {
            self.state.close_view();
        }

        // Launcher bar
        egui::TopBottomPanel::top("launcher").show(ctx, |ui| {
            ui::panels::menu::render(ui, &mut self.state);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(seed) = self.state.seed {
                        ui.label(
                            egui::RichText::new(format!("seed {seed}"))
                                .small()
                                .weak(),
                        );
                        ui.separator();
                    }
                    if let Some(kind) = self.state.active_kind() {
                        ui.label(format!("{} view", kind.label()));
                    }
                });
            });
        });

        // Central panel: hint text when nothing is open. The open view
        // renders on top of it as a centred dialog.
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.active.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{APP_NAME} v{APP_VERSION}\n\
                             Toggle the menu above and pick a view:\n\
                             sales charts, activity heatmap, user table, or product grid."
                        ))
                        .weak(),
                    );
                });
            }
        });

        // View dialogs. At most one view is open; each render checks for
        // its own variant and returns otherwise.
        ui::panels::chart::render(ctx, &mut self.state);
        ui::panels::heatmap::render(ctx, &mut self.state);
        ui::panels::table::render(ctx, &mut self.state);
        ui::panels::grid::render(ctx, &mut self.state);
    }
}
