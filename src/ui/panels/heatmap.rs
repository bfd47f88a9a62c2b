// Vizboard - ui/panels/heatmap.rs
//
// Activity heatmap dialog: the 24-hour by weekday grid with its legend,
// and the 10x10 user-engagement grid below it. Cells are painted into a
// single allocated rect per grid; the hovered cell is recovered from the
// pointer position for tooltips.

use crate::app::state::{ActiveView, AppState};
use crate::core::heat::HeatLevel;
use crate::core::model::HeatRow;
use crate::ui::theme;
use crate::util::constants::{DAY_NAMES, ENGAGEMENT_GRID_DIM, HEAT_DAYS};
use egui::{pos2, vec2, Align2, FontId, Rect, Sense};

/// Height of the weekday header row above the weekly grid.
const HEADER_HEIGHT: f32 = 16.0;

/// Render the activity heatmap dialog (if the heatmap view is open).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let heatmap = match state.active.as_ref() {
        Some(ActiveView::Heatmap(heatmap)) => heatmap,
        _ => return,
    };

    let mut open = true;
    egui::Window::new("Activity Heatmap")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(560.0)
        .min_width(420.0)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("heatmap_scroll")
                .max_height(600.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    section_heading(ui, "Weekly Activity Pattern (24 Hours)");
                    weekly_grid(ui, &heatmap.hourly);
                    legend(ui);

                    ui.add_space(18.0);
                    section_heading(ui, "User Engagement Heatmap");
                    engagement_grid(ui, &heatmap.engagement);
                    ui.add_space(4.0);
                });
        });

    if !open {
        state.close_view();
    }
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(15.0).strong());
    ui.add_space(4.0);
}

/// The hour-by-weekday grid: hour labels down the left, day headers on
/// top, one heat-coloured cell per hour/day with its value printed in.
fn weekly_grid(ui: &mut egui::Ui, rows: &[HeatRow]) {
    let grid_width = (ui.available_width() - theme::HEAT_LABEL_WIDTH).max(HEAT_DAYS as f32 * 28.0);
    let cell_width = grid_width / HEAT_DAYS as f32;
    let total = vec2(
        theme::HEAT_LABEL_WIDTH + grid_width,
        HEADER_HEIGHT + rows.len() as f32 * theme::HEAT_CELL_HEIGHT,
    );
    let (rect, response) = ui.allocate_exact_size(total, Sense::hover());
    let painter = ui.painter_at(rect);
    let grid_left = rect.left() + theme::HEAT_LABEL_WIDTH;
    let grid_top = rect.top() + HEADER_HEIGHT;

    for (d, day) in DAY_NAMES.iter().enumerate() {
        painter.text(
            pos2(
                grid_left + (d as f32 + 0.5) * cell_width,
                rect.top() + HEADER_HEIGHT / 2.0,
            ),
            Align2::CENTER_CENTER,
            *day,
            FontId::proportional(10.0),
            theme::CHART_AXIS_TEXT,
        );
    }

    for (h, row) in rows.iter().enumerate() {
        let y = grid_top + h as f32 * theme::HEAT_CELL_HEIGHT;
        painter.text(
            pos2(grid_left - 6.0, y + theme::HEAT_CELL_HEIGHT / 2.0),
            Align2::RIGHT_CENTER,
            &row.hour,
            FontId::proportional(9.0),
            theme::CHART_AXIS_TEXT,
        );
        for (d, &value) in row.values.iter().enumerate() {
            let cell = Rect::from_min_size(
                pos2(grid_left + d as f32 * cell_width, y),
                vec2(cell_width, theme::HEAT_CELL_HEIGHT),
            )
            .shrink(0.5);
            painter.rect_filled(cell, 2.0, theme::heat_colour(HeatLevel::from_value(value)));
            painter.text(
                cell.center(),
                Align2::CENTER_CENTER,
                value.to_string(),
                FontId::proportional(9.0),
                theme::heat_text_colour(value),
            );
        }
    }

    // Recover the hovered cell for the tooltip.
    if let Some(pointer) = response.hover_pos() {
        if pointer.x >= grid_left && pointer.y >= grid_top {
            let d = ((pointer.x - grid_left) / cell_width) as usize;
            let h = ((pointer.y - grid_top) / theme::HEAT_CELL_HEIGHT) as usize;
            if d < HEAT_DAYS && h < rows.len() {
                let value = rows[h].values[d];
                response.on_hover_text(format!("{} {}: {value}%", DAY_NAMES[d], rows[h].hour));
            }
        }
    }
}

/// Legend: one swatch per heat level between the Low and High captions.
fn legend(ui: &mut egui::Ui) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.add_space(theme::HEAT_LABEL_WIDTH);
        ui.label(egui::RichText::new("Low").small().weak());
        for level in HeatLevel::all() {
            let (rect, response) = ui.allocate_exact_size(vec2(40.0, 16.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, theme::heat_colour(*level));
            response.on_hover_text(format!("{} ({}+)", level.label(), level.floor_value()));
        }
        ui.label(egui::RichText::new("High").small().weak());
    });
}

/// The square engagement grid: no labels, just heat-coloured cells with
/// the value printed in.
fn engagement_grid(ui: &mut egui::Ui, cells: &[u8]) {
    let dim = ENGAGEMENT_GRID_DIM;
    let cell_side = (ui.available_width() / dim as f32).min(theme::ENGAGEMENT_CELL_MAX);
    let size = vec2(cell_side * dim as f32, cell_side * dim as f32);
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);

    for (i, &value) in cells.iter().enumerate() {
        let row = i / dim;
        let col = i % dim;
        let cell = Rect::from_min_size(
            pos2(
                rect.left() + col as f32 * cell_side,
                rect.top() + row as f32 * cell_side,
            ),
            vec2(cell_side, cell_side),
        )
        .shrink(1.5);
        painter.rect_filled(cell, 3.0, theme::heat_colour(HeatLevel::from_value(value)));
        painter.text(
            cell.center(),
            Align2::CENTER_CENTER,
            value.to_string(),
            FontId::proportional(9.0),
            theme::heat_text_colour(value),
        );
    }
}
