// Vizboard - ui/panels/table.rs
//
// User management dialog: searchable, paginated table of generated
// users with clipboard export of the filtered set.

use crate::app::state::{ActiveView, AppState, TableState};
use crate::core::export;
use crate::core::model::TableRow;
use crate::ui::theme;
use crate::util::constants::TABLE_PAGE_SIZES;
use egui::Align2;

/// Render the user management dialog (if the table view is open).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let table = match state.active.as_mut() {
        Some(ActiveView::Table(table)) => table,
        _ => return,
    };

    let mut open = true;
    let mut status: Option<String> = None;
    egui::Window::new("User Management Table")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(780.0)
        .min_width(640.0)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let search = ui.add(
                egui::TextEdit::singleline(&mut table.filter.query)
                    .hint_text("Search by name, email, or role...")
                    .desired_width(f32::INFINITY),
            );
            if search.changed() {
                table.apply_filter();
            }
            ui.add_space(8.0);

            if table.filtered.is_empty() {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("No users match the current search.").weak());
                });
                ui.add_space(24.0);
            } else {
                rows_grid(ui, table);
            }

            ui.add_space(8.0);
            ui.separator();
            footer(ui, table, &mut status);
        });

    if let Some(message) = status {
        state.status_message = message;
    }
    if !open {
        state.close_view();
    }
}

/// The header row plus the rows of the current page.
fn rows_grid(ui: &mut egui::Ui, table: &TableState) {
    let range = table.page_range();
    egui::ScrollArea::vertical()
        .id_salt("table_rows")
        .max_height(420.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("user_rows")
                .num_columns(7)
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for header in ["ID", "Name", "Email", "Role", "Status", "Join Date", "Revenue"]
                    {
                        ui.label(egui::RichText::new(header).strong());
                    }
                    ui.end_row();

                    for &row_idx in &table.filtered[range.clone()] {
                        let row = &table.rows[row_idx];
                        ui.label(row.id.to_string());
                        ui.label(row.name.as_str());
                        ui.label(egui::RichText::new(row.email.as_str()).weak());
                        ui.label(row.role.label());
                        ui.colored_label(theme::status_colour(row.status), row.status.label());
                        ui.label(row.join_date.format("%Y-%m-%d").to_string());
                        ui.label(format!("${}", format_thousands(row.revenue)));
                        ui.end_row();
                    }
                });
        });
}

/// Page-size selector, range caption, pager buttons, export buttons.
fn footer(ui: &mut egui::Ui, table: &mut TableState, status: &mut Option<String>) {
    ui.horizontal(|ui| {
        ui.label("Rows per page:");
        egui::ComboBox::from_id_salt("table_page_size")
            .width(60.0)
            .selected_text(table.page_size.to_string())
            .show_ui(ui, |ui| {
                for &size in TABLE_PAGE_SIZES {
                    if ui
                        .selectable_label(table.page_size == size, size.to_string())
                        .clicked()
                    {
                        table.set_page_size(size);
                    }
                }
            });

        ui.separator();

        let range = table.page_range();
        let caption = if range.is_empty() {
            format!("0 of {}", table.filtered.len())
        } else {
            format!(
                "{}-{} of {}",
                range.start + 1,
                range.end,
                table.filtered.len()
            )
        };
        ui.label(caption);

        if ui
            .add_enabled(table.page > 0, egui::Button::new("\u{25c0}"))
            .on_hover_text("Previous page")
            .clicked()
        {
            table.prev_page();
        }
        if ui
            .add_enabled(table.has_next_page(), egui::Button::new("\u{25b6}"))
            .on_hover_text("Next page")
            .clicked()
        {
            table.next_page();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("Copy JSON")
                .on_hover_text("Copy the filtered rows to the clipboard as JSON")
                .clicked()
            {
                *status = Some(copy_export(ui, table, ExportFormat::Json));
            }
            if ui
                .button("Copy CSV")
                .on_hover_text("Copy the filtered rows to the clipboard as CSV")
                .clicked()
            {
                *status = Some(copy_export(ui, table, ExportFormat::Csv));
            }
        });
    });
}

enum ExportFormat {
    Csv,
    Json,
}

/// Serialise the filtered rows into an in-memory buffer and place it on
/// the clipboard. Returns the status line describing the outcome.
fn copy_export(ui: &egui::Ui, table: &TableState, format: ExportFormat) -> String {
    let rows: Vec<TableRow> = table
        .filtered
        .iter()
        .map(|&idx| table.rows[idx].clone())
        .collect();

    let mut buf = Vec::new();
    let (label, result) = match format {
        ExportFormat::Csv => ("CSV", export::export_csv(&rows, &mut buf)),
        ExportFormat::Json => ("JSON", export::export_json(&rows, &mut buf)),
    };

    match result {
        Ok(count) => match String::from_utf8(buf) {
            Ok(text) => {
                ui.ctx().copy_text(text);
                format!("Copied {count} rows to the clipboard as {label}.")
            }
            Err(e) => {
                tracing::error!(error = %e, "Export buffer was not valid UTF-8");
                format!("{label} export failed: output was not valid UTF-8.")
            }
        },
        Err(e) => {
            tracing::error!(error = %e, format = label, "Export failed");
            format!("{label} export failed: {e}")
        }
    }
}

/// Format an integer with comma separators (12345 -> "12,345").
fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
