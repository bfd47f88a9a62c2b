// Vizboard - ui/panels/chart.rs
//
// Sales analytics dialog: a grouped bar chart over all three series, a
// line chart over sales and revenue, and an area chart over profit.
// Charts are painted straight into allocated rects; the fixed series is
// small enough that no plotting crate is warranted.

use crate::app::state::{ActiveView, AppState};
use crate::core::model::SalesPoint;
use crate::ui::theme;
use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke};

/// Width reserved on the left of each plot for y-axis value labels.
const Y_AXIS_WIDTH: f32 = 44.0;

/// Height reserved under each plot for the month labels.
const X_AXIS_HEIGHT: f32 = 16.0;

/// Padding above and to the right of the plot area.
const TOP_PADDING: f32 = 6.0;
const RIGHT_PADDING: f32 = 8.0;

/// Number of horizontal gridline intervals.
const GRID_STEPS: usize = 4;

/// Render the sales analytics dialog (if the chart view is open).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let chart = match state.active.as_ref() {
        Some(ActiveView::Chart(chart)) => chart,
        _ => return,
    };

    let mut open = true;
    egui::Window::new("Sales Analytics Dashboard")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(760.0)
        .min_width(560.0)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("chart_scroll")
                .max_height(620.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    section_heading(ui, "Monthly Sales Performance");
                    bar_chart(ui, &chart.series);
                    legend(
                        ui,
                        &[
                            ("Sales", theme::SERIES_SALES),
                            ("Revenue", theme::SERIES_REVENUE),
                            ("Profit", theme::SERIES_PROFIT),
                        ],
                    );

                    ui.add_space(18.0);
                    section_heading(ui, "Revenue Trends");
                    line_chart(ui, &chart.series);
                    legend(
                        ui,
                        &[
                            ("Sales", theme::SERIES_SALES),
                            ("Revenue", theme::SERIES_REVENUE),
                        ],
                    );

                    ui.add_space(18.0);
                    section_heading(ui, "Profit Distribution");
                    area_chart(ui, &chart.series);
                    legend(ui, &[("Profit", theme::SERIES_SALES)]);
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

fn legend(ui: &mut egui::Ui, entries: &[(&str, Color32)]) {
    ui.horizontal(|ui| {
        ui.add_space(Y_AXIS_WIDTH);
        for (label, colour) in entries {
            ui.label(egui::RichText::new("\u{25a0}").color(*colour));
            ui.label(egui::RichText::new(*label).small());
            ui.add_space(8.0);
        }
    });
}

/// Inner plot area with its value scale. Maps data space to screen space.
struct PlotFrame {
    rect: Rect,
    y_max: f32,
}

impl PlotFrame {
    /// Left edge and width of the slot for data point `index`.
    fn x_slot(&self, index: usize, count: usize) -> (f32, f32) {
        let width = self.rect.width() / count as f32;
        (self.rect.left() + index as f32 * width, width)
    }

    /// Screen y for a data value.
    fn y(&self, value: f32) -> f32 {
        self.rect.bottom() - value / self.y_max * self.rect.height()
    }
}

/// Allocate a chart-sized rect and draw the shared furniture: gridlines,
/// y-axis value labels, and the month labels along the bottom.
fn plot_frame(ui: &mut egui::Ui, series: &[SalesPoint], y_max: f32) -> (egui::Painter, PlotFrame) {
    let (outer, _response) = ui.allocate_exact_size(
        vec2(ui.available_width(), theme::CHART_HEIGHT),
        Sense::hover(),
    );
    let painter = ui.painter_at(outer);

    let rect = Rect::from_min_max(
        pos2(outer.left() + Y_AXIS_WIDTH, outer.top() + TOP_PADDING),
        pos2(outer.right() - RIGHT_PADDING, outer.bottom() - X_AXIS_HEIGHT),
    );
    let frame = PlotFrame { rect, y_max };

    for step in 0..=GRID_STEPS {
        let fraction = step as f32 / GRID_STEPS as f32;
        let y = rect.bottom() - fraction * rect.height();
        painter.extend(Shape::dashed_line(
            &[pos2(rect.left(), y), pos2(rect.right(), y)],
            Stroke::new(1.0, theme::CHART_GRID),
            3.0,
            3.0,
        ));
        painter.text(
            pos2(rect.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            format!("{}", (fraction * y_max).round() as u32),
            FontId::proportional(10.0),
            theme::CHART_AXIS_TEXT,
        );
    }

    for (i, point) in series.iter().enumerate() {
        let (slot_left, slot_width) = frame.x_slot(i, series.len());
        painter.text(
            pos2(slot_left + slot_width / 2.0, rect.bottom() + 3.0),
            Align2::CENTER_TOP,
            point.period,
            FontId::proportional(10.0),
            theme::CHART_AXIS_TEXT,
        );
    }

    (painter, frame)
}

/// Round a series maximum up to a clean axis ceiling (1/2/2.5/5 times a
/// power of ten).
fn nice_ceil(max: f32) -> f32 {
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f32.powf(max.log10().floor());
    let normalised = max / magnitude;
    let factor = if normalised <= 1.0 {
        1.0
    } else if normalised <= 2.0 {
        2.0
    } else if normalised <= 2.5 {
        2.5
    } else if normalised <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

fn bar_chart(ui: &mut egui::Ui, series: &[SalesPoint]) {
    let data_max = series
        .iter()
        .map(|p| p.sales.max(p.revenue).max(p.profit))
        .max()
        .unwrap_or(0);
    let (painter, frame) = plot_frame(ui, series, nice_ceil(data_max as f32));

    let colours = [
        theme::SERIES_SALES,
        theme::SERIES_REVENUE,
        theme::SERIES_PROFIT,
    ];
    for (i, point) in series.iter().enumerate() {
        let (slot_left, slot_width) = frame.x_slot(i, series.len());
        let bar_width = slot_width * 0.2;
        let values = [point.sales, point.revenue, point.profit];
        for (j, (&value, &colour)) in values.iter().zip(colours.iter()).enumerate() {
            let x = slot_left + slot_width * 0.2 + j as f32 * bar_width;
            let bar = Rect::from_min_max(
                pos2(x + 1.0, frame.y(value as f32)),
                pos2(x + bar_width - 1.0, frame.rect.bottom()),
            );
            painter.rect_filled(bar, 1.0, colour);
        }
    }
}

fn line_chart(ui: &mut egui::Ui, series: &[SalesPoint]) {
    let data_max = series
        .iter()
        .map(|p| p.sales.max(p.revenue))
        .max()
        .unwrap_or(0);
    let (painter, frame) = plot_frame(ui, series, nice_ceil(data_max as f32));

    let lines: [(Color32, Vec<u32>); 2] = [
        (
            theme::SERIES_SALES,
            series.iter().map(|p| p.sales).collect(),
        ),
        (
            theme::SERIES_REVENUE,
            series.iter().map(|p| p.revenue).collect(),
        ),
    ];
    for (colour, values) in lines {
        let points: Vec<Pos2> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let (slot_left, slot_width) = frame.x_slot(i, series.len());
                pos2(slot_left + slot_width / 2.0, frame.y(value as f32))
            })
            .collect();
        painter.add(Shape::line(points.clone(), Stroke::new(2.0, colour)));
        for point in points {
            painter.circle_filled(point, 3.0, colour);
        }
    }
}

fn area_chart(ui: &mut egui::Ui, series: &[SalesPoint]) {
    let data_max = series.iter().map(|p| p.profit).max().unwrap_or(0);
    let (painter, frame) = plot_frame(ui, series, nice_ceil(data_max as f32));

    let points: Vec<Pos2> = series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let (slot_left, slot_width) = frame.x_slot(i, series.len());
            pos2(slot_left + slot_width / 2.0, frame.y(point.profit as f32))
        })
        .collect();

    // The fill is one trapezoid per segment: each is convex even though
    // the outline as a whole need not be.
    let fill = theme::SERIES_SALES.gamma_multiply(0.35);
    for pair in points.windows(2) {
        let quad = vec![
            pair[0],
            pair[1],
            pos2(pair[1].x, frame.rect.bottom()),
            pos2(pair[0].x, frame.rect.bottom()),
        ];
        painter.add(Shape::convex_polygon(quad, fill, Stroke::NONE));
    }
    painter.add(Shape::line(points, Stroke::new(2.0, theme::SERIES_SALES)));
}
