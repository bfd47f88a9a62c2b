// Vizboard - ui/panels/grid.rs
//
// Product grid dialog: searchable, category-filtered cards with a like
// toggle and an add-to-cart button per product. Like and cart clicks
// are collected during the card loop and applied after it, so the loop
// only ever borrows the items immutably.

use crate::app::state::{ActiveView, AppState, GridState};
use crate::core::model::{Category, GridItem};
use crate::ui::theme;
use crate::util::constants::GRID_CARDS_PER_ROW;
use egui::{pos2, vec2, Align2, Color32, FontId, Rect, Sense};

/// Render the product grid dialog (if the grid view is open).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let grid = match state.active.as_mut() {
        Some(ActiveView::Grid(grid)) => grid,
        _ => return,
    };

    let mut open = true;
    let mut status: Option<String> = None;
    egui::Window::new("Product Grid")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(GRID_CARDS_PER_ROW as f32 * (theme::CARD_WIDTH + 24.0) + 24.0)
        .min_width(theme::CARD_WIDTH + 48.0)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            controls(ui, grid);
            ui.add_space(8.0);

            if grid.filtered.is_empty() {
                ui.add_space(32.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("No products found").weak());
                });
                ui.add_space(32.0);
            } else {
                cards(ui, grid, &mut status);
            }
        });

    if let Some(message) = status {
        state.status_message = message;
    }
    if !open {
        state.close_view();
    }
}

/// Search box and category selector. Either change reapplies the filter.
fn controls(ui: &mut egui::Ui, grid: &mut GridState) {
    ui.horizontal(|ui| {
        let search = ui.add(
            egui::TextEdit::singleline(&mut grid.filter.query)
                .hint_text("Search products...")
                .desired_width(260.0),
        );

        ui.label("Category:");
        let selected = grid.filter.category.map_or("All", |c| c.label());
        let mut category_changed = false;
        egui::ComboBox::from_id_salt("grid_category")
            .width(110.0)
            .selected_text(selected)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(grid.filter.category.is_none(), "All")
                    .clicked()
                {
                    grid.filter.category = None;
                    category_changed = true;
                }
                for category in Category::all() {
                    if ui
                        .selectable_label(grid.filter.category == Some(*category), category.label())
                        .clicked()
                    {
                        grid.filter.category = Some(*category);
                        category_changed = true;
                    }
                }
            });

        if search.changed() || category_changed {
            grid.apply_filter();
        }
    });
}

/// The card rows. Clicks are deferred into `like_toggle` / `cart_add`
/// and applied once the loop has released its borrows.
fn cards(ui: &mut egui::Ui, grid: &mut GridState, status: &mut Option<String>) {
    let mut like_toggle: Option<u32> = None;
    let mut cart_add: Option<u32> = None;

    egui::ScrollArea::vertical()
        .id_salt("product_cards")
        .max_height(540.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for chunk in grid.filtered.chunks(GRID_CARDS_PER_ROW) {
                ui.horizontal_top(|ui| {
                    for &item_idx in chunk {
                        card(ui, &grid.items[item_idx], &mut like_toggle, &mut cart_add);
                    }
                });
                ui.add_space(8.0);
            }
        });

    if let Some(id) = like_toggle {
        match grid.toggle_like(id) {
            Some(true) => *status = Some("Added to favourites.".to_string()),
            Some(false) => *status = Some("Removed from favourites.".to_string()),
            None => {}
        }
    }
    if let Some(id) = cart_add {
        if let Some(item) = grid.items.iter().find(|item| item.id == id) {
            tracing::debug!(product = item.title.as_str(), "Added to cart");
            *status = Some(format!("{} added to cart.", item.title));
        }
    }
}

fn card(
    ui: &mut egui::Ui,
    item: &GridItem,
    like_toggle: &mut Option<u32>,
    cart_add: &mut Option<u32>,
) {
    ui.group(|ui| {
        ui.set_width(theme::CARD_WIDTH);
        ui.vertical(|ui| {
            // Placeholder image block, colour keyed to the product ID so it
            // is stable across filter changes.
            let (rect, _) = ui.allocate_exact_size(
                vec2(ui.available_width(), theme::CARD_IMAGE_HEIGHT),
                Sense::hover(),
            );
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 4.0, theme::placeholder_colour(item.id));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                item.title.chars().next().unwrap_or('?'),
                FontId::proportional(36.0),
                Color32::from_white_alpha(40),
            );

            if !item.in_stock {
                let galley = painter.layout_no_wrap(
                    "Out of Stock".to_string(),
                    FontId::proportional(10.0),
                    Color32::WHITE,
                );
                let badge_pos = pos2(rect.left() + 8.0, rect.top() + 8.0);
                let badge = Rect::from_min_size(badge_pos, galley.size() + vec2(10.0, 6.0));
                painter.rect_filled(badge, 3.0, Color32::from_rgb(211, 47, 47));
                painter.galley(badge_pos + vec2(5.0, 3.0), galley, Color32::WHITE);
            }

            // Like toggle: red heart when liked, dim when not.
            let heart_colour = if item.liked {
                Color32::from_rgb(211, 47, 47)
            } else {
                ui.style().visuals.weak_text_color()
            };
            let heart_rect = Rect::from_min_size(
                pos2(rect.right() - 26.0, rect.top() + 4.0),
                vec2(22.0, 22.0),
            );
            let heart = ui
                .put(
                    heart_rect,
                    egui::Button::new(
                        egui::RichText::new("\u{2665}").size(15.0).color(heart_colour),
                    )
                    .small()
                    .frame(false),
                )
                .on_hover_text(if item.liked {
                    "Remove from favourites"
                } else {
                    "Add to favourites"
                });
            if heart.clicked() {
                *like_toggle = Some(item.id);
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(item.title.as_str()).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(item.category.label()).small().weak());
                });
            });
            ui.label(egui::RichText::new(item.description.as_str()).small().weak());
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("\u{2605} {:.1}", item.rating))
                        .color(theme::RATING),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("${}", item.price))
                            .size(16.0)
                            .strong()
                            .color(theme::PRICE),
                    );
                });
            });
            ui.add_space(6.0);

            let cart_label = if item.in_stock {
                "Add to Cart"
            } else {
                "Out of Stock"
            };
            let cart_button = egui::Button::new(cart_label).min_size(vec2(ui.available_width(), 0.0));
            if ui.add_enabled(item.in_stock, cart_button).clicked() {
                *cart_add = Some(item.id);
            }
        });
    });
}
