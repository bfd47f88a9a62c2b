// Vizboard - ui/theme.rs
//
// Colour scheme, heat/status colour mapping, and layout constants.
// No dependencies on app state.

use crate::core::heat::HeatLevel;
use crate::core::model::Status;
use egui::Color32;

/// Fill colour for a heat level, coldest to hottest.
pub fn heat_colour(level: HeatLevel) -> Color32 {
    match level {
        HeatLevel::VeryLow => Color32::from_rgb(227, 242, 253), // Blue 50
        HeatLevel::Low => Color32::from_rgb(144, 202, 249),     // Blue 200
        HeatLevel::Medium => Color32::from_rgb(66, 165, 245),   // Blue 400
        HeatLevel::High => Color32::from_rgb(25, 118, 210),     // Blue 700
        HeatLevel::VeryHigh => Color32::from_rgb(13, 71, 161),  // Blue 900
    }
}

/// Text colour for a value drawn on top of its heat fill. Values above
/// the light-text threshold sit on the two darkest fills.
pub fn heat_text_colour(value: u8) -> Color32 {
    if value > crate::util::constants::HEAT_LIGHT_TEXT_THRESHOLD {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}

/// Colour for a user account status.
pub fn status_colour(status: Status) -> Color32 {
    match status {
        Status::Active => Color32::from_rgb(46, 125, 50),    // Green 800
        Status::Inactive => Color32::from_rgb(211, 47, 47),  // Red 700
        Status::Pending => Color32::from_rgb(237, 108, 2),   // Orange 800
    }
}

/// Placeholder block colour for a product card, deterministic per ID so
/// cards keep their colour across filter changes.
pub fn placeholder_colour(id: u32) -> Color32 {
    const PALETTE: [Color32; 6] = [
        Color32::from_rgb(69, 90, 120),   // Slate
        Color32::from_rgb(96, 78, 112),   // Plum
        Color32::from_rgb(58, 104, 94),   // Teal
        Color32::from_rgb(120, 86, 64),   // Umber
        Color32::from_rgb(84, 98, 60),    // Olive
        Color32::from_rgb(110, 72, 88),   // Mauve
    ];
    PALETTE[id as usize % PALETTE.len()]
}

/// Sales chart series colours.
pub const SERIES_SALES: Color32 = Color32::from_rgb(136, 132, 216); // #8884d8
pub const SERIES_REVENUE: Color32 = Color32::from_rgb(130, 202, 157); // #82ca9d
pub const SERIES_PROFIT: Color32 = Color32::from_rgb(255, 198, 88); // #ffc658

/// Chart axis and gridline colours.
pub const CHART_GRID: Color32 = Color32::from_rgb(70, 78, 90);
pub const CHART_AXIS_TEXT: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400

/// Star-rating colour on product cards.
pub const RATING: Color32 = Color32::from_rgb(255, 193, 7); // Amber 500

/// Price colour on product cards.
pub const PRICE: Color32 = Color32::from_rgb(66, 165, 245); // Blue 400

/// Status bar colours.
pub const STATUS_BG: Color32 = Color32::from_rgb(31, 41, 55); // Gray 800
pub const STATUS_TEXT: Color32 = Color32::from_rgb(209, 213, 219); // Gray 300

/// Layout constants.
pub const MENU_BUTTON_SIZE: f32 = 64.0;
pub const MENU_BUTTON_GAP: f32 = 16.0;
pub const CHART_HEIGHT: f32 = 260.0;
pub const HEAT_CELL_HEIGHT: f32 = 20.0;
pub const HEAT_LABEL_WIDTH: f32 = 50.0;
pub const ENGAGEMENT_CELL_MAX: f32 = 40.0;
pub const CARD_WIDTH: f32 = 230.0;
pub const CARD_IMAGE_HEIGHT: f32 = 140.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
