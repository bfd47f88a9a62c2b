// Vizboard - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Vizboard";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Sales chart data
// =============================================================================

/// Number of monthly data points in the sales series (January to July).
pub const SALES_PERIOD_COUNT: usize = 7;

// =============================================================================
// Heatmap data
// =============================================================================

/// Hours per day in the weekly activity heatmap (rows).
pub const HEAT_HOURS: usize = 24;

/// Days per week in the weekly activity heatmap (columns).
pub const HEAT_DAYS: usize = 7;

/// Column headers for the weekly activity heatmap, Monday first.
pub const DAY_NAMES: [&str; HEAT_DAYS] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Exclusive upper bound for generated intensity values (0..100).
pub const HEAT_MAX_INTENSITY: u8 = 100;

/// Intensity thresholds separating the five heat levels, ascending.
/// A value below `HEAT_THRESHOLDS[i]` falls into level `i`.
pub const HEAT_THRESHOLDS: [u8; 4] = [20, 40, 60, 80];

/// Intensity above which cell text switches to the light colour so that it
/// stays readable on the darker heat fills.
pub const HEAT_LIGHT_TEXT_THRESHOLD: u8 = 60;

/// Side length of the square user-engagement grid.
pub const ENGAGEMENT_GRID_DIM: usize = 10;

/// Total cell count of the user-engagement grid.
pub const ENGAGEMENT_CELL_COUNT: usize = ENGAGEMENT_GRID_DIM * ENGAGEMENT_GRID_DIM;

// =============================================================================
// User table data
// =============================================================================

/// Number of user rows generated for the management table.
pub const TABLE_ROW_COUNT: usize = 20;

/// Exclusive upper bound for generated per-user revenue.
pub const TABLE_REVENUE_MAX: u32 = 100_000;

/// Calendar year used for generated join dates.
pub const TABLE_JOIN_YEAR: i32 = 2023;

/// Inclusive upper bound for generated join-date day-of-month.
/// Capped at 28 so any month of the year is valid.
pub const TABLE_JOIN_MAX_DAY: u32 = 28;

/// Selectable page sizes for the user table, ascending.
pub const TABLE_PAGE_SIZES: &[usize] = &[5, 10, 25];

/// Page size the user table starts with.
pub const DEFAULT_TABLE_PAGE_SIZE: usize = 10;

// =============================================================================
// Product grid data
// =============================================================================

/// Number of product cards generated for the grid view.
pub const GRID_ITEM_COUNT: usize = 12;

/// Minimum generated product price in whole dollars.
pub const PRICE_MIN: u32 = 50;

/// Width of the random price band added on top of `PRICE_MIN`.
pub const PRICE_RANGE: u32 = 500;

/// Base product rating; a random whole star is added on top, yielding
/// ratings of 3.5 or 4.5.
pub const RATING_BASE: f32 = 3.5;

/// Probability that a generated product is in stock.
pub const IN_STOCK_PROBABILITY: f64 = 0.8;

/// Number of product cards rendered per grid row.
pub const GRID_CARDS_PER_ROW: usize = 3;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
