// Vizboard - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no randomness (Core depends on std plus serialisation/date crates only).
//
// These types are the shared vocabulary across all layers.

use chrono::NaiveDate;
use serde::Serialize;

// =============================================================================
// Sales chart
// =============================================================================

/// One month of sales figures for the analytics charts.
///
/// The chart view renders the same seven points three ways: a grouped bar
/// chart over all three series, a line chart over sales and revenue, and
/// an area chart over profit alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesPoint {
    /// Abbreviated month name ("Jan" .. "Jul").
    pub period: &'static str,

    /// Units sold during the period.
    pub sales: u32,

    /// Revenue earned during the period.
    pub revenue: u32,

    /// Profit retained during the period.
    pub profit: u32,
}

// =============================================================================
// Activity heatmap
// =============================================================================

/// One hour-of-day row of the weekly activity heatmap.
///
/// Holds an intensity value per weekday, Monday first, each in 0..100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatRow {
    /// Hour label ("0:00" .. "23:00").
    pub hour: String,

    /// Intensity per weekday, index 0 = Monday.
    pub values: [u8; crate::util::constants::HEAT_DAYS],
}

// =============================================================================
// User table
// =============================================================================

/// Account status of a generated user, ordered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    Active,
    Inactive,
    Pending,
}

impl Status {
    /// Returns all variants in display order.
    pub fn all() -> &'static [Status] {
        &[Status::Active, Status::Inactive, Status::Pending]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
            Status::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Role assigned to a generated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Admin,
    User,
    Manager,
    Developer,
    Designer,
}

impl Role {
    /// Returns all variants in display order.
    pub fn all() -> &'static [Role] {
        &[
            Role::Admin,
            Role::User,
            Role::Manager,
            Role::Developer,
            Role::Designer,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
            Role::Manager => "Manager",
            Role::Developer => "Developer",
            Role::Designer => "Designer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single user row in the management table.
///
/// This is the unit that flows through filtering, pagination, and export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// Sequential ID starting at 1.
    pub id: u32,

    /// Full display name.
    pub name: String,

    /// Contact email ("user<id>@example.com").
    pub email: String,

    /// Assigned role.
    pub role: Role,

    /// Account status.
    pub status: Status,

    /// Date the user joined.
    pub join_date: NaiveDate,

    /// Lifetime revenue attributed to the user, in whole dollars.
    pub revenue: u32,
}

// =============================================================================
// Product grid
// =============================================================================

/// Product category, used both on cards and in the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Sports,
    Books,
}

impl Category {
    /// Returns all variants in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Electronics,
            Category::Fashion,
            Category::Home,
            Category::Sports,
            Category::Books,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Home => "Home",
            Category::Sports => "Sports",
            Category::Books => "Books",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single product card in the grid view.
#[derive(Debug, Clone, PartialEq)]
pub struct GridItem {
    /// Sequential ID starting at 1.
    pub id: u32,

    /// Product title from the fixed titles pool.
    pub title: String,

    /// Short marketing description from the fixed descriptions pool.
    pub description: String,

    /// Price in whole dollars.
    pub price: u32,

    /// Assigned category.
    pub category: Category,

    /// Star rating, either 3.5 or 4.5.
    pub rating: f32,

    /// Remote image URL. Kept as data; the card renders a deterministic
    /// placeholder block instead of fetching it.
    pub image_url: String,

    /// Whether the product can currently be added to the cart.
    pub in_stock: bool,

    /// Whether the user has marked the product as liked. Always starts false.
    pub liked: bool,
}
