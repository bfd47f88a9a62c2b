// Vizboard - app/state.rs
//
// Application state management. Holds the launcher menu state, the
// currently open view (with its generated dataset), and the RNG that
// feeds the generators. Owned by the eframe::App implementation.

use crate::core::filter::{self, GridFilter, TableFilter};
use crate::core::generate;
use crate::core::model::{GridItem, HeatRow, SalesPoint, TableRow};
use crate::util::constants::DEFAULT_TABLE_PAGE_SIZE;
use crate::util::error::CliError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::Range;
use std::str::FromStr;

// =============================================================================
// View kinds
// =============================================================================

/// The four views reachable from the launcher menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Chart,
    Heatmap,
    Table,
    Grid,
}

impl ViewKind {
    /// Returns all variants in launcher order.
    pub fn all() -> &'static [ViewKind] {
        &[
            ViewKind::Chart,
            ViewKind::Heatmap,
            ViewKind::Table,
            ViewKind::Grid,
        ]
    }

    /// Human-readable label for tooltips and status messages.
    pub fn label(&self) -> &'static str {
        match self {
            ViewKind::Chart => "Chart",
            ViewKind::Heatmap => "Heatmap",
            ViewKind::Table => "Table",
            ViewKind::Grid => "Grid",
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewKind {
    type Err = CliError;

    /// Parse a view name as given on the command line (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chart" => Ok(ViewKind::Chart),
            "heatmap" => Ok(ViewKind::Heatmap),
            "table" => Ok(ViewKind::Table),
            "grid" => Ok(ViewKind::Grid),
            _ => Err(CliError::UnknownView {
                name: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Per-view state
// =============================================================================

/// State of the sales chart view. The series is fixed, so no RNG is needed.
#[derive(Debug)]
pub struct ChartState {
    /// The seven monthly data points all three charts render.
    pub series: Vec<SalesPoint>,
}

impl ChartState {
    pub fn new() -> Self {
        Self {
            series: generate::sales_series(),
        }
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}

/// State of the activity heatmap view: the weekly hour-by-day grid plus
/// the square engagement grid below it.
#[derive(Debug)]
pub struct HeatmapState {
    /// 24 hour-of-day rows, each with one value per weekday.
    pub hourly: Vec<HeatRow>,

    /// 100 engagement values, row-major over a 10x10 grid.
    pub engagement: Vec<u8>,
}

impl HeatmapState {
    pub fn new(rng: &mut StdRng) -> Self {
        Self {
            hourly: generate::heat_rows(rng),
            engagement: generate::engagement_cells(rng),
        }
    }
}

/// State of the user management table: generated rows plus the current
/// filter and pagination position.
#[derive(Debug)]
pub struct TableState {
    /// All generated rows, in ID order. Never mutated after generation.
    pub rows: Vec<TableRow>,

    /// Current search filter.
    pub filter: TableFilter,

    /// Indices of rows matching the current filter (into `rows`).
    pub filtered: Vec<usize>,

    /// Zero-based page index into `filtered`.
    pub page: usize,

    /// Rows shown per page. Always one of `TABLE_PAGE_SIZES`.
    pub page_size: usize,
}

impl TableState {
    pub fn new(rng: &mut StdRng) -> Self {
        let rows = generate::table_rows(rng);
        let filtered = (0..rows.len()).collect();
        Self {
            rows,
            filter: TableFilter::default(),
            filtered,
            page: 0,
            page_size: DEFAULT_TABLE_PAGE_SIZE,
        }
    }

    /// Recompute filtered indices from the current filter.
    ///
    /// The page index is deliberately left alone; `page_range` clamps it,
    /// so a filter that shrinks the result set cannot cause an
    /// out-of-bounds slice.
    pub fn apply_filter(&mut self) {
        self.filtered = filter::filter_rows(&self.rows, &self.filter);
    }

    /// Change the page size, returning to the first page when it changes.
    pub fn set_page_size(&mut self, size: usize) {
        if size != self.page_size {
            self.page_size = size;
            self.page = 0;
        }
    }

    /// Index range of the current page within `filtered`.
    pub fn page_range(&self) -> Range<usize> {
        filter::page_bounds(self.filtered.len(), self.page, self.page_size)
    }

    /// Whether a later page exists.
    pub fn has_next_page(&self) -> bool {
        self.page_range().end < self.filtered.len()
    }

    /// Step forward one page, if one exists.
    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.page += 1;
        }
    }

    /// Step back one page, if not already on the first.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }
}

/// State of the product grid: generated items plus the current filter.
#[derive(Debug)]
pub struct GridState {
    /// All generated items, in ID order. Only the `liked` flag mutates.
    pub items: Vec<GridItem>,

    /// Current search and category filter.
    pub filter: GridFilter,

    /// Indices of items matching the current filter (into `items`).
    pub filtered: Vec<usize>,
}

impl GridState {
    pub fn new(rng: &mut StdRng) -> Self {
        let items = generate::grid_items(rng);
        let filtered = (0..items.len()).collect();
        Self {
            items,
            filter: GridFilter::default(),
            filtered,
        }
    }

    /// Recompute filtered indices from the current filter.
    pub fn apply_filter(&mut self) {
        self.filtered = filter::filter_items(&self.items, &self.filter);
    }

    /// Flip the liked flag of the item with the given ID, leaving every
    /// other item untouched. Returns the new flag, or None for an
    /// unknown ID.
    pub fn toggle_like(&mut self, id: u32) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.liked = !item.liked;
        Some(item.liked)
    }
}

// =============================================================================
// Active view
// =============================================================================

/// The currently open view with its dataset. At most one view is open;
/// opening another replaces this value wholesale, which is what makes
/// reopening regenerate fresh data.
#[derive(Debug)]
pub enum ActiveView {
    Chart(ChartState),
    Heatmap(HeatmapState),
    Table(TableState),
    Grid(GridState),
}

impl ActiveView {
    /// Which kind of view this is.
    pub fn kind(&self) -> ViewKind {
        match self {
            ActiveView::Chart(_) => ViewKind::Chart,
            ActiveView::Heatmap(_) => ViewKind::Heatmap,
            ActiveView::Table(_) => ViewKind::Table,
            ActiveView::Grid(_) => ViewKind::Grid,
        }
    }
}

// =============================================================================
// Application state
// =============================================================================

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Whether the launcher icon strip is expanded.
    pub menu_open: bool,

    /// The open view, if any.
    pub active: Option<ActiveView>,

    /// RNG feeding the dataset generators. Seeded from the CLI --seed
    /// argument when given, from entropy otherwise.
    pub rng: StdRng,

    /// The seed the RNG was built from, for the status bar.
    pub seed: Option<u64>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state: menu collapsed, no view open.
    pub fn new(seed: Option<u64>, debug_mode: bool) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            menu_open: false,
            active: None,
            rng,
            seed,
            status_message: "Ready. Toggle the menu and choose a view.".to_string(),
            debug_mode,
        }
    }

    /// Expand or collapse the launcher icon strip. The open view, if
    /// any, is unaffected.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Open a view, generating a fresh dataset for it. Replaces any view
    /// already open, including one of the same kind.
    pub fn open_view(&mut self, kind: ViewKind) {
        let view = match kind {
            ViewKind::Chart => ActiveView::Chart(ChartState::new()),
            ViewKind::Heatmap => ActiveView::Heatmap(HeatmapState::new(&mut self.rng)),
            ViewKind::Table => ActiveView::Table(TableState::new(&mut self.rng)),
            ViewKind::Grid => ActiveView::Grid(GridState::new(&mut self.rng)),
        };
        self.active = Some(view);
        self.status_message = format!("{} view open.", kind.label());
        tracing::debug!(view = kind.label(), "View opened");
    }

    /// Close the open view, discarding its dataset.
    pub fn close_view(&mut self) {
        if let Some(kind) = self.active_kind() {
            self.status_message = format!("{} view closed.", kind.label());
            tracing::debug!(view = kind.label(), "View closed");
        }
        self.active = None;
    }

    /// Kind of the open view, if any.
    pub fn active_kind(&self) -> Option<ViewKind> {
        self.active.as_ref().map(ActiveView::kind)
    }
}
