// Vizboard - tests/e2e_dashboard.rs
//
// End-to-end tests for the dashboard state machine: the launcher shell,
// per-view dataset generation, filtering, pagination, like toggling,
// and clipboard-bound export serialisation. Everything below the
// pixels, driven exactly the way the panels drive it.

use vizboard::app::state::{ActiveView, AppState, GridState, TableState, ViewKind};
use vizboard::core::export;
use vizboard::core::heat::HeatLevel;
use vizboard::util::constants::{
    ENGAGEMENT_CELL_COUNT, GRID_ITEM_COUNT, HEAT_DAYS, HEAT_HOURS, HEAT_MAX_INTENSITY,
    TABLE_ROW_COUNT,
};
use vizboard::util::error::VizboardError;

// =============================================================================
// Helpers
// =============================================================================

/// A deterministic state so every run generates the same datasets.
fn seeded_state() -> AppState {
    AppState::new(Some(42), false)
}

/// Open the table view and return a mutable handle to its state.
fn open_table(state: &mut AppState) -> &mut TableState {
    state.open_view(ViewKind::Table);
    match state.active.as_mut() {
        Some(ActiveView::Table(table)) => table,
        other => panic!("expected table view, got {other:?}"),
    }
}

/// Open the grid view and return a mutable handle to its state.
fn open_grid(state: &mut AppState) -> &mut GridState {
    state.open_view(ViewKind::Grid);
    match state.active.as_mut() {
        Some(ActiveView::Grid(grid)) => grid,
        other => panic!("expected grid view, got {other:?}"),
    }
}

// =============================================================================
// Shell E2E
// =============================================================================

/// Full shell walkthrough: toggle the menu, open every view in turn,
/// close, and check the status line follows along.
#[test]
fn e2e_shell_walkthrough() {
    let mut state = seeded_state();
    assert!(!state.menu_open);
    assert_eq!(state.active_kind(), None);

    state.toggle_menu();
    assert!(state.menu_open);

    for kind in ViewKind::all() {
        state.open_view(*kind);
        assert_eq!(state.active_kind(), Some(*kind));
        assert!(
            state.status_message.contains(kind.label()),
            "status '{}' should mention {}",
            state.status_message,
            kind.label()
        );
        // The menu stays expanded while views come and go.
        assert!(state.menu_open);
    }

    state.close_view();
    assert_eq!(state.active_kind(), None);
    assert!(
        state.status_message.contains("closed"),
        "status '{}' should report the close",
        state.status_message
    );
}

/// Opening a view while another is open replaces it outright.
#[test]
fn e2e_open_replaces_open_view() {
    let mut state = seeded_state();
    state.open_view(ViewKind::Chart);
    state.open_view(ViewKind::Heatmap);
    assert_eq!(state.active_kind(), Some(ViewKind::Heatmap));
    state.close_view();
    assert_eq!(state.active_kind(), None);
}

/// Closing and reopening a view discards per-view state: likes, filters,
/// and page position all start over.
#[test]
fn e2e_reopen_starts_fresh() {
    let mut state = seeded_state();

    let grid = open_grid(&mut state);
    grid.toggle_like(3);
    grid.filter.query = "watch".to_string();
    grid.apply_filter();

    state.close_view();
    let grid = open_grid(&mut state);
    assert!(
        grid.items.iter().all(|item| !item.liked),
        "reopened grid should have no liked items"
    );
    assert!(grid.filter.is_empty());
    assert_eq!(grid.filtered.len(), GRID_ITEM_COUNT);
}

// =============================================================================
// Heatmap E2E
// =============================================================================

/// Generated heatmap data has the documented shape and every value
/// classifies into one of the five legend levels.
#[test]
fn e2e_heatmap_data_shape_and_levels() {
    let mut state = seeded_state();
    state.open_view(ViewKind::Heatmap);

    let heatmap = match state.active.as_ref() {
        Some(ActiveView::Heatmap(heatmap)) => heatmap,
        other => panic!("expected heatmap view, got {other:?}"),
    };

    assert_eq!(heatmap.hourly.len(), HEAT_HOURS);
    assert_eq!(heatmap.engagement.len(), ENGAGEMENT_CELL_COUNT);
    assert_eq!(heatmap.hourly[0].hour, "0:00");
    assert_eq!(heatmap.hourly[HEAT_HOURS - 1].hour, "23:00");

    for row in &heatmap.hourly {
        assert_eq!(row.values.len(), HEAT_DAYS);
        for &value in &row.values {
            assert!(value < HEAT_MAX_INTENSITY, "value {value} out of range");
            // from_value is total over the generated range.
            let _ = HeatLevel::from_value(value);
        }
    }
}

// =============================================================================
// Table E2E
// =============================================================================

/// Search, paginate, and export: emails are derived from row IDs, so the
/// query "user1" matches exactly user1 plus user10..user19 regardless of
/// the seed.
#[test]
fn e2e_table_search_paginate_export() {
    let mut state = seeded_state();
    let table = open_table(&mut state);
    assert_eq!(table.rows.len(), TABLE_ROW_COUNT);
    assert_eq!(table.filtered.len(), TABLE_ROW_COUNT);

    table.filter.query = "user1".to_string();
    table.apply_filter();
    assert_eq!(
        table.filtered.len(),
        11,
        "user1 + user10..user19 should match"
    );

    // Page through at 5 rows per page: 5, 5, 1.
    table.set_page_size(5);
    assert_eq!(table.page_range(), 0..5);
    table.next_page();
    assert_eq!(table.page_range(), 5..10);
    table.next_page();
    assert_eq!(table.page_range(), 10..11);
    assert!(!table.has_next_page());

    // Export covers the whole filtered set, not just the visible page.
    let rows: Vec<_> = table
        .filtered
        .iter()
        .map(|&idx| table.rows[idx].clone())
        .collect();
    let mut buf = Vec::new();
    let count = export::export_csv(&rows, &mut buf).expect("csv export");
    assert_eq!(count, 11);

    let output = String::from_utf8(buf).expect("csv is utf-8");
    assert_eq!(
        output.lines().count(),
        12,
        "header plus one line per filtered row"
    );
    assert!(output.starts_with("id,name,email,role,status,join_date,revenue"));
    assert!(output.contains("user19@example.com"));
    assert!(!output.contains("user2@example.com"));
}

/// JSON export produces an array with one object per filtered row and
/// the documented fields.
#[test]
fn e2e_table_export_json_structure() {
    let mut state = seeded_state();
    let table = open_table(&mut state);

    let rows: Vec<_> = table
        .filtered
        .iter()
        .map(|&idx| table.rows[idx].clone())
        .collect();
    let mut buf = Vec::new();
    let count = export::export_json(&rows, &mut buf).expect("json export");
    assert_eq!(count, TABLE_ROW_COUNT);

    let output = String::from_utf8(buf).expect("json is utf-8");
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    let array = value.as_array().expect("top-level array");
    assert_eq!(array.len(), TABLE_ROW_COUNT);

    let first = array[0].as_object().expect("row object");
    for field in ["id", "name", "email", "role", "status", "join_date", "revenue"] {
        assert!(first.contains_key(field), "missing field {field}");
    }
    assert_eq!(first["id"], serde_json::json!(1));
    assert_eq!(first["email"], serde_json::json!("user1@example.com"));
}

/// A filter that matches nothing leaves a clamped, empty page rather
/// than an out-of-bounds one.
#[test]
fn e2e_table_no_match_is_safe() {
    let mut state = seeded_state();
    let table = open_table(&mut state);
    table.next_page();

    table.filter.query = "no such user anywhere".to_string();
    table.apply_filter();
    assert!(table.filtered.is_empty());
    assert!(table.page_range().is_empty());
    assert!(!table.has_next_page());

    // Clearing the query restores the full set.
    table.filter.query.clear();
    table.apply_filter();
    assert_eq!(table.filtered.len(), TABLE_ROW_COUNT);
}

// =============================================================================
// Grid E2E
// =============================================================================

/// Title search is seed-independent because titles are assigned
/// round-robin from the fixed pool.
#[test]
fn e2e_grid_title_search() {
    let mut state = seeded_state();
    let grid = open_grid(&mut state);

    grid.filter.query = "premium".to_string();
    grid.apply_filter();
    assert_eq!(grid.filtered, vec![0], "only Premium Headphones matches");

    grid.filter.query = "NOTEBOOK".to_string();
    grid.apply_filter();
    assert_eq!(grid.filtered, vec![11], "case-insensitive title match");

    grid.filter.query = "zzz-no-product".to_string();
    grid.apply_filter();
    assert!(grid.filtered.is_empty());
}

/// Category filtering keeps exactly the items carrying that category,
/// and combines with the text query as an AND.
#[test]
fn e2e_grid_category_filter() {
    let mut state = seeded_state();
    let grid = open_grid(&mut state);

    let category = grid.items[0].category;
    grid.filter.category = Some(category);
    grid.apply_filter();

    let expected: Vec<usize> = grid
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.category == category)
        .map(|(idx, _)| idx)
        .collect();
    assert_eq!(grid.filtered, expected);

    // AND with a query that only the first item's title can satisfy.
    grid.filter.query = grid.items[0].title.to_lowercase();
    grid.apply_filter();
    assert_eq!(grid.filtered, vec![0]);
}

/// Liking one product never touches the others, and likes survive
/// filter changes while the view stays open.
#[test]
fn e2e_grid_likes_are_isolated_and_stable() {
    let mut state = seeded_state();
    let grid = open_grid(&mut state);

    assert_eq!(grid.toggle_like(7), Some(true));
    grid.filter.query = "lamp".to_string();
    grid.apply_filter();
    grid.filter.query.clear();
    grid.apply_filter();

    for item in &grid.items {
        assert_eq!(
            item.liked,
            item.id == 7,
            "only item 7 should be liked, item {} disagrees",
            item.id
        );
    }
    assert_eq!(grid.toggle_like(7), Some(false));
    assert_eq!(grid.toggle_like(0), None, "ids start at 1");
}

// =============================================================================
// CLI E2E
// =============================================================================

/// View names parse case-insensitively; anything else is a typed error
/// whose message names the offender and the alternatives.
#[test]
fn e2e_view_argument_parsing() {
    assert_eq!("chart".parse::<ViewKind>().unwrap(), ViewKind::Chart);
    assert_eq!("Grid".parse::<ViewKind>().unwrap(), ViewKind::Grid);

    let err = "pie".parse::<ViewKind>().unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains("Unknown view 'pie'"),
        "unexpected message: {message}"
    );
    assert!(message.contains("chart"), "should list the valid names");

    let wrapped = VizboardError::from(err);
    assert!(wrapped.to_string().starts_with("CLI error:"));
}
