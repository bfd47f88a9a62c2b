// Vizboard - core/filter.rs
//
// Filter and pagination engine for the table and grid views.
// Active criteria are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Category, GridItem, TableRow};
use std::ops::Range;

/// Filter state for the user table. Matches when the query appears in the
/// name, email, or role (case-insensitive substring).
#[derive(Debug, Clone, Default)]
pub struct TableFilter {
    /// Substring text search. Empty = no filter.
    pub query: String,
}

impl TableFilter {
    /// Returns true if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }
}

/// Filter state for the product grid. Both fields are AND-combined.
#[derive(Debug, Clone, Default)]
pub struct GridFilter {
    /// Substring text search over title and description. Empty = no filter.
    pub query: String,

    /// Category restriction. None = all categories.
    pub category: Option<Category>,
}

impl GridFilter {
    /// Returns true if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.category.is_none()
    }
}

/// Apply the table filter, returning indices of matching rows.
///
/// Returns a Vec of indices into the original rows slice. This avoids
/// copying rows and keeps pagination a cheap slice of the index list.
pub fn filter_rows(rows: &[TableRow], filter: &TableFilter) -> Vec<usize> {
    if filter.is_empty() {
        return (0..rows.len()).collect();
    }

    let query_lower = filter.query.to_lowercase();

    rows.iter()
        .enumerate()
        .filter(|(_, row)| row_matches(row, &query_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check if a single row matches the lowercased query.
fn row_matches(row: &TableRow, query_lower: &str) -> bool {
    row.name.to_lowercase().contains(query_lower)
        || row.email.to_lowercase().contains(query_lower)
        || row.role.label().to_lowercase().contains(query_lower)
}

/// Apply the grid filter, returning indices of matching items.
pub fn filter_items(items: &[GridItem], filter: &GridFilter) -> Vec<usize> {
    if filter.is_empty() {
        return (0..items.len()).collect();
    }

    let query_lower = filter.query.to_lowercase();

    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item_matches(item, filter, &query_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check if a single item matches all active criteria.
fn item_matches(item: &GridItem, filter: &GridFilter, query_lower: &str) -> bool {
    // Text search over title and description
    if !query_lower.is_empty()
        && !item.title.to_lowercase().contains(query_lower)
        && !item.description.to_lowercase().contains(query_lower)
    {
        return false;
    }

    // Category restriction
    if let Some(category) = filter.category {
        if item.category != category {
            return false;
        }
    }

    true
}

/// Compute the index range of one page over a filtered list.
///
/// The range is clamped to the list, so a page past the end yields an
/// empty range rather than panicking. The final page may be shorter
/// than `page_size`.
pub fn page_bounds(filtered_len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_mul(page_size).min(filtered_len);
    let end = start.saturating_add(page_size).min(filtered_len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Role, Status};
    use chrono::NaiveDate;

    fn make_row(id: u32, name: &str, role: Role) -> TableRow {
        TableRow {
            id,
            name: name.to_string(),
            email: format!("user{id}@example.com"),
            role,
            status: Status::Active,
            join_date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
            revenue: 1000,
        }
    }

    fn make_item(id: u32, title: &str, description: &str, category: Category) -> GridItem {
        GridItem {
            id,
            title: title.to_string(),
            description: description.to_string(),
            price: 99,
            category,
            rating: 4.5,
            image_url: String::new(),
            in_stock: true,
            liked: false,
        }
    }

    #[test]
    fn test_empty_table_filter_returns_all() {
        let rows = vec![
            make_row(1, "John Doe", Role::Admin),
            make_row(2, "Jane Smith", Role::User),
        ];
        let result = filter_rows(&rows, &TableFilter::default());
        assert_eq!(result, vec![0, 1]);
    }

    #[test]
    fn test_table_filter_matches_name_case_insensitive() {
        let rows = vec![
            make_row(1, "John Doe", Role::Admin),
            make_row(2, "Jane Smith", Role::User),
        ];
        let filter = TableFilter {
            query: "JOHN".to_string(),
        };
        assert_eq!(filter_rows(&rows, &filter), vec![0]);
    }

    #[test]
    fn test_table_filter_matches_email() {
        let rows = vec![
            make_row(1, "John Doe", Role::Admin),
            make_row(2, "Jane Smith", Role::User),
        ];
        let filter = TableFilter {
            query: "user2@".to_string(),
        };
        assert_eq!(filter_rows(&rows, &filter), vec![1]);
    }

    #[test]
    fn test_table_filter_matches_role() {
        let rows = vec![
            make_row(1, "John Doe", Role::Admin),
            make_row(2, "Jane Smith", Role::Developer),
            make_row(3, "Bob Johnson", Role::Admin),
        ];
        let filter = TableFilter {
            query: "admin".to_string(),
        };
        assert_eq!(filter_rows(&rows, &filter), vec![0, 2]);
    }

    #[test]
    fn test_table_filter_no_match() {
        let rows = vec![make_row(1, "John Doe", Role::Admin)];
        let filter = TableFilter {
            query: "nonexistent".to_string(),
        };
        assert!(filter_rows(&rows, &filter).is_empty());
    }

    #[test]
    fn test_grid_filter_matches_title_or_description() {
        let items = vec![
            make_item(1, "Smart Watch", "Perfect for everyday use", Category::Electronics),
            make_item(2, "Yoga Mat", "Durable and stylish design", Category::Sports),
            make_item(3, "Desk Lamp", "Perfect for everyday use", Category::Home),
        ];
        let filter = GridFilter {
            query: "perfect".to_string(),
            category: None,
        };
        assert_eq!(filter_items(&items, &filter), vec![0, 2]);

        let filter = GridFilter {
            query: "yoga".to_string(),
            category: None,
        };
        assert_eq!(filter_items(&items, &filter), vec![1]);
    }

    #[test]
    fn test_grid_filter_category_only() {
        let items = vec![
            make_item(1, "Smart Watch", "d", Category::Electronics),
            make_item(2, "Yoga Mat", "d", Category::Sports),
            make_item(3, "Camera Lens", "d", Category::Electronics),
        ];
        let filter = GridFilter {
            query: String::new(),
            category: Some(Category::Electronics),
        };
        assert_eq!(filter_items(&items, &filter), vec![0, 2]);
    }

    #[test]
    fn test_grid_filter_combines_query_and_category() {
        let items = vec![
            make_item(1, "Smart Watch", "d", Category::Electronics),
            make_item(2, "Smart Kettle", "d", Category::Home),
        ];
        let filter = GridFilter {
            query: "smart".to_string(),
            category: Some(Category::Home),
        };
        assert_eq!(filter_items(&items, &filter), vec![1]);
    }

    #[test]
    fn test_page_bounds_full_and_partial_pages() {
        // 23 items at 10 per page: 10, 10, 3.
        assert_eq!(page_bounds(23, 0, 10), 0..10);
        assert_eq!(page_bounds(23, 1, 10), 10..20);
        assert_eq!(page_bounds(23, 2, 10), 20..23);
    }

    #[test]
    fn test_page_bounds_past_end_is_empty() {
        assert_eq!(page_bounds(23, 3, 10), 23..23);
        assert_eq!(page_bounds(23, 100, 10), 23..23);
    }

    #[test]
    fn test_page_bounds_empty_list() {
        assert_eq!(page_bounds(0, 0, 10), 0..0);
        assert_eq!(page_bounds(0, 5, 10), 0..0);
    }
}
