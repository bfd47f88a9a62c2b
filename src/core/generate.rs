// Vizboard - core/generate.rs
//
// Synthetic dataset generators for the four views.
// Generators draw from a caller-supplied RNG so the whole dashboard can be
// seeded deterministically (CLI --seed) or from entropy. Each view's data
// is generated once per open, not per frame.

use crate::core::model::{Category, GridItem, HeatRow, Role, SalesPoint, Status, TableRow};
use crate::util::constants::{
    ENGAGEMENT_CELL_COUNT, GRID_ITEM_COUNT, HEAT_DAYS, HEAT_HOURS, HEAT_MAX_INTENSITY,
    IN_STOCK_PROBABILITY, PRICE_MIN, PRICE_RANGE, TABLE_JOIN_MAX_DAY, TABLE_JOIN_YEAR,
    TABLE_REVENUE_MAX, TABLE_ROW_COUNT,
};
use chrono::NaiveDate;
use rand::Rng;

/// Name pool for generated users. Rows sample with replacement, so
/// duplicate names across rows are expected; IDs stay unique.
const USER_NAMES: [&str; 10] = [
    "John Doe",
    "Jane Smith",
    "Bob Johnson",
    "Alice Williams",
    "Charlie Brown",
    "Diana Prince",
    "Eva Green",
    "Frank Miller",
    "Grace Lee",
    "Henry Ford",
];

/// Title pool for generated products, assigned round-robin by index.
const PRODUCT_TITLES: [&str; 12] = [
    "Premium Headphones",
    "Smart Watch",
    "Laptop Stand",
    "Wireless Mouse",
    "Desk Lamp",
    "Coffee Maker",
    "Running Shoes",
    "Yoga Mat",
    "Camera Lens",
    "Backpack",
    "Water Bottle",
    "Notebook Set",
];

/// Description pool for generated products.
const PRODUCT_DESCRIPTIONS: [&str; 4] = [
    "High-quality product with excellent features",
    "Perfect for everyday use",
    "Durable and stylish design",
    "Best in class performance",
];

/// The fixed monthly sales series rendered by the chart view.
///
/// Deliberately static rather than random: the charts are meant to show a
/// recognisable shape (the March revenue spike, the May sales dip) every
/// time the view opens.
pub fn sales_series() -> Vec<SalesPoint> {
    vec![
        SalesPoint {
            period: "Jan",
            sales: 4000,
            revenue: 2400,
            profit: 2400,
        },
        SalesPoint {
            period: "Feb",
            sales: 3000,
            revenue: 1398,
            profit: 2210,
        },
        SalesPoint {
            period: "Mar",
            sales: 2000,
            revenue: 9800,
            profit: 2290,
        },
        SalesPoint {
            period: "Apr",
            sales: 2780,
            revenue: 3908,
            profit: 2000,
        },
        SalesPoint {
            period: "May",
            sales: 1890,
            revenue: 4800,
            profit: 2181,
        },
        SalesPoint {
            period: "Jun",
            sales: 2390,
            revenue: 3800,
            profit: 2500,
        },
        SalesPoint {
            period: "Jul",
            sales: 3490,
            revenue: 4300,
            profit: 2100,
        },
    ]
}

/// Generate the 24 hour-of-day rows of the weekly activity heatmap.
/// Each row holds one intensity value per weekday in 0..100.
pub fn heat_rows(rng: &mut impl Rng) -> Vec<HeatRow> {
    (0..HEAT_HOURS)
        .map(|hour| {
            let mut values = [0u8; HEAT_DAYS];
            for value in values.iter_mut() {
                *value = rng.gen_range(0..HEAT_MAX_INTENSITY);
            }
            HeatRow {
                hour: format!("{hour}:00"),
                values,
            }
        })
        .collect()
}

/// Generate the flat 10x10 cell values of the user-engagement grid,
/// row-major, each in 0..100.
pub fn engagement_cells(rng: &mut impl Rng) -> Vec<u8> {
    (0..ENGAGEMENT_CELL_COUNT)
        .map(|_| rng.gen_range(0..HEAT_MAX_INTENSITY))
        .collect()
}

/// Generate the 20 user rows of the management table.
pub fn table_rows(rng: &mut impl Rng) -> Vec<TableRow> {
    (0..TABLE_ROW_COUNT)
        .map(|i| {
            let id = i as u32 + 1;
            let roles = Role::all();
            let statuses = Status::all();
            let month = rng.gen_range(1..=12);
            let day = rng.gen_range(1..=TABLE_JOIN_MAX_DAY);
            TableRow {
                id,
                name: USER_NAMES[rng.gen_range(0..USER_NAMES.len())].to_string(),
                email: format!("user{id}@example.com"),
                role: roles[rng.gen_range(0..roles.len())],
                status: statuses[rng.gen_range(0..statuses.len())],
                join_date: NaiveDate::from_ymd_opt(TABLE_JOIN_YEAR, month, day)
                    .unwrap_or_default(),
                revenue: rng.gen_range(0..TABLE_REVENUE_MAX),
            }
        })
        .collect()
}

/// Generate the 12 product cards of the grid view.
/// Titles are assigned round-robin so every pool title appears once.
pub fn grid_items(rng: &mut impl Rng) -> Vec<GridItem> {
    let categories = Category::all();
    (0..GRID_ITEM_COUNT)
        .map(|i| GridItem {
            id: i as u32 + 1,
            title: PRODUCT_TITLES[i % PRODUCT_TITLES.len()].to_string(),
            description: PRODUCT_DESCRIPTIONS[rng.gen_range(0..PRODUCT_DESCRIPTIONS.len())]
                .to_string(),
            price: PRICE_MIN + rng.gen_range(0..PRICE_RANGE),
            category: categories[rng.gen_range(0..categories.len())],
            rating: crate::util::constants::RATING_BASE + rng.gen_range(0..2) as f32,
            image_url: format!("https://source.unsplash.com/400x300/?product,{i}"),
            in_stock: rng.gen_bool(IN_STOCK_PROBABILITY),
            liked: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants::SALES_PERIOD_COUNT;
    use chrono::Datelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sales_series_is_fixed() {
        let series = sales_series();
        assert_eq!(series.len(), SALES_PERIOD_COUNT);
        assert_eq!(series[0].period, "Jan");
        assert_eq!(series[0].sales, 4000);
        assert_eq!(series[2].revenue, 9800); // March spike
        assert_eq!(series[6].period, "Jul");
        assert_eq!(series[6].profit, 2100);
        // Static data: two calls must agree exactly.
        assert_eq!(series, sales_series());
    }

    #[test]
    fn test_heat_rows_shape_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = heat_rows(&mut rng);
        assert_eq!(rows.len(), HEAT_HOURS);
        assert_eq!(rows[0].hour, "0:00");
        assert_eq!(rows[23].hour, "23:00");
        for row in &rows {
            for &value in &row.values {
                assert!(value < HEAT_MAX_INTENSITY);
            }
        }
    }

    #[test]
    fn test_engagement_cells_shape_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let cells = engagement_cells(&mut rng);
        assert_eq!(cells.len(), ENGAGEMENT_CELL_COUNT);
        assert!(cells.iter().all(|&v| v < HEAT_MAX_INTENSITY));
    }

    #[test]
    fn test_table_rows_fields() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = table_rows(&mut rng);
        assert_eq!(rows.len(), TABLE_ROW_COUNT);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.id, i as u32 + 1);
            assert_eq!(row.email, format!("user{}@example.com", row.id));
            assert!(USER_NAMES.contains(&row.name.as_str()));
            assert_eq!(row.join_date.year(), TABLE_JOIN_YEAR);
            assert!(row.join_date.day() <= TABLE_JOIN_MAX_DAY);
            assert!(row.revenue < TABLE_REVENUE_MAX);
        }
    }

    #[test]
    fn test_grid_items_fields() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = grid_items(&mut rng);
        assert_eq!(items.len(), GRID_ITEM_COUNT);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.id, i as u32 + 1);
            assert_eq!(item.title, PRODUCT_TITLES[i % PRODUCT_TITLES.len()]);
            assert!(PRODUCT_DESCRIPTIONS.contains(&item.description.as_str()));
            assert!(item.price >= PRICE_MIN && item.price < PRICE_MIN + PRICE_RANGE);
            assert!(item.rating == 3.5 || item.rating == 4.5);
            assert!(item.image_url.ends_with(&format!("product,{i}")));
            assert!(!item.liked);
        }
    }

    #[test]
    fn test_same_seed_same_data() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(table_rows(&mut a), table_rows(&mut b));
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(grid_items(&mut a), grid_items(&mut b));
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(heat_rows(&mut a), heat_rows(&mut b));
    }
}
