// Vizboard - core/export.rs
//
// CSV and JSON export of filtered table rows.
// Core layer: writes to any Write trait object. The ui layer points the
// writer at an in-memory buffer and hands the result to the clipboard.

use crate::core::model::TableRow;
use crate::util::error::ExportError;
use std::io::Write;

/// Export table rows to CSV format, returning the row count written.
///
/// Writes: id, name, email, role, status, join_date, revenue
pub fn export_csv<W: Write>(rows: &[TableRow], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // Header
    csv_writer.write_record([
        "id",
        "name",
        "email",
        "role",
        "status",
        "join_date",
        "revenue",
    ])?;

    let mut count = 0;
    for row in rows {
        csv_writer.write_record([
            &row.id.to_string(),
            &row.name,
            &row.email,
            row.role.label(),
            row.status.label(),
            &row.join_date.to_string(),
            &row.revenue.to_string(),
        ])?;
        count += 1;
    }

    csv_writer.flush()?;

    Ok(count)
}

/// Export table rows to JSON format (pretty-printed array of objects),
/// returning the row count written.
pub fn export_json<W: Write>(rows: &[TableRow], writer: W) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, rows)?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Role, Status};
    use chrono::NaiveDate;

    fn make_row(id: u32, name: &str) -> TableRow {
        TableRow {
            id,
            name: name.to_string(),
            email: format!("user{id}@example.com"),
            role: Role::Developer,
            status: Status::Pending,
            join_date: NaiveDate::from_ymd_opt(2023, 3, 14).unwrap(),
            revenue: 42_000,
        }
    }

    #[test]
    fn test_csv_export() {
        let rows = vec![make_row(1, "John Doe"), make_row(2, "Jane Smith")];
        let mut buf = Vec::new();
        let count = export_csv(&rows, &mut buf).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("id,name,email,role,status,join_date,revenue"));
        assert!(output.contains("John Doe"));
        assert!(output.contains("user2@example.com"));
        assert!(output.contains("2023-03-14"));
    }

    #[test]
    fn test_csv_export_empty() {
        let mut buf = Vec::new();
        let count = export_csv(&[], &mut buf).unwrap();
        assert_eq!(count, 0);

        // Header only
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_json_export() {
        let rows = vec![make_row(1, "John Doe")];
        let mut buf = Vec::new();
        let count = export_json(&rows, &mut buf).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"name\": \"John Doe\""));
        assert!(output.contains("\"status\": \"Pending\""));
        assert!(output.contains("\"join_date\": \"2023-03-14\""));
    }
}
