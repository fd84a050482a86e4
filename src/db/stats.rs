//! Aggregation queries for table statistics.

use super::Database;
use crate::types::TableCounts;
use anyhow::Result;

impl Database {
    /// Row counts for both tables. Soft-deleted rows are counted; nothing is
    /// ever physically removed, so these only grow.
    pub fn table_attributes(&self) -> Result<TableCounts> {
        self.with_conn(|conn| {
            let contributors: i64 =
                conn.query_row("SELECT COUNT(*) FROM contributors", [], |row| row.get(0))?;
            let tasks: i64 =
                conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;

            Ok(TableCounts {
                contributors,
                tasks,
            })
        })
    }
}
