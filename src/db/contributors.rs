//! Contributor CRUD operations.

use super::Database;
use crate::error::StoreError;
use crate::types::Contributor;
use anyhow::Result;
use rusqlite::{Connection, Row, params};
use tracing::info;

pub(crate) fn parse_contributor_row(row: &Row) -> rusqlite::Result<Contributor> {
    Ok(Contributor {
        name: row.get("name")?,
        role: row.get("role")?,
        deleted: row.get("deleted")?,
    })
}

/// Internal helper to get a contributor using an existing connection.
pub(crate) fn get_contributor_internal(
    conn: &Connection,
    name: &str,
) -> Result<Option<Contributor>> {
    let mut stmt =
        conn.prepare("SELECT name, role, deleted FROM contributors WHERE name = ?1")?;

    let result = stmt.query_row(params![name], parse_contributor_row);

    match result {
        Ok(contributor) => Ok(Some(contributor)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Database {
    /// Add a new contributor. Fails with `AlreadyExists` if the name is taken.
    pub fn add_contributor(&self, name: &str, role: &str) -> Result<Contributor> {
        self.with_conn(|conn| {
            if get_contributor_internal(conn, name)?.is_some() {
                return Err(StoreError::already_exists(name).into());
            }

            conn.execute(
                "INSERT INTO contributors (name, role, deleted) VALUES (?1, ?2, 0)",
                params![name, role],
            )?;

            info!(name = %name, role = %role, "Contributor added");

            Ok(Contributor {
                name: name.to_string(),
                role: role.to_string(),
                deleted: false,
            })
        })
    }

    /// Get a contributor by name.
    pub fn get_contributor(&self, name: &str) -> Result<Option<Contributor>> {
        self.with_conn(|conn| get_contributor_internal(conn, name))
    }

    /// List all contributors ordered by name, soft-deleted included.
    pub fn list_contributors(&self) -> Result<Vec<Contributor>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT name, role, deleted FROM contributors ORDER BY name")?;
            let rows = stmt.query_map([], parse_contributor_row)?;
            let contributors = rows.collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(contributors)
        })
    }

    /// Soft-delete a contributor and cascade to every task they own, all in
    /// one transaction. Returns the number of tasks flagged.
    ///
    /// Fails with `ContributorNotFound` if the name is unknown. The
    /// contributor row itself stays retrievable with `deleted = true`.
    pub fn delete_contributor(&self, name: &str) -> Result<u64> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let exists = get_contributor_internal(&tx, name)?.is_some();
            if !exists {
                return Err(StoreError::contributor_not_found(name).into());
            }

            tx.execute(
                "UPDATE contributors SET deleted = 1 WHERE name = ?1",
                params![name],
            )?;

            let cascaded = tx.execute(
                "UPDATE tasks SET deleted = 1 WHERE owner = ?1",
                params![name],
            )? as u64;

            tx.commit()?;

            info!(name = %name, tasks = cascaded, "Contributor deleted (soft), owned tasks cascaded");

            Ok(cascaded)
        })
    }
}
