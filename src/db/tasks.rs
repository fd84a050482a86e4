//! Task CRUD and listing operations.

use super::Database;
use super::contributors::get_contributor_internal;
use crate::error::StoreError;
use crate::types::{SortField, Task};
use crate::validate::{validate_date, validate_due, validate_priority};
use anyhow::Result;
use rusqlite::{Connection, Row, params};
use tracing::info;

/// Build an ORDER BY expression for the given sort field.
///
/// `num` sorts numerically (it is a running counter rendered as text, and
/// lexical order would put "10" before "2"). `priority` sorts by the stored
/// string, so "High" < "Low" < "Medium" -- the tool has always listed
/// priorities lexically and downstream consumers rely on it.
fn order_clause(sort: SortField) -> &'static str {
    match sort {
        SortField::Num => "CAST(num AS INTEGER) ASC",
        SortField::Owner => "owner ASC",
        SortField::Name => "name ASC",
        SortField::Priority => "priority ASC",
        SortField::Start => "start ASC",
        SortField::Due => "due ASC",
        SortField::Finished => "finished ASC",
        SortField::Deleted => "deleted ASC",
    }
}

pub(crate) fn parse_task_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        num: row.get("num")?,
        owner: row.get("owner")?,
        name: row.get("name")?,
        description: row.get("description")?,
        priority: row.get("priority")?,
        start: row.get("start")?,
        due: row.get("due")?,
        finished: row.get("finished")?,
        deleted: row.get("deleted")?,
    })
}

/// Internal helper to get a task using an existing connection (avoids deadlock).
fn get_task_internal(conn: &Connection, num: &str) -> Result<Option<Task>> {
    let mut stmt = conn.prepare("SELECT * FROM tasks WHERE num = ?1")?;

    let result = stmt.query_row(params![num], parse_task_row);

    match result {
        Ok(task) => Ok(Some(task)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Database {
    /// Create a new task.
    ///
    /// Validates priority and both dates, checks that the owner exists, and
    /// assigns `num` = current task count + 1 inside the insert transaction.
    /// Rows are never physically removed, so the counter never reuses a slot.
    pub fn add_task(
        &self,
        owner: &str,
        name: &str,
        description: &str,
        priority: &str,
        start: &str,
        due: &str,
    ) -> Result<Task> {
        validate_priority(priority)?;
        validate_date(start)?;
        validate_due(due, start)?;

        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            if get_contributor_internal(&tx, owner)?.is_none() {
                return Err(StoreError::contributor_not_found(owner).into());
            }

            let count: i64 = tx.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;
            let num = (count + 1).to_string();

            tx.execute(
                "INSERT INTO tasks (num, owner, name, description, priority, start, due, finished, deleted)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, 0)",
                params![&num, owner, name, description, priority, start, due],
            )?;

            tx.commit()?;

            info!(num = %num, owner = %owner, name = %name, "Task added");

            Ok(Task {
                num,
                owner: owner.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                priority: priority.to_string(),
                start: start.to_string(),
                due: due.to_string(),
                finished: false,
                deleted: false,
            })
        })
    }

    /// Get a task by num.
    pub fn get_task(&self, num: &str) -> Result<Option<Task>> {
        self.with_conn(|conn| get_task_internal(conn, num))
    }

    /// Update a task's name, description, priority, and/or due date.
    ///
    /// At least one optional field must be supplied. A new priority is
    /// re-validated; a new due date is re-validated against the task's stored
    /// start date.
    pub fn update_task(
        &self,
        num: &str,
        name: Option<&str>,
        description: Option<&str>,
        priority: Option<&str>,
        due: Option<&str>,
    ) -> Result<Task> {
        if name.is_none() && description.is_none() && priority.is_none() && due.is_none() {
            return Err(StoreError::missing_field(
                "update_task requires at least one of: name, description, priority, due",
            )
            .into());
        }

        if let Some(p) = priority {
            validate_priority(p)?;
        }

        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let mut task = match get_task_internal(&tx, num)? {
                Some(task) => task,
                None => return Err(StoreError::task_not_found(num).into()),
            };

            if let Some(d) = due {
                validate_due(d, &task.start)?;
                task.due = d.to_string();
            }
            if let Some(n) = name {
                task.name = n.to_string();
            }
            if let Some(d) = description {
                task.description = d.to_string();
            }
            if let Some(p) = priority {
                task.priority = p.to_string();
            }

            tx.execute(
                "UPDATE tasks SET name = ?2, description = ?3, priority = ?4, due = ?5
                 WHERE num = ?1",
                params![num, &task.name, &task.description, &task.priority, &task.due],
            )?;

            tx.commit()?;

            info!(num = %num, "Task updated");

            Ok(task)
        })
    }

    /// Mark a task complete. `finished` is one-way: false -> true only.
    pub fn mark_task_complete(&self, num: &str) -> Result<Task> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let mut task = match get_task_internal(&tx, num)? {
                Some(task) => task,
                None => return Err(StoreError::task_not_found(num).into()),
            };

            tx.execute("UPDATE tasks SET finished = 1 WHERE num = ?1", params![num])?;
            tx.commit()?;

            task.finished = true;
            info!(num = %num, name = %task.name, "Task marked complete");

            Ok(task)
        })
    }

    /// Soft-delete a task. The row remains listable with `deleted = true`.
    pub fn delete_task(&self, num: &str) -> Result<Task> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let mut task = match get_task_internal(&tx, num)? {
                Some(task) => task,
                None => return Err(StoreError::task_not_found(num).into()),
            };

            tx.execute("UPDATE tasks SET deleted = 1 WHERE num = ?1", params![num])?;
            tx.commit()?;

            task.deleted = true;
            info!(num = %num, name = %task.name, "Task deleted (soft)");

            Ok(task)
        })
    }

    /// List all tasks (soft-deleted included) ordered by the given sort field.
    pub fn list_tasks(&self, sort: SortField) -> Result<Vec<Task>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT * FROM tasks ORDER BY {}", order_clause(sort));
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([], parse_task_row)?;
            let tasks = rows.collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(tasks)
        })
    }

    /// List every task owned by the given contributor, ordered by num.
    pub fn tasks_for_owner(&self, owner: &str) -> Result<Vec<Task>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT * FROM tasks WHERE owner = ?1 ORDER BY CAST(num AS INTEGER)",
            )?;
            let rows = stmt.query_map(params![owner], parse_task_row)?;
            let tasks = rows.collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(tasks)
        })
    }
}
