//! Plain-text table rendering for CLI output.

use crate::types::{Contributor, Task};

/// Render rows as a fixed-header text table with columns padded to the widest
/// cell. Returns an empty-state line when there are no rows.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "(no rows)\n".to_string();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();

    let push_row = |cells: &[String], out: &mut String| {
        out.push('|');
        for (i, cell) in cells.iter().enumerate() {
            out.push_str(&format!(" {:<width$} |", cell, width = widths[i]));
        }
        out.push('\n');
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_row(&header_cells, &mut out);

    out.push('|');
    for width in &widths {
        out.push_str(&format!("{}|", "-".repeat(width + 2)));
    }
    out.push('\n');

    for row in rows {
        push_row(row, &mut out);
    }

    out
}

fn bool_cell(b: bool) -> String {
    if b { "true" } else { "false" }.to_string()
}

/// Format a task list as a text table.
pub fn format_tasks_table(tasks: &[Task]) -> String {
    let headers = [
        "Num",
        "Owner",
        "Name",
        "Description",
        "Priority",
        "Start",
        "Due",
        "Finished",
        "Deleted",
    ];

    let rows: Vec<Vec<String>> = tasks
        .iter()
        .map(|t| {
            vec![
                t.num.clone(),
                t.owner.clone(),
                t.name.clone(),
                t.description.clone(),
                t.priority.clone(),
                t.start.clone(),
                t.due.clone(),
                bool_cell(t.finished),
                bool_cell(t.deleted),
            ]
        })
        .collect();

    render_table(&headers, &rows)
}

/// Format a contributor list as a text table.
pub fn format_contributors_table(contributors: &[Contributor]) -> String {
    let headers = ["Name", "Role", "Status"];

    let rows: Vec<Vec<String>> = contributors
        .iter()
        .map(|c| vec![c.name.clone(), c.role.clone(), c.status().to_string()])
        .collect();

    render_table(&headers, &rows)
}
