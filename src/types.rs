//! Core types for taskbook.

use serde::{Deserialize, Serialize};

/// A contributor: a named person who can own tasks.
///
/// `name` is the primary key. Contributors are never physically removed;
/// deletion flips `deleted`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub role: String,
    pub deleted: bool,
}

impl Contributor {
    /// Human-readable status used by the web API ("Current" or "Former").
    pub fn status(&self) -> &'static str {
        if self.deleted { "Former" } else { "Current" }
    }
}

/// A task owned by a contributor.
///
/// `num` is a running count-based identifier rendered as a string; it is
/// monotonic and never reused because rows are only ever soft-deleted.
/// `priority` keeps the caller's original casing; validation happens at the
/// boundary (see [`crate::validate`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub num: String,
    pub owner: String,
    pub name: String,
    pub description: String,
    pub priority: String,
    pub start: String,
    pub due: String,
    pub finished: bool,
    pub deleted: bool,
}

/// The closed priority set. Parsed case-insensitively at the boundary; the
/// stored task keeps the raw string as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Case-insensitive parse. Returns `None` for anything outside the set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// Sort keys accepted by `list_tasks`. Unrecognized or absent keys fall back
/// to `Num`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Num,
    Owner,
    Name,
    Priority,
    Start,
    Due,
    Finished,
    Deleted,
}

impl SortField {
    /// Case-insensitive parse. Returns `None` for unknown keys so the caller
    /// can decide between falling back to `Num` and reporting usage.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "num" => Some(SortField::Num),
            "owner" => Some(SortField::Owner),
            "name" => Some(SortField::Name),
            "priority" => Some(SortField::Priority),
            "start" => Some(SortField::Start),
            "due" => Some(SortField::Due),
            "finished" => Some(SortField::Finished),
            "deleted" => Some(SortField::Deleted),
            _ => None,
        }
    }

    /// Parse with fallback to `Num` for unknown or absent keys.
    pub fn parse_or_default(s: Option<&str>) -> Self {
        s.and_then(Self::parse).unwrap_or_default()
    }

    /// Canonical display name (matches the documented sort keys).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Num => "Num",
            SortField::Owner => "Owner",
            SortField::Name => "Name",
            SortField::Priority => "Priority",
            SortField::Start => "Start",
            SortField::Due => "Due",
            SortField::Finished => "Finished",
            SortField::Deleted => "Deleted",
        }
    }
}

/// Row counts for both tables, soft-deleted rows included.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TableCounts {
    pub contributors: i64,
    pub tasks: i64,
}
