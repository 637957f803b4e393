//! Task data model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority, persisted as 1 (high) through 3 (low).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Parse priority from user text (numeral or name)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "high" | "h" => Some(Self::High),
            "2" | "medium" | "med" | "m" => Some(Self::Medium),
            "3" | "low" | "l" => Some(Self::Low),
            _ => None,
        }
    }

    /// Clap-facing parser for `--priority` arguments
    pub fn from_arg(s: &str) -> std::result::Result<Self, String> {
        Self::parse(s).ok_or_else(|| format!("invalid priority (use 1-3, high, medium, low): {s}"))
    }

    /// Get the text label
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> u8 {
        match priority {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(n: u8) -> std::result::Result<Self, Self::Error> {
        match n {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            _ => Err(format!("priority out of range (1-3): {n}")),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, assigned by the store, never reused
    pub id: u64,

    /// Task title
    pub title: String,

    /// Due date, persisted as YYYY-MM-DD
    pub due_date: NaiveDate,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Completion state
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new open task with default priority
    pub fn new(id: u64, title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            due_date,
            priority: Priority::default(),
            completed: false,
        }
    }

    /// Get the completion mark shown in listings
    pub fn mark(&self) -> &'static str {
        if self.completed {
            "✔"
        } else {
            "···"
        }
    }
}

/// Parse a user-supplied due date in YYYY-MM-DD form.
pub fn parse_due_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}
