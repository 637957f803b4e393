//! Task store - owns the collection and its mutation operations
//!
//! Every mutating operation rewrites the whole file before returning, so
//! the in-memory collection and the persisted one only diverge if a write
//! fails mid-operation.

use std::path::PathBuf;
use tracing::debug;

use super::error::{Result, StoreError};
use super::model::{parse_due_date, Priority, Task};
use super::storage::Storage;

/// Result of an `edit`: which supplied fields were rejected and kept at
/// their previous values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditOutcome {
    pub skipped_title: bool,
    pub skipped_due_date: bool,
    pub skipped_priority: bool,
}

impl EditOutcome {
    /// True when every supplied field was applied.
    pub fn clean(&self) -> bool {
        !(self.skipped_title || self.skipped_due_date || self.skipped_priority)
    }
}

pub struct TaskStore {
    storage: Storage,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open a store backed by the given file, loading any persisted tasks.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let storage = Storage::new(path);
        let tasks = storage.load()?;
        Ok(Self { storage, tasks })
    }

    /// The full collection, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Re-read the collection from disk, discarding in-memory state.
    pub fn reload(&mut self) -> Result<()> {
        self.tasks = self.storage.load()?;
        Ok(())
    }

    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Validate, append, and persist a new task. The collection is left
    /// untouched when validation fails.
    pub fn create(
        &mut self,
        title: &str,
        due_date: &str,
        priority: Option<Priority>,
    ) -> Result<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::Validation("title must not be empty".into()));
        }
        let due_date = parse_due_date(due_date).ok_or_else(|| {
            StoreError::Validation(format!(
                "invalid due date (expected YYYY-MM-DD): {due_date}"
            ))
        })?;

        let task = Task {
            id: self.next_id(),
            title: title.to_string(),
            due_date,
            priority: priority.unwrap_or_default(),
            completed: false,
        };
        debug!("Creating task {}: {}", task.id, task.title);

        self.tasks.push(task.clone());
        self.storage.save(&self.tasks)?;
        Ok(task)
    }

    /// Apply the supplied fields to an existing task. Fields that fail
    /// validation are skipped (previous value kept) and reported through
    /// the returned outcome; the rest of the edit still applies.
    pub fn edit(
        &mut self,
        id: u64,
        new_title: Option<&str>,
        new_due_date: Option<&str>,
        new_priority: Option<&str>,
    ) -> Result<EditOutcome> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut outcome = EditOutcome::default();

        if let Some(title) = new_title {
            let title = title.trim();
            if title.is_empty() {
                outcome.skipped_title = true;
            } else {
                task.title = title.to_string();
            }
        }

        if let Some(due) = new_due_date {
            match parse_due_date(due) {
                Some(date) => task.due_date = date,
                None => outcome.skipped_due_date = true,
            }
        }

        if let Some(priority) = new_priority {
            match Priority::parse(priority) {
                Some(p) => task.priority = p,
                None => outcome.skipped_priority = true,
            }
        }

        self.storage.save(&self.tasks)?;
        Ok(outcome)
    }

    /// Remove a task and persist. Returns the removed task.
    pub fn delete(&mut self, id: u64) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let task = self.tasks.remove(index);
        debug!("Deleted task {}: {}", task.id, task.title);
        self.storage.save(&self.tasks)?;
        Ok(task)
    }

    /// Flip a task's completion state and persist.
    pub fn toggle(&mut self, id: u64) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        task.completed = !task.completed;
        let toggled = task.clone();
        self.storage.save(&self.tasks)?;
        Ok(toggled)
    }

    /// Case-insensitive substring search over titles.
    pub fn search(&self, keyword: &str) -> Result<Vec<&Task>> {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return Err(StoreError::Validation(
                "search keyword must not be empty".into(),
            ));
        }

        Ok(self
            .tasks
            .iter()
            .filter(|t| t.title.to_lowercase().contains(&keyword))
            .collect())
    }
}
