//! Tasks file persistence - JSON storage with whole-file rewrites

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::Result;
use super::model::Task;

pub struct Storage {
    tasks_path: PathBuf,
}

impl Storage {
    pub fn new(tasks_path: impl Into<PathBuf>) -> Self {
        Self {
            tasks_path: tasks_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.tasks_path
    }

    /// Read the persisted collection. A missing or blank file is an
    /// empty collection; malformed content surfaces as a parse error.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.tasks_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.tasks_path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        debug!(
            "Loaded {} tasks from {}",
            tasks.len(),
            self.tasks_path.display()
        );
        Ok(tasks)
    }

    /// Overwrite the file with the full collection.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.tasks_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Create backup
        if self.tasks_path.exists() {
            let backup_path = self.tasks_path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.tasks_path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.tasks_path, content)?;
        Ok(())
    }
}
