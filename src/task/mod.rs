//! Task store module
//!
//! Owns the task collection and its persistence:
//! - Task model (id, title, due date, priority, completion state)
//! - JSON file storage with whole-file rewrites
//! - Create/edit/delete/toggle/search operations

pub mod error;
pub mod model;
pub mod storage;
pub mod store;

pub use error::{Result, StoreError};
pub use model::{parse_due_date, Priority, Task};
pub use storage::Storage;
pub use store::{EditOutcome, TaskStore};

use std::path::PathBuf;

/// Default tasks file under the platform data directory.
pub fn default_tasks_path() -> anyhow::Result<PathBuf> {
    let data_dir =
        dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Cannot find data directory"))?;
    Ok(data_dir.join("tick").join("tasks.json"))
}
