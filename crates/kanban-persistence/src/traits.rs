use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kanban_core::KanbanResult;
use kanban_domain::Task;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Version written into every envelope. Files with any other version are
/// rejected on load.
pub const FORMAT_VERSION: u32 = 1;

/// Metadata for persistence operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistenceMetadata {
    /// Version of the persistence format
    pub format_version: u32,
    /// ID of the process that performed the save
    pub instance_id: Uuid,
    /// When this data was saved
    pub saved_at: DateTime<Utc>,
    /// Number of tasks in the saved document
    #[serde(default)]
    pub task_count: usize,
}

impl PersistenceMetadata {
    pub fn new(instance_id: Uuid, task_count: usize) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            instance_id,
            saved_at: Utc::now(),
            task_count,
        }
    }
}

/// Storage backend for the task set.
///
/// Tasks are written in column order and read back in the same order, so a
/// board rebuilt from `load` has the same columns it had at `save`.
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Replace the stored task set
    async fn save(&self, tasks: &[Task]) -> KanbanResult<PersistenceMetadata>;

    /// Load the stored task set. A store with nothing on disk yet yields an
    /// empty set and writes an empty document.
    async fn load(&self) -> KanbanResult<Vec<Task>>;

    /// Check if the store file exists
    async fn exists(&self) -> bool;

    /// Get the path to the store file
    fn path(&self) -> &Path;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T: Send + Sync>: Send + Sync {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> KanbanResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> KanbanResult<T>;
}
