use crate::serialization::JsonSerializer;
use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{PersistenceMetadata, PersistenceStore, Serializer, FORMAT_VERSION};
use kanban_core::{KanbanError, KanbanResult};
use kanban_domain::Task;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// JSON file-based persistence store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    instance_id: Uuid,
}

/// On-disk document: a version tag, save metadata and the tasks in column
/// order.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonEnvelope {
    pub version: u32,
    pub metadata: PersistenceMetadata,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id: Uuid::new_v4(),
        }
    }

    /// Create a store with a fixed instance ID (useful for testing)
    pub fn with_instance_id(path: impl AsRef<Path>, instance_id: Uuid) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id,
        }
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    async fn write_envelope(&self, tasks: &[Task]) -> KanbanResult<PersistenceMetadata> {
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            metadata: PersistenceMetadata::new(self.instance_id, tasks.len()),
            tasks: tasks.to_vec(),
        };
        let bytes = JsonSerializer.serialize(&envelope)?;
        AtomicWriter::write_atomic(&self.path, &bytes).await?;
        Ok(envelope.metadata)
    }
}

#[async_trait::async_trait]
impl PersistenceStore for JsonFileStore {
    async fn save(&self, tasks: &[Task]) -> KanbanResult<PersistenceMetadata> {
        let metadata = self.write_envelope(tasks).await?;
        tracing::info!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(metadata)
    }

    async fn load(&self) -> KanbanResult<Vec<Task>> {
        if !self.exists().await {
            tracing::info!(
                "No task file at {}, starting with an empty board",
                self.path.display()
            );
            self.write_envelope(&[]).await?;
            return Ok(Vec::new());
        }

        let bytes = AtomicWriter::read_all(&self.path).await?;
        let envelope: JsonEnvelope = JsonSerializer.deserialize(&bytes)?;

        if envelope.version != FORMAT_VERSION {
            return Err(KanbanError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }

        tracing::info!(
            "Loaded {} tasks from {} (saved {})",
            envelope.tasks.len(),
            self.path.display(),
            envelope.metadata.saved_at
        );
        Ok(envelope.tasks)
    }

    async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
