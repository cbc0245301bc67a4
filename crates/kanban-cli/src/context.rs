use kanban_core::KanbanResult;
use kanban_domain::{FilterKey, Task, TaskStatus};
use kanban_persistence::{JsonFileStore, PersistenceMetadata, PersistenceStore};
use std::path::Path;

/// Which tasks `list` should report.
#[derive(Debug, Default, Clone)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub search: Option<String>,
    /// Overrides each task's own filter key
    pub by: Option<FilterKey>,
}

impl TaskFilter {
    pub fn accepts(&self, task: &Task) -> bool {
        if self.status.is_some_and(|status| status != task.status) {
            return false;
        }
        match (&self.search, self.by) {
            (Some(query), Some(key)) => task.matches_field(key, query),
            (Some(query), None) => task.matches(query),
            (None, _) => true,
        }
    }
}

/// Task file loaded for a single non-interactive command.
pub struct CliContext {
    pub tasks: Vec<Task>,
    store: JsonFileStore,
}

impl CliContext {
    pub async fn load(file_path: &Path) -> KanbanResult<Self> {
        let store = JsonFileStore::new(file_path);
        let tasks = store.load().await?;
        Ok(Self { tasks, store })
    }

    pub fn list(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.accepts(task)).collect()
    }

    /// Append a task to the end of its column.
    pub fn add(&mut self, task: Task) -> &Task {
        let position = self
            .tasks
            .iter()
            .rposition(|t| t.status == task.status)
            .map_or(self.tasks.len(), |idx| idx + 1);
        self.tasks.insert(position, task);
        &self.tasks[position]
    }

    pub async fn save(&self) -> KanbanResult<PersistenceMetadata> {
        self.store.save(&self.tasks).await
    }
}
