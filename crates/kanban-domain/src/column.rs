use kanban_core::SelectionState;

use crate::task::{Task, TaskStatus};

/// Ordered tasks for one pipeline stage plus the cursor into them.
///
/// Structural mutations leave the cursor alone; the board decides where it
/// goes afterwards.
#[derive(Debug, Clone)]
pub struct Column {
    status: TaskStatus,
    tasks: Vec<Task>,
    selection: SelectionState,
}

impl Column {
    pub fn new(status: TaskStatus) -> Self {
        Self {
            status,
            tasks: Vec::new(),
            selection: SelectionState::new(),
        }
    }

    /// # Panics
    /// If any task's status differs from `status`.
    pub fn with_tasks(status: TaskStatus, tasks: Vec<Task>) -> Self {
        let mut column = Self::new(status);
        for task in tasks {
            column.push(task);
        }
        column
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn items(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// # Panics
    /// If `index > len` or the task belongs to another stage.
    pub fn insert_at(&mut self, index: usize, task: Task) {
        self.assert_belongs(&task);
        self.tasks.insert(index, task);
    }

    /// Append and return the new task's index.
    pub fn push(&mut self, task: Task) -> usize {
        self.assert_belongs(&task);
        self.tasks.push(task);
        self.tasks.len() - 1
    }

    /// # Panics
    /// If `index` is out of range. Callers check `len()` first.
    pub fn remove_at(&mut self, index: usize) -> Task {
        self.tasks.remove(index)
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selection.select(index, self.tasks.len());
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.get()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selection.get().and_then(|idx| self.tasks.get(idx))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn select_last(&mut self) {
        self.selection.select_last(self.tasks.len());
    }

    fn assert_belongs(&self, task: &Task) {
        assert_eq!(
            task.status, self.status,
            "task {} has status {} but was placed in the {} column",
            task.id, task.status, self.status
        );
    }
}
