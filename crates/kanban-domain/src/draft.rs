use crate::task::{Task, TaskStatus};

/// What the form hands back to the board on commit.
///
/// `original` carries the task that was lifted out of its column for
/// editing; `None` means the draft describes a new task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub status: TaskStatus,
    pub title: String,
    pub description: String,
    pub original: Option<Task>,
}

impl TaskDraft {
    pub fn new(status: TaskStatus, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            description: description.into(),
            original: None,
        }
    }

    pub fn editing(
        original: Task,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            status: original.status,
            title: title.into(),
            description: description.into(),
            original: Some(original),
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn is_edit(&self) -> bool {
        self.original.is_some()
    }

    /// Build the task this draft describes, keeping the identity and
    /// creation time of an edited task.
    pub fn into_task(self) -> Task {
        match self.original {
            Some(mut task) => {
                task.update_content(&self.title, &self.description);
                task.status = self.status;
                task
            }
            None => Task::new(self.status, &self.title, &self.description),
        }
    }
}
