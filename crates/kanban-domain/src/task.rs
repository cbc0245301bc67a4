use chrono::{DateTime, Utc};
use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type TaskId = Uuid;

pub const TITLE_CHAR_LIMIT: usize = 32;
pub const DESCRIPTION_CHAR_LIMIT: usize = 32;

/// Pipeline stage. Declaration order is pipeline order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
    Doing,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Todo, Self::Doing, Self::Done];

    pub fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::Doing => 1,
            Self::Done => 2,
        }
    }

    /// The following stage, or `None` at `Done`.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Todo => Some(Self::Doing),
            Self::Doing => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// The preceding stage, or `None` at `Todo`.
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Todo => None,
            Self::Doing => Some(Self::Todo),
            Self::Done => Some(Self::Doing),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::Doing => "Doing",
            Self::Done => "Done",
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            other => Err(format!("unknown status '{other}': use todo, doing, done")),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which text field a task exposes to search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKey {
    #[default]
    Title,
    Description,
}

impl std::str::FromStr for FilterKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "description" | "desc" => Ok(Self::Description),
            other => Err(format!("unknown filter key '{other}': use title, description")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub status: TaskStatus,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub filter_key: FilterKey,
}

impl Task {
    pub fn new(status: TaskStatus, title: &str, description: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            status,
            title: truncate(title, TITLE_CHAR_LIMIT),
            description: truncate(description, DESCRIPTION_CHAR_LIMIT),
            created_at: now,
            updated_at: now,
            filter_key: FilterKey::default(),
        }
    }

    /// Move one stage toward `Done`. Returns false when already done.
    pub fn advance(&mut self) -> bool {
        match self.status.next() {
            Some(next) => {
                self.status = next;
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Move one stage toward `Todo`. Returns false when already todo.
    pub fn retreat(&mut self) -> bool {
        match self.status.prev() {
            Some(prev) => {
                self.status = prev;
                self.touch();
                true
            }
            None => false,
        }
    }

    pub fn update_content(&mut self, title: &str, description: &str) {
        self.title = truncate(title, TITLE_CHAR_LIMIT);
        self.description = truncate(description, DESCRIPTION_CHAR_LIMIT);
        self.touch();
    }

    pub fn set_filter_key(&mut self, key: FilterKey) {
        self.filter_key = key;
    }

    pub fn filter_value(&self) -> &str {
        self.field(self.filter_key)
    }

    pub fn field(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Title => &self.title,
            FilterKey::Description => &self.description,
        }
    }

    /// Case-insensitive substring match against the task's filter value.
    pub fn matches(&self, query: &str) -> bool {
        self.matches_field(self.filter_key, query)
    }

    pub fn matches_field(&self, key: FilterKey, query: &str) -> bool {
        self.field(key)
            .to_lowercase()
            .contains(&query.to_lowercase())
    }

    pub fn validate_title(title: &str) -> KanbanResult<()> {
        if title.trim().is_empty() {
            return Err(KanbanError::Validation("title must not be empty".into()));
        }
        let len = title.chars().count();
        if len > TITLE_CHAR_LIMIT {
            return Err(KanbanError::Validation(format!(
                "title is {len} characters, limit is {TITLE_CHAR_LIMIT}"
            )));
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
