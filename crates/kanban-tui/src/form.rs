//! Create/edit form for a single task.

use crate::dialog::{handle_dialog_input, DialogAction};
use crossterm::event::KeyEvent;
use kanban_core::InputState;
use kanban_domain::{Task, TaskDraft, TaskStatus, DESCRIPTION_CHAR_LIMIT, TITLE_CHAR_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
}

/// What the app should do after the form handled a key.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    None,
    Commit(TaskDraft),
    /// Leave the form. Carries the task being edited so it can go back on
    /// the board untouched.
    Cancel(Option<Task>),
}

#[derive(Debug, Clone)]
pub struct FormState {
    field: FormField,
    status: TaskStatus,
    title: InputState,
    description: InputState,
    original: Option<Task>,
}

impl FormState {
    /// Empty form for a new task in `status`.
    pub fn new(status: TaskStatus) -> Self {
        Self {
            field: FormField::Title,
            status,
            title: InputState::with_char_limit(TITLE_CHAR_LIMIT),
            description: InputState::with_char_limit(DESCRIPTION_CHAR_LIMIT),
            original: None,
        }
    }

    /// Form prefilled from `task`, which the board has already released.
    pub fn edit(task: Task) -> Self {
        let mut form = Self::new(task.status);
        form.title.set(&task.title);
        form.description.set(&task.description);
        form.original = Some(task);
        form
    }

    pub fn field(&self) -> FormField {
        self.field
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn title(&self) -> &InputState {
        &self.title
    }

    pub fn description(&self) -> &InputState {
        &self.description
    }

    pub fn is_edit(&self) -> bool {
        self.original.is_some()
    }

    /// The task lifted off the board for editing, if any.
    pub fn original(&self) -> Option<&Task> {
        self.original.as_ref()
    }

    pub fn heading(&self) -> String {
        if self.is_edit() {
            format!("Edit task ({})", self.status)
        } else {
            format!("New task ({})", self.status)
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        let input = match self.field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
        };

        match handle_dialog_input(input, key) {
            DialogAction::None => FormAction::None,
            DialogAction::Cancel => FormAction::Cancel(self.original.take()),
            DialogAction::Back => {
                self.field = FormField::Title;
                FormAction::None
            }
            DialogAction::Confirm => match self.field {
                FormField::Title => {
                    self.field = FormField::Description;
                    FormAction::None
                }
                FormField::Description => FormAction::Commit(self.take_draft()),
            },
        }
    }

    fn take_draft(&mut self) -> TaskDraft {
        let title = self.title.as_str().to_string();
        let description = self.description.as_str().to_string();
        match self.original.take() {
            Some(original) => TaskDraft::editing(original, title, description),
            None => TaskDraft::new(self.status, title, description),
        }
    }
}
