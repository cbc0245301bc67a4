use crate::dialog::{handle_dialog_input, DialogAction};
use crate::events::{Event, EventHandler};
use crate::form::{FormAction, FormState};
use crate::keybindings::{board_action, KeybindingAction};
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kanban_core::{InputState, KanbanResult};
use kanban_domain::{Board, Task};
use kanban_persistence::{PersistenceMetadata, PersistenceStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Which view currently receives key events. The board is held by [`App`]
/// itself so it keeps autosaving while a form is open.
#[derive(Debug, Clone)]
pub enum Screen {
    Board,
    Form(FormState),
    /// Typing a filter query; the board narrows as it changes
    Filter(InputState),
    /// Keybinding reference over the board
    Help,
}

#[derive(Debug, Clone)]
pub enum SaveStatus {
    Saved(PersistenceMetadata),
    Failed(String),
}

pub struct App {
    pub board: Board,
    pub screen: Screen,
    pub should_quit: bool,
    /// Terminal size, unknown until the first resize event
    pub viewport: Option<(u16, u16)>,
    pub last_save: Option<SaveStatus>,
    store: Arc<dyn PersistenceStore>,
}

impl App {
    pub fn new(board: Board, store: Arc<dyn PersistenceStore>) -> Self {
        Self {
            board,
            screen: Screen::Board,
            should_quit: false,
            viewport: None,
            last_save: None,
            store,
        }
    }

    /// Build the board from whatever the store holds.
    pub async fn load(store: Arc<dyn PersistenceStore>, history_depth: usize) -> KanbanResult<Self> {
        let tasks = store.load().await?;
        tracing::info!("starting with {} tasks from {}", tasks.len(), store.path().display());
        Ok(Self::new(Board::with_history_depth(tasks, history_depth), store))
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(width, height) => {
                if self.viewport.is_none() {
                    tracing::debug!("initial viewport {}x{}", width, height);
                }
                self.viewport = Some((width, height));
            }
            Event::Tick => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match &mut self.screen {
            Screen::Board => {
                if let Some(action) = board_action(&key) {
                    self.handle_action(action);
                }
            }
            Screen::Form(form) => {
                let action = form.handle_key(key);
                self.apply(action);
            }
            Screen::Filter(input) => {
                let action = handle_dialog_input(input, key);
                let query = input.as_str().to_string();
                self.update_filter(action, &query);
            }
            Screen::Help => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                    self.screen = Screen::Board;
                }
            }
        }
    }

    fn update_filter(&mut self, action: DialogAction, query: &str) {
        match action {
            DialogAction::None | DialogAction::Back => self.board.set_filter(query),
            DialogAction::Confirm => {
                self.board.set_filter(query);
                self.screen = Screen::Board;
            }
            DialogAction::Cancel => {
                self.board.clear_filter();
                self.screen = Screen::Board;
            }
        }
    }

    pub fn handle_action(&mut self, action: KeybindingAction) {
        use KeybindingAction::*;

        match action {
            FocusLeft => {
                self.board.focus_prev();
            }
            FocusRight => {
                self.board.focus_next();
            }
            SelectUp => self.board.select_prev(),
            SelectDown => self.board.select_next(),
            MoveTaskUp => {
                self.board.move_up();
            }
            MoveTaskDown => {
                self.board.move_down();
            }
            MoveTaskLeft => {
                self.board.move_left();
            }
            MoveTaskRight => {
                self.board.move_right();
            }
            CreateTask => {
                self.screen = Screen::Form(FormState::new(self.board.focused()));
            }
            EditTask => match self.board.take_selected() {
                Some(task) => self.screen = Screen::Form(FormState::edit(task)),
                None => tracing::debug!("nothing selected to edit"),
            },
            DeleteTask => {
                self.board.delete();
            }
            Undo => {
                self.board.undo();
            }
            StartFilter => {
                let mut input = InputState::new();
                if let Some(query) = self.board.filter() {
                    input.set(query);
                }
                self.screen = Screen::Filter(input);
            }
            ClearFilter => self.board.clear_filter(),
            ShowHelp => self.screen = Screen::Help,
            Quit => self.should_quit = true,
        }
    }

    /// Leave the form according to `action`. `FormAction::None` keeps it open.
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::None => return,
            FormAction::Commit(draft) => {
                self.board.commit(draft);
            }
            FormAction::Cancel(Some(task)) => self.board.restore(task),
            FormAction::Cancel(None) => {}
        }
        self.screen = Screen::Board;
    }

    /// Everything that should survive a restart, including a task that is
    /// currently open in the edit form.
    pub fn snapshot(&self) -> Vec<Task> {
        let mut tasks = self.board.tasks();
        if let Screen::Form(form) = &self.screen {
            if let Some(task) = form.original() {
                tasks.push(task.clone());
            }
        }
        tasks
    }

    /// Periodic save. Failures are reported and retried on the next tick.
    pub async fn autosave(&mut self) {
        match self.store.save(&self.snapshot()).await {
            Ok(metadata) => {
                tracing::debug!("autosaved {} tasks", metadata.task_count);
                self.last_save = Some(SaveStatus::Saved(metadata));
            }
            Err(e) => {
                tracing::warn!("autosave to {} failed: {}", self.store.path().display(), e);
                self.last_save = Some(SaveStatus::Failed(e.to_string()));
            }
        }
    }

    /// Final save on exit.
    pub async fn shutdown_save(&mut self) -> KanbanResult<PersistenceMetadata> {
        match self.store.save(&self.snapshot()).await {
            Ok(metadata) => {
                self.last_save = Some(SaveStatus::Saved(metadata.clone()));
                Ok(metadata)
            }
            Err(e) => {
                tracing::error!("final save to {} failed: {}", self.store.path().display(), e);
                self.last_save = Some(SaveStatus::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Run the TUI until quit, autosaving every `autosave_every`. The
    /// terminal is restored before the final save.
    pub async fn run(&mut self, autosave_every: Duration) -> anyhow::Result<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new(TICK_RATE);

        let loop_result = self.event_loop(&mut terminal, &mut events, autosave_every).await;

        events.stop();
        let restored = restore_terminal(&mut terminal);
        let saved = self.shutdown_save().await;

        loop_result?;
        restored?;
        let metadata = saved?;
        tracing::info!("saved {} tasks on exit", metadata.task_count);
        Ok(())
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
        autosave_every: Duration,
    ) -> anyhow::Result<()> {
        let start = Instant::now()
            .checked_add(autosave_every)
            .ok_or_else(|| anyhow::anyhow!("autosave interval {autosave_every:?} is out of range"))?;
        let mut autosave = tokio::time::interval_at(start, autosave_every);
        autosave.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            tokio::select! {
                event = events.next() => match event {
                    Some(event) => self.handle_event(event),
                    None => {
                        tracing::warn!("event channel closed");
                        break;
                    }
                },
                _ = autosave.tick() => self.autosave().await,
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
