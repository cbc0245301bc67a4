//! The board state machine.
//!
//! A [`Board`] owns one [`Column`] per pipeline stage, the focused stage and
//! the delete history. Every operation is a silent no-op when its
//! precondition does not hold (nothing selected, already at a boundary,
//! nothing to undo) and otherwise leaves each touched column with an explicit
//! cursor.
//!
//! An optional filter query narrows every column to the tasks whose filter
//! value contains it. Cursor movement, reordering, delete and edit then act
//! on visible tasks only; the cursor never rests on a hidden task.

use crate::column::Column;
use crate::draft::TaskDraft;
use crate::history::{DeleteHistory, DEFAULT_HISTORY_DEPTH};
use crate::task::{Task, TaskId, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone)]
pub struct Board {
    columns: [Column; 3],
    focused: TaskStatus,
    history: DeleteHistory,
    filter: Option<String>,
}

impl Board {
    /// Partition `tasks` into columns by status, keeping their relative
    /// order. Focus starts on `Todo` with its first task selected.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self::with_history_depth(tasks, DEFAULT_HISTORY_DEPTH)
    }

    pub fn with_history_depth(tasks: Vec<Task>, depth: usize) -> Self {
        let mut columns = TaskStatus::ALL.map(Column::new);
        for task in tasks {
            columns[task.status.index()].push(task);
        }
        if !columns[TaskStatus::Todo.index()].is_empty() {
            columns[TaskStatus::Todo.index()].select(Some(0));
        }

        Self {
            columns,
            focused: TaskStatus::Todo,
            history: DeleteHistory::with_capacity(depth),
            filter: None,
        }
    }

    pub fn focused(&self) -> TaskStatus {
        self.focused
    }

    pub fn columns(&self) -> &[Column; 3] {
        &self.columns
    }

    pub fn column(&self, status: TaskStatus) -> &Column {
        &self.columns[status.index()]
    }

    pub fn focused_column(&self) -> &Column {
        self.column(self.focused)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.focused_column().selected_task()
    }

    pub fn history(&self) -> &DeleteHistory {
        &self.history
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Every task on the board in column order, for persistence.
    pub fn tasks(&self) -> Vec<Task> {
        self.columns
            .iter()
            .flat_map(|column| column.items().iter().cloned())
            .collect()
    }

    pub fn focus_prev(&mut self) -> TaskStatus {
        match self.focused.prev() {
            Some(target) => self.shift_focus(target),
            None => tracing::debug!("focus already on first column"),
        }
        self.focused
    }

    pub fn focus_next(&mut self) -> TaskStatus {
        match self.focused.next() {
            Some(target) => self.shift_focus(target),
            None => tracing::debug!("focus already on last column"),
        }
        self.focused
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Narrow every column to tasks matching `query`. A blank query clears
    /// the filter. Cursors sitting on tasks that became hidden move to the
    /// first visible task of the focused column.
    pub fn set_filter(&mut self, query: &str) {
        let query = query.trim();
        self.filter = (!query.is_empty()).then(|| query.to_string());

        for status in TaskStatus::ALL {
            let hidden = self
                .column(status)
                .selected_task()
                .is_some_and(|task| !self.is_visible(task));
            if hidden {
                self.column_mut(status).clear_selection();
            }
        }
        self.select_first_visible_if_none(self.focused);
    }

    pub fn clear_filter(&mut self) {
        if self.filter.take().is_some() {
            tracing::debug!("filter cleared");
        }
        self.select_first_visible_if_none(self.focused);
    }

    pub fn is_visible(&self, task: &Task) -> bool {
        self.filter.as_deref().map_or(true, |query| task.matches(query))
    }

    /// Column indices of the tasks the filter lets through, in order.
    pub fn visible_indices(&self, status: TaskStatus) -> Vec<usize> {
        self.column(status)
            .items()
            .iter()
            .enumerate()
            .filter(|(_, task)| self.is_visible(task))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Position of the cursor within the visible tasks of `status`.
    pub fn visible_selection(&self, status: TaskStatus) -> Option<usize> {
        let selected = self.column(status).selected_index()?;
        self.visible_indices(status)
            .iter()
            .position(|idx| *idx == selected)
    }

    /// Move the cursor down to the next visible task.
    pub fn select_next(&mut self) {
        let visible = self.visible_indices(self.focused);
        let target = match self.focused_column().selected_index() {
            Some(current) => visible.iter().copied().find(|idx| *idx > current),
            None => visible.first().copied(),
        };
        if let Some(idx) = target {
            self.column_mut(self.focused).select(Some(idx));
        }
    }

    /// Move the cursor up to the previous visible task.
    pub fn select_prev(&mut self) {
        let visible = self.visible_indices(self.focused);
        let target = match self.focused_column().selected_index() {
            Some(current) => visible.iter().rev().copied().find(|idx| *idx < current),
            None => visible.first().copied(),
        };
        if let Some(idx) = target {
            self.column_mut(self.focused).select(Some(idx));
        }
    }

    /// Swap the selected task with the visible task above it.
    pub fn move_up(&mut self) -> bool {
        let Some(index) = self.focused_column().selected_index() else {
            return false;
        };
        let above = self
            .visible_indices(self.focused)
            .into_iter()
            .rev()
            .find(|idx| *idx < index);
        let Some(target) = above else {
            tracing::debug!("selected task already at top");
            return false;
        };
        self.reorder(index, target);
        true
    }

    /// Swap the selected task with the visible task below it.
    pub fn move_down(&mut self) -> bool {
        let Some(index) = self.focused_column().selected_index() else {
            return false;
        };
        let below = self
            .visible_indices(self.focused)
            .into_iter()
            .find(|idx| *idx > index);
        let Some(target) = below else {
            tracing::debug!("selected task already at bottom");
            return false;
        };
        // After removal the neighbour sits at `target - 1`; insert behind it.
        self.reorder(index, target);
        true
    }

    /// Advance the selected task one stage and follow it with focus.
    /// Returns the column the task ended up in.
    pub fn move_right(&mut self) -> Option<TaskStatus> {
        self.transfer(Direction::Forward)
    }

    /// Retreat the selected task one stage and follow it with focus.
    pub fn move_left(&mut self) -> Option<TaskStatus> {
        self.transfer(Direction::Backward)
    }

    /// Move the selected task into the delete history. The cursor moves to
    /// the next visible task, or the previous one at the end of the column.
    pub fn delete(&mut self) -> bool {
        let Some(index) = self.focused_column().selected_index() else {
            tracing::debug!("nothing visible selected to delete");
            return false;
        };
        let task = self.column_mut(self.focused).remove_at(index);
        self.select_visible_near(self.focused, index);

        tracing::debug!("deleted task {} from {}", task.id, task.status);
        if let Some(evicted) = self.history.push(task) {
            tracing::info!(
                "task {} ({}) dropped from delete history",
                evicted.id,
                evicted.title
            );
        }
        true
    }

    /// Put the most recently deleted task back at the end of its column,
    /// focused and selected.
    pub fn undo(&mut self) -> bool {
        let Some(task) = self.history.pop() else {
            tracing::debug!("delete history is empty");
            return false;
        };
        tracing::debug!("restoring task {} to {}", task.id, task.status);
        self.place(task);
        true
    }

    /// Lift the selected task out of its column so a form can edit it.
    /// While the form is open the task lives in no column.
    pub fn take_selected(&mut self) -> Option<Task> {
        let index = self.focused_column().selected_index()?;
        let task = self.column_mut(self.focused).remove_at(index);
        self.select_visible_near(self.focused, index);
        Some(task)
    }

    /// Apply a committed form. Drafts with an empty title are dropped
    /// without touching any column, including an edited task in flight.
    pub fn commit(&mut self, draft: TaskDraft) -> Option<TaskId> {
        if !draft.has_title() {
            if let Some(original) = &draft.original {
                tracing::info!("edit of task {} committed with empty title, dropped", original.id);
            } else {
                tracing::debug!("discarding draft with empty title");
            }
            return None;
        }
        let task = draft.into_task();
        let id = task.id;
        tracing::debug!("committing task {} to {}", id, task.status);
        self.place(task);
        Some(id)
    }

    /// Return a task lifted by [`Board::take_selected`] unchanged.
    pub fn restore(&mut self, task: Task) {
        self.place(task);
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Column {
        &mut self.columns[status.index()]
    }

    fn shift_focus(&mut self, target: TaskStatus) {
        self.column_mut(self.focused).clear_selection();
        self.focused = target;
        self.select_first_visible_if_none(target);
    }

    fn select_first_visible_if_none(&mut self, status: TaskStatus) {
        if self.column(status).selected_index().is_some() {
            return;
        }
        let first = self.visible_indices(status).first().copied();
        self.column_mut(status).select(first);
    }

    /// After removing the task at `index`, select the visible task that
    /// slid into its slot, else the last visible task before it.
    fn select_visible_near(&mut self, status: TaskStatus, index: usize) {
        let visible = self.visible_indices(status);
        let target = visible
            .iter()
            .copied()
            .find(|idx| *idx >= index)
            .or_else(|| visible.last().copied());
        self.column_mut(status).select(target);
    }

    fn reorder(&mut self, from: usize, to: usize) {
        let column = self.column_mut(self.focused);
        let task = column.remove_at(from);
        column.insert_at(to, task);
        column.select(Some(to));
    }

    fn transfer(&mut self, direction: Direction) -> Option<TaskStatus> {
        let source = self.focused;
        let index = self.focused_column().selected_index()?;
        let mut task = self.column_mut(source).remove_at(index);

        let moved = match direction {
            Direction::Forward => task.advance(),
            Direction::Backward => task.retreat(),
        };
        if !moved {
            tracing::debug!("task {} already at pipeline boundary", task.id);
        }

        let destination = task.status;
        if destination != source {
            self.column_mut(source).clear_selection();
        }
        let column = self.column_mut(destination);
        column.push(task);
        column.select_last();
        self.focused = destination;
        Some(destination)
    }

    /// Append `task` to its own column, select it and focus that column.
    fn place(&mut self, task: Task) {
        if !self.is_visible(&task) {
            tracing::debug!("task {} is hidden by the filter, clearing it", task.id);
            self.filter = None;
        }
        let target = task.status;
        if target != self.focused {
            self.column_mut(self.focused).clear_selection();
        }
        self.focused = target;
        let column = self.column_mut(target);
        column.clear_selection();
        column.push(task);
        column.select_last();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn task(status: TaskStatus, title: &str) -> Task {
        Task::new(status, title, "")
    }

    fn titles(board: &Board, status: TaskStatus) -> Vec<String> {
        board
            .column(status)
            .items()
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }

    fn ids(board: &Board, status: TaskStatus) -> HashSet<TaskId> {
        board.column(status).items().iter().map(|t| t.id).collect()
    }

    fn board_with_todo(names: &[&str]) -> Board {
        Board::new(names.iter().map(|n| task(TaskStatus::Todo, n)).collect())
    }

    fn assert_cursors_valid(board: &Board) {
        for column in board.columns() {
            if let Some(idx) = column.selected_index() {
                assert!(idx < column.len(), "cursor {idx} out of range in {}", column.status());
            }
        }
    }

    #[test]
    fn test_new_partitions_by_status_in_order() {
        let board = Board::new(vec![
            task(TaskStatus::Done, "d1"),
            task(TaskStatus::Todo, "t1"),
            task(TaskStatus::Doing, "g1"),
            task(TaskStatus::Todo, "t2"),
        ]);
        assert_eq!(titles(&board, TaskStatus::Todo), ["t1", "t2"]);
        assert_eq!(titles(&board, TaskStatus::Doing), ["g1"]);
        assert_eq!(titles(&board, TaskStatus::Done), ["d1"]);
        assert_eq!(board.focused(), TaskStatus::Todo);
        assert_eq!(board.focused_column().selected_index(), Some(0));
        assert_eq!(board.column(TaskStatus::Doing).selected_index(), None);
        assert_eq!(board.task_count(), 4);
    }

    #[test]
    fn test_empty_board_has_no_selection() {
        let board = Board::default();
        assert!(board.selected_task().is_none());
        assert_eq!(board.task_count(), 0);
    }

    // Focus navigation

    #[test]
    fn test_focus_prev_at_todo_is_noop() {
        let mut board = board_with_todo(&["a"]);
        assert_eq!(board.focus_prev(), TaskStatus::Todo);
        assert_eq!(board.focused_column().selected_index(), Some(0));
    }

    #[test]
    fn test_focus_next_at_done_is_noop() {
        let mut board = Board::new(vec![task(TaskStatus::Done, "d")]);
        board.focus_next();
        board.focus_next();
        assert_eq!(board.focused(), TaskStatus::Done);
        assert_eq!(board.focus_next(), TaskStatus::Done);
        assert_eq!(board.focused_column().selected_index(), Some(0));
    }

    #[test]
    fn test_focus_move_clears_outgoing_and_selects_incoming() {
        let mut board = Board::new(vec![
            task(TaskStatus::Todo, "t"),
            task(TaskStatus::Doing, "g1"),
            task(TaskStatus::Doing, "g2"),
        ]);
        assert_eq!(board.focus_next(), TaskStatus::Doing);
        assert_eq!(board.column(TaskStatus::Todo).selected_index(), None);
        assert_eq!(board.column(TaskStatus::Doing).selected_index(), Some(0));
    }

    #[test]
    fn test_focus_into_empty_column_has_no_selection() {
        let mut board = board_with_todo(&["a"]);
        board.focus_next();
        assert_eq!(board.focused(), TaskStatus::Doing);
        assert!(board.selected_task().is_none());
    }

    #[test]
    fn test_focus_keeps_existing_incoming_selection() {
        let mut board = Board::new(vec![
            task(TaskStatus::Todo, "t"),
            task(TaskStatus::Doing, "g1"),
            task(TaskStatus::Doing, "g2"),
        ]);
        board.focus_next();
        board.select_next();
        assert_eq!(board.focused_column().selected_index(), Some(1));

        // Focus away and straight back: the cursor was cleared on leave, so
        // re-entry lands on the first task.
        board.focus_prev();
        board.focus_next();
        assert_eq!(board.focused_column().selected_index(), Some(0));
    }

    #[test]
    fn test_focus_stays_in_range() {
        let mut board = Board::default();
        for _ in 0..5 {
            board.focus_next();
            assert!(TaskStatus::ALL.contains(&board.focused()));
        }
        for _ in 0..5 {
            board.focus_prev();
            assert!(TaskStatus::ALL.contains(&board.focused()));
        }
        assert_eq!(board.focused(), TaskStatus::Todo);
    }

    // Intra-column reorder

    #[test]
    fn test_move_up_swaps_and_tracks_task() {
        let mut board = board_with_todo(&["a", "b", "c"]);
        board.select_next();
        board.select_next();
        assert!(board.move_up());
        assert_eq!(titles(&board, TaskStatus::Todo), ["a", "c", "b"]);
        assert_eq!(board.focused_column().selected_index(), Some(1));
        assert_eq!(board.selected_task().unwrap().title, "c");
    }

    #[test]
    fn test_move_down_swaps_and_tracks_task() {
        let mut board = board_with_todo(&["a", "b", "c"]);
        assert!(board.move_down());
        assert_eq!(titles(&board, TaskStatus::Todo), ["b", "a", "c"]);
        assert_eq!(board.selected_task().unwrap().title, "a");
        assert_eq!(board.focused_column().selected_index(), Some(1));
    }

    #[test]
    fn test_move_up_at_top_is_noop() {
        let mut board = board_with_todo(&["a", "b"]);
        assert!(!board.move_up());
        assert_eq!(titles(&board, TaskStatus::Todo), ["a", "b"]);
        assert_eq!(board.focused_column().selected_index(), Some(0));
    }

    #[test]
    fn test_move_down_at_bottom_is_noop() {
        let mut board = board_with_todo(&["a", "b"]);
        board.select_next();
        assert!(!board.move_down());
        assert_eq!(titles(&board, TaskStatus::Todo), ["a", "b"]);
        assert_eq!(board.focused_column().selected_index(), Some(1));
    }

    #[test]
    fn test_reorder_without_selection_is_noop() {
        let mut board = Board::new(vec![task(TaskStatus::Doing, "g")]);
        board.focus_next();
        board.column_mut(TaskStatus::Doing).clear_selection();
        assert!(!board.move_up());
        assert!(!board.move_down());
    }

    #[test]
    fn test_reorder_sequence_preserves_length_and_members() {
        let mut board = board_with_todo(&["a", "b", "c", "d", "e"]);
        let before = ids(&board, TaskStatus::Todo);
        let moves = [true, true, false, true, true, true, false, false, false, true];
        for down in moves {
            if down {
                board.move_down();
            } else {
                board.move_up();
            }
            assert_eq!(board.focused_column().len(), 5);
            assert_cursors_valid(&board);
        }
        assert_eq!(ids(&board, TaskStatus::Todo), before);
    }

    // Cross-column transfer

    #[test]
    fn test_move_right_scenario() {
        let mut board = board_with_todo(&["A", "B"]);
        let a_id = board.selected_task().unwrap().id;

        assert_eq!(board.move_right(), Some(TaskStatus::Doing));

        assert_eq!(titles(&board, TaskStatus::Todo), ["B"]);
        assert_eq!(titles(&board, TaskStatus::Doing), ["A"]);
        assert!(titles(&board, TaskStatus::Done).is_empty());
        assert_eq!(board.focused(), TaskStatus::Doing);

        let selected = board.selected_task().unwrap();
        assert_eq!(selected.id, a_id);
        assert_eq!(selected.status, TaskStatus::Doing);
        assert_eq!(board.column(TaskStatus::Todo).selected_index(), None);
    }

    #[test]
    fn test_move_selects_last_valid_index() {
        let mut board = Board::new(vec![
            task(TaskStatus::Todo, "t"),
            task(TaskStatus::Doing, "g1"),
            task(TaskStatus::Doing, "g2"),
        ]);
        board.move_right();
        let doing = board.column(TaskStatus::Doing);
        assert_eq!(doing.len(), 3);
        assert_eq!(doing.selected_index(), Some(2));
        assert!(doing.selected_index().unwrap() < doing.len());
        assert_eq!(doing.selected_task().unwrap().title, "t");
    }

    #[test]
    fn test_move_left_then_right_round_trips_status() {
        let mut board = Board::new(vec![
            task(TaskStatus::Doing, "x"),
            task(TaskStatus::Doing, "y"),
        ]);
        board.focus_next();
        let id = board.selected_task().unwrap().id;

        assert_eq!(board.move_left(), Some(TaskStatus::Todo));
        assert_eq!(board.selected_task().unwrap().status, TaskStatus::Todo);
        assert_eq!(board.move_right(), Some(TaskStatus::Doing));

        let selected = board.selected_task().unwrap();
        assert_eq!(selected.id, id);
        assert_eq!(selected.status, TaskStatus::Doing);
        assert!(ids(&board, TaskStatus::Doing).contains(&id));
        // Membership is restored, position is not: it now sits at the end.
        assert_eq!(titles(&board, TaskStatus::Doing), ["y", "x"]);
        assert!(board.column(TaskStatus::Todo).is_empty());
    }

    #[test]
    fn test_move_right_at_done_reappends_in_same_column() {
        let mut board = Board::new(vec![
            task(TaskStatus::Done, "d1"),
            task(TaskStatus::Done, "d2"),
        ]);
        board.focus_next();
        board.focus_next();

        assert_eq!(board.move_right(), Some(TaskStatus::Done));
        assert_eq!(titles(&board, TaskStatus::Done), ["d2", "d1"]);
        assert_eq!(board.selected_task().unwrap().title, "d1");
        assert_eq!(board.focused(), TaskStatus::Done);
    }

    #[test]
    fn test_move_left_at_todo_keeps_status() {
        let mut board = board_with_todo(&["a", "b"]);
        assert_eq!(board.move_left(), Some(TaskStatus::Todo));
        assert_eq!(titles(&board, TaskStatus::Todo), ["b", "a"]);
        assert_eq!(board.selected_task().unwrap().status, TaskStatus::Todo);
        assert_cursors_valid(&board);
    }

    #[test]
    fn test_transfer_without_selection_is_noop() {
        let mut board = board_with_todo(&["a"]);
        board.focus_next();
        assert_eq!(board.move_right(), None);
        assert_eq!(board.move_left(), None);
        assert_eq!(board.focused(), TaskStatus::Doing);
        assert_eq!(titles(&board, TaskStatus::Todo), ["a"]);
    }

    // Delete and undo

    #[test]
    fn test_delete_undo_scenario() {
        let mut board = board_with_todo(&["A"]);
        assert!(board.delete());
        assert!(board.column(TaskStatus::Todo).is_empty());
        assert_eq!(board.history().len(), 1);
        assert_eq!(board.history().peek().unwrap().title, "A");

        assert!(board.undo());
        assert_eq!(titles(&board, TaskStatus::Todo), ["A"]);
        assert!(board.history().is_empty());
        assert_eq!(board.selected_task().unwrap().title, "A");
    }

    #[test]
    fn test_undo_restores_to_end_of_original_column_only() {
        let mut board = Board::new(vec![
            task(TaskStatus::Todo, "t1"),
            task(TaskStatus::Todo, "t2"),
            task(TaskStatus::Todo, "t3"),
            task(TaskStatus::Doing, "g"),
            task(TaskStatus::Done, "d"),
        ]);
        let doing_before = ids(&board, TaskStatus::Doing);
        let done_before = ids(&board, TaskStatus::Done);

        board.delete();
        assert_eq!(titles(&board, TaskStatus::Todo), ["t2", "t3"]);
        board.undo();

        assert_eq!(titles(&board, TaskStatus::Todo), ["t2", "t3", "t1"]);
        assert_eq!(board.focused_column().selected_index(), Some(2));
        assert_eq!(ids(&board, TaskStatus::Doing), doing_before);
        assert_eq!(ids(&board, TaskStatus::Done), done_before);
    }

    #[test]
    fn test_undo_refocuses_original_column() {
        let mut board = Board::new(vec![
            task(TaskStatus::Todo, "t"),
            task(TaskStatus::Doing, "g"),
        ]);
        board.focus_next();
        board.delete();
        board.focus_prev();
        assert_eq!(board.focused(), TaskStatus::Todo);

        assert!(board.undo());
        assert_eq!(board.focused(), TaskStatus::Doing);
        assert_eq!(board.column(TaskStatus::Todo).selected_index(), None);
        assert_eq!(board.selected_task().unwrap().title, "g");
    }

    #[test]
    fn test_two_deletes_keep_only_second() {
        let mut board = board_with_todo(&["first", "second"]);
        board.delete();
        board.delete();
        assert!(board.column(TaskStatus::Todo).is_empty());
        assert_eq!(board.history().len(), 1);

        assert!(board.undo());
        assert_eq!(titles(&board, TaskStatus::Todo), ["second"]);
        assert!(!board.undo());
        assert_eq!(titles(&board, TaskStatus::Todo), ["second"]);
    }

    #[test]
    fn test_delete_moves_cursor_to_neighbour() {
        let mut board = board_with_todo(&["a", "b", "c"]);
        board.select_next();
        board.delete();
        assert_eq!(board.selected_task().unwrap().title, "c");

        board.delete();
        assert_eq!(board.selected_task().unwrap().title, "a");

        board.delete();
        assert!(board.selected_task().is_none());
        assert_cursors_valid(&board);
    }

    #[test]
    fn test_delete_on_empty_column_is_noop() {
        let mut board = board_with_todo(&["a"]);
        board.focus_next();
        assert!(!board.delete());
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_undo_with_empty_history_is_noop() {
        let mut board = board_with_todo(&["a"]);
        assert!(!board.undo());
        assert_eq!(titles(&board, TaskStatus::Todo), ["a"]);
        assert_eq!(board.focused(), TaskStatus::Todo);
    }

    #[test]
    fn test_deeper_history_undoes_in_reverse() {
        let mut board = Board::with_history_depth(
            vec![task(TaskStatus::Todo, "a"), task(TaskStatus::Todo, "b")],
            2,
        );
        board.delete();
        board.delete();
        board.undo();
        board.undo();
        assert_eq!(titles(&board, TaskStatus::Todo), ["b", "a"]);
    }

    // Form round-trip

    #[test]
    fn test_commit_new_task_appends_and_selects() {
        let mut board = board_with_todo(&["a"]);
        board.focus_next();
        let id = board
            .commit(TaskDraft::new(TaskStatus::Doing, "new", "desc"))
            .unwrap();

        let selected = board.selected_task().unwrap();
        assert_eq!(selected.id, id);
        assert_eq!(selected.description, "desc");
        assert_eq!(board.focused(), TaskStatus::Doing);
        assert_eq!(titles(&board, TaskStatus::Doing), ["new"]);
    }

    #[test]
    fn test_commit_with_empty_title_changes_nothing() {
        let mut board = board_with_todo(&["a", "b"]);
        let lengths: Vec<usize> = board.columns().iter().map(Column::len).collect();

        assert!(board.commit(TaskDraft::new(TaskStatus::Todo, "", "desc")).is_none());
        assert!(board.commit(TaskDraft::new(TaskStatus::Done, "  ", "")).is_none());

        let after: Vec<usize> = board.columns().iter().map(Column::len).collect();
        assert_eq!(lengths, after);
        assert_eq!(board.focused(), TaskStatus::Todo);
    }

    #[test]
    fn test_take_selected_removes_task_while_editing() {
        let mut board = board_with_todo(&["a", "b"]);
        let taken = board.take_selected().unwrap();
        assert_eq!(taken.title, "a");
        assert_eq!(titles(&board, TaskStatus::Todo), ["b"]);
        assert_eq!(board.selected_task().unwrap().title, "b");
    }

    #[test]
    fn test_take_selected_without_selection_is_none() {
        let mut board = Board::default();
        assert!(board.take_selected().is_none());
    }

    #[test]
    fn test_edit_commit_keeps_identity() {
        let mut board = Board::new(vec![task(TaskStatus::Doing, "old")]);
        board.focus_next();
        let original = board.take_selected().unwrap();
        let id = original.id;
        let created = original.created_at;

        let committed = board
            .commit(TaskDraft::editing(original, "renamed", "more"))
            .unwrap();
        assert_eq!(committed, id);

        let selected = board.selected_task().unwrap();
        assert_eq!(selected.title, "renamed");
        assert_eq!(selected.created_at, created);
        assert_eq!(selected.status, TaskStatus::Doing);
        assert_eq!(board.task_count(), 1);
    }

    #[test]
    fn test_restore_returns_task_unchanged() {
        let mut board = board_with_todo(&["a", "b"]);
        let original = board.take_selected().unwrap();
        let snapshot = original.clone();
        board.focus_next();

        board.restore(original);
        assert_eq!(board.focused(), TaskStatus::Todo);
        assert_eq!(board.selected_task(), Some(&snapshot));
        assert_eq!(titles(&board, TaskStatus::Todo), ["b", "a"]);
        assert_eq!(board.column(TaskStatus::Doing).selected_index(), None);
    }

    #[test]
    fn test_tasks_lists_every_column() {
        let board = Board::new(vec![
            task(TaskStatus::Done, "d"),
            task(TaskStatus::Todo, "t"),
            task(TaskStatus::Doing, "g"),
        ]);
        let all: Vec<String> = board.tasks().into_iter().map(|t| t.title).collect();
        assert_eq!(all, ["t", "g", "d"]);
    }

    #[test]
    fn test_every_operation_keeps_status_and_column_in_step() {
        let mut board = Board::new(vec![
            task(TaskStatus::Todo, "a"),
            task(TaskStatus::Todo, "b"),
            task(TaskStatus::Doing, "c"),
        ]);
        board.move_right();
        board.move_right();
        board.focus_prev();
        board.delete();
        board.undo();
        board.move_left();
        board.move_down();
        for column in board.columns() {
            for t in column.items() {
                assert_eq!(t.status, column.status());
            }
        }
        assert_cursors_valid(&board);
    }

    fn visible_titles(board: &Board, status: TaskStatus) -> Vec<String> {
        board
            .visible_indices(status)
            .into_iter()
            .map(|idx| board.column(status).items()[idx].title.clone())
            .collect()
    }

    #[test]
    fn test_filter_narrows_columns_and_moves_cursor_onto_visible_task() {
        let mut board = Board::new(vec![
            task(TaskStatus::Todo, "write docs"),
            task(TaskStatus::Todo, "fix parser"),
            task(TaskStatus::Todo, "docs review"),
            task(TaskStatus::Doing, "parser tests"),
        ]);

        board.set_filter("PARSER");
        assert_eq!(board.filter(), Some("PARSER"));
        assert_eq!(visible_titles(&board, TaskStatus::Todo), ["fix parser"]);
        assert_eq!(visible_titles(&board, TaskStatus::Doing), ["parser tests"]);
        assert_eq!(board.selected_task().unwrap().title, "fix parser");
        assert_eq!(board.visible_selection(TaskStatus::Todo), Some(0));

        board.clear_filter();
        assert_eq!(board.filter(), None);
        assert_eq!(board.selected_task().unwrap().title, "fix parser");
        assert_eq!(board.visible_selection(TaskStatus::Todo), Some(1));
    }

    #[test]
    fn test_blank_filter_clears() {
        let mut board = board_with_todo(&["a"]);
        board.set_filter("a");
        board.set_filter("   ");
        assert_eq!(board.filter(), None);
    }

    #[test]
    fn test_filter_uses_each_task_filter_key() {
        let mut by_desc = Task::new(TaskStatus::Todo, "release", "parser notes");
        by_desc.set_filter_key(crate::task::FilterKey::Description);
        let mut board = Board::new(vec![by_desc, Task::new(TaskStatus::Todo, "docs", "parser")]);

        board.set_filter("parser");
        assert_eq!(visible_titles(&board, TaskStatus::Todo), ["release"]);
    }

    #[test]
    fn test_navigation_skips_hidden_tasks() {
        let mut board = board_with_todo(&["x1", "hidden", "x2", "also hidden", "x3"]);
        board.set_filter("x");

        board.select_next();
        assert_eq!(board.selected_task().unwrap().title, "x2");
        board.select_next();
        board.select_next();
        assert_eq!(board.selected_task().unwrap().title, "x3");
        board.select_prev();
        assert_eq!(board.selected_task().unwrap().title, "x2");
    }

    #[test]
    fn test_reorder_swaps_visible_neighbours_only() {
        let mut board = board_with_todo(&["x1", "h1", "x2", "h2"]);
        board.set_filter("x");

        assert!(board.move_down());
        assert_eq!(titles(&board, TaskStatus::Todo), ["h1", "x2", "x1", "h2"]);
        assert_eq!(board.selected_task().unwrap().title, "x1");
        assert!(!board.move_down());

        assert!(board.move_up());
        assert_eq!(titles(&board, TaskStatus::Todo), ["h1", "x1", "x2", "h2"]);
        assert!(!board.move_up());
        assert_cursors_valid(&board);
    }

    #[test]
    fn test_delete_under_filter_selects_next_visible() {
        let mut board = board_with_todo(&["x1", "h1", "x2"]);
        board.set_filter("x");

        assert!(board.delete());
        assert_eq!(titles(&board, TaskStatus::Todo), ["h1", "x2"]);
        assert_eq!(board.selected_task().unwrap().title, "x2");

        assert!(board.delete());
        assert_eq!(titles(&board, TaskStatus::Todo), ["h1"]);
        assert_eq!(board.selected_task(), None);
        assert!(!board.delete());
        assert_eq!(titles(&board, TaskStatus::Todo), ["h1"]);
    }

    #[test]
    fn test_delete_with_nothing_visible_is_noop() {
        let mut board = board_with_todo(&["a", "b"]);
        board.set_filter("zzz");

        assert_eq!(board.selected_task(), None);
        assert!(!board.delete());
        assert!(board.take_selected().is_none());
        assert_eq!(board.move_right(), None);
        assert_eq!(board.task_count(), 2);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_focus_change_under_filter_lands_on_visible_task() {
        let mut board = Board::new(vec![
            task(TaskStatus::Todo, "x1"),
            task(TaskStatus::Doing, "hidden"),
            task(TaskStatus::Doing, "x2"),
        ]);
        board.set_filter("x");

        board.focus_next();
        assert_eq!(board.selected_task().unwrap().title, "x2");
    }

    #[test]
    fn test_undo_of_hidden_task_clears_filter() {
        let mut board = board_with_todo(&["alpha", "beta"]);
        board.delete();
        board.set_filter("beta");

        assert!(board.undo());
        assert_eq!(board.filter(), None);
        assert_eq!(board.selected_task().unwrap().title, "alpha");
    }
}
