//! Cursor state for a single list.
//!
//! The cursor is either `None` or an index that was valid for the list
//! length it was last set against. Callers pass the current length to every
//! mutating method, so a cursor can never be set past the end.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    /// Select `index` if it is inside `0..len`; anything else clears.
    pub fn select(&mut self, index: Option<usize>, len: usize) {
        self.selected_index = index.filter(|idx| *idx < len);
    }

    pub fn clear(&mut self) {
        self.selected_index = None;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected_index = len.checked_sub(1);
    }
}
