pub mod board;
pub mod column;
pub mod draft;
pub mod history;
pub mod task;

pub use board::Board;
pub use column::Column;
pub use draft::TaskDraft;
pub use history::{DeleteHistory, DEFAULT_HISTORY_DEPTH};
pub use task::{FilterKey, Task, TaskId, TaskStatus, DESCRIPTION_CHAR_LIMIT, TITLE_CHAR_LIMIT};
