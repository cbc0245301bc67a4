use clap::{Args, Parser, Subcommand};
use kanban_domain::{FilterKey, TaskStatus};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "A terminal-based kanban board", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to the task file (or set KANBAN_FILE env var)
    #[arg(long, short, value_name = "FILE", env = "KANBAN_FILE", global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks as JSON
    List(ListArgs),
    /// Append a task to a column
    Add(AddArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Only tasks in this column (todo, doing, done)
    #[arg(long)]
    pub status: Option<TaskStatus>,
    /// Case-insensitive substring to look for
    #[arg(long)]
    pub search: Option<String>,
    /// Field to search instead of each task's own filter field
    #[arg(long, value_name = "FIELD", requires = "search")]
    pub by: Option<FilterKey>,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "todo")]
    pub status: TaskStatus,
    /// Field the board filter and `list --search` match for this task
    #[arg(long, value_name = "FIELD", default_value = "title")]
    pub filter_key: FilterKey,
}
