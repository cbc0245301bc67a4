mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use kanban_core::AppConfig;
use kanban_domain::DEFAULT_HISTORY_DEPTH;
use kanban_persistence::JsonFileStore;
use kanban_tui::App;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Where log lines go for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogTarget {
    /// `KANBAN_DEBUG_LOG`: everything from DEBUG up, appended to a file
    File(PathBuf),
    Stderr,
    /// The board owns the alternate screen; stderr would draw over it
    Discard,
}

impl LogTarget {
    fn select(debug_log: Option<PathBuf>, tui: bool) -> Self {
        match debug_log {
            Some(path) => Self::File(path),
            None if tui => Self::Discard,
            None => Self::Stderr,
        }
    }
}

fn init_tracing(target: &LogTarget) -> anyhow::Result<()> {
    match target {
        LogTarget::File(log_path) => {
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)?;

            tracing_subscriber::fmt()
                .with_writer(log_file)
                .with_max_level(tracing::Level::DEBUG)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .init();
        }
        LogTarget::Stderr => tracing::subscriber::set_global_default(stderr_subscriber())?,
        LogTarget::Discard => {
            tracing_subscriber::fmt()
                .with_writer(std::io::sink)
                .with_max_level(tracing::Level::WARN)
                .init();
        }
    }
    Ok(())
}

fn stderr_subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .finish()
}

fn load_config() -> (AppConfig, Duration) {
    let config = AppConfig::load();
    let autosave_every = config.effective_autosave_interval();
    (config, autosave_every)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_target = LogTarget::select(
        std::env::var_os("KANBAN_DEBUG_LOG").map(PathBuf::from),
        cli.command.is_none(),
    );
    init_tracing(&log_target)?;

    // Config problems still reach stderr before the board takes the screen
    let (config, autosave_every) = match log_target {
        LogTarget::Discard => tracing::subscriber::with_default(stderr_subscriber(), load_config),
        LogTarget::File(_) | LogTarget::Stderr => load_config(),
    };
    let file_path = cli
        .file
        .clone()
        .unwrap_or_else(|| config.effective_data_file());

    match cli.command {
        None => {
            let store = Arc::new(JsonFileStore::new(&file_path));
            let mut app = App::load(store, DEFAULT_HISTORY_DEPTH).await?;
            app.run(autosave_every).await?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "kanban", &mut std::io::stdout());
        }
        Some(Commands::List(args)) => {
            let ctx = CliContext::load(&file_path).await?;
            handlers::task::handle_list(&ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            let mut ctx = CliContext::load(&file_path).await?;
            handlers::task::handle_add(&mut ctx, args).await?;
        }
    }

    Ok(())
}
