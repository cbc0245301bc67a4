use crate::cli::{AddArgs, ListArgs};
use crate::context::{CliContext, TaskFilter};
use crate::output;
use kanban_domain::Task;

pub fn handle_list(ctx: &CliContext, args: ListArgs) -> anyhow::Result<()> {
    let filter = TaskFilter {
        status: args.status,
        search: args.search,
        by: args.by,
    };
    let tasks = ctx.list(&filter);
    tracing::debug!("listing {} of {} tasks", tasks.len(), ctx.tasks.len());
    output::output_list(tasks)
}

pub async fn handle_add(ctx: &mut CliContext, args: AddArgs) -> anyhow::Result<()> {
    if let Err(e) = Task::validate_title(&args.title) {
        return output::output_error(&e.to_string());
    }
    if args.description.chars().count() > kanban_domain::DESCRIPTION_CHAR_LIMIT {
        return output::output_error(&format!(
            "description is longer than {} characters",
            kanban_domain::DESCRIPTION_CHAR_LIMIT
        ));
    }

    let mut task = Task::new(args.status, &args.title, &args.description);
    task.set_filter_key(args.filter_key);
    let task = ctx.add(task).clone();
    ctx.save().await?;
    tracing::info!("added task {} to {}", task.id, task.status);
    output::output_success(&task)
}
