use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::context::{ExecutionContext, TerminalInfo};
use crate::ui::AnsiTerminal;
use anyhow::Result;
use neuro_sdk::resolve_workspace_path;
use std::time::Duration;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    tracing::debug!(data_dir = %data_dir.display(), "workspace");

    let ctx = ExecutionContext::new(data_dir, cli.color, cli.quiet, TerminalInfo::detect());
    let mut terminal = AnsiTerminal::new();

    match cli.command {
        Commands::Ls {
            path,
            long,
            human_readable,
            sort,
            one_per_line,
        } => {
            let options = handlers::ls::LsOptions {
                path: &path,
                long,
                human_readable,
                sorter: sort.into(),
                one_per_line,
            };
            handlers::ls::handle(&ctx, &options, &mut terminal)
        }

        Commands::Ps {
            status,
            name,
            description,
            format,
            width,
        } => {
            let options = handlers::ps::PsOptions {
                statuses: &status,
                name: name.as_deref(),
                description: description.as_deref(),
                format: format.as_deref(),
                width,
            };
            handlers::ps::handle(&ctx, &options, &mut terminal)
        }

        Commands::Status { job } => handlers::status::handle(&ctx, &job, &mut terminal),

        Commands::Top { job } => handlers::top::handle(&ctx, &job, &mut terminal),

        Commands::Submit { job, poll_interval } => handlers::submit::handle(
            &ctx,
            &job,
            Duration::from_millis(poll_interval),
            &mut terminal,
        ),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx, &mut terminal),
        },
    }
}
