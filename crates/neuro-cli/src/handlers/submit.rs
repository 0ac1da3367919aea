use crate::context::ExecutionContext;
use crate::presentation::jobs::{JobFormatter, JobStartProgress};
use crate::ui::TerminalWriter;
use anyhow::Result;
use neuro_sdk::JobsApi;
use neuro_types::JobStatus;
use std::time::Duration;

/// Follow a job while it is pending, then print its summary.
pub fn handle(
    ctx: &ExecutionContext,
    job: &str,
    poll_interval: Duration,
    terminal: &mut dyn TerminalWriter,
) -> Result<()> {
    let format = ctx.format_options()?;
    let client = ctx.client();
    let id = client.status(job)?.id;

    let mut progress =
        JobStartProgress::create(format.is_tty, format.enable_color, format.quiet);
    let mut current = client.poll(&id)?;
    let mut polls = 1;

    while current.status == JobStatus::Pending {
        terminal.write(&progress.update(&current));
        terminal.flush();
        std::thread::sleep(poll_interval);
        current = client.poll(&id)?;
        polls += 1;
    }
    tracing::info!(job = %id, status = %current.status, polls, "job left pending");

    terminal.write(&progress.finish(&current));
    terminal.write_line(&JobFormatter::new(format.quiet, format.enable_color).format(&current));
    terminal.flush();
    Ok(())
}
