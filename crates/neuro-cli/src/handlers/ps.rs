use crate::context::ExecutionContext;
use crate::presentation::jobs::{TabularJobsFormatter, format_job_ids, parse_columns};
use crate::types::StatusFilter;
use crate::ui::TerminalWriter;
use anyhow::{Context, Result};
use neuro_sdk::{JobFilter, JobsApi};
use neuro_types::JobStatus;

pub struct PsOptions<'a> {
    pub statuses: &'a [StatusFilter],
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub format: Option<&'a str>,
    pub width: Option<usize>,
}

/// No `--status` means pending and running; `all` lifts the restriction.
fn job_filter(options: &PsOptions<'_>) -> JobFilter {
    let statuses = if options.statuses.is_empty() {
        [JobStatus::Pending, JobStatus::Running].into_iter().collect()
    } else if options.statuses.contains(&StatusFilter::All) {
        Default::default()
    } else {
        options
            .statuses
            .iter()
            .filter_map(StatusFilter::status)
            .collect()
    };

    JobFilter {
        statuses,
        name: options.name.map(str::to_string),
        description: options.description.map(str::to_string),
    }
}

pub fn handle(
    ctx: &ExecutionContext,
    options: &PsOptions<'_>,
    terminal: &mut dyn TerminalWriter,
) -> Result<()> {
    let jobs = ctx.client().list(&job_filter(options))?;
    let format = ctx.format_options()?;

    let lines = if format.quiet {
        format_job_ids(&jobs)
    } else {
        let display = &ctx.config()?.display;
        let spec = options.format.or(display.ps_format.as_deref());
        let columns = parse_columns(spec).context("bad jobs format")?;
        let width = options
            .width
            .or(display.ps_max_width)
            .unwrap_or(if format.is_tty { format.terminal_width } else { 0 });

        TabularJobsFormatter::new(width, ctx.image_parser()?)
            .with_columns(columns)
            .with_time(ctx.relative_time()?)
            .format(&jobs)
    };

    for line in lines {
        terminal.write_line(&line);
    }
    terminal.flush();
    Ok(())
}
