use crate::context::ExecutionContext;
use crate::presentation::{FilesFormatter, FilesSorter, Painter};
use crate::ui::TerminalWriter;
use anyhow::{Context, Result};
use neuro_sdk::StorageApi;

pub struct LsOptions<'a> {
    pub path: &'a str,
    pub long: bool,
    pub human_readable: bool,
    pub sorter: FilesSorter,
    pub one_per_line: bool,
}

pub fn handle(
    ctx: &ExecutionContext,
    options: &LsOptions<'_>,
    terminal: &mut dyn TerminalWriter,
) -> Result<()> {
    let format = ctx.format_options()?;
    let painter = Painter::detect(format.enable_color, &ctx.terminal().color_env)
        .context("LS_COLORS/LSCOLORS is malformed")?;

    let mut files = ctx
        .client()
        .ls(options.path)
        .with_context(|| format!("cannot access '{}'", options.path))?;
    options.sorter.sort(&mut files);
    tracing::debug!(path = options.path, count = files.len(), "listing storage");

    let formatter = if options.long {
        FilesFormatter::Long {
            human_readable: options.human_readable,
            painter,
        }
    } else if options.one_per_line || !format.is_tty {
        FilesFormatter::Simple { painter }
    } else {
        FilesFormatter::VerticalColumns {
            width: format.terminal_width,
            painter,
        }
    };

    for line in formatter.format(&files) {
        terminal.write_line(&line);
    }
    terminal.flush();
    Ok(())
}
