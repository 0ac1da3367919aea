use crate::context::ExecutionContext;
use crate::presentation::config::format_config;
use crate::ui::TerminalWriter;
use anyhow::Result;

pub fn show(ctx: &ExecutionContext, terminal: &mut dyn TerminalWriter) -> Result<()> {
    let color = ctx.color_enabled()?;
    terminal.write_line(&format_config(ctx.config()?, color));
    terminal.flush();
    Ok(())
}
