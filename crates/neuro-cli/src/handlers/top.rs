use crate::context::ExecutionContext;
use crate::presentation::jobs::{format_telemetry, telemetry_header};
use crate::ui::TerminalWriter;
use anyhow::Result;
use neuro_sdk::JobsApi;

pub fn handle(ctx: &ExecutionContext, job: &str, terminal: &mut dyn TerminalWriter) -> Result<()> {
    let client = ctx.client();
    let id = client.status(job)?.id;
    let samples = client.telemetry(&id)?;
    tracing::debug!(job = %id, samples = samples.len(), "telemetry");

    terminal.write_line(&telemetry_header());
    for sample in &samples {
        terminal.write_line(&format_telemetry(sample));
    }
    terminal.flush();
    Ok(())
}
