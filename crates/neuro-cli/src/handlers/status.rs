use crate::context::ExecutionContext;
use crate::presentation::jobs::format_job_details;
use crate::ui::TerminalWriter;
use anyhow::Result;
use neuro_sdk::JobsApi;

pub fn handle(ctx: &ExecutionContext, job: &str, terminal: &mut dyn TerminalWriter) -> Result<()> {
    let job = ctx.client().status(job)?;
    terminal.write_line(&format_job_details(&job));
    terminal.flush();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::Workspace;
    use crate::ui::MockTerminal;
    use neuro_testing::JobBuilder;
    use neuro_types::JobStatus;

    #[test]
    fn test_status_by_name() -> Result<()> {
        let workspace = Workspace::new()?;
        workspace.snapshot().jobs(&[JobBuilder::new("job-1")
            .name("train")
            .status(JobStatus::Running)
            .command("python train.py")
            .build()])?;

        let mut terminal = MockTerminal::new();
        handle(&workspace.context(false), "train", &mut terminal)?;

        let lines = terminal.lines();
        assert_eq!(lines[0], "Job: job-1");
        assert_eq!(lines[1], "Name: train");
        assert!(lines.contains(&"Status: running"));
        assert!(lines.contains(&"Command: python train.py"));
        Ok(())
    }

    #[test]
    fn test_unknown_job() -> Result<()> {
        let workspace = Workspace::new()?;
        let mut terminal = MockTerminal::new();
        let err = handle(&workspace.context(false), "missing", &mut terminal).unwrap_err();
        assert_eq!(err.to_string(), "Not found: job 'missing'");
        assert!(terminal.output.is_empty());
        Ok(())
    }
}
