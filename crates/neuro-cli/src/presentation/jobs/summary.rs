//! Short job summaries: what `submit` prints and `ps -q`.

use super::status::format_job_status;
use neuro_types::JobDescription;
use owo_colors::OwoColorize;

const SHORTCUTS: [(&str, &str); 4] = [
    ("status", "check job status"),
    ("logs", "monitor job stdout"),
    ("top", "display real-time job telemetry"),
    ("kill", "kill job"),
];

/// Summary printed after a job is submitted
#[derive(Debug, Clone, Copy)]
pub struct JobFormatter {
    pub quiet: bool,
    pub color: bool,
}

impl JobFormatter {
    pub fn new(quiet: bool, color: bool) -> Self {
        Self { quiet, color }
    }

    fn label(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn comment(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn format(&self, job: &JobDescription) -> String {
        if self.quiet {
            return job.id.clone();
        }

        let mut lines = vec![format!(
            "{}: {} {}: {}",
            self.label("Job ID"),
            job.id,
            self.label("Status"),
            format_job_status(job.status, self.color)
        )];
        if let Some(name) = job.name.as_deref().filter(|n| !n.is_empty()) {
            lines.push(format!("{}: {}", self.label("Name"), name));
        }
        if let Some(url) = job.http_url.as_deref().filter(|u| !u.is_empty()) {
            lines.push(format!("{}: {}", self.label("Http URL"), url));
        }

        lines.push(format!("{}:", self.label("Shortcuts")));
        let target = job.name_or_id();
        let command_width = SHORTCUTS
            .iter()
            .map(|(command, _)| command.len())
            .max()
            .unwrap_or(0);
        for (command, comment) in SHORTCUTS {
            let padding = " ".repeat(command_width - command.len() + 2);
            lines.push(format!(
                "  neuro {} {}{}{}",
                command,
                target,
                padding,
                self.comment(&format!("# {}", comment))
            ));
        }

        lines.join("\n")
    }
}

/// One job id per line
pub fn format_job_ids(jobs: &[JobDescription]) -> Vec<String> {
    jobs.iter().map(|job| job.id.clone()).collect()
}
