use super::resources::format_resources;
use neuro_types::{JobDescription, JobStatus};
use owo_colors::{AnsiColors, OwoColorize};

fn status_color(status: JobStatus) -> AnsiColors {
    match status {
        JobStatus::Pending | JobStatus::Unknown => AnsiColors::Yellow,
        JobStatus::Running => AnsiColors::Blue,
        JobStatus::Succeeded => AnsiColors::Green,
        JobStatus::Failed => AnsiColors::Red,
    }
}

/// Lower-case status word, colored by state when `color` is set.
pub fn format_job_status(status: JobStatus, color: bool) -> String {
    if color {
        status.as_str().color(status_color(status)).to_string()
    } else {
        status.as_str().to_string()
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Full `neuro status` description of one job.
pub fn format_job_details(job: &JobDescription) -> String {
    let history = &job.history;
    let mut lines = vec![format!("Job: {}", job.id)];

    if let Some(name) = job.name.as_deref().filter(|n| !n.is_empty()) {
        lines.push(format!("Name: {}", name));
    }
    lines.push(format!("Owner: {}", job.owner));
    if let Some(description) = job.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("Description: {}", description));
    }

    let mut status = format!("Status: {}", job.status);
    if matches!(job.status, JobStatus::Failed | JobStatus::Pending)
        && let Some(reason) = history.reason()
    {
        status.push_str(&format!(" ({})", reason));
    }
    lines.push(status);

    lines.push(format!("Image: {}", job.container.image));
    lines.push(format!(
        "Command: {}",
        job.container.command.as_deref().unwrap_or_default()
    ));
    lines.push(format_resources(&job.container.resources));
    lines.push(format!("Preemptible: {}", yes_no(job.is_preemptible)));

    if let Some(hostname) = job.internal_hostname.as_deref().filter(|h| !h.is_empty()) {
        lines.push(format!("Internal Hostname: {}", hostname));
    }
    if let Some(url) = job.http_url.as_deref().filter(|u| !u.is_empty()) {
        lines.push(format!("Http URL: {}", url));
        if let Some(http) = &job.container.http {
            lines.push(format!("Http authentication: {}", yes_no(http.requires_auth)));
        }
    }
    if !job.container.env.is_empty() {
        lines.push("Environment:".to_string());
        for (key, value) in &job.container.env {
            lines.push(format!("{}={}", key, value));
        }
    }

    lines.push(format!("Created: {}", history.created_at));
    if matches!(
        job.status,
        JobStatus::Running | JobStatus::Failed | JobStatus::Succeeded
    ) {
        lines.push(format!(
            "Started: {}",
            history.started_at.as_deref().unwrap_or_default()
        ));
    }
    if job.status.is_finished() {
        lines.push(format!(
            "Finished: {}",
            history.finished_at.as_deref().unwrap_or_default()
        ));
    }
    if job.status == JobStatus::Failed {
        lines.push("===Description===".to_string());
        lines.push(history.description.clone().unwrap_or_default());
        lines.push("=================".to_string());
    }

    lines.join("\n")
}
