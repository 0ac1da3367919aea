//! Live status line shown while a submitted job starts.

use super::status::format_job_status;
use crate::presentation::formatters::text::ansi;
use crossterm::cursor::MoveToPreviousLine;
use crossterm::terminal::{Clear, ClearType};
use neuro_types::JobDescription;
use owo_colors::OwoColorize;
use std::time::Instant;

const SPINNER: [char; 4] = ['◢', '◣', '◤', '◥'];
const INITIALIZING: &str = "Initializing";

/// Renders job snapshots as they arrive. Each call returns the text to
/// write; the caller flushes it. One instance follows one job and is spent
/// once `finish` has been rendered.
#[derive(Debug)]
pub enum JobStartProgress {
    Quiet,
    /// Plain `Status: ...` lines, one per change
    Stream(StreamProgress),
    /// Single redrawn line with spinner and elapsed time
    Detailed(DetailedProgress),
}

impl JobStartProgress {
    pub fn create(tty: bool, color: bool, quiet: bool) -> Self {
        if quiet {
            JobStartProgress::Quiet
        } else if tty && color {
            JobStartProgress::Detailed(DetailedProgress::default())
        } else {
            JobStartProgress::Stream(StreamProgress::default())
        }
    }

    pub fn step(&mut self, job: &JobDescription, now: Instant, finish: bool) -> String {
        match self {
            JobStartProgress::Quiet => String::new(),
            JobStartProgress::Stream(progress) => progress.step(job, finish),
            JobStartProgress::Detailed(progress) => progress.step(job, now, finish),
        }
    }

    pub fn update(&mut self, job: &JobDescription) -> String {
        self.step(job, Instant::now(), false)
    }

    pub fn finish(&mut self, job: &JobDescription) -> String {
        self.step(job, Instant::now(), true)
    }

    pub fn is_finished(&self) -> bool {
        match self {
            JobStartProgress::Quiet => false,
            JobStartProgress::Stream(progress) => progress.finished,
            JobStartProgress::Detailed(progress) => progress.finished,
        }
    }
}

#[derive(Debug, Default)]
pub struct StreamProgress {
    previous: Option<String>,
    finished: bool,
}

impl StreamProgress {
    fn step(&mut self, job: &JobDescription, finish: bool) -> String {
        if self.finished {
            return String::new();
        }
        self.finished = finish;

        let mut message = format!("Status: {}", job.status);
        if let Some(reason) = job.history.reason() {
            message.push(' ');
            message.push_str(reason);
        }

        if self.previous.as_deref() == Some(message.as_str()) {
            return String::new();
        }
        let out = format!("{}\n", message);
        self.previous = Some(message);
        out
    }
}

#[derive(Debug, Default)]
pub struct DetailedProgress {
    started: Option<Instant>,
    previous: String,
    seen_reason: bool,
    spinner: usize,
    finished: bool,
}

impl DetailedProgress {
    fn line_prefix() -> String {
        format!("\r\r{}: ", "Status".bold())
    }

    /// Reason shown next to the status. Until the platform reports any
    /// reason the job is "Initializing"; after that a missing reason
    /// shows nothing.
    fn reason(&mut self, job: &JobDescription) -> Option<String> {
        if let Some(reason) = job.history.reason() {
            self.seen_reason = true;
            Some(reason.to_string())
        } else if !self.seen_reason {
            Some(INITIALIZING.to_string())
        } else {
            None
        }
    }

    fn step(&mut self, job: &JobDescription, now: Instant, finish: bool) -> String {
        if self.finished {
            return String::new();
        }
        let started = *self.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started).as_secs_f64();

        let mut message = format_job_status(job.status, true);
        if let Some(reason) = self.reason(job) {
            message.push(' ');
            message.push_str(&reason.bold().to_string());
        }

        let prefix = Self::line_prefix();
        let clear = ansi(Clear(ClearType::UntilNewLine));
        let mut out = String::new();

        if !self.previous.is_empty() {
            out.push_str(&ansi(MoveToPreviousLine(1)));
        }
        if message != self.previous {
            if !self.previous.is_empty() {
                out.push_str(&format!("{}{}{}\n", prefix, self.previous, clear));
            }
            self.previous = message.clone();
        }

        out.push_str(&format!("{}{} [{:.1} sec]", prefix, message, elapsed));
        if !finish {
            out.push(' ');
            out.push(SPINNER[self.spinner % SPINNER.len()]);
            self.spinner += 1;
        }
        out.push_str(&clear);
        out.push('\n');

        if finish {
            out.push('\n');
            self.finished = true;
        }
        out
    }
}
