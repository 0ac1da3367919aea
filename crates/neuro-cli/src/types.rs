use crate::presentation::FilesSorter;
use clap::ValueEnum;
use neuro_sdk::ColorChoice;
use neuro_types::JobStatus;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Size,
    Time,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Size => write!(f, "size"),
            SortKey::Time => write!(f, "time"),
        }
    }
}

impl From<SortKey> for FilesSorter {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => FilesSorter::Name,
            SortKey::Size => FilesSorter::Size,
            SortKey::Time => FilesSorter::Time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StatusFilter {
    Pending,
    Running,
    Succeeded,
    Failed,
    All,
}

impl StatusFilter {
    /// `None` means no restriction.
    pub fn status(&self) -> Option<JobStatus> {
        match self {
            StatusFilter::Pending => Some(JobStatus::Pending),
            StatusFilter::Running => Some(JobStatus::Running),
            StatusFilter::Succeeded => Some(JobStatus::Succeeded),
            StatusFilter::Failed => Some(JobStatus::Failed),
            StatusFilter::All => None,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status() {
            Some(status) => write!(f, "{}", status),
            None => write!(f, "all"),
        }
    }
}
