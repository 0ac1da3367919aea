use crate::presentation::formatters::options::DEFAULT_TERMINAL_WIDTH;
use crate::presentation::formatters::RelativeTime;
use crate::presentation::{ColorEnv, FormatOptions};
use crate::types::ColorMode;
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use neuro_sdk::{Config, SnapshotClient};
use neuro_types::ImageNameParser;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Terminal facts the formatters depend on. Probed once per run; tests
/// substitute their own.
#[derive(Debug, Clone)]
pub struct TerminalInfo {
    pub is_tty: bool,
    pub width: usize,
    pub color_env: ColorEnv,
}

impl TerminalInfo {
    pub fn detect() -> Self {
        let width = terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| usize::from(w))
            .unwrap_or(DEFAULT_TERMINAL_WIDTH);

        Self {
            is_tty: std::io::stdout().is_terminal(),
            width,
            color_env: ColorEnv::from_env(),
        }
    }

    /// Not a terminal, 80 columns, no color variables.
    pub fn plain() -> Self {
        Self {
            is_tty: false,
            width: DEFAULT_TERMINAL_WIDTH,
            color_env: ColorEnv::default(),
        }
    }
}

pub struct ExecutionContext {
    data_dir: PathBuf,
    color: Option<ColorMode>,
    quiet: bool,
    terminal: TerminalInfo,
    config: OnceCell<Config>,
    client: SnapshotClient,
}

impl ExecutionContext {
    pub fn new(
        data_dir: PathBuf,
        color: Option<ColorMode>,
        quiet: bool,
        terminal: TerminalInfo,
    ) -> Self {
        let client = SnapshotClient::from_data_dir(&data_dir);
        Self {
            data_dir,
            color,
            quiet,
            terminal,
            config: OnceCell::new(),
            client,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let path = self.config_path();
            Config::load_from(&path)
                .with_context(|| format!("failed to load config from {}", path.display()))
        })
    }

    pub fn client(&self) -> &SnapshotClient {
        &self.client
    }

    pub fn terminal(&self) -> &TerminalInfo {
        &self.terminal
    }

    /// `--color` beats the config file; `auto` follows the TTY.
    pub fn color_enabled(&self) -> Result<bool> {
        let mode = match self.color {
            Some(mode) => mode,
            None => self.config()?.display.color.into(),
        };
        Ok(match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => self.terminal.is_tty,
        })
    }

    pub fn format_options(&self) -> Result<FormatOptions> {
        Ok(FormatOptions {
            enable_color: self.color_enabled()?,
            is_tty: self.terminal.is_tty,
            quiet: self.quiet,
            terminal_width: self.terminal.width,
        })
    }

    pub fn image_parser(&self) -> Result<ImageNameParser> {
        let registry_url = &self.config()?.auth.registry_url;
        ImageNameParser::new(registry_url)
            .with_context(|| format!("invalid registry URL '{}' in config", registry_url))
    }

    pub fn relative_time(&self) -> Result<RelativeTime> {
        Ok(self
            .config()?
            .display
            .time_window_hours
            .map(RelativeTime::from_hours)
            .unwrap_or_default())
    }
}
