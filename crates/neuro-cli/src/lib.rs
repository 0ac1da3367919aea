mod args;
mod commands;
pub mod context;
mod handlers;
pub mod presentation;
pub mod types;
pub mod ui;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
