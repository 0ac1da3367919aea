pub mod terminal;

pub use terminal::{AnsiTerminal, MockTerminal, TerminalWriter};
