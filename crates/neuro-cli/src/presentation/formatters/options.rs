/// Terminal capabilities every formatter is built against
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub enable_color: bool,
    pub is_tty: bool,
    pub quiet: bool,
    /// Columns available for output; listings wrap or cut to this
    pub terminal_width: usize,
}

pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            enable_color: false,
            is_tty: false,
            quiet: false,
            terminal_width: DEFAULT_TERMINAL_WIDTH,
        }
    }
}
