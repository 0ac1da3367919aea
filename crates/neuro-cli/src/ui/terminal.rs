use std::io::{self, Write};

/// Sink for rendered output. Progress frames are written raw since they
/// carry their own line endings and cursor movement.
pub trait TerminalWriter {
    fn write(&mut self, text: &str);
    fn write_line(&mut self, line: &str);
    fn flush(&mut self);
}

pub struct AnsiTerminal;

impl Default for AnsiTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl AnsiTerminal {
    pub fn new() -> Self {
        Self
    }
}

impl TerminalWriter for AnsiTerminal {
    fn write(&mut self, text: &str) {
        print!("{}", text);
    }

    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }

    fn flush(&mut self) {
        let _ = io::stdout().flush();
    }
}

/// Records everything written, for handler tests.
pub struct MockTerminal {
    pub output: String,
    pub flush_count: usize,
}

impl Default for MockTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTerminal {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            flush_count: 0,
        }
    }

    pub fn lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }
}

impl TerminalWriter for MockTerminal {
    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn flush(&mut self) {
        self.flush_count += 1;
    }
}
