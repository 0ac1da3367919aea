//! Progress of an image push or pull.
//!
//! The image client reports messages, optionally tagged with the layer they
//! belong to. Like [`JobStartProgress`](super::jobs::JobStartProgress) every
//! call returns the text to write and the caller flushes it.

use super::formatters::text::ansi;
use crossterm::cursor::{MoveToNextLine, MoveToPreviousLine};
use crossterm::terminal::{Clear, ClearType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOperation {
    Push,
    Pull,
}

/// Where the image comes from and where it goes.
#[derive(Debug, Clone)]
struct Transfer {
    operation: ImageOperation,
    input: String,
    output: String,
}

impl Transfer {
    fn header(&self) -> String {
        let (input_side, output_side, action) = match self.operation {
            ImageOperation::Push => ("local", "remote", "Pushing"),
            ImageOperation::Pull => ("remote", "local", "Pulling"),
        };
        format!(
            "Using {} image '{}'\nUsing {} image '{}'\n{} image...\n",
            input_side, self.input, output_side, self.output, action
        )
    }
}

#[derive(Debug)]
pub enum ImageProgress {
    Quiet,
    /// Plain lines; per-layer chatter is dropped
    Stream(StreamImageProgress),
    /// One line per layer, rewritten in place
    Detailed(DetailedImageProgress),
}

impl ImageProgress {
    pub fn create(
        operation: ImageOperation,
        input: &str,
        output: &str,
        tty: bool,
        quiet: bool,
    ) -> Self {
        let transfer = Transfer {
            operation,
            input: input.to_string(),
            output: output.to_string(),
        };
        if quiet {
            ImageProgress::Quiet
        } else if tty {
            ImageProgress::Detailed(DetailedImageProgress::new(transfer))
        } else {
            ImageProgress::Stream(StreamImageProgress::new(transfer))
        }
    }

    pub fn update(&mut self, message: &str, layer: Option<&str>) -> String {
        match self {
            ImageProgress::Quiet => String::new(),
            ImageProgress::Stream(progress) => progress.update(message, layer),
            ImageProgress::Detailed(progress) => progress.update(message, layer),
        }
    }

    /// Final text; the instance renders nothing afterwards.
    pub fn close(&mut self) -> String {
        match self {
            ImageProgress::Quiet => String::new(),
            ImageProgress::Stream(progress) => progress.close(),
            ImageProgress::Detailed(progress) => progress.close(),
        }
    }
}

#[derive(Debug)]
pub struct StreamImageProgress {
    transfer: Transfer,
    started: bool,
    closed: bool,
}

impl StreamImageProgress {
    fn new(transfer: Transfer) -> Self {
        Self {
            transfer,
            started: false,
            closed: false,
        }
    }

    fn begin(&mut self) -> String {
        if self.started {
            return String::new();
        }
        self.started = true;
        self.transfer.header()
    }

    fn update(&mut self, message: &str, layer: Option<&str>) -> String {
        if self.closed {
            return String::new();
        }
        let mut out = self.begin();
        if layer.is_none() && !message.is_empty() {
            out.push_str(message);
            out.push('\n');
        }
        out
    }

    fn close(&mut self) -> String {
        if self.closed {
            return String::new();
        }
        let mut out = self.begin();
        out.push_str(&self.transfer.output);
        out.push('\n');
        self.closed = true;
        out
    }
}

#[derive(Debug)]
pub struct DetailedImageProgress {
    transfer: Transfer,
    started: bool,
    closed: bool,
    /// Layer id and the line it occupies below the header
    layers: Vec<(String, usize)>,
    lines: usize,
}

impl DetailedImageProgress {
    fn new(transfer: Transfer) -> Self {
        Self {
            transfer,
            started: false,
            closed: false,
            layers: Vec::new(),
            lines: 0,
        }
    }

    fn begin(&mut self) -> String {
        if self.started {
            return String::new();
        }
        self.started = true;
        self.transfer.header()
    }

    fn line(text: &str) -> String {
        format!("{}{}\n", text, ansi(Clear(ClearType::UntilNewLine)))
    }

    fn update(&mut self, message: &str, layer: Option<&str>) -> String {
        if self.closed {
            return String::new();
        }
        let mut out = self.begin();

        let Some(layer) = layer else {
            out.push_str(&Self::line(message));
            self.lines += 1;
            return out;
        };

        let text = format!("{}: {}", layer, message);
        match self.layers.iter().find(|(id, _)| id == layer) {
            Some(&(_, index)) => {
                let up = self.lines - index;
                out.push_str(&ansi(MoveToPreviousLine(up as u16)));
                out.push_str(&Self::line(&text));
                if up > 1 {
                    out.push_str(&ansi(MoveToNextLine((up - 1) as u16)));
                }
            }
            None => {
                self.layers.push((layer.to_string(), self.lines));
                out.push_str(&Self::line(&text));
                self.lines += 1;
            }
        }
        out
    }

    fn close(&mut self) -> String {
        if self.closed {
            return String::new();
        }
        let mut out = self.begin();
        out.push_str(&Self::line(&self.transfer.output));
        self.closed = true;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSI: &str = "\x1b[";

    fn run(progress: &mut ImageProgress) -> String {
        let mut out = String::new();
        out += &progress.update("message1", None);
        out += &progress.update("message2", Some("layer1"));
        out += &progress.update("message3", Some("layer1"));
        out += &progress.close();
        out
    }

    fn push(tty: bool, quiet: bool) -> ImageProgress {
        ImageProgress::create(
            ImageOperation::Push,
            "input:latest",
            "image://bob/output:stream",
            tty,
            quiet,
        )
    }

    #[test]
    fn test_quiet() {
        let mut progress =
            ImageProgress::create(ImageOperation::Pull, "input", "output", true, true);
        assert_eq!(run(&mut progress), "");
    }

    #[test]
    fn test_no_tty_drops_layer_messages() {
        let out = run(&mut push(false, false));

        assert!(out.contains("input:latest"));
        assert!(out.contains("image://bob/output:stream"));
        assert!(out.contains("message1"));
        assert!(!out.contains("message2"));
        assert!(!out.contains(CSI));
    }

    #[test]
    fn test_no_tty_output() {
        insta::assert_snapshot!(run(&mut push(false, false)), @r"
        Using local image 'input:latest'
        Using remote image 'image://bob/output:stream'
        Pushing image...
        message1
        image://bob/output:stream
        ");
    }

    #[test]
    fn test_tty_shows_every_message() {
        let out = run(&mut push(true, false));

        assert!(out.contains("input:latest"));
        assert!(out.contains("image://bob/output:stream"));
        assert!(out.contains("message1"));
        assert!(out.contains("layer1: message2"));
        assert!(out.contains("layer1: message3"));
        assert!(out.contains(CSI));
    }

    #[test]
    fn test_tty_rewrites_layer_line_in_place() {
        let mut progress = push(true, false);
        progress.update("Preparing", Some("a"));
        progress.update("Preparing", Some("b"));

        // layer "a" is two lines up: rewrite it, then step back down one
        let out = progress.update("Pushed", Some("a"));
        assert_eq!(out, "\x1b[2Fa: Pushed\x1b[K\n\x1b[1E");

        // the last layer needs no step back down
        let out = progress.update("Pushed", Some("b"));
        assert_eq!(out, "\x1b[1Fb: Pushed\x1b[K\n");
    }

    #[test]
    fn test_pull_header() {
        let mut progress = ImageProgress::create(
            ImageOperation::Pull,
            "image://bob/app:v1",
            "app:v1",
            false,
            false,
        );
        assert!(progress.update("", None).starts_with(
            "Using remote image 'image://bob/app:v1'\nUsing local image 'app:v1'\nPulling image...\n"
        ));
    }

    #[test]
    fn test_closed_progress_is_silent() {
        for tty in [true, false] {
            let mut progress = push(tty, false);
            assert!(!progress.close().is_empty());
            assert_eq!(progress.update("late", None), "");
            assert_eq!(progress.close(), "");
        }
    }
}
