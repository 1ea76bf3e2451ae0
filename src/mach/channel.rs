use super::{Trace, Value};
use crate::error;
use crate::lang::Error;
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// ## I/O channel
///
/// The blocking side of the machine's input and output, used by
/// [`Runtime::run`](super::Runtime::run). The runtime only touches it for
/// `.` `,` `&` `~`, for interactive grid rows and for traces.

pub trait Channel {
    /// Next line of input without its line break. Blocks until one is
    /// available.
    fn read_line(&mut self) -> Result<String>;

    fn read_int(&mut self) -> Result<Value> {
        let line = self.read_line()?;
        let line = line.trim();
        line.parse().map_err(|_| error!(InvalidNumber; line))
    }

    fn write_text(&mut self, text: &str) -> Result<()>;

    fn write_char(&mut self, ch: char) -> Result<()> {
        let mut buf = [0; 4];
        self.write_text(ch.encode_utf8(&mut buf))
    }

    fn write_trace(&mut self, trace: &Trace) -> Result<()> {
        self.write_text(&format!("{}\n", trace))
    }
}

/// In-memory channel: input is a queue of lines, output accumulates in a
/// string.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    input: VecDeque<String>,
    output: String,
}

impl Buffer {
    pub fn new() -> Buffer {
        Buffer::default()
    }

    pub fn with_input<S: AsRef<str>>(lines: &[S]) -> Buffer {
        Buffer {
            input: lines.iter().map(|l| l.as_ref().to_string()).collect(),
            output: String::new(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

impl Channel for Buffer {
    fn read_line(&mut self) -> Result<String> {
        self.input.pop_front().ok_or_else(|| error!(InputPastEnd))
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn write_char(&mut self, ch: char) -> Result<()> {
        self.output.push(ch);
        Ok(())
    }
}
