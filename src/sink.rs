use std::io::Write;

use crate::lines::LineError;

/// Accepts formatted text lines, one per call, terminator-free.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> Result<(), LineError>;
}

/// In-memory sink, mainly for tests and capture.
impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<(), LineError> {
        self.push(line.to_owned());
        Ok(())
    }
}

/// Adapts any `io::Write` (stdout, a file) into a `LineSink`, appending a
/// newline after each line.
#[derive(Debug)]
pub struct IoSink<W>(pub W);

impl<W: Write> LineSink for IoSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), LineError> {
        self.0.write_all(line.as_bytes())?;
        self.0.write_all(b"\n")?;
        Ok(())
    }
}
