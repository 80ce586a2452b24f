use std::io::BufRead;

use thiserror::Error;

/// Failure while moving text lines across a source or sink boundary.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("line stream i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Yields one textual line per call, without its line terminator. `Ok(None)`
/// signals end of input; reading past the end keeps returning `Ok(None)`.
pub trait LineSource {
    fn read_line(&mut self) -> Result<Option<String>, LineError>;
}

/// A `LineSource` over any buffered reader. A trailing chunk with no final
/// newline is still yielded as one last line.
#[derive(Debug)]
pub struct BufLines<R> {
    input: R,
}

impl<R: BufRead> BufLines<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> LineSource for BufLines<R> {
    fn read_line(&mut self) -> Result<Option<String>, LineError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn yields_lines_in_order() {
        let mut src = BufLines::new(Cursor::new("3\n10 20\nend\n"));

        assert_eq!(src.read_line().unwrap(), Some("3".to_owned()));
        assert_eq!(src.read_line().unwrap(), Some("10 20".to_owned()));
        assert_eq!(src.read_line().unwrap(), Some("end".to_owned()));
        assert_eq!(src.read_line().unwrap(), None);
    }

    #[test]
    fn missing_final_newline_still_yields_the_line() {
        let mut src = BufLines::new(Cursor::new("a\nb"));

        assert_eq!(src.read_line().unwrap(), Some("a".to_owned()));
        assert_eq!(src.read_line().unwrap(), Some("b".to_owned()));
        assert_eq!(src.read_line().unwrap(), None);
    }

    #[test]
    fn crlf_terminators_are_stripped() {
        let mut src = BufLines::new(Cursor::new("a\r\nb\r\n"));

        assert_eq!(src.read_line().unwrap(), Some("a".to_owned()));
        assert_eq!(src.read_line().unwrap(), Some("b".to_owned()));
    }

    #[test]
    fn empty_lines_are_preserved() {
        let mut src = BufLines::new(Cursor::new("\n\nx\n"));

        assert_eq!(src.read_line().unwrap(), Some("".to_owned()));
        assert_eq!(src.read_line().unwrap(), Some("".to_owned()));
        assert_eq!(src.read_line().unwrap(), Some("x".to_owned()));
    }

    #[test]
    fn exhausted_source_stays_exhausted() {
        let mut src = BufLines::new(Cursor::new(""));

        assert_eq!(src.read_line().unwrap(), None);
        assert_eq!(src.read_line().unwrap(), None);
    }
}
