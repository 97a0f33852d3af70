//! 표준 입력 한 줄 읽기 어댑터.

use std::io::{self, BufRead};

use anyhow::{Context, Result};

use crate::application::ports::{InputEvent, LineSource};

/// 버퍼 리더에서 줄 단위로 읽는 입력 어댑터. 0바이트 읽기는 스트림 종료로 본다.
pub struct StdinLineSource<R = io::StdinLock<'static>> {
    reader: R,
}

impl StdinLineSource {
    pub fn new() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl Default for StdinLineSource {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> StdinLineSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for StdinLineSource<R> {
    fn read_line(&mut self) -> Result<InputEvent> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            return Ok(InputEvent::Closed);
        }
        Ok(InputEvent::Line(trim_newline(line)))
    }
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_then_closes() {
        let mut source = StdinLineSource::from_reader("add 2 3\r\nquit\n".as_bytes());
        assert_eq!(
            source.read_line().unwrap(),
            InputEvent::Line("add 2 3".to_string())
        );
        assert_eq!(source.read_line().unwrap(), InputEvent::Line("quit".to_string()));
        assert_eq!(source.read_line().unwrap(), InputEvent::Closed);
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let mut source = StdinLineSource::from_reader("help".as_bytes());
        assert_eq!(source.read_line().unwrap(), InputEvent::Line("help".to_string()));
        assert_eq!(source.read_line().unwrap(), InputEvent::Closed);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let bytes: &[u8] = &[0xff, 0xfe, b'\n'];
        let mut source = StdinLineSource::from_reader(bytes);
        let err = source.read_line().unwrap_err();
        assert!(format!("{err:#}").contains("failed to read from stdin"));
    }
}
