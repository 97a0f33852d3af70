//! 콘솔 출력 포트 구현 어댑터.

use std::io::{self, Write};

use crate::application::ports::{ConsoleOutput, LineEnd};

/// 표준 출력 어댑터. 색상 모드에서는 결과/오류 줄에 ANSI 색을 입힌다.
pub struct StdoutConsole {
    color: bool,
}

impl StdoutConsole {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl ConsoleOutput for StdoutConsole {
    fn write(&mut self, text: &str, end: LineEnd) {
        let mut out = io::stdout().lock();
        let text = if self.color {
            colorize_line(text)
        } else {
            text.to_string()
        };

        // 출력 실패로 세션을 끊지 않는다.
        let _ = match end {
            LineEnd::Newline => writeln!(out, "{text}"),
            LineEnd::None => write!(out, "{text}"),
        };
        let _ = out.flush();
    }
}

fn colorize_line(text: &str) -> String {
    if text.starts_with("Result:") {
        format!("\x1b[32m{text}\x1b[0m")
    } else if text.starts_with("Error:") || text.starts_with("Unexpected error:") {
        format!("\x1b[31m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}
