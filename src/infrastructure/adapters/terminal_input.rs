//! 터미널 라인 에디터 입력 어댑터.
//! TTY에서는 raw mode로 한 줄을 편집하며 히스토리(↑↓)와 명령어 Tab 완성을 지원한다.

use std::env;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, ClearType};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::application::ports::{InputEvent, LineSource};
use crate::domain::command::{HELP_WORD, QUIT_WORD};
use crate::domain::operation::Operation;
use crate::infrastructure::adapters::stdin_input::StdinLineSource;

/// raw mode 라인 편집 입력 어댑터.
/// 터미널이 아니거나 raw mode 진입에 실패하면 일반 stdin 읽기로 대체한다.
pub struct TerminalLineSource {
    history: Vec<String>,
    fallback: StdinLineSource,
}

impl Default for TerminalLineSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalLineSource {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            fallback: StdinLineSource::new(),
        }
    }

    /// 현재 환경에서 라인 에디터를 쓸 수 있는지 확인한다.
    pub fn is_supported() -> bool {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            return false;
        }

        // dumb 터미널에서는 제어 시퀀스 기반 편집을 비활성화한다.
        if let Ok(term) = env::var("TERM")
            && term.eq_ignore_ascii_case("dumb")
        {
            return false;
        }

        true
    }

    fn remember(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if self.history.last().map(String::as_str) == Some(line) {
            return;
        }
        self.history.push(line.to_string());
    }

    fn read_line_interactive(&self) -> Result<InputEvent> {
        let mut stdout = io::stdout();
        let _guard = InputGuard::enter(&mut stdout)?;
        let (origin_col, _) = cursor::position()?;
        let mut editor = LineEditor::new(&self.history);

        loop {
            render_line(&mut stdout, origin_col, &editor)?;

            match event::read()? {
                Event::Paste(text) => editor.insert_str(&text),
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    match key.code {
                        KeyCode::Enter => {
                            write!(stdout, "\r\n")?;
                            stdout.flush()?;
                            return Ok(InputEvent::Line(editor.into_line()));
                        }
                        KeyCode::Backspace => editor.backspace(),
                        KeyCode::Delete => editor.delete(),
                        KeyCode::Left => editor.move_left(),
                        KeyCode::Right => editor.move_right(),
                        KeyCode::Home => editor.move_home(),
                        KeyCode::End => editor.move_end(),
                        KeyCode::Up => editor.history_prev(),
                        KeyCode::Down => editor.history_next(),
                        KeyCode::Tab => editor.complete(),
                        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            if editor.is_empty() {
                                return Ok(InputEvent::Closed);
                            }
                            editor.delete();
                        }
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(InputEvent::Closed);
                        }
                        KeyCode::Char(ch) => {
                            if !key.modifiers.contains(KeyModifiers::CONTROL)
                                && !key.modifiers.contains(KeyModifiers::ALT)
                            {
                                editor.insert(ch);
                            }
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }
    }
}

impl LineSource for TerminalLineSource {
    fn read_line(&mut self) -> Result<InputEvent> {
        if !Self::is_supported() {
            return self.fallback.read_line();
        }

        let event = match self.read_line_interactive() {
            Ok(event) => event,
            Err(err) => {
                tracing::debug!(error = %err, "line editor unavailable; using plain stdin");
                self.fallback.read_line()?
            }
        };

        if let InputEvent::Line(line) = &event {
            self.remember(line);
        }
        Ok(event)
    }
}

/// Tab 완성 대상 명령어 목록.
fn command_words() -> Vec<&'static str> {
    let mut words: Vec<&'static str> = Operation::ALL.iter().map(|op| op.name()).collect();
    words.push(HELP_WORD);
    words.push(QUIT_WORD);
    words
}

/// 한 줄 편집 상태. 커서는 문자 단위 인덱스다.
struct LineEditor<'h> {
    buffer: String,
    cursor_chars: usize,
    history: &'h [String],
    history_pos: Option<usize>,
    draft: String,
}

impl<'h> LineEditor<'h> {
    fn new(history: &'h [String]) -> Self {
        Self {
            buffer: String::new(),
            cursor_chars: 0,
            history,
            history_pos: None,
            draft: String::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn into_line(self) -> String {
        self.buffer
    }

    fn insert(&mut self, ch: char) {
        insert_char_at(&mut self.buffer, self.cursor_chars, ch);
        self.cursor_chars += 1;
    }

    fn insert_str(&mut self, text: &str) {
        // 붙여넣기의 줄바꿈은 공백으로 취급한다.
        for ch in text.chars() {
            self.insert(if matches!(ch, '\n' | '\r') { ' ' } else { ch });
        }
    }

    fn backspace(&mut self) {
        if self.cursor_chars > 0 {
            remove_char_at(&mut self.buffer, self.cursor_chars - 1);
            self.cursor_chars -= 1;
        }
    }

    fn delete(&mut self) {
        if self.cursor_chars < self.char_len() {
            remove_char_at(&mut self.buffer, self.cursor_chars);
        }
    }

    fn move_left(&mut self) {
        self.cursor_chars = self.cursor_chars.saturating_sub(1);
    }

    fn move_right(&mut self) {
        self.cursor_chars = (self.cursor_chars + 1).min(self.char_len());
    }

    fn move_home(&mut self) {
        self.cursor_chars = 0;
    }

    fn move_end(&mut self) {
        self.cursor_chars = self.char_len();
    }

    fn set_buffer(&mut self, text: String) {
        self.buffer = text;
        self.move_end();
    }

    fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let pos = match self.history_pos {
            None => {
                self.draft = self.buffer.clone();
                self.history.len() - 1
            }
            Some(pos) => pos.saturating_sub(1),
        };
        self.history_pos = Some(pos);
        self.set_buffer(self.history[pos].clone());
    }

    fn history_next(&mut self) {
        let Some(pos) = self.history_pos else {
            return;
        };
        if pos + 1 < self.history.len() {
            self.history_pos = Some(pos + 1);
            self.set_buffer(self.history[pos + 1].clone());
        } else {
            // 가장 최근 항목 다음은 탐색 전 입력으로 복귀한다.
            self.history_pos = None;
            let draft = std::mem::take(&mut self.draft);
            self.set_buffer(draft);
        }
    }

    /// 첫 단어 입력 중일 때 유일하게 일치하는 명령어로 완성한다.
    fn complete(&mut self) {
        if self.cursor_chars != self.char_len() || self.buffer.contains(char::is_whitespace) {
            return;
        }
        if let Some(completed) = complete_command_word(&self.buffer) {
            self.set_buffer(completed);
        }
    }
}

fn complete_command_word(prefix: &str) -> Option<String> {
    let q = prefix.trim_start().to_lowercase();
    if q.is_empty() {
        return None;
    }

    let matches: Vec<&str> = command_words()
        .into_iter()
        .filter(|word| word.starts_with(&q))
        .collect();
    let [word] = matches.as_slice() else {
        return None;
    };

    // 피연산자가 필요한 연산은 공백까지 붙여 바로 숫자를 입력하게 한다.
    if Operation::from_name(word).is_some() {
        Some(format!("{word} "))
    } else {
        Some((*word).to_string())
    }
}

fn render_line(stdout: &mut io::Stdout, origin_col: u16, editor: &LineEditor<'_>) -> Result<()> {
    let (w, _) = terminal::size().unwrap_or((120, 40));
    let available = (w as usize)
        .saturating_sub(origin_col as usize)
        .saturating_sub(1);

    execute!(
        stdout,
        cursor::MoveToColumn(origin_col),
        terminal::Clear(ClearType::UntilNewLine)
    )?;
    write!(stdout, "{}", tail_with_ellipsis_display(&editor.buffer, available))?;

    let col = origin_col as usize + cursor_col(&editor.buffer, editor.cursor_chars, available);
    execute!(stdout, cursor::MoveToColumn(col as u16))?;
    stdout.flush()?;
    Ok(())
}

fn cursor_col(input: &str, cursor_chars: usize, available: usize) -> usize {
    let before_cursor: String = input.chars().take(cursor_chars).collect();
    if display_width(input) <= available {
        return display_width(&before_cursor);
    }

    // 넘치는 입력은 끝부분만 보이므로 커서를 표시 영역 끝에 맞춘다.
    display_width(&tail_with_ellipsis_display(input, available))
}

fn tail_with_ellipsis_display(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if display_width(text) <= max_width {
        return text.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut tail_rev = String::new();
    let mut used = 0usize;

    for ch in text.chars().rev() {
        let cw = char_display_width(ch);
        if used + cw > target {
            break;
        }
        tail_rev.push(ch);
        used += cw;
    }

    let tail: String = tail_rev.chars().rev().collect();
    format!("...{tail}")
}

fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

struct InputGuard;

impl InputGuard {
    fn enter(stdout: &mut io::Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout, cursor::Show)?;
        Ok(Self)
    }
}

impl Drop for InputGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = terminal::disable_raw_mode();
        let _ = execute!(stdout, cursor::Show);
        let _ = stdout.flush();
    }
}

fn insert_char_at(input: &mut String, char_idx: usize, ch: char) {
    let byte_idx = byte_index_at_char(input, char_idx);
    input.insert(byte_idx, ch);
}

fn remove_char_at(input: &mut String, char_idx: usize) {
    let start = byte_index_at_char(input, char_idx);
    let end = byte_index_at_char(input, char_idx + 1);
    if start < end && end <= input.len() {
        input.replace_range(start..end, "");
    }
}

fn byte_index_at_char(input: &str, char_idx: usize) -> usize {
    input
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(input.len())
}
