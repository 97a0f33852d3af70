//! 입력 한 줄씩 읽어 계산하고 결과를 출력하는 REPL 세션 유스케이스.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::application::config::{HELP_TEXT, SessionSettings, WELCOME_BANNER};
use crate::application::ports::{ConsoleOutput, InputEvent, LineEnd, LineSource};
use crate::domain::command::{Command, parse_command};
use crate::domain::operation::{OperationError, OperationTable, format_number};

const GOODBYE: &str = "Goodbye!";

/// 한 줄 평가 후 세션 진행 여부.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Reply {
    Continue(String),
    Stop,
}

/// 세션 유스케이스. 입출력 포트와 연산 테이블을 외부에서 주입받는다.
pub struct RunSessionUseCase<'a> {
    pub input: &'a mut dyn LineSource,
    pub output: &'a mut dyn ConsoleOutput,
    pub operations: &'a OperationTable,
    pub settings: &'a SessionSettings,
}

impl<'a> RunSessionUseCase<'a> {
    /// `quit` 또는 입력 종료까지 루프를 돈다.
    pub fn execute(&mut self) {
        if self.settings.show_banner {
            self.output.line(WELCOME_BANNER);
        }

        loop {
            self.output.write(&self.settings.prompt, LineEnd::None);

            let line = match self.input.read_line() {
                Ok(InputEvent::Line(line)) => line,
                Ok(InputEvent::Closed) => {
                    self.output.line(&format!("\n{GOODBYE}"));
                    break;
                }
                Ok(InputEvent::Absent) => {
                    self.output.line(GOODBYE);
                    break;
                }
                Err(err) => {
                    tracing::warn!(error = %format!("{err:#}"), "input read failed; closing session");
                    self.output.line(&format!("\n{GOODBYE}"));
                    break;
                }
            };

            // 한 반복 안의 어떤 실패도 세션을 끝내지 않도록 여기서 한 번에 회수한다.
            let operations = self.operations;
            let reply = panic::catch_unwind(AssertUnwindSafe(|| respond(operations, &line)))
                .unwrap_or_else(|payload| {
                    let message = panic_message(payload.as_ref());
                    tracing::error!(%message, line = %line, "command evaluation panicked");
                    Reply::Continue(format!("Unexpected error: {message}"))
                });

            match reply {
                Reply::Continue(text) => self.output.line(&text),
                Reply::Stop => {
                    self.output.line(GOODBYE);
                    break;
                }
            }
        }
    }
}

fn respond(operations: &OperationTable, line: &str) -> Reply {
    let command = match parse_command(line) {
        Ok(command) => command,
        Err(err) => {
            tracing::debug!(line, error = %err, "rejected input");
            return Reply::Continue(format!("Error: {err}"));
        }
    };

    match command {
        Command::Quit => Reply::Stop,
        Command::Help => Reply::Continue(HELP_TEXT.to_string()),
        Command::Calculate {
            operation,
            lhs,
            rhs,
        } => {
            let outcome = operations.apply(operation, lhs, rhs);
            tracing::debug!(op = operation.name(), lhs, rhs, ?outcome, "evaluated");
            match outcome {
                Ok(value) => Reply::Continue(format!("Result: {}", format_number(value))),
                Err(OperationError::DivisionByZero) => {
                    Reply::Continue("Error: Cannot divide by zero.".to_string())
                }
                Err(OperationError::Failed(message)) => {
                    tracing::error!(op = operation.name(), %message, "operation failed");
                    Reply::Continue(format!("Unexpected error: {message}"))
                }
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        return (*text).to_string();
    }
    if let Some(text) = payload.downcast_ref::<String>() {
        return text.clone();
    }
    "unknown panic".to_string()
}
