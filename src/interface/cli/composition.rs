//! 애플리케이션 조립(composition root) 모듈.

use crate::application::config::SessionSettings;
use crate::application::ports::{ConsoleOutput, LineSource};
use crate::application::usecases::run_session::RunSessionUseCase;
use crate::domain::operation::OperationTable;
use crate::infrastructure::adapters::{StdinLineSource, StdoutConsole, TerminalLineSource};
use crate::interface::cli::command::TerminalSettings;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    input: Box<dyn LineSource>,
    output: Box<dyn ConsoleOutput>,
    operations: OperationTable,
    settings: SessionSettings,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::new(SessionSettings::default(), TerminalSettings::default())
    }
}

impl AppComposition {
    /// 터미널 설정에 맞는 입출력 어댑터를 골라 조립한다.
    pub fn new(settings: SessionSettings, terminal: TerminalSettings) -> Self {
        let input: Box<dyn LineSource> =
            if terminal.line_editor && TerminalLineSource::is_supported() {
                Box::new(TerminalLineSource::new())
            } else {
                Box::new(StdinLineSource::new())
            };
        let output = Box::new(StdoutConsole::new(terminal.color.enabled()));

        Self::with_ports(input, output, OperationTable::builtin(), settings)
    }

    /// 입출력 포트와 연산 테이블을 외부에서 주입한다.
    pub fn with_ports(
        input: Box<dyn LineSource>,
        output: Box<dyn ConsoleOutput>,
        operations: OperationTable,
        settings: SessionSettings,
    ) -> Self {
        Self {
            input,
            output,
            operations,
            settings,
        }
    }

    /// REPL 세션 유스케이스를 생성한다.
    pub fn session_usecase(&mut self) -> RunSessionUseCase<'_> {
        RunSessionUseCase {
            input: self.input.as_mut(),
            output: self.output.as_mut(),
            operations: &self.operations,
            settings: &self.settings,
        }
    }
}
