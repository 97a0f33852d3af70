//! 애플리케이션 포트를 실제 콘솔/터미널 구현체로 연결하는 어댑터 계층.

mod stdin_input;
mod stdout_console;
mod terminal_input;

pub use stdin_input::StdinLineSource;
pub use stdout_console::StdoutConsole;
pub use terminal_input::TerminalLineSource;
