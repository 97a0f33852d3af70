//! calc library root.
//! Clean Architecture 계층을 외부에 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::config::SessionSettings;
use application::ports::{ConsoleOutput, LineSource};
use domain::operation::OperationTable;
use interface::cli::AppComposition;

/// 라이브러리 직접 호출용 실행 함수. 주입된 입출력 포트로 세션을 돌린다.
pub fn run(
    input: Box<dyn LineSource>,
    output: Box<dyn ConsoleOutput>,
    settings: SessionSettings,
) {
    let mut composition =
        AppComposition::with_ports(input, output, OperationTable::builtin(), settings);
    interface::cli::run_repl(&mut composition);
}
