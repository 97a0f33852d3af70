//! 계산기 대화형 쉘(REPL) 진입점.

use crate::interface::cli::composition::AppComposition;

/// 조립된 포트로 세션을 끝까지 실행한다.
pub fn run_repl(composition: &mut AppComposition) {
    tracing::debug!("calculator session started");
    composition.session_usecase().execute();
    tracing::debug!("calculator session finished");
}
