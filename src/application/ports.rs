//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;

/// 입력 포트가 한 번 읽을 때 돌려주는 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// 줄바꿈이 제거된 입력 한 줄.
    Line(String),
    /// 입력 스트림 종료 또는 사용자 취소(Ctrl-D/Ctrl-C).
    Closed,
    /// 읽을 데이터가 없다는 명시적 신호.
    Absent,
}

/// 한 줄 단위 입력 포트.
/// `Err`는 전송 계층 실패를 뜻하며 세션은 종료로 처리한다.
pub trait LineSource {
    fn read_line(&mut self) -> Result<InputEvent>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    Newline,
    /// 프롬프트처럼 줄바꿈 없이 출력한다.
    None,
}

/// 콘솔 출력 포트.
pub trait ConsoleOutput {
    fn write(&mut self, text: &str, end: LineEnd);

    fn line(&mut self, text: &str) {
        self.write(text, LineEnd::Newline);
    }
}
