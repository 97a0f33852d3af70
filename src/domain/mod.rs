//! Domain layer
//! 명령 파싱과 사칙연산 규칙을 외부 의존성 없이 표현한다.

pub mod command;
pub mod operation;
