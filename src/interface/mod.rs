//! Interface layer
//! 명령행과 REPL 진입을 담당한다.

pub mod cli;
