//! Infrastructure layer
//! 표준 입출력과 터미널에 직접 닿는 구현체 집합.

pub mod adapters;
