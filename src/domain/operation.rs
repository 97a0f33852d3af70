//! 사칙연산 정의와 연산 태그 → 함수 고정 테이블.

use thiserror::Error;

/// 지원하는 이항 연산 태그.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub const ALL: [Operation; 4] = [Operation::Add, Operation::Sub, Operation::Mul, Operation::Div];

    /// 명령어로 쓰이는 소문자 이름.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
        }
    }

    /// 소문자 명령어를 연산 태그로 변환한다. 대소문자 정규화는 호출자 책임.
    pub fn from_name(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == word)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperationError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("{0}")]
    Failed(String),
}

pub type BinaryFn = fn(f64, f64) -> Result<f64, OperationError>;

pub fn add(lhs: f64, rhs: f64) -> Result<f64, OperationError> {
    Ok(lhs + rhs)
}

pub fn sub(lhs: f64, rhs: f64) -> Result<f64, OperationError> {
    Ok(lhs - rhs)
}

pub fn mul(lhs: f64, rhs: f64) -> Result<f64, OperationError> {
    Ok(lhs * rhs)
}

/// 나눗셈. 0.0과 정확히 같은 제수만 오류로 본다(-0.0 포함).
pub fn div(lhs: f64, rhs: f64) -> Result<f64, OperationError> {
    if rhs == 0.0 {
        return Err(OperationError::DivisionByZero);
    }
    Ok(lhs / rhs)
}

/// 연산 태그별 구현 함수 테이블.
/// 조회가 태그에 대한 완전 매칭이라 누락된 항목은 컴파일 단계에서 드러난다.
#[derive(Debug, Clone, Copy)]
pub struct OperationTable {
    add: BinaryFn,
    sub: BinaryFn,
    mul: BinaryFn,
    div: BinaryFn,
}

impl Default for OperationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl OperationTable {
    /// 기본 사칙연산으로 채운 테이블.
    pub fn builtin() -> Self {
        Self { add, sub, mul, div }
    }

    /// 한 항목만 다른 구현으로 바꾼 테이블을 만든다(임베딩/테스트용).
    pub fn replace(mut self, op: Operation, func: BinaryFn) -> Self {
        match op {
            Operation::Add => self.add = func,
            Operation::Sub => self.sub = func,
            Operation::Mul => self.mul = func,
            Operation::Div => self.div = func,
        }
        self
    }

    pub fn get(&self, op: Operation) -> BinaryFn {
        match op {
            Operation::Add => self.add,
            Operation::Sub => self.sub,
            Operation::Mul => self.mul,
            Operation::Div => self.div,
        }
    }

    pub fn apply(&self, op: Operation, lhs: f64, rhs: f64) -> Result<f64, OperationError> {
        (self.get(op))(lhs, rhs)
    }
}

/// 결과값 표시 형식. 정수값도 `5.0`처럼 소수부를 남긴다.
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_operations() {
        assert_eq!(add(2.0, 3.0), Ok(5.0));
        assert_eq!(sub(5.0, 3.0), Ok(2.0));
        assert_eq!(mul(2.0, 3.0), Ok(6.0));
        assert_eq!(div(6.0, 3.0), Ok(2.0));
        assert_eq!(add(-2.0, 3.0), Ok(1.0));
        assert_eq!(mul(2.5, 0.5), Ok(1.25));
        assert_eq!(div(2.5, 0.5), Ok(5.0));
    }

    #[test]
    fn div_by_exact_zero_only() {
        assert_eq!(div(1.0, 0.0), Err(OperationError::DivisionByZero));
        assert_eq!(div(0.0, 0.0), Err(OperationError::DivisionByZero));
        assert_eq!(div(-7.0, -0.0), Err(OperationError::DivisionByZero));
        assert!(div(1.0, 1e-300).is_ok());
    }

    #[test]
    fn names_round_trip_for_every_tag() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_name(op.name()), Some(op));
        }
        assert_eq!(Operation::from_name("ADD"), None);
        assert_eq!(Operation::from_name("pow"), None);
    }

    #[test]
    fn table_dispatches_by_tag() {
        let table = OperationTable::builtin();
        assert_eq!(table.apply(Operation::Add, 2.0, 3.0), Ok(5.0));
        assert_eq!(table.apply(Operation::Sub, 2.0, 3.0), Ok(-1.0));
        assert_eq!(table.apply(Operation::Mul, 2.0, 3.0), Ok(6.0));
        assert_eq!(table.apply(Operation::Div, 3.0, 2.0), Ok(1.5));
    }

    #[test]
    fn replace_swaps_a_single_entry() {
        fn boom(_: f64, _: f64) -> Result<f64, OperationError> {
            Err(OperationError::Failed("kaboom".to_string()))
        }

        let table = OperationTable::builtin().replace(Operation::Mul, boom);
        assert_eq!(
            table.apply(Operation::Mul, 1.0, 2.0),
            Err(OperationError::Failed("kaboom".to_string()))
        );
        assert_eq!(table.apply(Operation::Add, 1.0, 2.0), Ok(3.0));
    }

    #[test]
    fn number_formatting_keeps_fraction() {
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-6.0), "-6.0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }
}
