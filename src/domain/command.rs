//! 계산기 입력 한 줄을 명령으로 해석하는 파서.

use thiserror::Error;

use crate::domain::operation::Operation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Calculate {
        operation: Operation,
        lhs: f64,
        rhs: f64,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("expected exactly two numbers, e.g. 'add 2 3'")]
    WrongArity,
    #[error("A and B must be numbers")]
    NotANumber,
}

pub const QUIT_WORD: &str = "quit";
pub const HELP_WORD: &str = "help";

/// 입력 한 줄을 명령으로 변환한다.
/// - 명령어는 대소문자를 구분하지 않는다.
/// - 연산 명령은 정확히 두 개의 숫자 피연산자를 요구한다.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return Err(ParseError::Empty);
    };

    let word = first.to_lowercase();
    match word.as_str() {
        QUIT_WORD => return Ok(Command::Quit),
        HELP_WORD => return Ok(Command::Help),
        _ => {}
    }

    let Some(operation) = Operation::from_name(&word) else {
        return Err(ParseError::UnknownCommand(word));
    };

    let [_, lhs, rhs] = tokens.as_slice() else {
        return Err(ParseError::WrongArity);
    };

    match (lhs.parse::<f64>(), rhs.parse::<f64>()) {
        (Ok(lhs), Ok(rhs)) => Ok(Command::Calculate {
            operation,
            lhs,
            rhs,
        }),
        _ => Err(ParseError::NotANumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculate(operation: Operation, lhs: f64, rhs: f64) -> Command {
        Command::Calculate {
            operation,
            lhs,
            rhs,
        }
    }

    #[test]
    fn parses_every_operation() {
        for op in Operation::ALL {
            let line = format!("{} 2 3", op.name());
            assert_eq!(parse_command(&line), Ok(calculate(op, 2.0, 3.0)));
        }
    }

    #[test]
    fn parses_number_literal_forms() {
        assert_eq!(
            parse_command("mul -2.5 +4"),
            Ok(calculate(Operation::Mul, -2.5, 4.0))
        );
        assert_eq!(
            parse_command("div 1e3 2E-1"),
            Ok(calculate(Operation::Div, 1000.0, 0.2))
        );
        assert_eq!(
            parse_command("  sub\t10   .5  "),
            Ok(calculate(Operation::Sub, 10.0, 0.5))
        );
    }

    #[test]
    fn command_words_are_case_insensitive() {
        assert_eq!(parse_command("ADD 2 3"), parse_command("add 2 3"));
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
        assert_eq!(parse_command("Help"), Ok(Command::Help));
    }

    #[test]
    fn quit_and_help_ignore_trailing_tokens() {
        assert_eq!(parse_command("quit now"), Ok(Command::Quit));
        assert_eq!(parse_command("help add"), Ok(Command::Help));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_command(""), Err(ParseError::Empty));
        assert_eq!(parse_command("   "), Err(ParseError::Empty));
        assert!(
            parse_command("\t")
                .unwrap_err()
                .to_string()
                .contains("empty command")
        );
    }

    #[test]
    fn unknown_command_names_the_word() {
        let err = parse_command("foo 1 2").unwrap_err();
        assert_eq!(err, ParseError::UnknownCommand("foo".to_string()));
        assert_eq!(err.to_string(), "unknown command 'foo'");
    }

    #[test]
    fn wrong_operand_count() {
        for line in ["add 1", "add 1 2 3", "div"] {
            let err = parse_command(line).unwrap_err();
            assert_eq!(err, ParseError::WrongArity, "{line}");
            assert!(err.to_string().contains("exactly two numbers"));
        }
    }

    #[test]
    fn non_numeric_operands() {
        for line in ["add x y", "add 1 y", "add x 2"] {
            let err = parse_command(line).unwrap_err();
            assert_eq!(err.to_string(), "A and B must be numbers", "{line}");
        }
    }

    #[test]
    fn arity_is_checked_before_operands() {
        assert_eq!(parse_command("add x"), Err(ParseError::WrongArity));
    }
}
