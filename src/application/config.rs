//! 세션 동작 설정.

pub const DEFAULT_PROMPT: &str = "> ";

pub const WELCOME_BANNER: &str =
    "Interactive Calculator. Type 'help' for commands, 'quit' to exit.";

pub const HELP_TEXT: &str = "\
Commands:
  add A B   -> A + B
  sub A B   -> A - B
  mul A B   -> A * B
  div A B   -> A / B
  help      -> show this help
  quit      -> exit
Examples:
  add 2 3
  div 10 4
";

/// REPL 세션 한 번의 표시 설정.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub prompt: String,
    pub show_banner: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
        }
    }
}
