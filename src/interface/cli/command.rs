//! CLI 옵션 파싱 모듈.

use std::io::{self, IsTerminal};

use clap::{Parser, ValueEnum};

use crate::application::config::{DEFAULT_PROMPT, SessionSettings};

#[derive(Debug, Parser)]
#[command(name = "calc")]
#[command(about = "Interactive line-based calculator")]
pub struct Cli {
    /// Prompt shown before each input line
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Do not print the welcome banner
    #[arg(long)]
    no_banner: bool,

    /// Read plain lines from stdin, without the line editor
    #[arg(long)]
    plain: bool,

    /// When to colour result and error lines
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// `auto`는 stdout이 TTY일 때만 색을 켠다.
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// 터미널 어댑터 선택 설정.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSettings {
    pub color: ColorChoice,
    pub line_editor: bool,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            line_editor: true,
        }
    }
}

impl Cli {
    /// 프로세스 인자를 읽어 세션/터미널 설정으로 변환한다.
    pub fn parse_settings() -> (SessionSettings, TerminalSettings) {
        Cli::parse().into_settings()
    }

    pub fn into_settings(self) -> (SessionSettings, TerminalSettings) {
        let session = SessionSettings {
            prompt: self.prompt,
            show_banner: !self.no_banner,
        };
        let terminal = TerminalSettings {
            color: self.color,
            line_editor: !self.plain,
        };
        (session, terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(args: &[&str]) -> (SessionSettings, TerminalSettings) {
        Cli::try_parse_from(std::iter::once("calc").chain(args.iter().copied()))
            .unwrap()
            .into_settings()
    }

    #[test]
    fn defaults_match_plain_calculator() {
        let (session, terminal) = settings(&[]);
        assert_eq!(session, SessionSettings::default());
        assert_eq!(terminal, TerminalSettings::default());
    }

    #[test]
    fn flags_override_defaults() {
        let (session, terminal) = settings(&[
            "--prompt",
            "calc> ",
            "--no-banner",
            "--plain",
            "--color",
            "never",
        ]);
        assert_eq!(session.prompt, "calc> ");
        assert!(!session.show_banner);
        assert!(!terminal.line_editor);
        assert_eq!(terminal.color, ColorChoice::Never);
        assert!(!terminal.color.enabled());
        assert!(ColorChoice::Always.enabled());
    }

    #[test]
    fn rejects_unknown_color_mode() {
        let result = Cli::try_parse_from(["calc", "--color", "sometimes"]);
        assert!(result.is_err());
    }
}
