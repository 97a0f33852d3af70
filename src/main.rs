//! `calc` 바이너리 진입점.

use calc::interface::cli::{AppComposition, Cli, run_repl};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let (session, terminal) = Cli::parse_settings();
    let mut composition = AppComposition::new(session, terminal);
    run_repl(&mut composition);
}
