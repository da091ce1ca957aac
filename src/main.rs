use toy_bank::{
    bank::auth::{ClockSeededCodes, SeededCodes},
    config::{Config, DEFAULT_LOG_FILTER},
    output, run,
};

use clap::Parser;
use std::fs::File;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // A missing .env file is fine: every setting has a default.
    dotenvy::dotenv().ok();

    // Logs go to stderr, so they never get mixed with the session on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    let mut bank = config.bank();
    let variant = config.variant();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let session = match config.code_seed {
        Some(seed) => run::run(
            &mut bank,
            variant,
            &mut SeededCodes::new(seed),
            stdin.lock(),
            stdout.lock(),
        ),
        None => run::run(
            &mut bank,
            variant,
            &mut ClockSeededCodes,
            stdin.lock(),
            stdout.lock(),
        ),
    };
    if let Err(err) = session {
        error!(error = %err, "console session aborted");
    }

    if let Some(path) = &config.statement {
        let written = File::create(path)
            .map_err(output::Error::from)
            .and_then(|file| output::write_statement(file, &bank));
        if let Err(err) = written {
            error!(path = %path.display(), error = %err, "could not write statement");
        }
    }
}
