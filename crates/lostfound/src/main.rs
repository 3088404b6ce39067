//! `lostfound` - CLI for the campus lost-and-found registry
//!
//! A one-shot invocation builds a registry from configuration (sample data and
//! an optional seed file), runs one command against it, and prints the result.
//! `lostfound shell` keeps that registry for every line read from stdin.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, IsTerminal};

use anyhow::{bail, Context};
use clap::Parser;

use lostfound::cli::{open_registry, validation_message, Cli, Command, Session};
use lostfound::{init_logging, Config, Registry};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    let registry = if cli.command.needs_registry() {
        open_registry(&config).context("building registry")?
    } else {
        Registry::new()
    };
    let session = Session::new(config, registry);

    match cli.command {
        Command::Shell => handle_shell(&session),
        command => handle_command(&session, &command),
    }
}

fn handle_shell(session: &Session) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    session
        .run(stdin.lock(), io::stdout().lock(), prompt)
        .context("running shell session")?;
    Ok(())
}

fn handle_command(session: &Session, command: &Command) -> anyhow::Result<()> {
    match session.execute(command) {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(err) => match err.validation_reason() {
            Some(reason) => bail!("{}", validation_message(reason)),
            None => Err(err.into()),
        },
    }
}
