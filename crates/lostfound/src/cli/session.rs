//! Command execution against one long-lived registry.
//!
//! A one-shot invocation runs a single [`Command`] through a [`Session`] and
//! exits. `lostfound shell` keeps the session open and reads command lines
//! from stdin, so an item registered on one line is visible to the searches
//! and statistics on the lines that follow.

use std::io::{BufRead, Write};

use clap::Parser;
use tracing::{debug, info};

use super::{open_registry, render, Cli, Command};
use crate::config::Config;
use crate::error::Result;
use crate::item::ItemKind;
use crate::query::{search, SearchQuery};
use crate::registry::Registry;
use crate::stats::compute_statistics;

const PROMPT: &str = "lostfound> ";

/// What one shell line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line or `#` comment.
    Empty,
    /// Text to print, including error messages.
    Output(String),
    /// `quit` or `exit`.
    Quit,
}

/// A configuration paired with the registry every command runs against.
#[derive(Debug)]
pub struct Session {
    config: Config,
    registry: Registry,
}

impl Session {
    /// Pair `config` with an existing registry.
    #[must_use]
    pub fn new(config: Config, registry: Registry) -> Self {
        Self { config, registry }
    }

    /// Build the registry from `config` and open a session on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured seed file cannot be loaded.
    pub fn open(config: Config) -> Result<Self> {
        let registry = open_registry(&config)?;
        Ok(Self::new(config, registry))
    }

    /// The session's registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run one command and return its rendered output.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] for a rejected registration and
    /// a serialization error if JSON rendering fails.
    pub fn execute(&self, command: &Command) -> Result<String> {
        match command {
            Command::Register(cmd) => {
                let record = self.registry.register(&cmd.to_form())?;
                let kind = ItemKind::from(cmd.kind);
                if cmd.json {
                    let value = serde_json::json!({ "type_class": kind, "item": record });
                    Ok(terminate(serde_json::to_string_pretty(&value)?))
                } else {
                    Ok(format!(
                        "{}\n\n{}",
                        render::registered_message(kind, &record),
                        render::render_record(kind, &record)
                    ))
                }
            }
            Command::Search(cmd) => {
                let type_filter = cmd
                    .type_filter
                    .map_or_else(|| self.config.default_type_filter(), Into::into);
                let query = SearchQuery::new()
                    .keyword(cmd.keyword.trim())
                    .category(cmd.category.as_str())
                    .type_filter(type_filter);
                let results = search(&self.registry, &query);
                render::render_search(&results, cmd.format).map(terminate)
            }
            Command::Stats(cmd) => {
                let stats = compute_statistics(&self.registry);
                render::render_statistics(&stats, cmd.json).map(terminate)
            }
            Command::Catalog(cmd) => render::render_catalog(cmd.json).map(terminate),
            Command::Config(cmd) => render::render_config(&self.config, cmd),
            Command::Shell => Ok("Already in a shell session.\n".to_string()),
        }
    }

    /// Parse and run one shell line.
    ///
    /// Parse failures and rejected registrations become output text; the
    /// session keeps going.
    #[must_use]
    pub fn execute_line(&self, line: &str) -> LineOutcome {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return LineOutcome::Empty;
        }
        if matches!(line, "quit" | "exit") {
            return LineOutcome::Quit;
        }

        let Some(words) = shlex::split(line) else {
            return LineOutcome::Output("Unbalanced quotes in command line.\n".to_string());
        };
        let args = std::iter::once("lostfound".to_string()).chain(words);
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(err) => return LineOutcome::Output(err.render().to_string()),
        };

        debug!(line, "Executing shell line");
        match self.execute(&cli.command) {
            Ok(text) => LineOutcome::Output(text),
            Err(err) => LineOutcome::Output(terminate(render::error_message(&err))),
        }
    }

    /// Read lines from `input` until end of input or `quit`, writing each
    /// line's output to `out`. Returns the number of lines that produced
    /// output.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if reading `input` or writing `out` fails.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut out: W,
        prompt: bool,
    ) -> Result<usize> {
        info!(records = self.registry.len(), "Shell session started");

        let mut handled = 0;
        let mut line = String::new();
        loop {
            if prompt {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            match self.execute_line(&line) {
                LineOutcome::Empty => {}
                LineOutcome::Output(text) => {
                    handled += 1;
                    out.write_all(text.as_bytes())?;
                }
                LineOutcome::Quit => break,
            }
        }
        out.flush()?;

        info!(
            handled,
            records = self.registry.len(),
            "Shell session ended"
        );
        Ok(handled)
    }
}

fn terminate(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
