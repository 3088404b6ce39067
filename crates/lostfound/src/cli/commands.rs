//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::item::{ItemKind, RegistrationForm};
use crate::query::TypeFilter;

/// Register command arguments.
#[derive(Debug, Args)]
pub struct RegisterCommand {
    /// Whether the item was lost or found
    #[arg(short, long, value_enum)]
    pub kind: KindArg,

    /// Item name
    #[arg(short, long)]
    pub name: String,

    /// Item category (see `lostfound catalog`)
    #[arg(long)]
    pub category: String,

    /// Campus location (see `lostfound catalog`)
    #[arg(short, long)]
    pub place: String,

    /// Date the item was lost or found
    #[arg(short, long)]
    pub date: String,

    /// How to reach you
    #[arg(long, default_value = "")]
    pub contact: String,

    /// Free-text description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

impl RegisterCommand {
    /// Convert the arguments into a registration form.
    #[must_use]
    pub fn to_form(&self) -> RegistrationForm {
        RegistrationForm::new(
            self.kind.as_str(),
            &self.name,
            &self.category,
            &self.place,
            &self.date,
        )
        .with_contact(&self.contact)
        .with_description(&self.description)
    }
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Matches name, place or description, case-insensitively
    #[arg(default_value = "")]
    pub keyword: String,

    /// Only this category
    #[arg(long, default_value = "")]
    pub category: String,

    /// Lost, found or both (defaults to `search.default_type`)
    #[arg(short = 't', long = "type", value_enum)]
    pub type_filter: Option<TypeArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Statistics command arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Catalog command arguments.
#[derive(Debug, Args)]
pub struct CatalogCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Item kind argument for registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Lost item
    Lost,
    /// Found item
    Found,
}

impl KindArg {
    /// The form value for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lost => "lost",
            Self::Found => "found",
        }
    }
}

impl From<KindArg> for ItemKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Lost => Self::Lost,
            KindArg::Found => Self::Found,
        }
    }
}

/// Type filter argument for searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    /// Lost and found
    All,
    /// Lost only
    Lost,
    /// Found only
    Found,
}

impl From<TypeArg> for TypeFilter {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::All => Self::All,
            TypeArg::Lost => Self::Lost,
            TypeArg::Found => Self::Found,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_arg_conversion() {
        assert_eq!(TypeFilter::from(TypeArg::All), TypeFilter::All);
        assert_eq!(TypeFilter::from(TypeArg::Lost), TypeFilter::Lost);
        assert_eq!(TypeFilter::from(TypeArg::Found), TypeFilter::Found);
    }

    #[test]
    fn test_kind_arg_conversion() {
        assert_eq!(KindArg::Lost.as_str(), "lost");
        assert_eq!(KindArg::Found.as_str(), "found");
        assert_eq!(ItemKind::from(KindArg::Lost), ItemKind::Lost);
        assert_eq!(ItemKind::from(KindArg::Found), ItemKind::Found);
    }

    #[test]
    fn test_register_command_to_form() {
        let cmd = RegisterCommand {
            kind: KindArg::Found,
            name: "Keys".to_string(),
            category: "keys".to_string(),
            place: "library".to_string(),
            date: "2025-09-12".to_string(),
            contact: "front desk".to_string(),
            description: String::new(),
            json: false,
        };
        let form = cmd.to_form();
        assert_eq!(form.kind, "found");
        assert_eq!(form.name, "Keys");
        assert_eq!(form.contact, "front desk");
        assert!(form.description.is_empty());
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_search_command_debug() {
        let cmd = SearchCommand {
            keyword: "wallet".to_string(),
            category: String::new(),
            type_filter: Some(TypeArg::Lost),
            format: OutputFormat::Table,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("wallet"));
        assert!(debug_str.contains("Lost"));
    }
}
