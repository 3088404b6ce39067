//! `lostfound` - A campus lost-and-found registry
//!
//! This library provides the in-memory item registry together with its
//! search engine and statistics aggregator. Presentation (the `lostfound`
//! CLI) sits on top and talks to the core only through the items re-exported
//! here.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod item;
pub mod logging;
pub mod query;
pub mod registry;
pub mod stats;

pub use catalog::{list_categories, list_locations};
pub use config::Config;
pub use error::{Error, Result, ValidationError, ValidationReason};
pub use item::{AnnotatedItem, ItemKind, ItemRecord, RegistrationForm};
pub use logging::init_logging;
pub use query::{search, SearchQuery, SearchResults, TypeFilter};
pub use registry::Registry;
pub use stats::{compute_statistics, CategoryCount, LocationCount, Statistics};
