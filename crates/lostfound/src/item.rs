//! Core item types for lostfound.
//!
//! An [`ItemRecord`] is created once by the registry and never changes.
//! Display-oriented copies are [`AnnotatedItem`]s, produced by the query
//! engine.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Rendering format for `created_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Whether an item was lost or found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Reported missing by its owner.
    Lost,
    /// Picked up by someone else.
    Found,
}

impl ItemKind {
    /// Human-readable label for listings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Lost => "Lost item",
            Self::Found => "Found item",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lost => write!(f, "lost"),
            Self::Found => write!(f, "found"),
        }
    }
}

/// Returned when a string is not `lost` or `found`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(
    /// The rejected text.
    pub String,
);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown item kind: {:?}", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for ItemKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lost" => Ok(Self::Lost),
            "found" => Ok(Self::Found),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Raw registration input, exactly as a form would submit it.
///
/// Nothing here is validated; see [`crate::Registry::register`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    /// `lost` or `found`.
    pub kind: String,
    /// Short item name.
    pub name: String,
    /// A catalog category.
    pub category: String,
    /// A catalog location.
    pub place: String,
    /// Date the item was lost or found, caller-defined format.
    pub date: String,
    /// How to reach the reporter.
    pub contact: String,
    /// Free-text description.
    pub description: String,
}

impl RegistrationForm {
    /// Start a form with the required fields set.
    #[must_use]
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        place: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            category: category.into(),
            place: place.into(),
            date: date.into(),
            contact: String::new(),
            description: String::new(),
        }
    }

    /// Set the contact field.
    #[must_use]
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    /// Set the description field.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// One registered lost or found report.
///
/// The kind is not stored here; it is implied by which registry collection
/// holds the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Unique across lost and found, assigned by the registry.
    pub id: u64,
    /// Trimmed, non-empty item name.
    pub name: String,
    /// A catalog category.
    pub category: String,
    /// A catalog location.
    pub place: String,
    /// Caller-supplied date, stored verbatim.
    #[serde(rename = "date")]
    pub occurred_date: String,
    /// May be empty.
    pub contact: String,
    /// May be empty.
    pub description: String,
    /// Registration time, minute precision.
    #[serde(with = "minute_format")]
    pub created_at: NaiveDateTime,
}

impl ItemRecord {
    /// Truncate a timestamp to whole minutes.
    #[must_use]
    pub fn truncate_to_minute(at: NaiveDateTime) -> NaiveDateTime {
        at.with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(at)
    }

    /// Parse a `created_at` value in [`TIMESTAMP_FORMAT`].
    ///
    /// # Errors
    ///
    /// Returns the chrono parse error if the text does not match.
    pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
    }

    /// `created_at` rendered in [`TIMESTAMP_FORMAT`].
    #[must_use]
    pub fn created_at_display(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// A copy of an [`ItemRecord`] tagged with its kind for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedItem {
    /// The copied record.
    #[serde(flatten)]
    pub record: ItemRecord,
    /// Human-readable kind label.
    #[serde(rename = "type")]
    pub type_label: &'static str,
    /// Kind classifier.
    #[serde(rename = "type_class")]
    pub type_class: ItemKind,
}

impl AnnotatedItem {
    /// Copy `record` and tag it with `kind`.
    #[must_use]
    pub fn new(record: &ItemRecord, kind: ItemKind) -> Self {
        Self {
            record: record.clone(),
            type_label: kind.label(),
            type_class: kind,
        }
    }
}

mod minute_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(at: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&at.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
