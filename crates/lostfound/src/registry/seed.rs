//! Seed data for a fresh registry.
//!
//! Both the built-in sample records and seed files go through
//! [`Registry::register_at`], so seeded records get ids and validation
//! exactly like live registrations.

use std::path::Path;

use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use tracing::{debug, info};

use super::Registry;
use crate::error::{Error, Result};
use crate::item::{ItemRecord, RegistrationForm};

/// One entry of a JSON seed file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedRecord {
    /// The registration fields.
    #[serde(flatten)]
    pub form: RegistrationForm,
    /// Registration time in `%Y-%m-%d %H:%M`; defaults to now.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The reference sample records with their original registration times.
#[must_use]
pub fn sample_forms() -> Vec<(RegistrationForm, &'static str)> {
    vec![
        (
            RegistrationForm::new("lost", "黑色钱包", "wallet", "library", "2025-09-10")
                .with_contact("微信: student123")
                .with_description("黑色真皮钱包，内有学生卡和少量现金"),
            "2025-09-10 14:30",
        ),
        (
            RegistrationForm::new("lost", "iPhone 13", "electronics", "canteen", "2025-09-11")
                .with_contact("电话: 138****5678")
                .with_description("蓝色iPhone 13，有保护壳"),
            "2025-09-11 12:15",
        ),
        (
            RegistrationForm::new("found", "一串钥匙", "keys", "teaching-building", "2025-09-12")
                .with_contact("宿管处")
                .with_description("蓝色钥匙扣，约5把钥匙"),
            "2025-09-12 09:20",
        ),
    ]
}

impl Registry {
    /// Create a registry holding the sample records (two lost, one found).
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in samples fail validation.
    pub fn with_sample_data() -> Result<Self> {
        let registry = Self::new();
        seed_samples(&registry)?;
        Ok(registry)
    }
}

/// Register the sample records into `registry`.
///
/// # Errors
///
/// Returns an error only if the built-in samples fail validation.
pub fn seed_samples(registry: &Registry) -> Result<usize> {
    let samples = sample_forms();
    let count = samples.len();
    for (form, created_at) in samples {
        let at = parse_created_at(created_at)
            .ok_or_else(|| Error::internal(format!("bad sample timestamp: {created_at}")))?;
        registry.register_at(&form, at)?;
    }
    debug!(count, "Seeded sample records");
    Ok(count)
}

/// Register every record of a JSON seed file into `registry`.
///
/// Records are registered in file order. Loading stops at the first record
/// that fails validation; records before it stay registered.
///
/// # Errors
///
/// Returns [`Error::SeedFile`] if the file cannot be read or parsed, and
/// [`Error::Validation`] for the first invalid record.
pub fn load_seed_file(registry: &Registry, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| Error::seed_file(path, e.to_string()))?;
    let records: Vec<SeedRecord> =
        serde_json::from_str(&text).map_err(|e| Error::seed_file(path, e.to_string()))?;

    for record in &records {
        let at = match record.created_at.as_deref() {
            Some(text) => parse_created_at(text).ok_or_else(|| {
                Error::seed_file(path, format!("invalid created_at: {text:?}"))
            })?,
            None => Local::now().naive_local(),
        };
        registry.register_at(&record.form, at)?;
    }

    info!(
        count = records.len(),
        path = %path.display(),
        "Loaded seed file"
    );
    Ok(records.len())
}

fn parse_created_at(text: &str) -> Option<NaiveDateTime> {
    ItemRecord::parse_timestamp(text).ok()
}
