//! Registry store for lostfound.
//!
//! The registry owns two append-only collections, one per [`ItemKind`].
//! All access goes through a single [`RwLock`]: registration takes it
//! exclusively so id assignment and append happen as one step, reads share
//! it and never observe a half-finished registration.

pub mod seed;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::catalog;
use crate::error::{Result, ValidationReason};
use crate::item::{ItemKind, ItemRecord, RegistrationForm};

/// The two collections, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collections {
    /// Lost reports.
    pub lost: Vec<ItemRecord>,
    /// Found reports.
    pub found: Vec<ItemRecord>,
}

impl Collections {
    /// The collection holding records of `kind`.
    #[must_use]
    pub fn of(&self, kind: ItemKind) -> &[ItemRecord] {
        match kind {
            ItemKind::Lost => &self.lost,
            ItemKind::Found => &self.found,
        }
    }

    /// Combined record count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lost.len() + self.found.len()
    }

    /// Whether both collections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lost.is_empty() && self.found.is_empty()
    }
}

/// In-memory lost-and-found registry.
///
/// The registry is the only writer of [`ItemRecord`]s. There is no update or
/// delete; ids are `combined count + 1` at registration time, which stays
/// unique because nothing is ever removed.
#[derive(Debug, Default)]
pub struct Registry {
    inner: RwLock<Collections>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new item using the local wall clock for `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] with the first failing check.
    pub fn register(&self, form: &RegistrationForm) -> Result<ItemRecord> {
        self.register_at(form, Local::now().naive_local())
    }

    /// Register a new item with an explicit registration time.
    ///
    /// `at` is truncated to the minute before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] with the first failing check.
    pub fn register_at(&self, form: &RegistrationForm, at: NaiveDateTime) -> Result<ItemRecord> {
        let kind = match validate(form) {
            Ok(kind) => kind,
            Err(reason) => {
                debug!(reason = reason.code(), "Rejected registration");
                return Err(reason.into());
            }
        };

        let mut inner = self.write();
        let id = u64::try_from(inner.len()).unwrap_or(u64::MAX) + 1;
        let record = ItemRecord {
            id,
            name: form.name.trim().to_string(),
            category: form.category.clone(),
            place: form.place.clone(),
            occurred_date: form.date.clone(),
            contact: form.contact.trim().to_string(),
            description: form.description.trim().to_string(),
            created_at: ItemRecord::truncate_to_minute(at),
        };

        match kind {
            ItemKind::Lost => inner.lost.push(record.clone()),
            ItemKind::Found => inner.found.push(record.clone()),
        }
        drop(inner);

        info!(id, %kind, name = %record.name, "Registered item");
        Ok(record)
    }

    /// Number of lost records.
    #[must_use]
    pub fn lost_count(&self) -> usize {
        self.read().lost.len()
    }

    /// Number of found records.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.read().found.len()
    }

    /// Combined number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Owned copy of both collections.
    #[must_use]
    pub fn snapshot(&self) -> Collections {
        self.read().clone()
    }

    /// Run `f` against the collections under the shared lock.
    pub fn with_collections<T>(&self, f: impl FnOnce(&Collections) -> T) -> T {
        f(&*self.read())
    }

    // Records are appended whole, so a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Check a form in the fixed order, returning its kind on success.
fn validate(form: &RegistrationForm) -> std::result::Result<ItemKind, ValidationReason> {
    let required = [
        form.kind.as_str(),
        form.name.trim(),
        form.category.as_str(),
        form.place.as_str(),
        form.date.as_str(),
    ];
    if required.iter().any(|field| field.is_empty()) {
        return Err(ValidationReason::MissingField);
    }

    let kind: ItemKind = form
        .kind
        .parse()
        .map_err(|_| ValidationReason::InvalidStatus)?;

    if !catalog::is_category(&form.category) {
        return Err(ValidationReason::InvalidCategory);
    }
    if !catalog::is_location(&form.place) {
        return Err(ValidationReason::InvalidLocation);
    }

    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> NaiveDateTime {
        ItemRecord::parse_timestamp(text).unwrap()
    }

    fn lost_wallet() -> RegistrationForm {
        RegistrationForm::new("lost", "Black wallet", "wallet", "library", "2025-09-10")
    }

    fn reason_of(registry: &Registry, form: &RegistrationForm) -> ValidationReason {
        registry
            .register(form)
            .unwrap_err()
            .validation_reason()
            .expect("expected a validation error")
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let registry = Registry::new();
        let a = registry.register(&lost_wallet()).unwrap();
        let b = registry
            .register(&RegistrationForm::new("found", "Keys", "keys", "canteen", "2025-09-11"))
            .unwrap();
        let c = registry.register(&lost_wallet()).unwrap();

        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
        assert_eq!(registry.lost_count(), 2);
        assert_eq!(registry.found_count(), 1);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_register_trims_text_fields() {
        let registry = Registry::new();
        let form = RegistrationForm::new("lost", "  Black wallet \n", "wallet", "library", "x")
            .with_contact("  wechat: abc ")
            .with_description("\tleather ");
        let record = registry.register(&form).unwrap();

        assert_eq!(record.name, "Black wallet");
        assert_eq!(record.contact, "wechat: abc");
        assert_eq!(record.description, "leather");
        assert_eq!(record.occurred_date, "x");
    }

    #[test]
    fn test_register_at_truncates_to_minute() {
        let registry = Registry::new();
        let when = NaiveDateTime::parse_from_str("2025-09-10 14:30:42", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        let record = registry.register_at(&lost_wallet(), when).unwrap();
        assert_eq!(record.created_at, at("2025-09-10 14:30"));
    }

    #[test]
    fn test_missing_fields() {
        let registry = Registry::new();
        for field in ["kind", "name", "category", "place", "date"] {
            let mut form = lost_wallet();
            match field {
                "kind" => form.kind.clear(),
                "name" => form.name = "   ".to_string(),
                "category" => form.category.clear(),
                "place" => form.place.clear(),
                _ => form.date.clear(),
            }
            assert_eq!(
                reason_of(&registry, &form),
                ValidationReason::MissingField,
                "field {field}"
            );
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_contact_and_description_are_optional() {
        let registry = Registry::new();
        let record = registry.register(&lost_wallet()).unwrap();
        assert!(record.contact.is_empty());
        assert!(record.description.is_empty());
    }

    #[test]
    fn test_invalid_status() {
        let registry = Registry::new();
        let mut form = lost_wallet();
        form.kind = "stolen".to_string();
        assert_eq!(reason_of(&registry, &form), ValidationReason::InvalidStatus);
    }

    #[test]
    fn test_invalid_category() {
        let registry = Registry::new();
        let mut form = lost_wallet();
        form.category = "umbrella".to_string();
        assert_eq!(reason_of(&registry, &form), ValidationReason::InvalidCategory);
    }

    #[test]
    fn test_invalid_location() {
        let registry = Registry::new();
        let mut form = lost_wallet();
        form.place = "moon".to_string();
        assert_eq!(reason_of(&registry, &form), ValidationReason::InvalidLocation);
    }

    #[test]
    fn test_first_failing_check_wins() {
        let registry = Registry::new();

        // Bad status, category and place: status is checked first.
        let form = RegistrationForm::new("stolen", "Pen", "pens", "moon", "today");
        assert_eq!(reason_of(&registry, &form), ValidationReason::InvalidStatus);

        // Missing date beats everything else.
        let form = RegistrationForm::new("stolen", "Pen", "pens", "moon", "");
        assert_eq!(reason_of(&registry, &form), ValidationReason::MissingField);

        // Bad category and place: category first.
        let form = RegistrationForm::new("found", "Pen", "pens", "moon", "today");
        assert_eq!(reason_of(&registry, &form), ValidationReason::InvalidCategory);
    }

    #[test]
    fn test_rejection_does_not_consume_an_id() {
        let registry = Registry::new();
        let mut bad = lost_wallet();
        bad.place = "moon".to_string();
        assert!(registry.register(&bad).is_err());

        let record = registry.register(&lost_wallet()).unwrap();
        assert_eq!(record.id, 1);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let registry = Registry::new();
        registry.register(&lost_wallet()).unwrap();

        let mut snapshot = registry.snapshot();
        snapshot.lost[0].name = "changed".to_string();
        snapshot.found.clear();

        assert_eq!(registry.snapshot().lost[0].name, "Black wallet");
    }

    #[test]
    fn test_collections_of_kind() {
        let registry = Registry::new();
        registry.register(&lost_wallet()).unwrap();
        let collections = registry.snapshot();
        assert_eq!(collections.of(ItemKind::Lost).len(), 1);
        assert!(collections.of(ItemKind::Found).is_empty());
        assert_eq!(collections.len(), 1);
        assert!(!collections.is_empty());
    }

    #[test]
    fn test_registry_debug() {
        let registry = Registry::new();
        let debug_str = format!("{registry:?}");
        assert!(debug_str.contains("Registry"));
    }
}
