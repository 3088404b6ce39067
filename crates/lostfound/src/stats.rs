//! Category and location breakdowns of the registry.
//!
//! Category tables are dense: every catalog category appears, zero or not.
//! The location table is sparse: a location appears only when something was
//! lost or found there. Both follow catalog declaration order.

use serde::Serialize;
use tracing::debug;

use crate::catalog;
use crate::item::ItemRecord;
use crate::registry::Registry;

/// Record count for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// The catalog category.
    pub category: &'static str,
    /// Matching records.
    pub count: usize,
}

/// Lost and found counts for one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    /// The catalog location.
    pub location: &'static str,
    /// Lost records at this location.
    pub lost: usize,
    /// Found records at this location.
    pub found: usize,
}

/// Aggregate counts over the whole registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Size of the lost collection.
    pub total_lost: usize,
    /// Size of the found collection.
    pub total_found: usize,
    /// Lost records per category, one entry per catalog category.
    pub per_category_lost: Vec<CategoryCount>,
    /// Found records per category, one entry per catalog category.
    pub per_category_found: Vec<CategoryCount>,
    /// Locations with at least one record.
    pub per_location: Vec<LocationCount>,
}

impl Statistics {
    /// Lost count for `category`, or `None` if it is not in the catalog.
    #[must_use]
    pub fn lost_in(&self, category: &str) -> Option<usize> {
        lookup(&self.per_category_lost, category)
    }

    /// Found count for `category`, or `None` if it is not in the catalog.
    #[must_use]
    pub fn found_in(&self, category: &str) -> Option<usize> {
        lookup(&self.per_category_found, category)
    }

    /// Counts for `location`, or `None` if nothing was reported there.
    #[must_use]
    pub fn location(&self, location: &str) -> Option<LocationCount> {
        self.per_location
            .iter()
            .find(|entry| entry.location == location)
            .copied()
    }
}

fn lookup(table: &[CategoryCount], category: &str) -> Option<usize> {
    table
        .iter()
        .find(|entry| entry.category == category)
        .map(|entry| entry.count)
}

/// Compute [`Statistics`] for the current registry contents.
#[must_use]
pub fn compute_statistics(registry: &Registry) -> Statistics {
    let stats = registry.with_collections(|collections| {
        let per_location = catalog::list_locations()
            .iter()
            .map(|&location| LocationCount {
                location,
                lost: count_where(&collections.lost, |r| r.place == location),
                found: count_where(&collections.found, |r| r.place == location),
            })
            .filter(|entry| entry.lost > 0 || entry.found > 0)
            .collect();

        Statistics {
            total_lost: collections.lost.len(),
            total_found: collections.found.len(),
            per_category_lost: per_category(&collections.lost),
            per_category_found: per_category(&collections.found),
            per_location,
        }
    });

    debug!(
        total_lost = stats.total_lost,
        total_found = stats.total_found,
        locations = stats.per_location.len(),
        "Computed statistics"
    );
    stats
}

fn per_category(records: &[ItemRecord]) -> Vec<CategoryCount> {
    catalog::list_categories()
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: count_where(records, |r| r.category == category),
        })
        .collect()
}

fn count_where(records: &[ItemRecord], pred: impl Fn(&ItemRecord) -> bool) -> usize {
    records.iter().filter(|r| pred(r)).count()
}
