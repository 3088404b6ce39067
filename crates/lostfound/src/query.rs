//! Keyword, category and kind filtering over the registry.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::item::{AnnotatedItem, ItemKind};
use crate::registry::Registry;

/// Which collections a search draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// Lost and found.
    #[default]
    All,
    /// Lost only.
    Lost,
    /// Found only.
    Found,
    /// An unrecognized filter value; selects nothing.
    Unmatched,
}

impl TypeFilter {
    /// Map a request parameter to a filter.
    ///
    /// Only `all`, `lost` and `found` are recognized; anything else becomes
    /// [`TypeFilter::Unmatched`] rather than an error.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value {
            "all" => Self::All,
            "lost" => Self::Lost,
            "found" => Self::Found,
            _ => Self::Unmatched,
        }
    }

    /// Whether records of `kind` are candidates under this filter.
    #[must_use]
    pub fn includes(self, kind: ItemKind) -> bool {
        matches!(
            (self, kind),
            (Self::All, _) | (Self::Lost, ItemKind::Lost) | (Self::Found, ItemKind::Found)
        )
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Lost => write!(f, "lost"),
            Self::Found => write!(f, "found"),
            Self::Unmatched => write!(f, "unmatched"),
        }
    }
}

/// Search parameters. Empty `keyword` and `category` do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Case-insensitive substring of name, place or description.
    pub keyword: String,
    /// Exact category, or empty for any.
    pub category: String,
    /// Which collections to search.
    pub type_filter: TypeFilter,
}

impl SearchQuery {
    /// A query matching every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keyword.
    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Set the category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the type filter.
    #[must_use]
    pub fn type_filter(mut self, type_filter: TypeFilter) -> Self {
        self.type_filter = type_filter;
        self
    }
}

/// Matching records, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    /// The matches.
    pub items: Vec<AnnotatedItem>,
    /// `items.len()`.
    pub total_count: usize,
}

impl SearchResults {
    fn new(items: Vec<AnnotatedItem>) -> Self {
        let total_count = items.len();
        Self { items, total_count }
    }

    /// Whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids of the matches, in result order.
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        self.items.iter().map(|item| item.record.id).collect()
    }
}

/// Run `query` against `registry`.
///
/// Candidates are every lost record then every found record, in insertion
/// order. After filtering they are stably sorted by `created_at`, newest
/// first, so that candidate order breaks ties. Stored records are copied,
/// never borrowed or modified.
#[must_use]
pub fn search(registry: &Registry, query: &SearchQuery) -> SearchResults {
    let keyword = query.keyword.to_lowercase();

    let mut items: Vec<AnnotatedItem> = registry.with_collections(|collections| {
        [ItemKind::Lost, ItemKind::Found]
            .into_iter()
            .filter(|kind| query.type_filter.includes(*kind))
            .flat_map(move |kind| {
                collections
                    .of(kind)
                    .iter()
                    .map(move |record| AnnotatedItem::new(record, kind))
            })
            .filter(|item| keyword.is_empty() || matches_keyword(item, &keyword))
            .filter(|item| query.category.is_empty() || item.record.category == query.category)
            .collect()
    });

    items.sort_by(|a, b| b.record.created_at.cmp(&a.record.created_at));

    debug!(
        keyword = %query.keyword,
        category = %query.category,
        type_filter = %query.type_filter,
        matches = items.len(),
        "Search completed"
    );
    SearchResults::new(items)
}

/// `keyword` must already be lowercase.
fn matches_keyword(item: &AnnotatedItem, keyword: &str) -> bool {
    let record = &item.record;
    [&record.name, &record.place, &record.description]
        .into_iter()
        .any(|field| field.to_lowercase().contains(keyword))
}
