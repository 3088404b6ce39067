//! Fixed catalogs of item categories and campus locations.
//!
//! Declaration order matters: the statistics tables iterate in this order.

/// Valid item categories.
pub const CATEGORIES: &[&str] = &["wallet", "keys", "book", "electronics", "other"];

/// Valid campus locations.
pub const LOCATIONS: &[&str] = &[
    "library",
    "canteen",
    "teaching-building",
    "dormitory",
    "gymnasium",
    "laboratory-building",
    "administration-building",
    "playground",
    "campus-gate",
    "parking-lot",
];

/// All categories in declaration order.
#[must_use]
pub fn list_categories() -> &'static [&'static str] {
    CATEGORIES
}

/// All locations in declaration order.
#[must_use]
pub fn list_locations() -> &'static [&'static str] {
    LOCATIONS
}

/// Exact, case-sensitive category membership.
#[must_use]
pub fn is_category(value: &str) -> bool {
    CATEGORIES.contains(&value)
}

/// Exact, case-sensitive location membership.
#[must_use]
pub fn is_location(value: &str) -> bool {
    LOCATIONS.contains(&value)
}
