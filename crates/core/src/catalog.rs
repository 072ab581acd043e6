//! Catalog filter, sort, and pagination helpers.
//!
//! These live in `core` (zero internal deps) so the repository layer and
//! the API handlers share one definition of the category enumeration and
//! the pagination math.

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// The fixed product category enumeration.
pub const CATEGORIES: &[&str] = &["iphone", "macbook", "airpods", "watch", "ipad"];

/// Pseudo-category accepted by the list filter meaning "no filter".
pub const CATEGORY_ALL: &str = "all";

/// Check whether a category value is part of the enumeration.
pub fn is_valid_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Sort modes for product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first (`created_at DESC`). The default.
    #[default]
    Newest,
    /// Price ascending (`?sort=low`).
    PriceLow,
    /// Price descending (`?sort=high`).
    PriceHigh,
}

impl SortKey {
    /// Parse the `sort` query parameter; anything unrecognized falls back
    /// to the default ordering.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("low") => SortKey::PriceLow,
            Some("high") => SortKey::PriceHigh,
            _ => SortKey::Newest,
        }
    }

    /// The `ORDER BY` clause fragment for this sort mode.
    pub fn order_by_sql(self) -> &'static str {
        match self {
            SortKey::Newest => "created_at DESC",
            SortKey::PriceLow => "price ASC",
            SortKey::PriceHigh => "price DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Default page size for product listing.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Maximum page size for product listing.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a 1-based page number; pages below 1 snap to the first page.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a page size into `[1, MAX_PAGE_LIMIT]`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT)
}

/// Zero-based row offset for a 1-based page.
pub fn page_offset(page: i64, limit: i64) -> i64 {
    (page - 1) * limit
}

/// Total number of pages: `ceil(total / limit)`.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total == 0 {
        0
    } else {
        (total + limit - 1) / limit
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_known_categories_validate() {
        for c in CATEGORIES {
            assert!(is_valid_category(c));
        }
    }

    #[test]
    fn unknown_category_rejected() {
        assert!(!is_valid_category("toaster"));
        assert!(!is_valid_category(""));
        // "all" is a filter value, not a storable category.
        assert!(!is_valid_category(CATEGORY_ALL));
    }

    #[test]
    fn sort_key_parses_query_values() {
        assert_eq!(SortKey::from_query(Some("low")), SortKey::PriceLow);
        assert_eq!(SortKey::from_query(Some("high")), SortKey::PriceHigh);
        assert_eq!(SortKey::from_query(Some("nonsense")), SortKey::Newest);
        assert_eq!(SortKey::from_query(None), SortKey::Newest);
    }

    #[test]
    fn page_clamps_to_one() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-3)), 1);
        assert_eq!(clamp_page(Some(4)), 4);
    }

    #[test]
    fn limit_clamps_into_bounds() {
        assert_eq!(clamp_limit(None), DEFAULT_PAGE_LIMIT);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(1000)), MAX_PAGE_LIMIT);
        assert_eq!(clamp_limit(Some(2)), 2);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(page_offset(1, 20), 0);
        assert_eq!(page_offset(3, 20), 40);
    }

    #[test]
    fn pages_round_up() {
        // 5 matching products, 2 per page -> 3 pages.
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(4, 2), 2);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(0, 20), 0);
    }
}
