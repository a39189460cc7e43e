//! Per-entity repositories over the shared pool.

pub mod lead_repo;
pub mod project_repo;

pub use lead_repo::LeadRepo;
pub use project_repo::ProjectRepo;

/// Default page size for paginated listings.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Upper bound on requested page sizes.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a 1-based page number to at least 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a page size to `1..=MAX_PAGE_LIMIT`, defaulting to
/// [`DEFAULT_PAGE_LIMIT`].
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_PAGE_LIMIT)
        .clamp(1, MAX_PAGE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_clamps_to_one() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-3)), 1);
        assert_eq!(clamp_page(Some(7)), 7);
    }

    #[test]
    fn limit_clamps_to_range() {
        assert_eq!(clamp_limit(None), DEFAULT_PAGE_LIMIT);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(1000)), MAX_PAGE_LIMIT);
        assert_eq!(clamp_limit(Some(25)), 25);
    }
}
