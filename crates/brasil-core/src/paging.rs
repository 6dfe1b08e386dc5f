//! Page and page-size normalization shared by the paginated adapters

use serde::Serialize;

/// First page number accepted by every upstream
pub const FIRST_PAGE: u32 = 1;

/// Allowed page-size window for one upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeRange {
    /// Smallest page size the upstream accepts
    pub min: u32,
    /// Largest page size the upstream accepts
    pub max: u32,
    /// Page size used when the caller does not ask for one
    pub default: u32,
}

impl PageSizeRange {
    pub const fn new(min: u32, max: u32, default: u32) -> Self {
        Self { min, max, default }
    }

    /// Effective page size for a caller-supplied value
    ///
    /// Values below `min` become `min`, values above `max` become `max`,
    /// anything in between passes through unchanged.
    pub fn resolve(&self, requested: Option<i64>) -> u32 {
        let Some(requested) = requested else {
            return self.default;
        };

        let clamped = requested.clamp(i64::from(self.min), i64::from(self.max));
        u32::try_from(clamped).unwrap_or(self.max)
    }
}

/// Effective page number: absent or anything below 1 becomes 1
pub fn resolve_page(requested: Option<i64>) -> u32 {
    requested.map_or(FIRST_PAGE, |page| {
        u32::try_from(page.clamp(i64::from(FIRST_PAGE), i64::from(u32::MAX))).unwrap_or(u32::MAX)
    })
}

/// Normalized page request echoed back in envelopes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Paging {
    pub page: u32,
    pub page_size: u32,
}

impl Paging {
    /// Resolve both page and page size against a source's range
    pub fn resolve(page: Option<i64>, page_size: Option<i64>, range: PageSizeRange) -> Self {
        Self {
            page: resolve_page(page),
            page_size: range.resolve(page_size),
        }
    }
}
