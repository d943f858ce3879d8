//! Sorting and pagination value object for review list queries.
//!
//! Not persisted; passed through to repository queries so sorting and
//! windowing happen server-side. The page index is 1-based.

use serde::{Deserialize, Serialize};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Field the result set is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Order by creation date.
    Date,
    /// Order by star rating.
    Rating,
}

/// Direction of the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Sort specification for paginated repository queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sorting {
    pub sort_by: SortBy,
    pub order: SortOrder,
    /// 1-based page index.
    pub page: u32,
    pub page_size: u32,
}

impl Default for Sorting {
    fn default() -> Self {
        Self {
            sort_by: SortBy::Date,
            order: SortOrder::Desc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Sorting {
    /// Zero-based start offset and row count for this page.
    ///
    /// A page of 0 is treated as page 1 so a sloppy caller cannot
    /// underflow the offset.
    pub fn window(&self) -> (usize, usize) {
        let page = self.page.max(1) as usize;
        let size = self.page_size as usize;
        ((page - 1) * size, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_newest_first() {
        let sort = Sorting::default();
        assert_eq!(sort.sort_by, SortBy::Date);
        assert_eq!(sort.order, SortOrder::Desc);
        assert_eq!(sort.page, 1);
        assert_eq!(sort.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn window_is_zero_based() {
        let sort = Sorting {
            page: 3,
            page_size: 10,
            ..Sorting::default()
        };
        assert_eq!(sort.window(), (20, 10));
    }

    #[test]
    fn window_clamps_page_zero() {
        let sort = Sorting {
            page: 0,
            page_size: 10,
            ..Sorting::default()
        };
        assert_eq!(sort.window(), (0, 10));
    }

    #[test]
    fn serde_round_trips_lowercase_tags() {
        let json = r#"{"sortBy":"rating","order":"asc","page":1,"pageSize":20}"#;
        let sort: Sorting = serde_json::from_str(json).unwrap();
        assert_eq!(sort.sort_by, SortBy::Rating);
        assert_eq!(sort.order, SortOrder::Asc);
    }
}
