//! Pagination, sorting and filter types for ticket listings

use crate::core::{TicketStatus, UserId};
use serde::{Deserialize, Serialize};

/// Field a ticket listing can be sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Priority,
    Status,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Optional equality filters for a ticket listing
///
/// A listing is always scoped to one organization; these filters narrow it
/// further. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub assigned_to: Option<UserId>,
}

/// A page request: zero-based page index, page size and sort order
///
/// Every field is optional in serialized form and falls back to its
/// default, so an empty query document is a valid page request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    pub sort_by: TicketSortField,
    pub direction: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort_by: TicketSortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl PageRequest {
    /// Page request with the default size and sort
    #[must_use]
    pub fn of(page: usize, size: usize) -> Self {
        Self {
            page,
            size,
            ..Self::default()
        }
    }

    /// Replaces the sort order
    #[must_use]
    pub const fn sorted_by(mut self, field: TicketSortField, direction: SortDirection) -> Self {
        self.sort_by = field;
        self.direction = direction;
        self
    }

    /// Offset of the first item on this page
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page * self.size
    }
}

/// One page of results plus totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total: usize,
}

impl<T> Page<T> {
    /// Total number of pages at this page size
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        if self.size == 0 {
            0
        } else {
            self.total.div_ceil(self.size)
        }
    }

    /// Maps the items of this page fallibly, keeping the paging metadata
    ///
    /// The first `Err` from the mapping aborts and is returned as-is.
    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(T) -> Result<U, E>,
    ) -> Result<Page<U>, E> {
        let mut items = Vec::with_capacity(self.items.len());
        for item in self.items {
            items.push(f(item)?);
        }
        Ok(Page {
            items,
            page: self.page,
            size: self.size,
            total: self.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_offset() {
        assert_eq!(PageRequest::of(0, 10).offset(), 0);
        assert_eq!(PageRequest::of(3, 25).offset(), 75);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page = Page::<u32> {
            items: vec![],
            page: 0,
            size: 10,
            total: 21,
        };
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn test_page_try_map_keeps_metadata() {
        let page = Page {
            items: vec![1, 2, 3],
            page: 1,
            size: 3,
            total: 7,
        };
        let mapped: Page<i32> = page.try_map(|n| Ok::<_, ()>(n * 2)).unwrap();
        assert_eq!(mapped.items, vec![2, 4, 6]);
        assert_eq!(mapped.page, 1);
        assert_eq!(mapped.total, 7);
    }

    #[test]
    fn test_page_try_map_propagates_errors() {
        let page = Page {
            items: vec![1, 2, 3],
            page: 0,
            size: 3,
            total: 3,
        };
        let result: Result<Page<i32>, &str> =
            page.try_map(|n| if n == 2 { Err("boom") } else { Ok(n) });
        assert_eq!(result.unwrap_err(), "boom");
    }

    #[test]
    fn test_page_request_deserializes_from_empty_document() {
        let request: PageRequest = serde_json::from_str("{}").expect("Failed to parse");
        assert_eq!(request, PageRequest::default());

        let partial: PageRequest =
            serde_json::from_str(r#"{"page": 2}"#).expect("Failed to parse");
        assert_eq!(partial.page, 2);
        assert_eq!(partial.size, 10);
    }
}
