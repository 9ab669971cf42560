use crate::domain::product::gateway::PageRequest;
use crate::domain::product::value_objects::{CategoryFilter, PageSize};

/// Search text shorter than this (once trimmed) falls back to paged listing.
pub const MIN_SEARCH_LENGTH: usize = 2;

/// Upper bound assumed when the first page comes back full and the service gives no count.
pub const ESTIMATED_TOTAL: usize = 50;

/// Combined search, filter and paging parameters driving the product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search_text: String,
    pub category: CategoryFilter,
    pub page: u32,
    pub page_size: PageSize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: CategoryFilter::All,
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl ListQuery {
    /// Trimmed search text when it is long enough to switch to search mode.
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search_text.trim();
        (term.chars().count() >= MIN_SEARCH_LENGTH).then_some(term)
    }

    pub fn is_search_active(&self) -> bool {
        self.search_term().is_some()
    }

    /// Saturates instead of wrapping for pages past the addressable range.
    pub fn offset(&self) -> u32 {
        (self.page.max(1) - 1).saturating_mul(self.page_size.value())
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            offset: self.offset(),
            limit: self.page_size.value(),
            category_id: self.category.as_param().map(str::to_string),
        }
    }
}

/// What is known about the size of the unfiltered listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TotalCount {
    #[default]
    Unknown,
    Exact(usize),
    /// Placeholder upper bound, not a server-provided count.
    Estimated(usize),
}

impl TotalCount {
    pub fn value(self) -> Option<usize> {
        match self {
            TotalCount::Unknown => None,
            TotalCount::Exact(n) | TotalCount::Estimated(n) => Some(n),
        }
    }

    /// Number of pages, never less than one.
    pub fn page_count(self, page_size: PageSize) -> u32 {
        match self.value() {
            Some(total) if total > 0 => {
                let size = page_size.value() as usize;
                total.div_ceil(size).max(1) as u32
            }
            _ => 1,
        }
    }
}

/// Infers the total from one paged response.
///
/// A short or empty first page gives the exact count; a full first page only tells
/// that more may exist, so the placeholder is used. Later pages say nothing new.
pub fn infer_total(request: &PageRequest, returned: usize) -> Option<TotalCount> {
    if request.offset != 0 {
        return None;
    }
    if returned < request.limit as usize {
        Some(TotalCount::Exact(returned))
    } else {
        Some(TotalCount::Estimated(ESTIMATED_TOTAL))
    }
}
