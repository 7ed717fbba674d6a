//! Incremental disclosure of results
//!
//! Paging applies only while the criteria are empty. With any criterion
//! active the whole result set is visible and the reveal count is ignored.
//! Which of the two modes applies is derived from the criteria on every
//! call, never stored.

use super::criteria::FilterCriteria;

/// Records revealed per page
pub const PAGE_SIZE: usize = 10;

/// Tracks how many unfiltered results are revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclosureController {
    reveal_count: usize,
}

impl Default for DisclosureController {
    fn default() -> Self {
        Self::new()
    }
}

impl DisclosureController {
    /// Starts with one page revealed
    pub fn new() -> Self {
        Self {
            reveal_count: PAGE_SIZE,
        }
    }

    /// Back to one page
    pub fn reset(&mut self) {
        self.reveal_count = PAGE_SIZE;
    }

    /// Reveals one more page. Callers clamp against the result length.
    pub fn show_more(&mut self) {
        self.reveal_count = self.reveal_count.saturating_add(PAGE_SIZE);
    }

    pub fn reveal_count(&self) -> usize {
        self.reveal_count
    }

    /// Slice of `results` that should be shown
    pub fn visible<'r, T>(results: &'r [T], criteria: &FilterCriteria, reveal_count: usize) -> &'r [T] {
        if criteria.is_empty() {
            &results[..reveal_count.min(results.len())]
        } else {
            results
        }
    }

    /// True only while paging and more results remain hidden
    pub fn has_more<T>(results: &[T], criteria: &FilterCriteria, reveal_count: usize) -> bool {
        criteria.is_empty() && results.len() > reveal_count
    }
}
