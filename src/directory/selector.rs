//! Result selection

use super::criteria::FilterCriteria;
use super::filters::PredicateFilter;
use super::record::Record;

/// Applies criteria across a snapshot
pub struct ResultSelector;

impl ResultSelector {
    /// Returns matching records in snapshot order. No relevance sorting.
    pub fn select<'a>(snapshot: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
        snapshot
            .iter()
            .filter(|record| PredicateFilter::matches(record, criteria))
            .collect()
    }
}
