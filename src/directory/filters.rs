//! Predicate evaluation for directory records
//!
//! Facet criteria are exact matches, no trimming or case folding.
//! Free text is a lower-cased substring search over company, sector and
//! contact only.

use super::criteria::FilterCriteria;
use super::record::Record;

/// Evaluates criteria against records
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a record satisfies every active criterion (AND semantics)
    pub fn matches(record: &Record, criteria: &FilterCriteria) -> bool {
        if !Self::facet_matches(record.company(), criteria.company.as_deref()) {
            return false;
        }
        if !Self::facet_matches(record.sector(), criteria.sector.as_deref()) {
            return false;
        }
        match criteria.normalized_query() {
            Some(query) => Self::haystack(record).contains(&query),
            None => true,
        }
    }

    /// Exact facet match; an unset selection matches everything
    fn facet_matches(actual: Option<&str>, selected: Option<&str>) -> bool {
        match selected {
            None => true,
            Some(expected) => actual == Some(expected),
        }
    }

    /// Lower-cased `"{company} {sector} {contact}"`.
    ///
    /// Email, phone, address, city, website and products are not searched.
    pub fn haystack(record: &Record) -> String {
        format!(
            "{} {} {}",
            record.company().unwrap_or(""),
            record.sector().unwrap_or(""),
            record.contact().unwrap_or("")
        )
        .to_lowercase()
    }
}
