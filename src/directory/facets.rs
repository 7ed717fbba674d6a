//! Facet option extraction
//!
//! Derives the selectable company and sector values from the full snapshot,
//! independent of the current criteria.

use std::collections::BTreeSet;

use serde::Serialize;

use super::record::Record;

/// Distinct, ascending facet values
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FacetOptions {
    pub companies: Vec<String>,
    pub sectors: Vec<String>,
}

impl FacetOptions {
    /// True when the snapshot offered no facet values at all
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty() && self.sectors.is_empty()
    }
}

/// Extracts facet options from a snapshot
pub struct FacetExtractor;

impl FacetExtractor {
    /// Collects, deduplicates and sorts both facet fields.
    ///
    /// Ordering is byte-wise on UTF-8, independent of locale.
    pub fn extract(snapshot: &[Record]) -> FacetOptions {
        let mut companies = BTreeSet::new();
        let mut sectors = BTreeSet::new();

        for record in snapshot {
            if let Some(company) = record.company() {
                companies.insert(company);
            }
            if let Some(sector) = record.sector() {
                sectors.insert(sector);
            }
        }

        FacetOptions {
            companies: companies.into_iter().map(str::to_string).collect(),
            sectors: sectors.into_iter().map(str::to_string).collect(),
        }
    }
}
