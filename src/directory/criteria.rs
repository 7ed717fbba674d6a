//! Filter criteria
//!
//! Three independent fields: a free-text query and two exact-match facet
//! selections. Every mutation replaces one whole field.

use std::fmt;

use serde::Serialize;

/// Identifies one criteria field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaField {
    Query,
    Company,
    Sector,
}

impl CriteriaField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CriteriaField::Query => "query",
            CriteriaField::Company => "company",
            CriteriaField::Sector => "sector",
        }
    }
}

impl fmt::Display for CriteriaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current filter selection
///
/// Serialize-only: criteria are built through the `with_*` methods so an
/// empty selection always means "all".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterCriteria {
    /// Free-text query as typed
    pub query: String,

    /// Selected company, `None` for all companies
    pub company: Option<String>,

    /// Selected sector, `None` for all sectors
    pub sector: Option<String>,
}

/// An empty selection means "all"
fn selection(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl FilterCriteria {
    /// Creates empty criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the query replaced
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with the company selection replaced
    pub fn with_company(&self, company: Option<String>) -> Self {
        Self {
            company: selection(company),
            ..self.clone()
        }
    }

    /// Returns a copy with the sector selection replaced
    pub fn with_sector(&self, sector: Option<String>) -> Self {
        Self {
            sector: selection(sector),
            ..self.clone()
        }
    }

    /// Trimmed, lower-cased query, `None` when blank
    pub fn normalized_query(&self) -> Option<String> {
        let q = self.query.trim();
        if q.is_empty() {
            None
        } else {
            Some(q.to_lowercase())
        }
    }

    /// True when no criterion is active
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.company.is_none() && self.sector.is_none()
    }

    /// Fields whose values differ between `self` and `other`
    pub fn changed_fields(&self, other: &FilterCriteria) -> Vec<CriteriaField> {
        let mut fields = Vec::new();
        if self.query != other.query {
            fields.push(CriteriaField::Query);
        }
        if self.company != other.company {
            fields.push(CriteriaField::Company);
        }
        if self.sector != other.sector {
            fields.push(CriteriaField::Sector);
        }
        fields
    }
}
