//! Directory engine
//!
//! Owns the filter criteria and disclosure state for one view and borrows
//! the record snapshot. Every user operation replaces criteria as a whole
//! value; when the value changes, disclosure resets to one page. Derived
//! output is recomputed explicitly through [`DirectoryEngine::view`].

use serde::Deserialize;

use super::criteria::{CriteriaField, FilterCriteria};
use super::disclosure::DisclosureController;
use super::facets::{FacetExtractor, FacetOptions};
use super::record::Record;
use super::selector::ResultSelector;
use super::view::{DirectoryView, RecordCard};
use crate::observability::{log_event_with_fields, Event};

/// A user-triggered operation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Replace the free-text query
    SetQuery {
        #[serde(default)]
        value: String,
    },
    /// Select a company, `None` or `""` for all
    SelectCompany {
        #[serde(default)]
        value: Option<String>,
    },
    /// Select a sector, `None` or `""` for all
    SelectSector {
        #[serde(default)]
        value: Option<String>,
    },
    /// Clear all criteria at once
    ClearAll,
    /// Reveal the next page
    ShowMore,
}

/// Filter, facet and disclosure state over one snapshot
#[derive(Debug, Clone)]
pub struct DirectoryEngine<'a> {
    snapshot: &'a [Record],
    facets: FacetOptions,
    criteria: FilterCriteria,
    disclosure: DisclosureController,
}

impl<'a> DirectoryEngine<'a> {
    /// Creates an engine with empty criteria and one page revealed.
    ///
    /// Facets are extracted here, once, since the snapshot never changes.
    pub fn new(snapshot: &'a [Record]) -> Self {
        Self {
            snapshot,
            facets: FacetExtractor::extract(snapshot),
            criteria: FilterCriteria::new(),
            disclosure: DisclosureController::new(),
        }
    }

    pub fn snapshot(&self) -> &'a [Record] {
        self.snapshot
    }

    pub fn facets(&self) -> &FacetOptions {
        &self.facets
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn reveal_count(&self) -> usize {
        self.disclosure.reveal_count()
    }

    /// Replaces the free-text query
    pub fn set_query(&mut self, query: impl Into<String>) {
        let next = self.criteria.with_query(query);
        self.replace_criteria(next);
    }

    /// Selects a company; `None` or an empty string selects all
    pub fn select_company(&mut self, company: Option<String>) {
        let next = self.criteria.with_company(company);
        self.replace_criteria(next);
    }

    /// Selects a sector; `None` or an empty string selects all
    pub fn select_sector(&mut self, sector: Option<String>) {
        let next = self.criteria.with_sector(sector);
        self.replace_criteria(next);
    }

    /// Clears every criterion in a single replacement
    pub fn clear_all(&mut self) {
        if self.replace_criteria(FilterCriteria::new()) {
            log_event_with_fields(Event::FiltersCleared, &[]);
        }
    }

    /// Reveals one more page
    pub fn show_more(&mut self) {
        self.disclosure.show_more();
        let count = self.disclosure.reveal_count().to_string();
        log_event_with_fields(Event::DisclosureExpanded, &[("reveal_count", &count)]);
    }

    /// Dispatches one action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetQuery { value } => self.set_query(value),
            Action::SelectCompany { value } => self.select_company(value),
            Action::SelectSector { value } => self.select_sector(value),
            Action::ClearAll => self.clear_all(),
            Action::ShowMore => self.show_more(),
        }
    }

    /// Swaps in new criteria, resetting disclosure when anything changed.
    ///
    /// Returns whether the criteria changed.
    fn replace_criteria(&mut self, next: FilterCriteria) -> bool {
        let changed = self.criteria.changed_fields(&next);
        if changed.is_empty() {
            return false;
        }

        self.criteria = next;
        self.disclosure.reset();

        let fields = changed
            .iter()
            .map(CriteriaField::as_str)
            .collect::<Vec<_>>()
            .join(",");
        log_event_with_fields(Event::CriteriaChanged, &[("fields", &fields)]);
        log_event_with_fields(Event::DisclosureReset, &[]);
        true
    }

    /// All records matching the current criteria, in snapshot order
    pub fn results(&self) -> Vec<&'a Record> {
        ResultSelector::select(self.snapshot, &self.criteria)
    }

    /// Records to show under the current disclosure state
    pub fn visible(&self) -> Vec<&'a Record> {
        let results = self.results();
        DisclosureController::visible(&results, &self.criteria, self.reveal_count()).to_vec()
    }

    pub fn has_more(&self) -> bool {
        DisclosureController::has_more(&self.results(), &self.criteria, self.reveal_count())
    }

    pub fn no_results(&self) -> bool {
        self.results().is_empty()
    }

    /// Renders the current state
    pub fn view(&self) -> DirectoryView {
        let results = self.results();
        let reveal_count = self.reveal_count();
        let visible = DisclosureController::visible(&results, &self.criteria, reveal_count);

        DirectoryView {
            records: visible.iter().map(|r| RecordCard::from_record(r)).collect(),
            facets: self.facets.clone(),
            criteria: self.criteria.clone(),
            no_results: results.is_empty(),
            has_more: DisclosureController::has_more(&results, &self.criteria, reveal_count),
            reveal_count,
            total_matches: results.len(),
        }
    }
}
