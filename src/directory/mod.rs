//! Directory filtering engine
//!
//! Works over an immutable, fully loaded record snapshot:
//!
//! 1. Extract facet options from the whole snapshot (once per snapshot)
//! 2. Evaluate criteria per record (AND of active criteria)
//! 3. Select matching records in snapshot order
//! 4. Apply disclosure: page when unfiltered, show all when filtered
//!
//! Nothing here performs I/O or fails. Loading the snapshot belongs to
//! [`crate::source`].

mod criteria;
mod disclosure;
mod engine;
mod facets;
mod filters;
mod record;
mod selector;
mod view;

pub use criteria::{CriteriaField, FilterCriteria};
pub use disclosure::{DisclosureController, PAGE_SIZE};
pub use engine::{Action, DirectoryEngine};
pub use facets::{FacetExtractor, FacetOptions};
pub use filters::PredicateFilter;
pub use record::{ProductList, Record};
pub use selector::ResultSelector;
pub use view::{website_href, DirectoryView, RecordCard};
