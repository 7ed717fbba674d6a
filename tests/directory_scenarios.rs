//! Directory Scenario Tests
//!
//! End-to-end behaviour of the engine over small literal snapshots:
//! - Facet options derived from the whole snapshot
//! - Exact facet filters and free-text search
//! - Paging while unfiltered, everything while filtered
//! - Disclosure reset on every criteria change

use exportdir::directory::{DirectoryEngine, FacetExtractor, FilterCriteria, PredicateFilter, Record, ResultSelector};

// =============================================================================
// Helper Functions
// =============================================================================

fn three_records() -> Vec<Record> {
    vec![
        Record::new(1).with_company("Acme").with_sector("Textil"),
        Record::new(2).with_company("Beta").with_sector("Agro"),
        Record::new(3).with_company("Acme").with_sector("Agro"),
    ]
}

fn unfiltered(n: i64) -> Vec<Record> {
    (1..=n)
        .map(|id| Record::new(id).with_company(format!("Empresa {:03}", id)))
        .collect()
}

fn ids(records: &[&Record]) -> Vec<i64> {
    records.iter().map(|r| r.id).collect()
}

// =============================================================================
// Literal Scenarios
// =============================================================================

/// Empty criteria: facets from all records, every record visible in id order.
#[test]
fn test_empty_criteria_shows_everything() {
    let records = three_records();
    let engine = DirectoryEngine::new(&records);

    assert_eq!(engine.facets().companies, vec!["Acme", "Beta"]);
    assert_eq!(engine.facets().sectors, vec!["Agro", "Textil"]);
    assert_eq!(engine.reveal_count(), 10);
    assert_eq!(ids(&engine.visible()), vec![1, 2, 3]);
    assert!(!engine.has_more());
}

/// Company facet selects exact matches, unpaged.
#[test]
fn test_company_filter() {
    let records = three_records();
    let mut engine = DirectoryEngine::new(&records);
    engine.select_company(Some("Acme".to_string()));

    assert_eq!(ids(&engine.results()), vec![1, 3]);
    assert_eq!(ids(&engine.visible()), vec![1, 3]);
    assert!(!engine.has_more());
}

/// Free text searches the company/sector/contact haystack.
#[test]
fn test_text_query() {
    let records = three_records();
    assert_eq!(PredicateFilter::haystack(&records[1]), "beta agro ");
    assert_eq!(PredicateFilter::haystack(&records[2]), "acme agro ");

    let mut engine = DirectoryEngine::new(&records);
    engine.set_query("agro");
    assert_eq!(ids(&engine.visible()), vec![2, 3]);
}

/// 25 unfiltered records page through 10, 20, then all 25.
#[test]
fn test_paging_through_unfiltered_results() {
    let records = unfiltered(25);
    let mut engine = DirectoryEngine::new(&records);

    assert_eq!(engine.visible().len(), 10);
    assert!(engine.has_more());

    engine.show_more();
    assert_eq!(engine.reveal_count(), 20);
    assert_eq!(engine.visible().len(), 20);
    assert!(engine.has_more());

    engine.show_more();
    assert_eq!(engine.reveal_count(), 30);
    assert_eq!(engine.visible().len(), 25);
    assert!(!engine.has_more());
}

/// Selecting a company resets disclosure; clearing it pages again.
#[test]
fn test_filter_resets_and_clearing_reengages_paging() {
    let records = unfiltered(25);
    let mut engine = DirectoryEngine::new(&records);
    engine.show_more();
    engine.show_more();
    assert_eq!(engine.reveal_count(), 30);

    engine.select_company(Some("Empresa 007".to_string()));
    assert_eq!(engine.reveal_count(), 10);
    assert_eq!(ids(&engine.visible()), vec![7]);

    engine.select_company(None);
    assert_eq!(engine.reveal_count(), 10);
    assert_eq!(engine.visible().len(), 10);
    assert!(engine.has_more());
}

// =============================================================================
// Edge Cases
// =============================================================================

/// An empty snapshot is a valid, empty directory.
#[test]
fn test_empty_snapshot() {
    let engine = DirectoryEngine::new(&[]);
    let view = engine.view();

    assert!(view.facets.companies.is_empty());
    assert!(view.facets.sectors.is_empty());
    assert!(view.records.is_empty());
    assert!(view.no_results);
    assert!(!view.has_more);
}

/// Records missing facet fields never match a facet selection.
#[test]
fn test_records_without_facets() {
    let records = vec![
        Record::new(1),
        Record::new(2).with_company("").with_sector("Agro"),
    ];
    let facets = FacetExtractor::extract(&records);
    assert!(facets.companies.is_empty());

    let criteria = FilterCriteria::new().with_company(Some("".to_string()));
    assert_eq!(ResultSelector::select(&records, &criteria).len(), 2);

    let criteria = FilterCriteria::new().with_sector(Some("Agro".to_string()));
    assert_eq!(ids(&ResultSelector::select(&records, &criteria)), vec![2]);
}

/// Clearing everything in one step leaves no partial criteria behind.
#[test]
fn test_clear_all_is_one_step() {
    let records = three_records();
    let mut engine = DirectoryEngine::new(&records);
    engine.set_query("acme");
    engine.select_company(Some("Acme".to_string()));
    engine.select_sector(Some("Agro".to_string()));
    assert_eq!(ids(&engine.visible()), vec![3]);

    engine.clear_all();
    assert_eq!(engine.criteria(), &FilterCriteria::new());
    assert_eq!(ids(&engine.visible()), vec![1, 2, 3]);
}

/// Cards carry the display fallbacks.
#[test]
fn test_view_cards() {
    let mut records = three_records();
    records.push(Record::new(4).with_products("[\"Yerba\", \"Té\"]"));
    records[0].website = Some("acme.com.ar".to_string());

    let engine = DirectoryEngine::new(&records);
    let view = engine.view();

    assert_eq!(view.records[0].website_href.as_deref(), Some("https://acme.com.ar"));
    assert_eq!(view.records[3].title, "Empresa #4");
    assert_eq!(view.records[3].products.items(), &["Yerba", "Té"]);
    assert_eq!(view.total_matches, 4);
}
