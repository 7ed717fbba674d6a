//! Presentation output
//!
//! What the presentation side needs to render one state of the directory.

use serde::Serialize;

use super::criteria::FilterCriteria;
use super::facets::FacetOptions;
use super::record::{ProductList, Record};

/// Presentation-ready rendering of one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordCard {
    pub id: i64,

    /// Company name, or `Empresa #<id>` when absent
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,

    /// Website as a link target, scheme added when missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_href: Option<String>,

    #[serde(skip_serializing_if = "ProductList::is_empty")]
    pub products: ProductList,
}

impl RecordCard {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id,
            title: record
                .company()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Empresa #{}", record.id)),
            address: record.address().map(str::to_string),
            phone: record.phone().map(str::to_string),
            email: record.email().map(str::to_string),
            city: record.city().map(str::to_string),
            sector: record.sector().map(str::to_string),
            website_href: record.website().map(website_href),
            products: record.products(),
        }
    }
}

/// Prepends `https://` unless the value already starts with `http`
pub fn website_href(website: &str) -> String {
    if website.starts_with("http") {
        website.to_string()
    } else {
        format!("https://{}", website)
    }
}

/// One rendered state of the directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryView {
    /// Visible records, in snapshot order
    pub records: Vec<RecordCard>,

    /// Facet options for both selectors
    #[serde(flatten)]
    pub facets: FacetOptions,

    /// Current selection, for reflecting state back to the user
    pub criteria: FilterCriteria,

    /// Nothing matched the criteria
    pub no_results: bool,

    /// More records can be revealed
    pub has_more: bool,

    pub reveal_count: usize,

    /// Matches before disclosure slicing
    pub total_matches: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_falls_back_to_id() {
        let card = RecordCard::from_record(&Record::new(42));
        assert_eq!(card.title, "Empresa #42");

        let card = RecordCard::from_record(&Record::new(1).with_company("Acme"));
        assert_eq!(card.title, "Acme");
    }

    #[test]
    fn test_website_href() {
        assert_eq!(website_href("acme.com.ar"), "https://acme.com.ar");
        assert_eq!(website_href("http://acme.com.ar"), "http://acme.com.ar");
        assert_eq!(website_href("https://acme.com.ar"), "https://acme.com.ar");
    }

    #[test]
    fn test_card_serialization_skips_absent_fields() {
        let mut record = Record::new(5).with_company("Acme").with_products("Miel");
        record.phone = Some(String::new());
        record.website = Some("acme.com".into());

        let value = serde_json::to_value(RecordCard::from_record(&record)).unwrap();
        assert_eq!(value["title"], "Acme");
        assert_eq!(value["website_href"], "https://acme.com");
        assert_eq!(value["products"], serde_json::json!(["Miel"]));
        assert!(value.get("phone").is_none());
        assert!(value.get("email").is_none());
    }
}
