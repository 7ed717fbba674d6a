//! Directory records
//!
//! A record is one row of the export directory. Known columns map to typed
//! fields; anything else lands in `extra` and is never consulted by filters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::observability::{log_event_with_fields, Event};

/// One directory entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    /// Unique, stable identifier
    pub id: i64,

    /// Company name
    #[serde(rename = "empresa", default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Contact person
    #[serde(rename = "contacto", default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "telefono", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Postal address
    #[serde(rename = "direccion", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(rename = "ciudad", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Website, with or without scheme
    #[serde(rename = "web", default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Sector / category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,

    /// Encoded product list (array-like string or plain string)
    #[serde(rename = "pa", default, skip_serializing_if = "Option::is_none")]
    pub products: Option<String>,

    /// Columns with no typed counterpart
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Treats empty strings as absent
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Record {
    /// Creates a record with only an identifier
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Sets the company name
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Sets the sector
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Sets the contact name
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// Sets the raw product list
    pub fn with_products(mut self, products: impl Into<String>) -> Self {
        self.products = Some(products.into());
        self
    }

    pub fn company(&self) -> Option<&str> {
        present(&self.company)
    }

    pub fn sector(&self) -> Option<&str> {
        present(&self.sector)
    }

    pub fn contact(&self) -> Option<&str> {
        present(&self.contact)
    }

    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }

    pub fn phone(&self) -> Option<&str> {
        present(&self.phone)
    }

    pub fn address(&self) -> Option<&str> {
        present(&self.address)
    }

    pub fn city(&self) -> Option<&str> {
        present(&self.city)
    }

    pub fn website(&self) -> Option<&str> {
        present(&self.website)
    }

    /// Decodes the product list, never failing
    pub fn products(&self) -> ProductList {
        match self.products.as_deref() {
            Some(raw) => ProductList::decode(raw),
            None => ProductList::default(),
        }
    }
}

/// Decoded product list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ProductList(Vec<String>);

impl ProductList {
    /// Decodes an array-or-scalar encoded product list.
    ///
    /// Values that look like a JSON array are parsed as one; anything else,
    /// including an array that fails to parse, becomes a single item holding
    /// the raw text. Blank input decodes to an empty list.
    pub fn decode(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        if trimmed.starts_with('[') {
            match serde_json::from_str::<Vec<Value>>(trimmed) {
                Ok(items) => return Self(items.iter().filter_map(Self::item_text).collect()),
                Err(e) => {
                    let reason = e.to_string();
                    log_event_with_fields(
                        Event::ProductListFallback,
                        &[("raw", trimmed), ("reason", reason.as_str())],
                    );
                }
            }
        }

        Self(vec![trimmed.to_string()])
    }

    fn item_text(item: &Value) -> Option<String> {
        let text = match item {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => return None,
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
