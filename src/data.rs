// src/data.rs
//
// Row types that flow from the walker to the table and the exporters.
//
// - DetailFields: what the detail extractor found on one page.
// - ResultRow: one finished business record. Built once, never mutated.
// - ExtractionResult: per-candidate outcome; failures are dropped, not kept.

use serde::{Deserialize, Serialize};

/// Display/export column order.
pub const HEADERS: [&str; 10] = [
    "Business Name",
    "Status",
    "Document Number",
    "FEI/EIN Number",
    "Owner Name",
    "Owner Title",
    "Owner Email",
    "Address",
    "Filing Date",
    "Sunbiz URL",
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Business Name")]
    pub business_name: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Document Number")]
    pub document_number: String,
    #[serde(rename = "FEI/EIN Number")]
    pub fei_number: String,
    #[serde(rename = "Owner Name")]
    pub owner_name: String,
    #[serde(rename = "Owner Title")]
    pub owner_title: String,
    #[serde(rename = "Owner Email")]
    pub owner_email: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Filing Date")]
    pub filing_date: String,
    #[serde(rename = "Sunbiz URL")]
    pub detail_url: String,
}

impl ResultRow {
    /// Field values in `HEADERS` order.
    pub fn fields(&self) -> [&str; 10] {
        [
            self.business_name.as_str(),
            self.status.as_str(),
            self.document_number.as_str(),
            self.fei_number.as_str(),
            self.owner_name.as_str(),
            self.owner_title.as_str(),
            self.owner_email.as_str(),
            self.address.as_str(),
            self.filing_date.as_str(),
            self.detail_url.as_str(),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailFields {
    pub document_number: String,
    pub fei_number: String,
    pub filing_date: String,
    pub address: String,
    pub owner_name: String,
    pub owner_title: String,
    pub owner_email: String,
}

impl DetailFields {
    pub fn into_row(self, business_name: &str, status: &str, detail_url: &str) -> ResultRow {
        ResultRow {
            business_name: s!(business_name),
            status: s!(status),
            document_number: self.document_number,
            fei_number: self.fei_number,
            owner_name: self.owner_name,
            owner_title: self.owner_title,
            owner_email: self.owner_email,
            address: self.address,
            filing_date: self.filing_date,
            detail_url: s!(detail_url),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractionResult {
    Success(ResultRow),
    /// Human-readable reason; reported, then discarded.
    Failure(String),
}
