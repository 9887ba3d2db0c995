use serde::{Deserialize, Serialize};

pub mod category;

pub use category::Category;

/// One row of the input bibliography, as produced by the cleanBib notebook's
/// `Authors.csv` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationRecord {
    /// Unique citation identifier, e.g. "Smith2020".
    #[serde(rename = "CitationKey")]
    pub key: String,
    /// Raw gender pairing code for first/last author, e.g. "MM" or "WU".
    #[serde(rename = "GendCat")]
    pub category_code: String,
}

impl CitationRecord {
    pub fn new(key: impl Into<String>, category_code: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            category_code: category_code.into(),
        }
    }

    /// Classification of this record's pairing code. Total, never rejects.
    pub fn category(&self) -> Category {
        Category::classify(&self.category_code)
    }
}
