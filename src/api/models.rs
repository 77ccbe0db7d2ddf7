use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat field name → value body used for create and update calls.
///
/// Only send fields that should change: a blank value overwrites the field.
pub type ItemData = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub filters: Vec<SearchFilter>,
}

/// One search filter. At least one of the three parts should be set; several
/// filters may be combined in one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeFilter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFilter {
    pub field_name: String,
    pub search_term: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeFilter {
    pub field_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<String>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field_name: &str, search_term: &str) -> Self {
        self.filters.push(SearchFilter {
            field: Some(FieldFilter {
                field_name: field_name.to_string(),
                search_term: search_term.to_string(),
            }),
            ..SearchFilter::default()
        });
        self
    }

    pub fn with_term(mut self, search_term: &str) -> Self {
        self.filters.push(SearchFilter {
            search_term: Some(search_term.to_string()),
            ..SearchFilter::default()
        });
        self
    }

    pub fn with_range(mut self, field_name: &str, gte: Option<&str>, lte: Option<&str>) -> Self {
        self.filters.push(SearchFilter {
            range: Some(RangeFilter {
                field_name: field_name.to_string(),
                gte: gte.map(str::to_string),
                lte: lte.map(str::to_string),
            }),
            ..SearchFilter::default()
        });
        self
    }
}
