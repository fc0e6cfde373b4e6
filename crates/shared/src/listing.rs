//! Paged listings and the catalog summaries shown on index pages.

use serde::{Deserialize, Serialize};

/// Filter and paging input, as received from a query string
///
/// All three fields stay strings so that malformed input reaches the engine
/// and is reported there instead of being rejected by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring of the record name; empty matches all
    #[serde(default)]
    pub name: String,
    /// Category code, or `all`
    #[serde(default = "default_type", rename = "type")]
    pub type_filter: String,
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: String,
}

fn default_type() -> String {
    "all".to_string()
}

fn default_page() -> String {
    "1".to_string()
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            name: String::new(),
            type_filter: default_type(),
            page: default_page(),
        }
    }
}

impl ListQuery {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: impl ToString) -> Self {
        self.page = page.to_string();
        self
    }

    pub fn with_type(mut self, type_filter: impl ToString) -> Self {
        self.type_filter = type_filter.to_string();
        self
    }
}

/// One page of a filtered listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage<T> {
    /// Size of the whole filtered list, not of this page
    pub count: usize,
    pub page: usize,
    pub page_size: usize,
    pub records: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemListEntry {
    pub id: u32,
    pub name: String,
    pub meta: Vec<String>,
}

/// One NPC for each distinct effective spawn speed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedSample {
    pub speed: i32,
    pub label: String,
    pub npc_id: u32,
    pub npc_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_query_fields_take_defaults() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, ListQuery::default());
        assert_eq!(query.type_filter, "all");
        assert_eq!(query.page, "1");
    }

    #[test]
    fn type_is_the_wire_name() {
        let query: ListQuery = serde_json::from_str(r#"{"type":"10","page":"2"}"#).unwrap();
        assert_eq!(query, ListQuery::default().with_type(10).with_page(2));
    }
}
