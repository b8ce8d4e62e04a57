//! Keyword matching between the aggregated table and the category list.

use crate::posting::{JobPosting, PostingTable};

/// A named keyword set mapped to one recipient. Matching is a
/// case-insensitive substring test against posting titles, so keywords are
/// lower-cased once at construction.
#[derive(Debug, Clone)]
pub struct KeywordCategory {
    pub name: &'static str,
    keywords: Vec<String>,
    pub recipient: &'static str,
}

impl KeywordCategory {
    pub fn new(name: &'static str, keywords: &[&str], recipient: &'static str) -> Self {
        Self {
            name,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            recipient,
        }
    }

    fn matches(&self, posting: &JobPosting) -> bool {
        let title = posting.title.to_lowercase();
        self.keywords.iter().any(|k| title.contains(k))
    }
}

/// One category's slice of the table, in the table's order. Categories are
/// independent: a posting may show up in several results.
pub struct FilteredResult<'a> {
    pub category: &'a KeywordCategory,
    pub rows: Vec<&'a JobPosting>,
}

impl FilteredResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn filter<'a>(table: &'a PostingTable, category: &'a KeywordCategory) -> FilteredResult<'a> {
    FilteredResult {
        category,
        rows: table.rows().iter().filter(|p| category.matches(p)).collect(),
    }
}
