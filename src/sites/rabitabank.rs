use scraper::Html;

use super::{absolute_url, create_selector, element_text, Site};
use crate::{JobPosting, Result};

/// Rabitabank's vacancies page is a flat list of anchors under a single
/// container.
pub struct Rabitabank {
    base_url: String,
}

impl Rabitabank {
    pub fn new() -> Self {
        Self::with_base_url("https://www.rabitabank.com")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for Rabitabank {
    fn default() -> Self {
        Self::new()
    }
}

impl Site for Rabitabank {
    fn name(&self) -> &'static str {
        "rabitabank"
    }

    fn url(&self, _page: usize) -> String {
        format!("{}/insan-resurslari/vakansiyalar", self.base_url)
    }

    fn parse(&self, body: &str) -> Result<Vec<JobPosting>> {
        let doc = Html::parse_document(body);
        let anchor_sel = create_selector("#vacancies > div > a")?;

        let mut postings = Vec::new();
        for anchor in doc.select(&anchor_sel) {
            let title = element_text(&anchor);
            let Some(href) = anchor.value().attr("href").filter(|h| !h.is_empty()) else {
                continue;
            };
            if title.is_empty() {
                continue;
            }
            postings.push(JobPosting::new(title, absolute_url(&self.base_url, href)));
        }
        Ok(postings)
    }
}
