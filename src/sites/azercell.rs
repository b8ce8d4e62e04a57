use scraper::Html;

use super::{absolute_url, create_selector, element_text, Site};
use crate::{JobPosting, Result};

/// Azercell lists its vacancies as anchors inside a dedicated section of
/// the career page.
pub struct Azercell {
    base_url: String,
}

impl Azercell {
    pub fn new() -> Self {
        Self::with_base_url("https://www.azercell.com")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for Azercell {
    fn default() -> Self {
        Self::new()
    }
}

impl Site for Azercell {
    fn name(&self) -> &'static str {
        "azercell"
    }

    fn url(&self, _page: usize) -> String {
        format!("{}/az/about-us/career.html", self.base_url)
    }

    fn parse(&self, body: &str) -> Result<Vec<JobPosting>> {
        let doc = Html::parse_document(body);

        let section_sel = create_selector("section.section_vacancies")?;
        let link_sel = create_selector("a.vacancies__link")?;
        let name_sel = create_selector("h4.vacancies__name")?;
        let location_sel = create_selector("span.vacancies__location")?;

        // No vacancies section at all: either no openings today or the
        // markup moved. Both are an empty result.
        let Some(section) = doc.select(&section_sel).next() else {
            return Ok(Vec::new());
        };

        let mut postings = Vec::new();
        for anchor in section.select(&link_sel) {
            let Some(href) = anchor.value().attr("href").filter(|h| !h.is_empty()) else {
                continue;
            };
            let Some(name) = anchor.select(&name_sel).next() else {
                continue;
            };
            let title = element_text(&name);
            if title.is_empty() {
                continue;
            }

            let mut posting = JobPosting::new(title, absolute_url(&self.base_url, href));
            if let Some(location) = anchor.select(&location_sel).next() {
                let location = element_text(&location);
                if !location.is_empty() {
                    posting = posting.with_location(location);
                }
            }
            postings.push(posting);
        }
        Ok(postings)
    }
}
