use scraper::Html;

use super::{absolute_url, create_selector, element_text, Site};
use crate::{JobPosting, Result};

/// Pasha Bank's careers page repeats the same listing block for featured
/// roles, so parsing dedupes on (title, link).
pub struct Pashabank {
    base_url: String,
}

impl Pashabank {
    pub fn new() -> Self {
        Self::with_base_url("https://careers.pashabank.az")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for Pashabank {
    fn default() -> Self {
        Self::new()
    }
}

impl Site for Pashabank {
    fn name(&self) -> &'static str {
        "pashabank"
    }

    fn url(&self, _page: usize) -> String {
        format!("{}/az/page/vakansiyalar?q=data&branch=", self.base_url)
    }

    fn parse(&self, body: &str) -> Result<Vec<JobPosting>> {
        let doc = Html::parse_document(body);

        let item_sel = create_selector("div.what-we-do-item")?;
        let title_sel = create_selector("h3")?;
        let link_sel = create_selector("a")?;

        let mut postings: Vec<JobPosting> = Vec::new();
        for item in doc.select(&item_sel) {
            let Some(title_el) = item.select(&title_sel).next() else {
                continue;
            };
            let title = element_text(&title_el);
            let Some(href) = item
                .select(&link_sel)
                .next()
                .and_then(|a| a.value().attr("href"))
                .filter(|h| !h.is_empty())
            else {
                continue;
            };
            if title.is_empty() {
                continue;
            }

            let link = absolute_url(&self.base_url, href);
            if postings.iter().any(|p| p.title == title && p.link == link) {
                continue;
            }
            postings.push(JobPosting::new(title, link));
        }
        Ok(postings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <html><body>
        <div class="what-we-do-item">
          <h3>Senior Auditor</h3>
          <a href="https://careers.pashabank.az/az/vacancy/12">apply</a>
        </div>
        <div class="what-we-do-item">
          <h3>Senior Auditor</h3>
          <a href="https://careers.pashabank.az/az/vacancy/12">apply</a>
        </div>
        <div class="what-we-do-item">
          <h3>Fraud Analyst</h3>
          <a href="/az/vacancy/13">apply</a>
        </div>
        <div class="what-we-do-item">
          <h3>No Link Role</h3>
        </div>
        </body></html>"#;

    #[test]
    fn dedupes_repeated_listings_and_skips_incomplete_ones() {
        let postings = Pashabank::new().parse(FIXTURE).unwrap();
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].title, "Senior Auditor");
        assert_eq!(postings[1].title, "Fraud Analyst");
        assert_eq!(
            postings[1].link,
            "https://careers.pashabank.az/az/vacancy/13"
        );
    }
}
