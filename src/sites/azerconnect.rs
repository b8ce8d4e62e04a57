use scraper::Html;

use super::{absolute_url, create_selector, Site};
use crate::{JobPosting, Result};

/// Azerconnect renders vacancies as collapsible blocks. The block holds the
/// full description text, so the title is its first non-empty text line.
/// The site is served with a broken certificate chain.
pub struct Azerconnect {
    base_url: String,
}

impl Azerconnect {
    pub fn new() -> Self {
        Self::with_base_url("https://www.azerconnect.az")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for Azerconnect {
    fn default() -> Self {
        Self::new()
    }
}

impl Site for Azerconnect {
    fn name(&self) -> &'static str {
        "azerconnect"
    }

    fn url(&self, _page: usize) -> String {
        format!("{}/careers", self.base_url)
    }

    fn insecure_tls(&self) -> bool {
        true
    }

    fn parse(&self, body: &str) -> Result<Vec<JobPosting>> {
        let doc = Html::parse_document(body);

        let block_sel = create_selector(r#"div[class*="CollapsibleItem_content__"]"#)?;
        let apply_sel = create_selector(r#"a[class*="Button_button-blue__"]"#)?;

        let mut postings = Vec::new();
        for block in doc.select(&block_sel) {
            let Some(title) = block
                .text()
                .map(str::trim)
                .find(|t| !t.is_empty())
                .map(str::to_owned)
            else {
                continue;
            };
            let Some(href) = block
                .select(&apply_sel)
                .next()
                .and_then(|a| a.value().attr("href"))
                .filter(|h| !h.is_empty())
            else {
                continue;
            };

            postings.push(JobPosting::new(title, absolute_url(&self.base_url, href)));
        }
        Ok(postings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <html><body>
        <div class="CollapsibleItem_content__KGo_x">
          <p>Big Data Engineer</p>
          <p>Müraciət üçün son tarix: 30 sentyabr</p>
          <a class="Button_button-blue__0wZ4l" href="https://jobs.azerconnect.az/apply/77">Müraciət et</a>
        </div>
        <div class="CollapsibleItem_content__KGo_x">
          <p>Agile Coach</p>
          <!-- no apply button -->
        </div>
        </body></html>"#;

    #[test]
    fn title_is_first_text_line_and_buttonless_blocks_are_skipped() {
        let postings = Azerconnect::new().parse(FIXTURE).unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].title, "Big Data Engineer");
        assert_eq!(postings[0].link, "https://jobs.azerconnect.az/apply/77");
    }

    #[test]
    fn requires_certificate_tolerant_client() {
        assert!(Azerconnect::new().insecure_tls());
    }
}
