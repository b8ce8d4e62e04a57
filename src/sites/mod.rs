//! One adapter per career site. Each adapter knows its listing URL and how
//! to turn that page's markup into postings; everything else (fetching,
//! aggregation, filtering, mail) is shared.

mod abb;
mod azercell;
mod azerconnect;
mod pashabank;
mod rabitabank;

use scraper::Selector;

pub use abb::Abb;
pub use azercell::Azercell;
pub use azerconnect::Azerconnect;
pub use pashabank::Pashabank;
pub use rabitabank::Rabitabank;

use crate::{JobPosting, Result};

pub trait Site: Send + Sync {
    fn name(&self) -> &'static str;

    /// Listing URL for the given page, counted from 1. Non-paginated sites
    /// ignore the page number.
    fn url(&self, page: usize) -> String;

    /// Paginated sites are fetched page by page until an empty page.
    fn paginated(&self) -> bool {
        false
    }

    /// Sites served with a broken certificate chain opt out of TLS
    /// verification.
    fn insecure_tls(&self) -> bool {
        false
    }

    /// Extracts the postings from one response body. A page with no
    /// recognizable listings is an empty result, not an error; a listing
    /// element missing its title or link is skipped.
    fn parse(&self, body: &str) -> Result<Vec<JobPosting>>;
}

/// Every site a run scrapes, in scrape order.
pub fn registry() -> Vec<Box<dyn Site>> {
    vec![
        Box::new(Pashabank::new()),
        Box::new(Azerconnect::new()),
        Box::new(Azercell::new()),
        Box::new(Abb::new()),
        Box::new(Rabitabank::new()),
    ]
}

pub(crate) fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| crate::Error::ParseSelector(sel_str.into()))
}

/// Collapses an element's text nodes into one trimmed string.
pub(crate) fn element_text(element: &scraper::ElementRef) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Joins a possibly relative `href` onto the site's base URL.
pub(crate) fn absolute_url(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_owned()
    } else {
        format!("{}{}", base.trim_end_matches('/'), href)
    }
}
