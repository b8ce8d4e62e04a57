//! The in-memory table every run builds and then reads.

use serde::Serialize;

/// One scraped listing. Immutable once parsed; rows missing a title or a
/// link never make it out of the adapters.
#[derive(Debug, Clone, Serialize)]
pub struct JobPosting {
    pub title: String,
    pub link: String,
    pub location: Option<String>,
    pub posted_date: Option<String>,
    /// Stamped by [`PostingTable::aggregate`], empty until then.
    pub source: String,
}

impl JobPosting {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            location: None,
            posted_date: None,
            source: String::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_posted_date(mut self, date: impl Into<String>) -> Self {
        self.posted_date = Some(date.into());
        self
    }
}

/// All postings of one run, in site-then-row order. Built once, read-only
/// afterwards.
#[derive(Debug, Default)]
pub struct PostingTable {
    rows: Vec<JobPosting>,
}

impl PostingTable {
    /// Concatenates the per-site results, stamping every row with the name
    /// of the site it came from. Order within a site is preserved.
    pub fn aggregate<I>(site_results: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Vec<JobPosting>)>,
    {
        let mut rows = Vec::new();
        for (site, postings) in site_results {
            rows.extend(postings.into_iter().map(|mut p| {
                p.source = site.to_owned();
                p
            }));
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[JobPosting] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
