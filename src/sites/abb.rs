use serde::Deserialize;

use super::Site;
use crate::{Error, JobPosting, Result};

/// ABB exposes its vacancies through a paginated JSON API rather than a
/// rendered page. Pages are fetched in order until one comes back with an
/// empty `data` array.
pub struct Abb {
    base_url: String,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    data: Vec<ApiVacancy>,
}

#[derive(Deserialize)]
struct ApiVacancy {
    title: Option<String>,
    url: Option<String>,
    created_at: Option<String>,
}

impl Abb {
    pub fn new() -> Self {
        Self::with_base_url("https://careers.abb-bank.az")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for Abb {
    fn default() -> Self {
        Self::new()
    }
}

impl Site for Abb {
    fn name(&self) -> &'static str {
        "abb"
    }

    fn url(&self, page: usize) -> String {
        format!("{}/api/vacancy/v2/get?page={page}", self.base_url)
    }

    fn paginated(&self) -> bool {
        true
    }

    fn parse(&self, body: &str) -> Result<Vec<JobPosting>> {
        let response: ApiResponse = serde_json::from_str(body).map_err(|source| Error::Json {
            site: self.name(),
            source,
        })?;

        Ok(response
            .data
            .into_iter()
            .filter_map(|vacancy| {
                let title = vacancy.title.filter(|t| !t.trim().is_empty())?;
                let url = vacancy.url.filter(|u| !u.is_empty())?;
                let mut posting = JobPosting::new(title.trim(), url);
                if let Some(date) = vacancy.created_at.filter(|d| !d.is_empty()) {
                    posting = posting.with_posted_date(date);
                }
                Some(posting)
            })
            .collect())
    }
}
