//! The run itself: fetch and parse every site, aggregate, then filter and
//! mail per category. Everything past configuration is best-effort; a site
//! or a mail failing never stops the rest of the run.

use tracing::{info, warn};

use crate::fetch::{fetch, Clients};
use crate::filter::{filter, KeywordCategory};
use crate::notify::Notifier;
use crate::sites::{registry, Site};
use crate::{Config, JobPosting, PostingTable, Result, EXPORT_PATH, MAX_SITE_PAGES};

/// What happened during one run. `main` logs it; the exit code stays 0
/// either way.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub sites_ok: usize,
    pub sites_failed: usize,
    pub postings: usize,
    pub emails_sent: usize,
    pub emails_failed: usize,
}

/// Runs the whole pipeline once.
pub async fn run(config: &Config, notifier: &impl Notifier) -> Result<RunReport> {
    let mut report = RunReport::default();
    let clients = Clients::build()?;

    let mut site_results = Vec::new();
    for site in registry() {
        match scrape_site(&clients, site.as_ref()).await {
            Ok(postings) => {
                info!(site = site.name(), postings = postings.len(), "scraped");
                report.sites_ok += 1;
                site_results.push((site.name(), postings));
            }
            Err(err) => {
                warn!(site = site.name(), %err, "site skipped");
                report.sites_failed += 1;
            }
        }
    }

    let table = PostingTable::aggregate(site_results);
    report.postings = table.len();
    info!(postings = table.len(), "aggregated");

    if let Err(err) = crate::writer::save_to_csv(&table, EXPORT_PATH) {
        warn!(%err, path = EXPORT_PATH, "csv export skipped");
    }

    let (sent, failed) = dispatch(notifier, &table, &config.categories).await;
    report.emails_sent = sent;
    report.emails_failed = failed;

    Ok(report)
}

/// Fetches and parses one site. Paginated sites are walked page by page
/// until an empty page or the cap; a failure past the first page keeps what
/// was already collected.
pub async fn scrape_site(clients: &Clients, site: &dyn Site) -> Result<Vec<JobPosting>> {
    let client = clients.for_site(site.insecure_tls());

    let mut all = Vec::new();
    for page in 1..=MAX_SITE_PAGES {
        let url = site.url(page);
        let body = match fetch(client, &url).await {
            Ok(body) => body,
            Err(err) if page > 1 => {
                warn!(site = site.name(), page, %err, "pagination cut short");
                break;
            }
            Err(err) => return Err(err),
        };

        let postings = site.parse(&body)?;
        let page_empty = postings.is_empty();
        all.extend(postings);

        if !site.paginated() || page_empty {
            break;
        }
    }
    Ok(all)
}

/// Filters the table per category and mails each non-empty result. Empty
/// results never reach the notifier. Returns (sent, failed).
pub async fn dispatch(
    notifier: &impl Notifier,
    table: &PostingTable,
    categories: &[KeywordCategory],
) -> (usize, usize) {
    let mut sent = 0;
    let mut failed = 0;

    for category in categories {
        let result = filter(table, category);
        if result.is_empty() {
            info!(category = category.name, "no matches, nothing to send");
            continue;
        }

        match notifier.send(&result).await {
            Ok(()) => {
                info!(
                    category = category.name,
                    matches = result.rows.len(),
                    "notification sent"
                );
                sent += 1;
            }
            Err(err) => {
                warn!(category = category.name, %err, "notification failed");
                failed += 1;
            }
        }
    }
    (sent, failed)
}
