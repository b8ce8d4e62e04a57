//! Career-site vacancy watcher.
//!
//! One run: fetch every registered site, parse its listings, aggregate them
//! into a single table, then mail each keyword category's matches to its
//! recipient. An external scheduler triggers the binary once a day.

mod error;

pub mod config;
pub mod fetch;
pub mod filter;
pub mod notify;
pub mod posting;
pub mod process;
pub mod sites;
pub mod writer;

pub use config::Config;
pub use error::{Error, Result};
pub use posting::{JobPosting, PostingTable};

/// Some of the target sites reject the default reqwest signature.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Upper bound on pages fetched from a paginated site in one run.
const MAX_SITE_PAGES: usize = 50;

/// The aggregated table is exported here after every run.
const EXPORT_PATH: &str = "jobs.csv";
