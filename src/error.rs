use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("Request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("The selector you are trying to scrape for is malformed. Selector: {0}")]
    ParseSelector(String),

    #[error("Undecodable payload from {site}: {source}")]
    Json {
        site: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Couldn't build the mail message: {0}")]
    Mail(#[from] lettre::error::Error),

    #[error("SMTP failure: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Csv export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
