//! HTTP side of a run.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::{Error, Result, USER_AGENT};

/// The two clients a run needs: a strict one, and one that tolerates the
/// broken certificate chains some of the target sites serve.
pub struct Clients {
    strict: Client,
    tolerant: Client,
}

impl Clients {
    pub fn build() -> Result<Self> {
        Ok(Self {
            strict: builder().build()?,
            tolerant: builder().danger_accept_invalid_certs(true).build()?,
        })
    }

    pub fn for_site(&self, insecure_tls: bool) -> &Client {
        if insecure_tls {
            &self.tolerant
        } else {
            &self.strict
        }
    }
}

fn builder() -> reqwest::ClientBuilder {
    // gzip/deflate handled by reqwest; the UA matters because some sites
    // answer 403 to the default client signature.
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
}

/// Requests a page and returns its body as text. Network failures,
/// timeouts and non-2xx statuses all come back as errors carrying the URL.
pub async fn fetch(client: &Client, url: &str) -> Result<String> {
    debug!(url, "requesting");

    let res = client.get(url).send().await.map_err(|source| Error::Fetch {
        url: url.to_owned(),
        source,
    })?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_owned(),
            status,
        });
    }

    res.text().await.map_err(|source| Error::Fetch {
        url: url.to_owned(),
        source,
    })
}
