//! Mail side of a run: one message per category with matches.

use async_trait::async_trait;
use chrono::Local;
use lettre::message::{Mailbox, MultiPart};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use crate::filter::FilteredResult;
use crate::{Config, Result};

/// Seam between the dispatch loop and SMTP, so dispatch can be exercised
/// without a relay.
#[async_trait]
pub trait Notifier {
    /// Sends one category's matches to its recipient. Callers only invoke
    /// this for non-empty results.
    async fn send(&self, result: &FilteredResult<'_>) -> Result<()>;
}

/// SMTP notifier. Port 465 speaks implicit TLS, everything else STARTTLS.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl Mailer {
    pub fn new(config: &Config) -> Result<Self> {
        let builder = match config.smtp_port {
            465 => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_server)?,
            port => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_server)?
                .port(port),
        };
        Ok(Self {
            transport: builder.credentials(config.smtp_credentials()).build(),
            from: config.from_address.parse()?,
        })
    }
}

#[async_trait]
impl Notifier for Mailer {
    async fn send(&self, result: &FilteredResult<'_>) -> Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(result.category.recipient.parse()?)
            .subject(subject(result))
            .multipart(MultiPart::alternative_plain_html(
                render_text(result),
                render_html(result),
            ))?;

        debug!(
            category = result.category.name,
            to = result.category.recipient,
            "sending notification"
        );
        self.transport.send(message).await?;
        Ok(())
    }
}

fn subject(result: &FilteredResult<'_>) -> String {
    format!(
        "New {} job matches - {} positions",
        result.category.name,
        result.rows.len()
    )
}

fn render_text(result: &FilteredResult<'_>) -> String {
    let mut body = String::new();
    for posting in &result.rows {
        body.push_str(&format!(
            "{:<12} | {:<50} | {}\n",
            posting.source, posting.title, posting.link
        ));
    }
    body.push_str(&format!("\nScraped on {}\n", Local::now().format("%Y-%m-%d")));
    body
}

fn render_html(result: &FilteredResult<'_>) -> String {
    let mut rows = String::new();
    for posting in &result.rows {
        rows.push_str(&format!(
            r#"<tr><td>{}</td><td>{}</td><td><a class="job-link" href="{}">Apply</a></td></tr>"#,
            escape(&posting.source),
            escape(&posting.title),
            escape(&posting.link),
        ));
    }

    format!(
        r#"<html>
<head>
<style>
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}
th {{ background-color: #f2f2f2; }}
tr:nth-child(even) {{ background-color: #f9f9f9; }}
.job-link {{ color: #0066cc; text-decoration: none; }}
</style>
</head>
<body>
<h2>New Job Matches Found</h2>
<table>
<tr><th>Company</th><th>Position</th><th>Apply Link</th></tr>
{rows}
</table>
<p>Scraped on {date}</p>
</body>
</html>"#,
        rows = rows,
        date = Local::now().format("%Y-%m-%d"),
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
