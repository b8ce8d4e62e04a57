use chrono::Local;
use jobwatch::notify::Mailer;
use jobwatch::{process, Config, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration problems are the only thing allowed to fail the run.
    let start_time = Local::now();
    let config = Config::from_env()?;
    let mailer = Mailer::new(&config)?;

    let report = process::run(&config, &mailer).await?;
    info!(
        sites_ok = report.sites_ok,
        sites_failed = report.sites_failed,
        postings = report.postings,
        emails_sent = report.emails_sent,
        emails_failed = report.emails_failed,
        elapsed = %(Local::now() - start_time),
        "run finished"
    );

    Ok(())
}
