//! Run configuration, built once from the environment at startup.
//!
//! Credentials come from env (optionally seeded by a `.env` file); the
//! category table is compiled in since it changes about as often as the
//! site adapters do.

use std::env;

use lettre::transport::smtp::authentication::Credentials;

use crate::filter::KeywordCategory;
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub smtp_server: String,
    pub smtp_port: u16,
    /// SMTP auth user. May be left empty when the relay authenticates as
    /// the mailbox itself, see [`Config::smtp_credentials`].
    pub smtp_username: String,
    pub smtp_password: String,
    /// From-address of the outgoing mail.
    pub from_address: String,
    /// Password of the mailbox behind `from_address`.
    pub mailbox_password: String,
    pub categories: Vec<KeywordCategory>,
}

impl Config {
    /// Reads all required variables, reporting the first missing one.
    /// This is the only fatal failure path of a run.
    pub fn from_env() -> Result<Self> {
        let smtp_port = required("SMTP_PORT")?;
        let smtp_port = smtp_port.parse().map_err(|_| Error::InvalidEnv {
            name: "SMTP_PORT",
            value: smtp_port,
        })?;

        Ok(Self {
            smtp_server: required("SMTP_SERVER")?,
            smtp_port,
            smtp_username: required("SMTP_USERNAME")?,
            smtp_password: required("SMTP_PASSWORD")?,
            from_address: required("EMAIL")?,
            mailbox_password: required("PASSWORD")?,
            categories: default_categories(),
        })
    }

    /// The relay credentials. An empty `SMTP_USERNAME` means the relay has
    /// no dedicated auth user and we log in as the mailbox instead.
    pub fn smtp_credentials(&self) -> Credentials {
        let (user, pass) = self.login_pair();
        Credentials::new(user.to_owned(), pass.to_owned())
    }

    fn login_pair(&self) -> (&str, &str) {
        if self.smtp_username.is_empty() {
            (&self.from_address, &self.mailbox_password)
        } else {
            (&self.smtp_username, &self.smtp_password)
        }
    }
}

fn required(name: &'static str) -> Result<String> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Keyword categories and who gets mailed for each. A posting matching
/// several categories is mailed to each of them.
fn default_categories() -> Vec<KeywordCategory> {
    vec![
        KeywordCategory::new(
            "data",
            &[
                "data", "analy", "anali", "sql", "python", "machine learning", "ml engineer",
                "ai engineer",
            ],
            "ismat.samadli@example.com",
        ),
        KeywordCategory::new(
            "audit",
            &["audit", "risk", "control", "compliance", "nəzarət"],
            "nigar.aliyeva@example.com",
        ),
        KeywordCategory::new("fraud", &["fraud", "frod"], "rustam.isgandarli@example.com"),
        KeywordCategory::new("scrum", &["scrum", "agile"], "azar.mammadov@example.com"),
        KeywordCategory::new(
            "business",
            &["biznes", "business"],
            "kamal.khalilov@example.com",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [(&str, &str); 6] = [
        ("SMTP_SERVER", "smtp.gmail.com"),
        ("SMTP_PORT", "465"),
        ("SMTP_USERNAME", "relay-user"),
        ("SMTP_PASSWORD", "relay-pass"),
        ("EMAIL", "robot@example.com"),
        ("PASSWORD", "mailbox-pass"),
    ];

    // One test so the env mutations can't race each other.
    #[test]
    fn from_env_round_trip_and_missing_var() {
        for (name, value) in VARS {
            env::set_var(name, value);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.smtp_server, "smtp.gmail.com");
        assert_eq!(config.smtp_port, 465);
        assert_eq!(config.from_address, "robot@example.com");
        assert!(!config.categories.is_empty());

        env::set_var("SMTP_PORT", "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(Error::InvalidEnv { name: "SMTP_PORT", .. })
        ));
        env::set_var("SMTP_PORT", "465");

        env::remove_var("SMTP_PASSWORD");
        assert!(matches!(
            Config::from_env(),
            Err(Error::MissingEnv("SMTP_PASSWORD"))
        ));
    }

    #[test]
    fn empty_smtp_username_falls_back_to_mailbox_login() {
        let config = Config {
            smtp_server: "smtp.example.com".into(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: "robot@example.com".into(),
            mailbox_password: "hunter2".into(),
            categories: Vec::new(),
        };
        assert_eq!(config.login_pair(), ("robot@example.com", "hunter2"));
    }
}
