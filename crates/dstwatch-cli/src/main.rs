//! `dstwatch` CLI — DST change notification daemon and city listing tool.
//!
//! ## Usage
//!
//! ```sh
//! # Run the polling daemon (blocks until SIGINT/SIGTERM)
//! SMTP_USER=bot@example.org SMTP_PASSWORD=secret dstwatch
//!
//! # Print every tracked city with its DST marker and current local time
//! SMTP_USER=bot@example.org SMTP_PASSWORD=secret dstwatch list
//! ```
//!
//! Configuration comes from the environment: `FILENAME` (state file path),
//! `DELAY` (seconds between checks), `TO` (notification recipient),
//! `SMTP_HOST`, `SMTP_USER`, `SMTP_PASSWORD`. The two credentials are
//! required; everything else has a default.

use anyhow::{Context, Result};
use clap::Parser;
use dstwatch_core::{
    format_body, run_loop, ChangedCity, DstOracle, JsonFileStore, Notifier, Shutdown,
    SystemOracle, WatchError, CITIES,
};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dstwatch",
    version,
    about = "Tracks DST transitions across world cities and emails a notification on change"
)]
struct Cli {
    /// `list` prints each city with its DST marker and local time; anything
    /// else (or nothing) runs the polling daemon.
    mode: Option<String>,
}

/// A startup configuration problem. Fatal: the process never enters the loop.
#[derive(Error, Debug)]
enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Environment-sourced configuration, validated once at startup.
#[derive(Debug)]
struct Config {
    state_file: PathBuf,
    delay: Duration,
    to: String,
    smtp_host: String,
    smtp_user: String,
    smtp_password: String,
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

impl Config {
    fn from_env() -> Result<Self, ConfigError> {
        let smtp_user = require("SMTP_USER")?;
        let smtp_password = require("SMTP_PASSWORD")?;

        let state_file = PathBuf::from(
            env::var("FILENAME").unwrap_or_else(|_| "/var/gnotify/cities-dst.json".to_string()),
        );

        let delay_raw = env::var("DELAY").unwrap_or_else(|_| "7200".to_string());
        let delay_secs: u64 = delay_raw.parse().map_err(|_| ConfigError::InvalidValue {
            name: "DELAY",
            value: delay_raw,
        })?;

        // The default recipient is the sending account itself.
        let to = env::var("TO").unwrap_or_else(|_| smtp_user.clone());
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.mailgun.org".to_string());

        Ok(Self {
            state_file,
            delay: Duration::from_secs(delay_secs),
            to,
            smtp_host,
            smtp_user,
            smtp_password,
        })
    }
}

/// Sends the cycle summary as one plain-text email over implicit-TLS SMTP.
struct SmtpNotifier {
    transport: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpNotifier {
    /// Timeout bounding the whole send so a hung connection cannot stall the
    /// poll loop.
    const SEND_TIMEOUT: Duration = Duration::from_secs(60);

    fn new(config: &Config) -> Result<Self> {
        let from: Mailbox = format!("DST Notifier <{}>", config.smtp_user)
            .parse()
            .context("SMTP_USER is not a valid sender address")?;
        let to: Mailbox = config
            .to
            .parse()
            .context("TO is not a valid recipient address")?;

        let transport = SmtpTransport::relay(&config.smtp_host)
            .context("could not configure SMTP relay")?
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_password.clone(),
            ))
            .timeout(Some(Self::SEND_TIMEOUT))
            .build();

        Ok(Self {
            transport,
            from,
            to,
        })
    }
}

impl Notifier for SmtpNotifier {
    fn notify(&self, changed: &[ChangedCity]) -> dstwatch_core::error::Result<()> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject("DST change notification")
            .header(ContentType::TEXT_PLAIN)
            .body(format_body(changed))
            .map_err(|err| WatchError::Delivery(err.to_string()))?;

        self.transport
            .send(&email)
            .map_err(|err| WatchError::Delivery(err.to_string()))?;

        tracing::info!(to = %self.to, "sent email notification");
        Ok(())
    }
}

/// Print one line per catalog city: code, DST marker, current local time.
fn print_cities() -> Result<()> {
    let oracle = SystemOracle;
    for city in CITIES {
        let marker = if oracle.is_dst_active(city.zonename)? {
            "DST"
        } else {
            "   "
        };
        println!("{} {} {}", city.code, marker, oracle.local_time(city.zonename)?);
    }
    Ok(())
}

/// Run the polling daemon until SIGINT or SIGTERM.
fn run_daemon(config: &Config) -> Result<()> {
    let shutdown = Arc::new(Shutdown::new());
    {
        let shutdown = Arc::clone(&shutdown);
        ctrlc::set_handler(move || {
            tracing::info!("received termination signal, quitting");
            shutdown.request_stop();
        })
        .context("could not install signal handler")?;
    }

    let store = JsonFileStore::new(&config.state_file);
    let notifier = SmtpNotifier::new(config)?;
    let oracle = SystemOracle;

    tracing::info!(
        state_file = %config.state_file.display(),
        interval_secs = config.delay.as_secs(),
        smtp_host = %config.smtp_host,
        "starting DST watch daemon"
    );

    run_loop(CITIES, &oracle, &store, &notifier, config.delay, &shutdown);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    match cli.mode.as_deref() {
        Some("list") => print_cities(),
        _ => run_daemon(&config),
    }
}
