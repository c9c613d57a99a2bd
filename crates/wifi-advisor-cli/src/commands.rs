//! Command execution
//!
//! Every OS call in the scan crate blocks, so each command moves the session
//! onto the blocking pool and shows a spinner while it runs.

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use wifi_advisor_scan::{
    AdvisorSession, ConnectOutcome, Credential, LinkReport, NetshConnector, NetshSource,
    ScanBatch, WlanError,
};

use crate::config::DisplayConfig;
use crate::display::{self, ScanReport};
use crate::{Cli, Commands, OutputFormat};

type Session = AdvisorSession<NetshSource, NetshConnector>;

/// Execute a parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    let format = cli.global.format;
    let config = DisplayConfig::load(cli.global.config.as_deref())?
        .with_overrides(cli.global.colorblind, cli.global.zoom);
    tracing::debug!(?config, "display configuration");

    let session = AdvisorSession::new(NetshSource::new(), NetshConnector::new());

    match cli.command {
        Commands::Scan => execute_scan(session, format, &config).await,
        Commands::Status => execute_status(session, format).await,
        Commands::Connect { ssid, password } => {
            execute_connect(session, ssid, password, format).await
        }
        Commands::Details { ssid } => execute_details(session, ssid, format, &config).await,
        Commands::Version => {
            println!("wifi-advisor {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Run `job` on the blocking pool behind a spinner.
async fn run_blocking<T, F>(message: &'static str, format: OutputFormat, job: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let spinner = if format == OutputFormat::Table {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let result = tokio::task::spawn_blocking(job).await;
    spinner.finish_and_clear();
    result.context("Background task failed")
}

/// Scan and evaluate, optionally querying the link afterwards.
///
/// The link is only queried after a successful scan; its failure does not
/// fail the scan.
async fn refresh(
    session: Session,
    format: OutputFormat,
    with_link: bool,
) -> Result<(Session, Option<LinkReport>)> {
    let (session, refreshed, link) = run_blocking("Scanning networks...", format, move || {
        let mut session = session;
        let refreshed = session.refresh().map(|batch| batch.len());
        let link = match refreshed {
            Ok(_) if with_link => Some(session.link_report()),
            _ => None,
        };
        (session, refreshed, link)
    })
    .await?;

    let networks = refreshed.context("Scan failed")?;
    tracing::info!(networks, "scan complete");

    let link = link.and_then(|link| {
        link.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "connected network unavailable");
            None
        })
    });
    Ok((session, link))
}

/// Execute the scan command
async fn execute_scan(session: Session, format: OutputFormat, config: &DisplayConfig) -> Result<()> {
    let (session, link) = refresh(session, format, true).await?;
    let batch = session.batch();

    match format {
        OutputFormat::Json => {
            let report = ScanReport {
                networks: batch,
                connected: link.as_ref(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Compact => {
            if !batch.is_empty() {
                println!("{}", display::render_compact(batch));
            }
        }
        OutputFormat::Table => {
            if batch.is_empty() {
                println!("{} No networks found.", "[INFO]".blue());
            } else {
                println!("{}", display::render_table(batch, config));
                println!(
                    "{} Scan complete, {} networks found, {} recommended.",
                    "[OK]".green().bold(),
                    batch.len(),
                    batch.recommended_count()
                );
            }
            println!();
            println!("{}", display::render_link_report(link.as_ref()));
        }
    }

    Ok(())
}

/// Execute the status command
///
/// Channel congestion needs a batch to count against. When the scan fails
/// the report is still shown, counted against an empty batch.
async fn execute_status(session: Session, format: OutputFormat) -> Result<()> {
    let link = run_blocking("Checking connection...", format, move || {
        let mut session = session;
        if let Err(err) = session.refresh() {
            tracing::warn!(error = %err, "scan failed, channel usage not counted");
        }
        session.link_report()
    })
    .await?
    .context("Failed to read connection state")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&link)?),
        OutputFormat::Compact => match &link {
            Some(report) => println!(
                "ssid={:?} channel={} usage={} risk={} loss={}% link={}",
                report.info.ssid,
                report.info.channel_label(),
                report.channel_usage,
                report.interference_risk,
                report.packet_loss_pct,
                report.stability
            ),
            None => println!("disconnected"),
        },
        OutputFormat::Table => println!("{}", display::render_link_report(link.as_ref())),
    }

    Ok(())
}

/// Execute the connect command
async fn execute_connect(
    session: Session,
    ssid: String,
    password: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let (session, _) = refresh(session, format, false).await?;

    // Only ask for a passphrase when the gate would let it through.
    let recommended = session
        .details(&ssid)
        .is_some_and(|record| record.is_recommended());
    let credential = match password {
        Some(password) => Credential::new(password),
        None if recommended => read_passphrase(&ssid)?,
        None => Credential::new(String::new()),
    };

    let target = ssid.clone();
    let outcome = run_blocking("Connecting...", format, move || {
        session.connect(&target, &credential)
    })
    .await?;

    report_connect(&ssid, outcome, format)
}

fn report_connect(
    ssid: &str,
    outcome: wifi_advisor_scan::Result<ConnectOutcome>,
    format: OutputFormat,
) -> Result<()> {
    match outcome {
        Ok(outcome) => {
            match format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({
                        "ssid": outcome.ssid,
                        "connected": true,
                        "message": outcome.message,
                    })
                ),
                OutputFormat::Compact => println!("connected ssid={:?}", outcome.ssid),
                OutputFormat::Table => println!(
                    "{} Connected to {}.",
                    "[OK]".green().bold(),
                    outcome.ssid.cyan()
                ),
            }
            Ok(())
        }
        Err(err @ WlanError::NotRecommended { .. }) => {
            if format == OutputFormat::Table {
                println!(
                    "{} Connecting to {} is not recommended. Choose a secure network.",
                    "[WARN]".yellow(),
                    ssid.cyan()
                );
            }
            Err(err.into())
        }
        Err(err) => Err(anyhow::Error::new(err).context(format!("Failed to connect to {ssid}"))),
    }
}

/// Execute the details command
async fn execute_details(
    session: Session,
    ssid: String,
    format: OutputFormat,
    config: &DisplayConfig,
) -> Result<()> {
    let (session, _) = refresh(session, format, false).await?;
    let Some(record) = session.details(&ssid) else {
        bail!("Network '{ssid}' is not part of the current scan");
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        OutputFormat::Compact => println!(
            "{}",
            display::render_compact(&std::iter::once(record.clone()).collect::<ScanBatch>())
        ),
        OutputFormat::Table => println!("{}", display::render_details(record, config)),
    }
    Ok(())
}

/// Prompt on stderr and read one line from stdin.
fn read_passphrase(ssid: &str) -> Result<Credential> {
    eprint!("Passphrase for {ssid}: ");
    std::io::stderr().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read passphrase")?;
    let passphrase = line.trim_end_matches(['\r', '\n']).to_owned();
    if passphrase.is_empty() {
        bail!("Connection cancelled: no passphrase given");
    }
    Ok(Credential::new(passphrase))
}
