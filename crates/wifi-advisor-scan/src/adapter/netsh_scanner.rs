//! [`NetworkSource`] adapter backed by `netsh wlan` and `ping`.
//!
//! Each call spawns one subprocess, captures stdout and hands it to a pure
//! parser. The parsers accept both the English and the German wording of
//! the `netsh` output and never fail: unrecognised lines are skipped and
//! missing fields stay unknown.

use crate::adapter::netsh_interfaces::parse_netsh_interfaces;
use crate::adapter::netsh_lines::{
    decode, key_is, key_matches, non_empty, parse_percent, run_tool, split_kv,
};
use crate::adapter::ping_loss::{self, parse_ping_loss};
use crate::domain::{
    record::DEFAULT_ENCRYPTION, AuthScheme, BssidId, ConnectedNetworkInfo, NetworkRecord,
    RadioType, ScanBatch,
};
use crate::error::{Result, WlanError};
use crate::port::NetworkSource;

// ---------------------------------------------------------------------------
// NetshSource
// ---------------------------------------------------------------------------

/// Synchronous network source that shells out to `netsh` and `ping`.
///
/// # Platform
///
/// Windows only. Elsewhere the subprocess fails to start and every call
/// returns [`WlanError::Process`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NetshSource;

impl NetshSource {
    pub fn new() -> Self {
        Self
    }
}

impl NetworkSource for NetshSource {
    fn scan(&self) -> Result<ScanBatch> {
        let output = run_tool("netsh", &["wlan", "show", "networks", "mode=bssid"])?;
        scan_from_output(
            &decode(&output.stdout),
            &decode(&output.stderr),
            output.status.success(),
        )
    }

    fn connected_info(&self) -> Result<Option<ConnectedNetworkInfo>> {
        let output = run_tool("netsh", &["wlan", "show", "interfaces"])?;
        interfaces_from_output(
            &decode(&output.stdout),
            &decode(&output.stderr),
            output.status.success(),
        )
    }

    fn measure_loss(&self) -> Result<u8> {
        let count = ping_loss::PING_COUNT.to_string();
        let output = run_tool("ping", &["-n", &count, ping_loss::PING_TARGET])?;
        loss_from_output(&decode(&output.stdout), output.status.success())
    }
}

/// Batch from captured `netsh wlan show networks` output.
pub(crate) fn scan_from_output(stdout: &str, stderr: &str, success: bool) -> Result<ScanBatch> {
    if !success {
        return Err(WlanError::Scan {
            reason: failure_reason(stdout, stderr),
        });
    }
    let batch = parse_netsh_networks(stdout);
    tracing::debug!(networks = batch.len(), "scan parsed");
    Ok(batch)
}

/// Connection state from captured `netsh wlan show interfaces` output.
pub(crate) fn interfaces_from_output(
    stdout: &str,
    stderr: &str,
    success: bool,
) -> Result<Option<ConnectedNetworkInfo>> {
    if !success {
        return Err(WlanError::Query {
            reason: failure_reason(stdout, stderr),
        });
    }
    Ok(parse_netsh_interfaces(stdout))
}

/// Loss percentage from captured `ping` output.
///
/// A loss figure wins over the exit status, since total loss makes ping
/// exit non-zero. Without a figure a clean exit counts as no loss.
pub(crate) fn loss_from_output(stdout: &str, success: bool) -> Result<u8> {
    match parse_ping_loss(stdout) {
        Some(loss) => Ok(loss),
        None if success => Ok(0),
        None => Err(WlanError::Ping {
            reason: format!("no loss summary: {}", last_line(stdout)),
        }),
    }
}

/// netsh prints most errors on stdout, so fall back to it.
fn failure_reason(stdout: &str, stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("netsh failed: {}", last_line(stdout))
    } else {
        format!("netsh failed: {stderr}")
    }
}

fn last_line(text: &str) -> &str {
    text.lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse the text output of `netsh wlan show networks mode=bssid`.
///
/// One [`NetworkRecord`] is produced per SSID block. Authentication and
/// encryption belong to the SSID block; signal, radio type and channel are
/// read from its BSSID sub-blocks, and when there are several the last one
/// wins. A BSSID line with an empty value does not open a sub-block.
///
/// # Example
///
/// ```text
/// SSID 1 : MyNetwork
///     Network type            : Infrastructure
///     Authentication          : WPA2-Personal
///     Encryption              : CCMP
///     BSSID 1                 : aa:bb:cc:dd:ee:ff
///          Signal             : 84%
///          Radio type         : 802.11ax
///          Channel            : 36
/// ```
pub fn parse_netsh_networks(output: &str) -> ScanBatch {
    let mut records = Vec::new();
    let mut current: Option<NetworkRecord> = None;
    let mut in_bssid = false;

    for line in output.lines() {
        let Some((key, value)) = split_kv(line.trim()) else {
            continue;
        };

        // -- SSID header: "SSID 1 : MyNetwork" --------------------------------
        if key_matches(key, &["ssid"]) {
            records.extend(current.take());
            current = Some(NetworkRecord::new(value));
            in_bssid = false;
            continue;
        }

        let Some(field) = Field::classify(key, in_bssid) else {
            continue;
        };
        let record = current.get_or_insert_with(|| NetworkRecord::new(""));

        match field {
            // "BSSID 1 : d8:32:14:b0:a0:3e"
            Field::Bssid => {
                in_bssid = !value.is_empty();
                if in_bssid {
                    record.bssid = BssidId::parse(value).ok();
                }
            }
            Field::Auth => record.auth = AuthScheme::from_netsh_str(value),
            Field::Encryption => {
                record.encryption =
                    non_empty(value).unwrap_or_else(|| DEFAULT_ENCRYPTION.to_owned());
            }
            Field::Signal => record.signal_pct = parse_percent(value),
            Field::Radio => record.radio_type = RadioType::from_netsh_str(value),
            Field::Channel => record.channel = non_empty(value),
        }
    }

    records.extend(current);
    ScanBatch::new(records)
}

/// Keys inside an SSID block that the parser keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Bssid,
    Auth,
    Encryption,
    Signal,
    Radio,
    Channel,
}

impl Field {
    /// Signal, radio type and channel are only read inside a BSSID sub-block.
    fn classify(key: &str, in_bssid: bool) -> Option<Self> {
        if key_matches(key, &["bssid"]) {
            Some(Self::Bssid)
        } else if key_matches(key, &["authent"]) {
            Some(Self::Auth)
        } else if key_matches(key, &["encryption", "verschl"]) {
            Some(Self::Encryption)
        } else if !in_bssid {
            None
        } else if key_is(key, &["signal"]) {
            Some(Self::Signal)
        } else if key_is(key, &["radio type", "funktyp"]) {
            Some(Self::Radio)
        } else if key_is(key, &["channel", "kanal"]) {
            Some(Self::Channel)
        } else {
            None
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
