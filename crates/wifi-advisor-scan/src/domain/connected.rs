//! The currently associated network and the link report built around it.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::record::{InterferenceRisk, UNKNOWN};

/// Packet loss (percent) below which a link counts as stable.
pub const STABLE_LOSS_THRESHOLD_PCT: u8 = 10;

/// Snapshot of the network the host is associated with.
///
/// Independent of any [`ScanBatch`](super::ScanBatch): the network may have
/// dropped out of the latest scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConnectedNetworkInfo {
    pub ssid: String,
    pub signal_pct: Option<u8>,
    /// Receive rate as reported by the OS, in Mbit/s.
    pub receive_rate: Option<String>,
    /// Transmit rate as reported by the OS, in Mbit/s.
    pub transmit_rate: Option<String>,
    pub channel: Option<String>,
}

impl ConnectedNetworkInfo {
    pub fn new(ssid: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            signal_pct: None,
            receive_rate: None,
            transmit_rate: None,
            channel: None,
        }
    }

    pub fn channel_label(&self) -> &str {
        self.channel.as_deref().unwrap_or(UNKNOWN)
    }
}

/// Whether the measured packet loss is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LinkStability {
    Stable,
    Unstable,
}

impl LinkStability {
    pub fn from_loss(loss_pct: u8) -> Self {
        if loss_pct < STABLE_LOSS_THRESHOLD_PCT {
            Self::Stable
        } else {
            Self::Unstable
        }
    }
}

impl fmt::Display for LinkStability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => f.write_str("stable"),
            Self::Unstable => f.write_str("unstable"),
        }
    }
}

/// Telemetry for the connected network, checked against the latest scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkReport {
    pub info: ConnectedNetworkInfo,
    /// Networks in the latest scan on the connected channel.
    pub channel_usage: usize,
    pub interference_risk: InterferenceRisk,
    pub packet_loss_pct: u8,
    pub stability: LinkStability,
}
