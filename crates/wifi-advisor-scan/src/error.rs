//! Error types for the wifi-advisor-scan crate.

use std::io;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WlanError>;

/// Errors raised by the network collaborators and the session gate.
///
/// The security evaluator itself never fails; every variant here originates
/// at an OS boundary (scan, interface query, ping, connect) or at the
/// policy gate in [`AdvisorSession`](crate::session::AdvisorSession).
#[derive(Debug, Error)]
pub enum WlanError {
    /// Listing visible networks failed.
    #[error("network scan failed: {reason}")]
    Scan {
        /// Human-readable description of what went wrong.
        reason: String,
    },

    /// Reading the currently associated network failed.
    #[error("connection state query failed: {reason}")]
    Query {
        /// Human-readable description of what went wrong.
        reason: String,
    },

    /// The packet loss measurement failed.
    #[error("packet loss measurement failed: {reason}")]
    Ping {
        /// Human-readable description of what went wrong.
        reason: String,
    },

    /// Associating with a network failed.
    #[error("connecting to '{ssid}' failed: {reason}")]
    Connect {
        /// The network that was being joined.
        ssid: String,
        /// Output or status reported by the OS tool.
        reason: String,
    },

    /// The OS refused to register the generated connection profile.
    #[error("profile for '{ssid}' was rejected: {output}")]
    ProfileRejected {
        /// The network the profile was generated for.
        ssid: String,
        /// Output of the profile registration command.
        output: String,
    },

    /// The temporary connection profile could not be written.
    #[error("failed to write connection profile: {0}")]
    ProfileFile(#[source] io::Error),

    /// A helper program could not be spawned at all.
    #[error("failed to run {program}: {source}")]
    Process {
        /// Name of the program that failed to start.
        program: &'static str,
        /// Underlying spawn error.
        #[source]
        source: io::Error,
    },

    /// Failed to parse a MAC address string (expected `aa:bb:cc:dd:ee:ff`).
    #[error("failed to parse MAC address from '{input}': expected aa:bb:cc:dd:ee:ff")]
    MacParseFailed {
        /// The input string that could not be parsed.
        input: String,
    },

    /// The selected network did not pass the recommendation gate.
    #[error("connecting to '{ssid}' is not recommended: {reason}")]
    NotRecommended {
        /// The refused network.
        ssid: String,
        /// The recommendation reason computed by the evaluator.
        reason: String,
    },

    /// The selected network is not part of the current scan.
    #[error("network '{ssid}' is not part of the current scan")]
    UnknownNetwork {
        /// The requested SSID.
        ssid: String,
    },
}

impl WlanError {
    /// Whether this error comes from the recommendation policy rather than
    /// from the operating system.
    pub fn is_policy_refusal(&self) -> bool {
        matches!(self, Self::NotRecommended { .. } | Self::UnknownNetwork { .. })
    }
}
