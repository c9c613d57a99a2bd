//! The driving port for network discovery and link telemetry.

use crate::domain::{ConnectedNetworkInfo, ScanBatch};
use crate::error::Result;

/// Port that abstracts the platform WLAN query surface.
///
/// Implementations include:
/// - [`crate::adapter::NetshSource`] -- subprocess-based (`netsh`, `ping`).
/// - Test doubles in the integration tests.
///
/// Implementations never score records; the returned batch carries raw
/// fields only.
pub trait NetworkSource: Send + Sync {
    /// List every currently visible network.
    ///
    /// Fails with [`WlanError::Scan`](crate::error::WlanError::Scan) when the
    /// OS query cannot be run.
    fn scan(&self) -> Result<ScanBatch>;

    /// Return the network the host is associated with, if any.
    fn connected_info(&self) -> Result<Option<ConnectedNetworkInfo>>;

    /// Measure round-trip packet loss (0-100 %) to a fixed reachability
    /// target.
    fn measure_loss(&self) -> Result<u8>;
}
