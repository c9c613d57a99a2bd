//! Adapter implementations for the [`NetworkSource`](crate::port::NetworkSource)
//! and [`ConnectionIssuer`](crate::port::ConnectionIssuer) ports.
//!
//! Both adapters drive Windows command-line tools:
//! - [`NetshSource`]: `netsh wlan show networks mode=bssid`,
//!   `netsh wlan show interfaces` and `ping`.
//! - [`NetshConnector`]: `netsh wlan delete|add profile` and `netsh wlan connect`.
//!
//! The text parsers are exposed on their own so they can be exercised
//! against captured output on any platform.

mod netsh_connector;
mod netsh_interfaces;
mod netsh_lines;
mod netsh_scanner;
mod ping_loss;

pub use netsh_connector::{build_profile_xml, map_auth, map_encryption, xml_escape, NetshConnector};
pub use netsh_interfaces::parse_netsh_interfaces;
pub use netsh_scanner::{parse_netsh_networks, NetshSource};
pub use ping_loss::{parse_ping_loss, PING_COUNT, PING_TARGET};
