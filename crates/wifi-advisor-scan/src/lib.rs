//! # wifi-advisor-scan
//!
//! Discovery, security evaluation and connect gating for nearby wireless
//! networks.
//!
//! - **Domain types**: [`NetworkRecord`], [`ScanBatch`], [`Assessment`],
//!   [`ConnectedNetworkInfo`], [`LinkReport`]
//! - **Evaluator**: [`evaluate`] -- deterministic batch transform that
//!   classifies security, counts channel interference and recommends
//! - **Ports**: [`NetworkSource`], [`ConnectionIssuer`]
//! - **Adapters**: [`NetshSource`], [`NetshConnector`] -- drive `netsh` and
//!   `ping` on Windows
//! - **Orchestration**: [`AdvisorSession`] -- refresh, link report and the
//!   recommendation gate in front of connect

pub mod adapter;
pub mod domain;
pub mod error;
pub mod evaluator;
pub mod port;
pub mod session;

// Re-export key types at the crate root for convenience.
pub use adapter::{parse_netsh_interfaces, parse_netsh_networks, NetshConnector, NetshSource};
pub use domain::{
    Assessment, AuthScheme, BssidId, ConnectedNetworkInfo, Credential, InterferenceRisk,
    LinkReport, LinkStability, NetworkRecord, ParseSecurityLevelError, RadioType, Recommendation,
    ScanBatch, SecurityClass, SecurityLevel,
};
pub use error::{Result, WlanError};
pub use evaluator::{evaluate, evaluate_in_place};
pub use port::{ConnectOutcome, ConnectionIssuer, NetworkSource};
pub use session::AdvisorSession;
