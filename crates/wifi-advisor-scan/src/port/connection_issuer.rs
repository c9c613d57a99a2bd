//! The driven port for joining a network.

use crate::domain::{Credential, NetworkRecord};
use crate::error::Result;

/// Outcome of a successful association request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOutcome {
    pub ssid: String,
    /// Confirmation text reported by the OS.
    pub message: String,
}

/// Port that negotiates association with the OS network stack.
///
/// An issuer has no notion of recommendations. Callers are expected to go
/// through [`AdvisorSession::connect`](crate::session::AdvisorSession::connect),
/// which refuses networks the evaluator did not recommend.
pub trait ConnectionIssuer: Send + Sync {
    /// Join `record` using `credential`.
    fn connect(&self, record: &NetworkRecord, credential: &Credential) -> Result<ConnectOutcome>;
}
