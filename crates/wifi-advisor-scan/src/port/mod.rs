//! Port definitions for the network collaborators.
//!
//! Hexagonal-architecture ports that keep the evaluator and the session
//! independent of how networks are listed and joined, so the `netsh`
//! adapters and test doubles can be swapped freely.

mod connection_issuer;
mod network_source;

pub use connection_issuer::{ConnectOutcome, ConnectionIssuer};
pub use network_source::NetworkSource;
